//! List categories use case.

use std::collections::BTreeMap;
use std::sync::Arc;

use trivia_domain::{categories_by_id, CategoryId};

use crate::infrastructure::ports::{CategoryRepo, RepoError};

/// Returns every category as an id-keyed mapping. No pagination.
pub struct ListCategories {
    category_repo: Arc<dyn CategoryRepo>,
}

impl ListCategories {
    pub fn new(category_repo: Arc<dyn CategoryRepo>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self) -> Result<BTreeMap<CategoryId, String>, RepoError> {
        let categories = self.category_repo.list().await?;
        Ok(categories_by_id(&categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockCategoryRepo;
    use crate::test_fixtures::standard_categories;

    #[tokio::test]
    async fn when_categories_exist_returns_mapping() {
        let mut category_repo = MockCategoryRepo::new();
        category_repo
            .expect_list()
            .returning(|| Ok(standard_categories()));

        let use_case = ListCategories::new(Arc::new(category_repo));
        let categories = use_case.execute().await.expect("list categories");

        assert_eq!(categories.len(), 3);
        assert_eq!(
            categories.get(&CategoryId::new(3)).map(String::as_str),
            Some("Geography")
        );
    }

    #[tokio::test]
    async fn when_store_is_empty_returns_empty_mapping() {
        let mut category_repo = MockCategoryRepo::new();
        category_repo.expect_list().returning(|| Ok(vec![]));

        let use_case = ListCategories::new(Arc::new(category_repo));
        let categories = use_case.execute().await.expect("list categories");

        assert!(categories.is_empty());
    }
}
