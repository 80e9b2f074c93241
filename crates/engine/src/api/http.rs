//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::collections::{BTreeMap, HashSet};
use std::convert::Infallible;
use std::sync::Arc;

use trivia_domain::{CategoryId, Question, QuestionId};
use trivia_shared::{
    CategoriesResponse, CategoryMap, CategoryQuestionsResponse, ErrorResponse, IntegerField,
    PageQuery, QuestionCreatedResponse, QuestionData, QuestionDeletedResponse,
    QuestionListResponse, QuestionsPostBody, QuizRequest, QuizResponse, SearchResultsResponse,
};

use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::catalog::{CatalogError, SubmissionFields, SubmitOutcome};
use crate::use_cases::quiz::QuizError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
        .route("/questions", get(list_questions).post(submit_question))
        .route(
            "/questions/{id}",
            axum::routing::delete(delete_question).post(reject_question_edit),
        )
        .route("/quizzes", post(play_quiz))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Requested `?page`, parsed leniently.
///
/// Never rejects. The first `page` value wins; a missing or unparsable one
/// means page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| PageQuery::from_pairs(pairs))
            .unwrap_or_default();
        Ok(Page(query.page_number()))
    }
}

// =============================================================================
// Categories
// =============================================================================

async fn list_categories(
    State(app): State<Arc<App>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = app.use_cases.catalog.list_categories.execute().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

async fn list_category_questions(
    State(app): State<Arc<App>>,
    id: Result<Path<i64>, axum::extract::rejection::PathRejection>,
    Page(page): Page,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let result = app
        .use_cases
        .catalog
        .list_by_category
        .execute(CategoryId::new(id), page)
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: result.total_questions,
        current_category: result.current_category.value(),
        questions: question_data(result.questions),
    }))
}

// =============================================================================
// Questions
// =============================================================================

async fn list_questions(
    State(app): State<Arc<App>>,
    Page(page): Page,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let listing = app
        .use_cases
        .catalog
        .list_questions
        .execute(page)
        .await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: question_data(listing.questions),
        total_questions: listing.total_questions,
        current_category: CategoryId::ALL.to_string(),
        categories: category_map(listing.categories),
    }))
}

async fn submit_question(
    State(app): State<Arc<App>>,
    Page(page): Page,
    payload: Result<Json<QuestionsPostBody>, JsonRejection>,
) -> Result<axum::response::Response, ApiError> {
    let Json(body) = payload.map_err(ApiError::from)?;
    let fields = SubmissionFields {
        search_term: body.search_term,
        question: body.question,
        answer: body.answer,
        difficulty: body.difficulty.as_ref().and_then(IntegerField::as_i64),
        category: body.category.as_ref().and_then(IntegerField::as_i64),
    };

    let outcome = app
        .use_cases
        .catalog
        .submit_question
        .execute(fields, page)
        .await?;

    let response = match outcome {
        SubmitOutcome::SearchResults(results) => Json(SearchResultsResponse {
            success: true,
            questions: question_data(results.questions),
            total_questions: results.total_questions,
            current_category: CategoryId::ALL.value(),
            categories: category_map(results.categories),
        })
        .into_response(),
        SubmitOutcome::Created(created) => Json(QuestionCreatedResponse {
            success: true,
            created: created.id.value(),
            questions: question_data(created.listing.questions),
            total_questions: created.listing.total_questions,
            categories: category_map(created.listing.categories),
        })
        .into_response(),
    };
    Ok(response)
}

async fn delete_question(
    State(app): State<Arc<App>>,
    id: Result<Path<i64>, axum::extract::rejection::PathRejection>,
    Page(page): Page,
) -> Result<Json<QuestionDeletedResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    let deleted = app
        .use_cases
        .catalog
        .delete_question
        .execute(QuestionId::new(id), page)
        .await?;

    Ok(Json(QuestionDeletedResponse {
        success: true,
        deleted_id: deleted.id.value(),
        questions: question_data(deleted.listing.questions),
        total_questions: deleted.listing.total_questions,
        categories: category_map(deleted.listing.categories),
    }))
}

/// Questions are immutable once created; editing by id is always refused.
async fn reject_question_edit() -> ApiError {
    ApiError::MethodNotAllowed
}

// =============================================================================
// Quiz
// =============================================================================

async fn play_quiz(
    State(app): State<Arc<App>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::from)?;
    let category_id = CategoryId::new(request.category_id());
    let previous: HashSet<QuestionId> = request
        .previous_questions
        .iter()
        .copied()
        .map(QuestionId::new)
        .collect();

    let draw = app
        .use_cases
        .quiz
        .play
        .execute(category_id, &previous)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question: draw.into_question().map(to_question_data),
    }))
}

// =============================================================================
// Wire Conversion
// =============================================================================

fn to_question_data(question: Question) -> QuestionData {
    QuestionData {
        id: question.id.value(),
        question: question.question,
        answer: question.answer,
        difficulty: question.difficulty,
        category: question.category.value(),
    }
}

fn question_data(questions: Vec<Question>) -> Vec<QuestionData> {
    questions.into_iter().map(to_question_data).collect()
}

fn category_map(categories: BTreeMap<CategoryId, String>) -> CategoryMap {
    categories
        .into_iter()
        .map(|(id, kind)| (id.value(), kind))
        .collect()
}

// =============================================================================
// Errors
// =============================================================================

/// Every failure the HTTP layer reports.
///
/// Details carried by the variants are for logs only; clients always get
/// the generic message for the status.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound,
    MethodNotAllowed,
    UnprocessableEntity(String),
    Internal(String),
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad request",
            ApiError::NotFound => "resource not found",
            ApiError::MethodNotAllowed => "method not allowed",
            ApiError::UnprocessableEntity(_) => "unprocessable entity",
            ApiError::Internal(_) => "internal server error",
            ApiError::ServiceUnavailable(_) => "service unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = ErrorResponse::new(status.as_u16(), self.message());
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        tracing::debug!(error = %e.body_text(), "Rejected request body");
        ApiError::BadRequest(e.body_text())
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        if e.is_unavailable() {
            tracing::warn!(error = %e, "Store unavailable");
            ApiError::ServiceUnavailable(e.to_string())
        } else {
            tracing::error!(error = %e, "Store read failed");
            ApiError::Internal(e.to_string())
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::CategoryNotFound(_) | CatalogError::PageNotFound { .. } => {
                tracing::debug!(error = %e, "Nothing to list");
                ApiError::NotFound
            }
            CatalogError::QuestionNotFound(_) => {
                tracing::debug!(error = %e, "Delete target missing");
                ApiError::UnprocessableEntity(e.to_string())
            }
            CatalogError::InvalidSubmission(_) => ApiError::BadRequest(e.to_string()),
            CatalogError::WriteFailed { ref source, .. } if source.is_unavailable() => {
                tracing::warn!(error = %e, "Store unavailable for write");
                ApiError::ServiceUnavailable(e.to_string())
            }
            CatalogError::WriteFailed { .. } => {
                tracing::warn!(error = %e, "Store rejected write");
                ApiError::UnprocessableEntity(e.to_string())
            }
            CatalogError::Repo(repo) => repo.into(),
        }
    }
}

impl From<QuizError> for ApiError {
    fn from(e: QuizError) -> Self {
        match e {
            QuizError::Repo(repo) => repo.into(),
        }
    }
}
