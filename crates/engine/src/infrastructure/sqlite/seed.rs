//! Demo data for a fresh database.

use sqlx::SqlitePool;

use super::map_sqlx_error;
use crate::infrastructure::ports::RepoError;

const CATEGORIES: &[(i64, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// (question, answer, difficulty, category)
const QUESTIONS: &[(&str, &str, i64, i64)] = &[
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4, 5),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 3, 5),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 1, 2),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

/// Insert the standard categories and sample questions.
///
/// Each table is only filled when it is empty, so existing data is never
/// touched. Returns the number of questions inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<u64, RepoError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| map_sqlx_error("seed", e))?;

    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("seed", e))?;
    if categories == 0 {
        for &(id, kind) in CATEGORIES {
            sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
                .bind(id)
                .bind(kind)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("seed", e))?;
        }
    }

    let questions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("seed", e))?;
    let mut inserted = 0;
    if questions == 0 {
        for &(question, answer, difficulty, category) in QUESTIONS {
            sqlx::query(
                "INSERT INTO questions (question, answer, difficulty, category) VALUES (?, ?, ?, ?)",
            )
            .bind(question)
            .bind(answer)
            .bind(difficulty)
            .bind(category)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("seed", e))?;
            inserted += 1;
        }
    }

    tx.commit().await.map_err(|e| map_sqlx_error("seed", e))?;

    tracing::info!(
        categories_seeded = categories == 0,
        questions_seeded = inserted,
        "Demo data seeding finished"
    );
    Ok(inserted)
}
