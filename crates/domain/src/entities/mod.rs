//! Domain entities - Core business objects with identity

mod category;
mod question;

pub use category::{categories_by_id, Category};
pub use question::{NewQuestion, Question};
