pub mod error;
pub mod health;
pub mod projects;

pub use error::AppError;
