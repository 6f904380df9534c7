pub mod error;
pub mod index;
pub mod preprocess;
pub mod query;
pub mod types;
