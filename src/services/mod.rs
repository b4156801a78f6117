// Service exports
pub mod assistant;
pub mod inference;

pub use assistant::{Assistant, Reply};
pub use inference::{InferenceClient, InferenceError};
