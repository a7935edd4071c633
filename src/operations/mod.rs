pub mod file_ops;
pub mod validation;

pub use file_ops::FileOperations;
pub use validation::ValidationError;
