pub mod error;
pub mod gradebook;

pub use error::GradeError;
pub use gradebook::{GradeBook, GradeSummary};
