use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// Grades live on a 0 to 100 scale.
    #[error("Grade {0} is outside 0..=100")]
    OutOfRange(f64),

    #[error("Grade is not a number")]
    NotFinite,
}
