use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GradeError;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

/// Ordered list of student grades.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeBook {
    grades: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub count: usize,
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl fmt::Display for GradeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} grades | Average: {:.2} | Highest: {:.2} | Lowest: {:.2}",
            self.count, self.average, self.highest, self.lowest
        )
    }
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from `grades`, stopping at the first invalid one.
    pub fn from_grades<I>(grades: I) -> Result<Self, GradeError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut book = Self::new();
        for grade in grades {
            book.add(grade)?;
        }
        Ok(book)
    }

    pub fn add(&mut self, grade: f64) -> Result<(), GradeError> {
        if !grade.is_finite() {
            return Err(GradeError::NotFinite);
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            tracing::warn!(grade, "grade rejected");
            return Err(GradeError::OutOfRange(grade));
        }

        tracing::debug!(grade, count = self.grades.len() + 1, "grade added");
        self.grades.push(grade);
        Ok(())
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Average, highest and lowest grade; `None` for an empty book.
    pub fn summary(&self) -> Option<GradeSummary> {
        let (&first, rest) = self.grades.split_first()?;

        let (sum, highest, lowest) = rest
            .iter()
            .fold((first, first, first), |(sum, hi, lo), &g| (sum + g, hi.max(g), lo.min(g)));

        Some(GradeSummary {
            count: self.grades.len(),
            average: sum / self.grades.len() as f64,
            highest,
            lowest,
        })
    }
}
