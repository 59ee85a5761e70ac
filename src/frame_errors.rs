use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FrameError {
    #[error("Invalid calendar year (must be >= -4799): {0}")]
    BadYear(i32),

    #[error("Invalid calendar month (must be in 1..=12): {0}")]
    BadMonth(i32),

    #[error("Invalid day of month: {0}")]
    BadDay(i32),

    #[error("Julian Date outside the supported calendar range: {0}")]
    DateOutOfRange(f64),

    #[error("Invalid input shape: expected {expected}, found {found}")]
    InvalidShape { expected: String, found: String },

    #[error("Unknown precession-nutation model: {0}")]
    UnknownModel(String),

    #[error("Unknown Earth orientation convention: {0}")]
    UnknownConvention(String),
}

impl FrameError {
    pub(crate) fn shape(expected: impl Into<String>, found: impl Into<String>) -> Self {
        FrameError::InvalidShape {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl PartialEq for FrameError {
    fn eq(&self, other: &Self) -> bool {
        use FrameError::*;
        match (self, other) {
            (BadYear(a), BadYear(b)) => a == b,
            (BadMonth(a), BadMonth(b)) => a == b,
            (BadDay(a), BadDay(b)) => a == b,

            // NaN dates are still the same kind of failure
            (DateOutOfRange(a), DateOutOfRange(b)) => a == b || (a.is_nan() && b.is_nan()),

            (
                InvalidShape {
                    expected: e1,
                    found: f1,
                },
                InvalidShape {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (UnknownModel(a), UnknownModel(b)) => a == b,
            (UnknownConvention(a), UnknownConvention(b)) => a == b,

            _ => false,
        }
    }
}
