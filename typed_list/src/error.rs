use std::error::Error;
use std::fmt::{Display, Formatter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let error = TypedListError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(error.to_string(), "Index out of range: index 7, len 3");
    }

    #[test]
    fn test_invalid_range_display() {
        let error = TypedListError::InvalidRange {
            from: 4,
            to: 2,
            len: 6,
        };
        assert_eq!(error.to_string(), "Invalid range: [4, 2), len 6");
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = TypedListError::TypeMismatch {
            index: 1,
            expected: "i32",
            actual: "f32",
        };
        assert_eq!(
            error.to_string(),
            "Type mismatch at index 1: expected i32, actual f32"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedListError {
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    InvalidRange {
        from: usize,
        to: usize,
        len: usize,
    },
    TypeMismatch {
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },
}

impl Display for TypedListError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            TypedListError::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: index {}, len {}", index, len)
            }
            TypedListError::InvalidRange { from, to, len } => {
                write!(f, "Invalid range: [{}, {}), len {}", from, to, len)
            }
            TypedListError::TypeMismatch {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Type mismatch at index {}: expected {}, actual {}",
                    index, expected, actual
                )
            }
        }
    }
}

impl Error for TypedListError {}

pub type TypedListResult<T> = Result<T, TypedListError>;
