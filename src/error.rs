//! Construction-time errors for producers and the harness.
//!
//! Every invalid parameter is rejected when the producer (or descriptor list,
//! or harness configuration) is built. Nothing in this crate fails at draw time.

/// Errors raised while building producers or configuring a [`Proposition`].
///
/// [`Proposition`]: crate::Proposition
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: i128 },

    #[error("empty range: [{min}, {max}) contains no values")]
    EmptyRange { min: String, max: String },

    #[error("{parameter} must be finite, got {value}")]
    NonFiniteBound { parameter: &'static str, value: f64 },

    #[error("weight of descriptor {index} must be non-negative, got {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    #[error("total weight is zero across {count} descriptors, selection is undefined")]
    ZeroTotalWeight { count: usize },

    #[error("total weight overflows at descriptor {index}")]
    WeightOverflow { index: usize },

    #[error("{combinator} requires at least one element")]
    EmptySelection { combinator: &'static str },

    #[error("duplicate schema field: {0}")]
    DuplicateField(String),

    #[error("invalid configuration {key}={value}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_range<B: std::fmt::Display>(min: B, max: B) -> Self {
        Error::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_parameter_and_value() {
        let err = Error::NonPositive {
            parameter: "stride",
            value: -3,
        };
        assert_eq!(err.to_string(), "stride must be positive, got -3");

        let err = Error::invalid_range(10, 2);
        assert_eq!(
            err.to_string(),
            "invalid range: min 10 is greater than max 2"
        );

        let err = Error::NegativeWeight {
            index: 1,
            weight: -5,
        };
        assert!(err.to_string().contains("descriptor 1"));
        assert!(err.to_string().contains("-5"));
    }
}
