use thiserror::Error;

pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;

/// Every failure the fuzzy set engine reports to its callers.
///
/// Variants carry the numeric values that caused them so callers can decide
/// how to recover. Nothing is retried internally.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FuzzyError {
    #[error("x values must be strictly ascending: {x} follows {previous}")]
    Ordering { previous: f64, x: f64 },

    #[error("membership value {y} is outside [0, 1]")]
    Range { y: f64 },

    #[error("x = {x} lies outside the universe [{min}, {max}] of `{variable}`")]
    DomainViolation {
        variable: String,
        x: f64,
        min: f64,
        max: f64,
    },

    #[error("values of `{left}` and `{right}` cannot be combined")]
    IncompatibleValues { left: String, right: String },

    #[error("rule has {expected} antecedents but received {found} inputs")]
    InputCount { expected: usize, found: usize },

    #[error("rule input {position} is a `{found}` value but the antecedent is a `{expected}` value")]
    InputVariable {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("no input was provided for `{variable}`")]
    MissingInput { variable: String },

    #[error("no x has membership {y}; the curve only spans memberships [{min}, {max}]")]
    NoXForMembership { y: f64, min: f64, max: f64 },

    #[error("cannot defuzzify a curve of {points} points with height {height}")]
    InvalidDefuzzify { points: usize, height: f64 },

    #[error("cannot normalize a curve whose height is {height}")]
    ZeroHeight { height: f64 },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),

    #[error("unknown variable")]
    UnknownVariable,
}

#[test]
fn test_error_messages_carry_values() {
    let err = FuzzyError::Ordering { previous: 2., x: 1. };

    assert_eq!(err.to_string(), "x values must be strictly ascending: 1 follows 2");

    let err = FuzzyError::NoXForMembership { y: 1.5, min: 0., max: 1. };

    assert_eq!(
        err.to_string(),
        "no x has membership 1.5; the curve only spans memberships [0, 1]"
    );
}
