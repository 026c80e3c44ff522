//! Error types for pe2d.
//!
//! The simulation itself never fails: out-of-range numbers are clamped or
//! accepted. The only fallible step is turning user-typed text into a
//! parameter change, which is what [`ParamError`] describes.

use thiserror::Error;

/// Errors that can occur while parsing a settings-panel value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// No parameter with this name exists.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// The text could not be read as the expected kind of value.
    #[error("{parameter}: '{input}' is not {expected}")]
    Invalid {
        parameter: &'static str,
        input: String,
        expected: &'static str,
    },

    /// NaN or infinity.
    #[error("{parameter}: value must be finite")]
    NotFinite { parameter: &'static str },

    /// A fractional value for an integer-only parameter.
    #[error("{parameter}: {value} is not a whole number")]
    NotAnInteger { parameter: &'static str, value: f64 },

    /// Outside the parameter's editable range.
    #[error("{parameter}: {value} is outside {min}..={max}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f32,
        max: f32,
    },
}
