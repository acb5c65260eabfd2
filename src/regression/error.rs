use std::fmt::{Display, Formatter};

/// Sample coordinate, named after the request fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.field_name())
    }
}

/// Reason why the regression could not be computed.
///
/// The messages are returned to the caller as is.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("HTTP-Request body is empty.")]
    EmptyBody,

    #[error("Invalid data sent. Please send a valid JSON-Object.")]
    InvalidJson,

    #[error("Invalid data sent. Array of {0}-Points is missing.")]
    MissingField(Axis),

    /// The field is present, but it is not an array wrapping a non-empty array.
    #[error("Invalid data sent. Array of {0}-Points is missing.")]
    EmptyArray(Axis),

    #[error("Invalid data sent. Arrays X and Y are not of the same size.")]
    SizeMismatch,

    /// The X-variance is zero, so the slope is undefined.
    #[error("Invalid data sent. Coefficient cannot be calculated.")]
    NotFitable,
}

impl Error {
    /// Whether the request itself was malformed, as opposed to well-formed but not computable.
    pub const fn is_input_error(self) -> bool {
        !matches!(self, Self::NotFitable)
    }
}
