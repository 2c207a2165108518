use thiserror::Error;

/// JSONata error codes raised by the runtime primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `D1001`: a computed number is out of range (infinite).
    D1001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::D1001 => "D1001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{code}: Number out of range: {value} (position {position})")]
    NumericFault {
        code: ErrorCode,
        value: f64,
        position: usize,
    },
}

impl Error {
    /// Builds a `D1001` fault for a non-finite number with no known position.
    pub fn number_out_of_range(value: f64) -> Self {
        crate::debug!(value, "number out of range");
        Error::NumericFault {
            code: ErrorCode::D1001,
            value,
            position: 0,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Error::NumericFault { code, .. } => *code,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Error::NumericFault { position, .. } => *position,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
