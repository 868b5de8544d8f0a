use std::fmt;

/// Permission store and locale errors.
#[derive(Debug)]
pub enum Error {
    /// No permission with this id exists.
    NotFound(u32),
    /// Submitted values cannot be applied to a permission.
    InvalidValues(String),
    /// The backing service failed.
    Service(String),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(id) => write!(f, "permission {} does not exist", id),
            Error::InvalidValues(reason) => write!(f, "invalid permission values: {}", reason),
            Error::Service(reason) => write!(f, "permission service failed: {}", reason),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
