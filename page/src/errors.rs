use std::fmt;
use std::string::FromUtf8Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentErrorKind {
    MalformedEscape,
    InvalidUtf8,
}

/// Raised when a location fragment cannot be percent-decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentError {
    pub msg: String,
    pub pos: String,
    pub kind: FragmentErrorKind,
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?} Error in fragment at: ({:?}) - {:?}",
            self.kind, self.pos, self.msg
        )
    }
}

impl std::error::Error for FragmentError {}

impl From<FromUtf8Error> for FragmentError {
    fn from(e: FromUtf8Error) -> Self {
        FragmentError {
            msg: e.to_string(),
            pos: e.utf8_error().valid_up_to().to_string(),
            kind: FragmentErrorKind::InvalidUtf8,
        }
    }
}

impl From<FragmentError> for std::io::Error {
    fn from(e: FragmentError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}
