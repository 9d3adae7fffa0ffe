use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, PathError>;

/// Errors raised when constructing a realm from a raw string.
#[derive(Clone, Debug, PartialEq)]
pub enum RealmError {
    /// The realm string was empty after parsing.
    Empty,

    /// The realm string contains a character forbidden in realm
    /// names ('/', ':' or NUL).
    IllegalCharacter(char),
}

impl fmt::Display for RealmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealmError::Empty => write!(f, "Empty realm name"),
            RealmError::IllegalCharacter(c) => {
                write!(f, "Illegal character {:?} in realm name", c)
            }
        }
    }
}

/// Errors raised by realms path resolution. Resolution never fails
/// for lack of a path, only for invalid input realms.
#[derive(Clone, Debug, PartialEq)]
pub enum PathError {
    InvalidArgument(RealmError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidArgument(realm_error) => {
                write!(f, "Invalid realm: {}", realm_error)
            }
        }
    }
}

impl From<RealmError> for PathError {
    fn from(error: RealmError) -> Self {
        return Self::InvalidArgument(error);
    }
}
