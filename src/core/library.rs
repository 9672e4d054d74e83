use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<uuid::Error> for LibraryError {
    fn from(err: uuid::Error) -> Self {
        LibraryError::validation(
            format!("invalid identifier {}", err).as_str(), Some("400".to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the lending context.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum BookType {
    Restricted,
    Circulating,
}

impl From<String> for BookType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Restricted" => BookType::Restricted,
            "Circulating" => BookType::Circulating,
            _ => BookType::Circulating,
        }
    }
}

impl Display for BookType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookType::Restricted => write!(f, "Restricted"),
            BookType::Circulating => write!(f, "Circulating"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum PatronType {
    Regular,
    Researcher,
}

impl From<String> for PatronType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Regular" => PatronType::Regular,
            "Researcher" => PatronType::Researcher,
            _ => PatronType::Regular,
        }
    }
}

impl Display for PatronType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PatronType::Regular => write!(f, "Regular"),
            PatronType::Researcher => write!(f, "Researcher"),
        }
    }
}
