use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    InvalidChoice(String),
    InvalidIndex(String),
    InvalidPriority(String),
    InvalidInput(String),
    InvalidData(String),
    Io(String),
}

impl AppError {
    pub fn invalid_choice<M: Into<String>>(message: M) -> Self {
        Self::InvalidChoice(message.into())
    }

    pub fn invalid_index<M: Into<String>>(message: M) -> Self {
        Self::InvalidIndex(message.into())
    }

    pub fn invalid_priority<M: Into<String>>(message: M) -> Self {
        Self::InvalidPriority(message.into())
    }

    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidChoice(_) => "invalid_choice",
            Self::InvalidIndex(_) => "invalid_index",
            Self::InvalidPriority(_) => "invalid_priority",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidData(_) => "invalid_data",
            Self::Io(_) => "io_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidChoice(message) => message,
            Self::InvalidIndex(message) => message,
            Self::InvalidPriority(message) => message,
            Self::InvalidInput(message) => message,
            Self::InvalidData(message) => message,
            Self::Io(message) => message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
