use std::{error, fmt};

use crate::model::Field;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not follow the performance data grammar.
    InvalidFormat,
    /// A record has an empty label.
    MissingLabel,
    /// A record has an empty value.
    MissingValue,
    /// Failure outside of the grammar (I/O, encoding).
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::InvalidFormat => write!(f, "invalid performance data format"),
            ErrorKind::MissingLabel => write!(f, "missing performance data label"),
            ErrorKind::MissingValue => write!(f, "missing performance data value"),
            ErrorKind::Other => write!(f, "unexpected failure"),
        }
    }
}

type Source = Box<dyn error::Error + Send + Sync + 'static>;

pub struct Error {
    kind: ErrorKind,
    field: Option<Field>,
    message: String,
    source: Option<Source>,
}

impl Error {
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self {
            kind: ErrorKind::InvalidFormat,
            field: None,
            message: message.into(),
            source: None,
        }
    }

    /// Tags the error with the record field that failed.
    pub fn in_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    /// Wraps the error into a new one carrying `message`. The kind and the
    /// field of the wrapped error are kept.
    pub fn context<S: Into<String>>(self, message: S) -> Self {
        Self {
            kind: self.kind,
            field: self.field,
            message: message.into(),
            source: Some(Box::new(self)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn field(&self) -> Option<Field> {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_invalid_format(&self) -> bool {
        self.kind == ErrorKind::InvalidFormat
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}): {}", self.kind, self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(err) => write!(f, "{}: {}", self.message, err),
            None => write!(f, "{}: {}", self.message, self.kind),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| &**err as &(dyn error::Error + 'static))
    }
}

impl<E: error::Error + Send + Sync + 'static> From<(String, E)> for Error {
    fn from((message, err): (String, E)) -> Self {
        Self {
            kind: ErrorKind::Other,
            field: None,
            message,
            source: Some(Box::new(err)),
        }
    }
}

impl<E: error::Error + Send + Sync + 'static> From<(&str, E)> for Error {
    fn from((message, err): (&str, E)) -> Self {
        Self {
            kind: ErrorKind::Other,
            field: None,
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        format!("{}", err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
