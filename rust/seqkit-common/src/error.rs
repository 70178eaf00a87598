use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// An insertion or relocation target lies past the end of the source.
    ///
    /// `len` is the number of source elements observed before exhaustion.
    pub fn index_out_of_range(name: impl Into<String>, index: usize, len: usize) -> Error {
        let name = name.into();
        log::debug!("{name} index {index} is out of range for a sequence of length {len}");
        Error(ErrorKind::IndexOutOfRange { name, index, len }.into())
    }

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::IndexOutOfRange { .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{name} index {index} is greater than the sequence length {len}")]
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

impl Eq for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arg_display() {
        let err = Error::invalid_arg("size", "size > 0");
        assert!(err.is_invalid_arg());
        assert_eq!(err.to_string(), "invalid argument size: size > 0");
    }

    #[test]
    fn test_out_of_range_kind() {
        let err = Error::index_out_of_range("insert", 5, 3);
        assert!(err.is_out_of_range());
        assert_eq!(
            err.into_kind(),
            ErrorKind::IndexOutOfRange {
                name: "insert".into(),
                index: 5,
                len: 3
            }
        );
    }
}
