use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::fastio::ScanError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Input,
    Output,
    Diagnostics,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stream::Input => "input",
            Stream::Output => "output",
            Stream::Diagnostics => "diagnostics",
        })
    }
}

#[derive(Debug)]
pub enum Error {
    /// A configured file could not be opened for the given stream.
    Redirect {
        stream: Stream,
        path: PathBuf,
        source: io::Error,
    },
    Io(io::Error),
    Scan(ScanError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Redirect { stream, path, source } => {
                write!(f, "cannot redirect {stream} to {}: {source}", path.display())
            }
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Scan(e) => write!(f, "malformed input: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Redirect { source, .. } => Some(source),
            Error::Io(e) => Some(e),
            Error::Scan(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Error::Scan(e)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn redirect_message() {
        let err = Error::Redirect {
            stream: Stream::Input,
            path: PathBuf::from("missing/input.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot redirect input to missing/input.txt: not found");
        assert!(err.source().is_some());
    }

    #[test]
    fn scan_errors_convert() {
        let err: Error = ScanError::Eof.into();
        assert!(matches!(err, Error::Scan(ScanError::Eof)));
        assert_eq!(err.to_string(), "malformed input: ran out of input");
    }
}
