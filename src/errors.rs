//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::fmt;

/// Type alias for context writing errors
pub type Result<X> = result::Result<X, Error>;

/// Everything that can stop a run
///
/// Lines that can't be split into two columns are not errors; they are skipped and logged.
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    MissingFile(&'static str, Option<io::Error>),
    Unwritable(&'static str, io::Error),
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::MissingFile(ref info, ref opt_err) => {
                write!(f,
                    "The {} must already exist at this point but there was a problem opening it. \
                    Wrong directory? The OS error was: ",
                    info)?;
                if let Some(ref err) = *opt_err { err.fmt(f) }
                else { write!(f, "Unknown") }
            },
            Error::Unwritable(ref info, ref err) => {
                write!(f, "Could not create the {}: {}", info, err)
            },
            Error::InvalidConfig(ref info) => write!(f, "Invalid configuration: {}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref err) => Some(err),
            Error::MissingFile(_, Some(ref err)) => Some(err),
            Error::MissingFile(_, None) => None,
            Error::Unwritable(_, ref err) => Some(err),
            Error::InvalidConfig(_) => None,
        }
    }
}

//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::IOError(inner) => inner,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn missing_file_names_the_input() {
        let err = Error::MissingFile("stop-words file",
            Some(io::Error::new(io::ErrorKind::NotFound, "no such file")));
        let text = err.to_string();
        assert!(text.contains("stop-words file"));
        assert!(text.contains("no such file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_errors_round_trip_without_wrapping() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::BrokenPipe);
    }
}
