use core::fmt;

/// Errors that abort a single hash computation.
///
/// None of them ever comes with a partial digest.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A byte sequence was not a multiple of the required unit size.
    InvalidLength {
        /// Required unit, in bytes.
        unit: usize,
        /// Length that was supplied, in bytes.
        len: usize,
    },
    /// The stream does not support reading.
    StreamUnreadable,
    /// The stream cannot report its total length, which the length footer
    /// needs.
    LengthRequired,
    /// The stream ended after a different number of bytes than it declared.
    LengthMismatch {
        /// Length reported before reading.
        declared: u64,
        /// Bytes actually read.
        actual: u64,
    },
    /// Reading from the stream failed.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { unit, len } => {
                write!(f, "invalid length {}, expected a multiple of {}", len, unit)
            }
            Error::StreamUnreadable => f.write_str("stream is not readable"),
            Error::LengthRequired => f.write_str("stream length is unknown"),
            Error::LengthMismatch { declared, actual } => write!(
                f,
                "stream declared {} bytes but yielded {}",
                declared, actual
            ),
            #[cfg(feature = "std")]
            Error::Io(err) => write!(f, "stream read failed: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
