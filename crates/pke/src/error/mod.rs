//! Error handling for PKE operations.

use alloc::string::ToString;
use core::fmt;

use ntruenc_algorithms::error::Error as PrimitiveError;
use ntruenc_api::error::Error as CoreError;

pub mod validate;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A primitive (polynomial, bit buffer, hash) operation failed
    Primitive(PrimitiveError),
    /// An API-level error passed through unchanged
    Api(CoreError),
    /// The parameter set cannot be used
    InvalidParameters(&'static str),
    /// The plaintext is longer than the parameter set allows
    MessageTooLong { max: usize, actual: usize },
    /// The random number generator failed
    RandomGeneration(&'static str),
    /// Key material is malformed or does not match the parameter set
    InvalidKey(&'static str),
    /// Ciphertext has the wrong shape for the parameter set
    InvalidCiphertextFormat(&'static str),
    /// Decryption integrity check failed
    ///
    /// Carries no detail about which check failed.
    DecryptionFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "NTRU primitive error: {}", e),
            Error::Api(e) => write!(f, "NTRU API error: {}", e),
            Error::InvalidParameters(reason) => write!(f, "Invalid NTRU parameters: {}", reason),
            Error::MessageTooLong { max, actual } => {
                write!(f, "Message too long: {} bytes, at most {} allowed", actual, max)
            }
            Error::RandomGeneration(context) => {
                write!(f, "Random number generator failed during {}", context)
            }
            Error::InvalidKey(reason) => write!(f, "Invalid NTRU key: {}", reason),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid NTRU ciphertext format: {}", reason)
            }
            Error::DecryptionFailed => write!(f, "NTRU decryption failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::RandomGeneration { context } => Error::RandomGeneration(context),
            other => Error::Primitive(other),
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidParameters(reason) => CoreError::InvalidParameter {
                context: "NTRUEncrypt parameters",
                message: reason.to_string(),
            },
            Error::MessageTooLong { max, actual } => CoreError::InvalidLength {
                context: "NTRUEncrypt plaintext",
                expected: max,
                actual,
            },
            Error::RandomGeneration(context) => CoreError::RandomGenerationError {
                context,
                message: "random number generator failure".to_string(),
            },
            Error::InvalidKey(reason) => CoreError::InvalidKey {
                context: "NTRUEncrypt",
                message: reason.to_string(),
            },
            Error::InvalidCiphertextFormat(reason) => CoreError::InvalidCiphertext {
                context: "NTRUEncrypt",
                message: reason.to_string(),
            },
            Error::DecryptionFailed => CoreError::DecryptionFailed {
                context: "NTRUEncrypt",
                message: "decryption failed".to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
