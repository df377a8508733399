use std::fmt;

/// Main error type for the Pokemon Trainer game engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Error related to catalog data loading or validation
    Catalog(CatalogError),
    /// Error related to save-record encoding or decoding
    Codec(CodecError),
}

/// Errors related to catalog data operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The RON document could not be parsed
    MalformedData(String),
    /// The species table does not line up with the Species enum
    SpeciesCountMismatch { expected: usize, found: usize },
    /// The item table does not line up with the ItemId enum
    ItemCountMismatch { expected: usize, found: usize },
}

/// Errors related to the trainer save-record codec.
///
/// Any decode failure abandons the whole load; a partially-read record is
/// never handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Underlying file read/write failed
    Io(String),
    /// The record ended before the named field was read
    Truncated { field: &'static str },
    /// A numeric field did not parse as a decimal integer
    InvalidNumber { field: &'static str, value: String },
    /// The item-counter line had the wrong number of columns
    ItemCounterMismatch { expected: usize, found: usize },
    /// The recorded party size exceeds the fixed party capacity
    PartyTooLarge { size: usize },
    /// A creature referenced a species id with no catalog entry
    UnknownSpecies { id: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Catalog(err) => write!(f, "Catalog error: {}", err),
            GameError::Codec(err) => write!(f, "Save record error: {}", err),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MalformedData(details) => {
                write!(f, "Malformed catalog data: {}", details)
            }
            CatalogError::SpeciesCountMismatch { expected, found } => {
                write!(f, "Expected {} species entries, found {}", expected, found)
            }
            CatalogError::ItemCountMismatch { expected, found } => {
                write!(f, "Expected {} item entries, found {}", expected, found)
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Io(details) => write!(f, "Save file I/O failed: {}", details),
            CodecError::Truncated { field } => {
                write!(f, "Save record ended before field '{}'", field)
            }
            CodecError::InvalidNumber { field, value } => {
                write!(f, "Field '{}' is not a valid integer: '{}'", field, value)
            }
            CodecError::ItemCounterMismatch { expected, found } => {
                write!(f, "Expected {} item counters, found {}", expected, found)
            }
            CodecError::PartyTooLarge { size } => {
                write!(f, "Recorded party size {} exceeds the 6-slot capacity", size)
            }
            CodecError::UnknownSpecies { id } => {
                write!(f, "No catalog entry for species id {}", id)
            }
        }
    }
}

impl std::error::Error for GameError {}
impl std::error::Error for CatalogError {}
impl std::error::Error for CodecError {}

impl From<CatalogError> for GameError {
    fn from(err: CatalogError) -> Self {
        GameError::Catalog(err)
    }
}

impl From<CodecError> for GameError {
    fn from(err: CodecError) -> Self {
        GameError::Codec(err)
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using CodecError
pub type CodecResult<T> = Result<T, CodecError>;
