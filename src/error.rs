// Error kinds for the operation surface. Business-as-usual failures (room
// occupied, nothing to check out) are ordinary outcomes, never panics. A
// legacy front end may merge these into one message; the core keeps the
// kinds distinct.

use thiserror::Error;

use crate::parse::ParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("room {0} already exists")]
    DuplicateRoom(u32),

    #[error("room {0} not found")]
    NotFound(u32),

    #[error("room {0} is not available for the requested dates")]
    NotAvailable(u32),

    #[error("room {0} is not occupied")]
    NotOccupied(u32),
}

impl From<ParseError> for HotelError {
    fn from(err: ParseError) -> Self {
        HotelError::InvalidInput(err.to_string())
    }
}
