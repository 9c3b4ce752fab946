// In-memory booking core for a single hotel.
//
// Front ends (GUI dialogs, CLI, HTTP handlers) are external callers: they
// collect raw input, convert it through `parse`, and drive the `Hotel`
// operation surface. All state lives in memory and is lost at process exit.

pub mod booking;
pub mod error;
pub mod hotel;
pub mod parse;
pub mod room;

// Re-export key types for convenience
pub use booking::Booking;
pub use error::HotelError;
pub use hotel::{BookingSummary, Hotel};
pub use parse::{format_date, parse_date, parse_price, parse_room_number, ParseError};
pub use room::{Occupancy, Room, RoomStatus, RoomSummary};
