// Room occupancy state machine.
//
// A room is either vacant or occupied by exactly one booking. The two
// states are a single tagged enum, so "marked unavailable but no booking
// attached" is unrepresentable. This is a two-state machine, not a
// reservation calendar: at most one booking is tracked at a time, and
// attaching a non-conflicting stay replaces the one currently attached,
// discarding its record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::error::HotelError;

#[derive(Debug, Clone, PartialEq)]
pub enum Occupancy {
    Vacant,
    Occupied(Booking),
}

#[derive(Debug, Clone)]
pub struct Room {
    number: u32,
    kind: String,
    price: f64,
    occupancy: Occupancy,
}

impl Room {
    pub fn new(number: u32, kind: impl Into<String>, price: f64) -> Self {
        Self {
            number,
            kind: kind.into(),
            price,
            occupancy: Occupancy::Vacant,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self.occupancy, Occupancy::Occupied(_))
    }

    pub fn booking(&self) -> Option<&Booking> {
        match &self.occupancy {
            Occupancy::Occupied(booking) => Some(booking),
            Occupancy::Vacant => None,
        }
    }

    /// Whether the room can take a stay over `[start, end]`. A vacant room
    /// is available for any range; an occupied one only for ranges that do
    /// not overlap the attached booking.
    pub fn is_available(&self, start: NaiveDate, end: NaiveDate) -> bool {
        match &self.occupancy {
            Occupancy::Vacant => true,
            Occupancy::Occupied(booking) => !booking.conflicts_with(start, end),
        }
    }

    /// Attach a booking for `[start, end]`. Availability is re-validated
    /// here so the transition holds no matter which path called in; on
    /// failure the current state is left untouched. On success the new
    /// booking becomes the attached record: a still-attached booking that
    /// does not conflict with the new range is displaced and discarded.
    pub fn book(
        &mut self,
        guest_name: &str,
        contact: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(), HotelError> {
        if end < start {
            return Err(HotelError::InvalidInput(format!(
                "check-out {end} precedes check-in {start}"
            )));
        }
        if !self.is_available(start, end) {
            return Err(HotelError::NotAvailable(self.number));
        }

        self.occupancy = Occupancy::Occupied(Booking::new(
            guest_name,
            contact,
            self.number,
            start,
            end,
        ));

        Ok(())
    }

    /// Detach and return the current booking. The record is not archived;
    /// the caller may drop it.
    pub fn check_out(&mut self) -> Result<Booking, HotelError> {
        match std::mem::replace(&mut self.occupancy, Occupancy::Vacant) {
            Occupancy::Occupied(booking) => Ok(booking),
            Occupancy::Vacant => Err(HotelError::NotOccupied(self.number)),
        }
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            number: self.number,
            kind: self.kind.clone(),
            price: self.price,
            status: if self.is_occupied() {
                RoomStatus::Occupied
            } else {
                RoomStatus::Available
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Occupied,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "Available"),
            RoomStatus::Occupied => write!(f, "Occupied"),
        }
    }
}

/// One row of the list-rooms view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub number: u32,
    pub kind: String,
    pub price: f64,
    pub status: RoomStatus,
}

impl fmt::Display for RoomSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} | {} | {:.2} | {}",
            self.number, self.kind, self.price, self.status
        )
    }
}
