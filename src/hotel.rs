// Room registry and the operation surface front ends call into.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::HotelError;
use crate::room::{Room, RoomStatus, RoomSummary};

#[derive(Debug)]
pub struct Hotel {
    name: String,
    address: String,
    contact: String,
    rooms: Vec<Room>,
}

impl Hotel {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact: contact.into(),
            rooms: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Register a new room. Duplicate room numbers are rejected rather than
    /// silently shadowing later lookups.
    pub fn add_room(&mut self, number: u32, kind: &str, price: f64) -> Result<u32, HotelError> {
        if kind.trim().is_empty() {
            return Err(HotelError::InvalidInput(
                "room type must not be empty".to_string(),
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(HotelError::InvalidInput(format!(
                "price must be a non-negative number, got {price}"
            )));
        }
        if self.find_room(number).is_some() {
            warn!(number, "rejected duplicate room number");
            return Err(HotelError::DuplicateRoom(number));
        }

        self.rooms.push(Room::new(number, kind, price));
        debug!(number, kind, price, "room added");
        Ok(number)
    }

    /// Remove a room by number. An attached booking is discarded with it.
    pub fn remove_room(&mut self, number: u32) -> Result<(), HotelError> {
        let idx = self
            .rooms
            .iter()
            .position(|room| room.number() == number)
            .ok_or(HotelError::NotFound(number))?;

        let room = self.rooms.remove(idx);
        if room.is_occupied() {
            warn!(number, "removed room had an active booking, record discarded");
        }
        debug!(number, "room removed");
        Ok(())
    }

    /// Linear scan, first match in registry order.
    pub fn find_room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number() == number)
    }

    fn find_room_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number() == number)
    }

    /// Availability over `[start, end]`. A missing room reports `false`,
    /// not an error.
    pub fn check_availability(&self, number: u32, start: NaiveDate, end: NaiveDate) -> bool {
        self.find_room(number)
            .map(|room| room.is_available(start, end))
            .unwrap_or(false)
    }

    pub fn book_room(
        &mut self,
        number: u32,
        guest_name: &str,
        contact: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(), HotelError> {
        let room = self
            .find_room_mut(number)
            .ok_or(HotelError::NotFound(number))?;

        match room.book(guest_name, contact, start, end) {
            Ok(()) => {
                debug!(number, guest = guest_name, %start, %end, "room booked");
                Ok(())
            }
            Err(err) => {
                warn!(number, %err, "booking rejected");
                Err(err)
            }
        }
    }

    pub fn check_out(&mut self, number: u32) -> Result<(), HotelError> {
        let room = self
            .find_room_mut(number)
            .ok_or(HotelError::NotFound(number))?;

        match room.check_out() {
            Ok(booking) => {
                debug!(number, guest = booking.guest_name.as_str(), "checked out");
                Ok(())
            }
            Err(err) => {
                warn!(number, %err, "checkout rejected");
                Err(err)
            }
        }
    }

    /// One summary per registered room, in registry order.
    pub fn list_rooms(&self) -> Vec<RoomSummary> {
        self.rooms.iter().map(Room::summary).collect()
    }

    /// One record per occupied room, in registry order. Checked-out stays
    /// are not archived and never appear here.
    pub fn list_bookings(&self) -> Vec<BookingSummary> {
        self.rooms
            .iter()
            .filter_map(|room| {
                room.booking().map(|booking| BookingSummary {
                    number: room.number(),
                    status: RoomStatus::Occupied,
                    check_in: booking.check_in,
                    check_out: booking.check_out,
                    guest_name: booking.guest_name.clone(),
                    contact: booking.contact.clone(),
                })
            })
            .collect()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }
}

/// One row of the list-bookings view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub number: u32,
    pub status: RoomStatus,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_name: String,
    pub contact: String,
}

impl fmt::Display for BookingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {} | {} | {} to {} | {} | {}",
            self.number, self.status, self.check_in, self.check_out, self.guest_name, self.contact
        )
    }
}
