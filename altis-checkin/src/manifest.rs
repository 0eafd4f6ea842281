use altis_seating::{AircraftSpec, Flight};
use serde::{Deserialize, Serialize};

use crate::error::CheckinError;

/// A flight and the seats to hand out on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightManifest {
    pub number: String,
    pub aircraft: AircraftSpec,
    #[serde(default)]
    pub allocations: Vec<SeatAllocation>,
    #[serde(default)]
    pub relocations: Vec<Relocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatAllocation {
    pub seat: String,
    pub passenger: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Relocation {
    pub from: String,
    pub to: String,
}

impl FlightManifest {
    /// Build the flight, then apply allocations and relocations in order.
    /// Stops at the first seating error.
    pub fn build_flight(&self) -> Result<Flight, CheckinError> {
        let aircraft = self.aircraft.build().map_err(|e| self.seating_error(e))?;
        let mut flight = Flight::new(&self.number, aircraft).map_err(|e| self.seating_error(e))?;

        for allocation in &self.allocations {
            flight
                .allocate_seat(&allocation.seat, allocation.passenger.as_str())
                .map_err(|e| self.seating_error(e))?;
        }

        for relocation in &self.relocations {
            flight
                .relocate_passenger(&relocation.from, &relocation.to)
                .map_err(|e| self.seating_error(e))?;
        }

        Ok(flight)
    }

    fn seating_error(&self, source: altis_seating::SeatingError) -> CheckinError {
        CheckinError::Seating {
            flight: self.number.clone(),
            source,
        }
    }
}
