pub mod aircraft;
pub mod boarding;
pub mod flight;
pub mod seat;

pub use aircraft::{Aircraft, AircraftGeneral, AircraftSpec, Airbus319, Boeing777, SeatingPlan, SEAT_LETTERS};
pub use boarding::{BoardingCard, CardPrinter};
pub use flight::Flight;
pub use seat::{FlightNumber, SeatDesignator};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatingError {
    #[error("Invalid flight number format: {0}")]
    InvalidFormat(String),
    #[error("Seat {0} is already occupied")]
    OccupiedSeat(String),
    #[error("No passenger to relocate in seat {0}")]
    EmptySeat(String),
    #[error("Invalid seat letter {0:?}")]
    InvalidSeatLetter(String),
    #[error("Invalid seat row {0:?}")]
    InvalidSeatRow(String),
    #[error("Invalid row number {0}")]
    InvalidRowNumber(String),
    #[error("Invalid row count {0}")]
    InvalidRowCount(i64),
    #[error("Invalid seats per row {requested}, at most {max} letters are available")]
    InvalidSeatsPerRow {
        requested: usize,
        max: usize,
    },
}

pub type SeatingResult<T> = Result<T, SeatingError>;
