use std::fmt;
use std::num::IntErrorKind;

use crate::aircraft::SeatingPlan;
use crate::{SeatingError, SeatingResult};

const MAX_ROUTE_NUMBER: u32 = 9999;
const MAX_ROUTE_DIGITS: usize = 4;

/// A validated flight number: two letter airline code followed by a route number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightNumber(String);

impl FlightNumber {
    pub fn parse(number: &str) -> SeatingResult<Self> {
        let airline: String = number.chars().take(2).collect();
        if airline.chars().count() < 2 || !airline.chars().all(char::is_alphabetic) {
            return Err(SeatingError::InvalidFormat(format!("No airline code in {}", number)));
        }

        if !airline.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(SeatingError::InvalidFormat(format!("Invalid airline code in {}", number)));
        }

        let route = &number[airline.len()..];
        let valid_route = !route.is_empty()
            && route.len() <= MAX_ROUTE_DIGITS
            && route.bytes().all(|b| b.is_ascii_digit())
            && route.parse::<u32>().is_ok_and(|n| n <= MAX_ROUTE_NUMBER);
        if !valid_route {
            return Err(SeatingError::InvalidFormat(format!("Invalid route number {}", number)));
        }

        Ok(Self(number.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two letter airline code
    pub fn airline(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A seat such as `12A`, checked against a seating plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatDesignator {
    pub row: i64,
    pub letter: char,
}

impl SeatDesignator {
    /// Parses `seat` against `plan`.
    ///
    /// The letter is validated before the row, so `99Z` on a plan without `Z`
    /// is reported as a bad letter even though row 99 is also out of range.
    pub fn parse(seat: &str, plan: &SeatingPlan) -> SeatingResult<Self> {
        let letter = seat
            .chars()
            .last()
            .ok_or_else(|| SeatingError::InvalidSeatLetter(String::new()))?;
        if plan.letter_index(letter).is_none() {
            return Err(SeatingError::InvalidSeatLetter(letter.to_string()));
        }

        let row_txt = &seat[..seat.len() - letter.len_utf8()];
        let row: i64 = match row_txt.trim().parse() {
            Ok(row) => row,
            // Numeric but beyond i64 can never be a row on the plan
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(SeatingError::InvalidRowNumber(row_txt.trim().to_string()));
            }
            Err(_) => return Err(SeatingError::InvalidSeatRow(row_txt.to_string())),
        };

        if !plan.contains_row(row) {
            return Err(SeatingError::InvalidRowNumber(row.to_string()));
        }

        Ok(Self { row, letter })
    }
}

impl fmt::Display for SeatDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}
