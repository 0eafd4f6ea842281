use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{SeatingError, SeatingResult};

/// Seat letters in cabin order. `I` is skipped to avoid confusion with `1`.
pub const SEAT_LETTERS: &str = "ABCDEFGHJK";

/// The grid of valid rows and seat letters for an aircraft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingPlan {
    rows: RangeInclusive<i64>,
    letters: Vec<char>,
}

impl SeatingPlan {
    pub fn new(rows: RangeInclusive<i64>, letters: &str) -> Self {
        Self {
            rows,
            letters: letters.chars().collect(),
        }
    }

    /// Row numbers, ascending
    pub fn rows(&self) -> RangeInclusive<i64> {
        self.rows.clone()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn num_rows(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.rows.end() - self.rows.start() + 1) as usize
        }
    }

    pub fn contains_row(&self, row: i64) -> bool {
        self.rows.contains(&row)
    }

    /// Position of `letter` within a row, if the plan has it
    pub fn letter_index(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|l| *l == letter)
    }
}

/// Capabilities every aircraft configuration provides
pub trait Aircraft: Send + Sync {
    fn registration(&self) -> &str;

    fn model(&self) -> &str;

    fn seating_plan(&self) -> SeatingPlan;

    /// Total seats, derived from the seating plan
    fn num_seats(&self) -> usize {
        let plan = self.seating_plan();
        plan.num_rows() * plan.letters().len()
    }
}

#[derive(Debug, Clone)]
pub struct Airbus319 {
    registration: String,
}

impl Airbus319 {
    pub fn new(registration: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
        }
    }
}

impl Aircraft for Airbus319 {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        "Airbus A319"
    }

    fn seating_plan(&self) -> SeatingPlan {
        SeatingPlan::new(1..=22, "ABCDEF")
    }
}

/// Boeing 777 in a single-class layout. First class seating is not modelled.
#[derive(Debug, Clone)]
pub struct Boeing777 {
    registration: String,
}

impl Boeing777 {
    pub fn new(registration: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
        }
    }
}

impl Aircraft for Boeing777 {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        "Boeing 777"
    }

    fn seating_plan(&self) -> SeatingPlan {
        SeatingPlan::new(1..=55, "ABCDEGHJK")
    }
}

/// Any aircraft described by a row count and a row width
#[derive(Debug, Clone)]
pub struct AircraftGeneral {
    registration: String,
    model: String,
    num_rows: i64,
    num_seats_per_row: usize,
}

impl AircraftGeneral {
    pub fn new(
        registration: impl Into<String>,
        model: impl Into<String>,
        num_rows: i64,
        num_seats_per_row: usize,
    ) -> SeatingResult<Self> {
        if num_rows < 0 {
            return Err(SeatingError::InvalidRowCount(num_rows));
        }

        let max = SEAT_LETTERS.len();
        if num_seats_per_row > max {
            return Err(SeatingError::InvalidSeatsPerRow {
                requested: num_seats_per_row,
                max,
            });
        }

        Ok(Self {
            registration: registration.into(),
            model: model.into(),
            num_rows,
            num_seats_per_row,
        })
    }
}

impl Aircraft for AircraftGeneral {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn seating_plan(&self) -> SeatingPlan {
        SeatingPlan::new(1..=self.num_rows, &SEAT_LETTERS[..self.num_seats_per_row])
    }
}

/// Declarative aircraft description, e.g. from a configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AircraftSpec {
    Airbus319 {
        registration: String,
    },
    Boeing777 {
        registration: String,
    },
    General {
        registration: String,
        model: String,
        num_rows: i64,
        num_seats_per_row: usize,
    },
}

impl AircraftSpec {
    pub fn build(&self) -> SeatingResult<Arc<dyn Aircraft>> {
        let aircraft: Arc<dyn Aircraft> = match self {
            AircraftSpec::Airbus319 { registration } => Arc::new(Airbus319::new(registration.as_str())),
            AircraftSpec::Boeing777 { registration } => Arc::new(Boeing777::new(registration.as_str())),
            AircraftSpec::General {
                registration,
                model,
                num_rows,
                num_seats_per_row,
            } => Arc::new(AircraftGeneral::new(
                registration.as_str(),
                model.as_str(),
                *num_rows,
                *num_seats_per_row,
            )?),
        };
        Ok(aircraft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_models() {
        let airbus = Airbus319::new("EK-YGH");
        assert_eq!(airbus.model(), "Airbus A319");
        assert_eq!(airbus.registration(), "EK-YGH");
        assert_eq!(airbus.num_seats(), 22 * 6);

        let boeing = Boeing777::new("EK-EDO");
        assert_eq!(boeing.model(), "Boeing 777");
        assert_eq!(boeing.seating_plan().letters(), &['A', 'B', 'C', 'D', 'E', 'G', 'H', 'J', 'K']);
        assert_eq!(boeing.num_seats(), 55 * 9);
    }

    #[test]
    fn test_general_seating_plan() {
        let aircraft = AircraftGeneral::new("EK-ARE", "Airbus A380", 22, 6).unwrap();
        let plan = aircraft.seating_plan();

        assert_eq!(plan.rows(), 1..=22);
        assert_eq!(plan.letters(), &['A', 'B', 'C', 'D', 'E', 'F']);
        assert_eq!(aircraft.num_seats(), 132);

        // Full width skips the letter I
        let wide = AircraftGeneral::new("X", "Wide", 1, 10).unwrap();
        assert_eq!(wide.seating_plan().letter_index('J'), Some(8));
        assert_eq!(wide.seating_plan().letter_index('I'), None);
    }

    #[test]
    fn test_general_empty_aircraft() {
        let aircraft = AircraftGeneral::new("X", "Glider", 0, 2).unwrap();
        assert_eq!(aircraft.seating_plan().num_rows(), 0);
        assert_eq!(aircraft.num_seats(), 0);
    }

    #[test]
    fn test_general_rejects_bad_dimensions() {
        let result = AircraftGeneral::new("X", "Broken", -1, 6);
        assert!(matches!(result, Err(SeatingError::InvalidRowCount(-1))));

        let result = AircraftGeneral::new("X", "Broken", 10, 11);
        assert!(matches!(
            result,
            Err(SeatingError::InvalidSeatsPerRow { requested: 11, max: 10 })
        ));
    }

    #[test]
    fn test_spec_deserialization() {
        let json = r#"
            {
                "kind": "general",
                "registration": "EK-ARE",
                "model": "Airbus A380",
                "num_rows": 22,
                "num_seats_per_row": 6
            }
        "#;
        let spec: AircraftSpec = serde_json::from_str(json).expect("Failed to deserialize");
        let aircraft = spec.build().unwrap();
        assert_eq!(aircraft.model(), "Airbus A380");
        assert_eq!(aircraft.num_seats(), 132);

        let spec: AircraftSpec = serde_json::from_str(r#"{"kind": "boeing777", "registration": "EK-EDO"}"#).unwrap();
        assert_eq!(spec.build().unwrap().registration(), "EK-EDO");
    }
}
