use std::fmt;
use std::io;
use std::sync::Arc;

use crate::aircraft::{Aircraft, SeatingPlan};
use crate::boarding::{BoardingCard, CardPrinter};
use crate::seat::{FlightNumber, SeatDesignator};
use crate::{SeatingError, SeatingResult};

/// A flight with a particular passenger aircraft
pub struct Flight {
    number: FlightNumber,
    aircraft: Arc<dyn Aircraft>,
    plan: SeatingPlan,
    // seating[row - first row][letter index]
    seating: Vec<Vec<Option<String>>>,
}

impl Flight {
    pub fn new(number: &str, aircraft: Arc<dyn Aircraft>) -> SeatingResult<Self> {
        let number = FlightNumber::parse(number)?;
        let plan = aircraft.seating_plan();
        let seating = vec![vec![None; plan.letters().len()]; plan.num_rows()];

        tracing::debug!(
            "Created flight {} on {} ({}) with {} seats",
            number,
            aircraft.model(),
            aircraft.registration(),
            plan.num_rows() * plan.letters().len()
        );

        Ok(Self {
            number,
            aircraft,
            plan,
            seating,
        })
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    /// The two letter airline code
    pub fn airline(&self) -> &str {
        self.number.airline()
    }

    pub fn aircraft_model(&self) -> &str {
        self.aircraft.model()
    }

    pub fn registration(&self) -> &str {
        self.aircraft.registration()
    }

    pub fn aircraft(&self) -> &Arc<dyn Aircraft> {
        &self.aircraft
    }

    /// The passenger in `seat`, if any
    pub fn passenger(&self, seat: &str) -> SeatingResult<Option<&str>> {
        let seat = self.parse_seat(seat)?;
        Ok(self.slot(seat).as_deref())
    }

    /// Allocate a seat to a passenger.
    ///
    /// Fails with `OccupiedSeat` if someone already sits there; the chart is
    /// left untouched on any error.
    pub fn allocate_seat(&mut self, seat: &str, passenger: impl Into<String>) -> SeatingResult<()> {
        let designator = self.parse_seat(seat)?;

        if self.slot(designator).is_some() {
            return Err(SeatingError::OccupiedSeat(seat.to_string()));
        }

        let passenger = passenger.into();
        tracing::debug!("Allocated seat {} on {} to {}", designator, self.number, passenger);
        *self.slot_mut(designator) = Some(passenger);
        Ok(())
    }

    /// Move a passenger to a different seat.
    ///
    /// The destination is validated before the source, so an occupied
    /// destination is reported even when `from_seat` is itself invalid.
    pub fn relocate_passenger(&mut self, from_seat: &str, to_seat: &str) -> SeatingResult<()> {
        let to = self.parse_seat(to_seat)?;
        if self.slot(to).is_some() {
            return Err(SeatingError::OccupiedSeat(to_seat.to_string()));
        }

        let from = self.parse_seat(from_seat)?;
        let passenger = self
            .slot_mut(from)
            .take()
            .ok_or_else(|| SeatingError::EmptySeat(from_seat.to_string()))?;

        tracing::debug!("Relocated {} on {} from {} to {}", passenger, self.number, from, to);
        *self.slot_mut(to) = Some(passenger);
        Ok(())
    }

    pub fn num_available_seats(&self) -> usize {
        self.seating
            .iter()
            .map(|row| row.iter().filter(|slot| slot.is_none()).count())
            .sum()
    }

    /// Occupied seats as `(passenger, seat)` pairs, rows ascending and letters in plan order
    pub fn passenger_seats(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.plan.rows().zip(&self.seating).flat_map(move |(row, seats)| {
            self.plan
                .letters()
                .iter()
                .zip(seats)
                .filter_map(move |(letter, slot)| {
                    slot.as_deref().map(|passenger| (passenger, format!("{}{}", row, letter)))
                })
        })
    }

    /// Print a boarding card for every allocated seat, ordered by passenger and then seat.
    ///
    /// Stops at the first error returned by `printer`.
    pub fn make_boarding_card<P>(&self, printer: &mut P) -> io::Result<()>
    where
        P: CardPrinter + ?Sized,
    {
        let mut passenger_seats: Vec<_> = self.passenger_seats().collect();
        passenger_seats.sort();

        for (passenger, seat) in &passenger_seats {
            printer.print_card(&BoardingCard {
                passenger,
                seat,
                flight_number: self.number(),
                aircraft_model: self.aircraft_model(),
            })?;
        }

        Ok(())
    }

    fn parse_seat(&self, seat: &str) -> SeatingResult<SeatDesignator> {
        SeatDesignator::parse(seat, &self.plan)
    }

    // Designators returned by parse_seat are always inside the chart.
    fn position(&self, seat: SeatDesignator) -> (usize, usize) {
        let row = (seat.row - self.plan.rows().start()) as usize;
        let letter = self.plan.letter_index(seat.letter).unwrap_or_default();
        (row, letter)
    }

    fn slot(&self, seat: SeatDesignator) -> &Option<String> {
        let (row, letter) = self.position(seat);
        &self.seating[row][letter]
    }

    fn slot_mut(&mut self, seat: SeatDesignator) -> &mut Option<String> {
        let (row, letter) = self.position(seat);
        &mut self.seating[row][letter]
    }
}

impl fmt::Debug for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flight")
            .field("number", &self.number)
            .field("aircraft_model", &self.aircraft_model())
            .field("registration", &self.registration())
            .field("available_seats", &self.num_available_seats())
            .finish()
    }
}
