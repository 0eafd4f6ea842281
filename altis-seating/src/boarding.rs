use std::io;

use serde::Serialize;

/// Everything a renderer needs to print one passenger's boarding card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardingCard<'a> {
    pub passenger: &'a str,
    pub seat: &'a str,
    pub flight_number: &'a str,
    pub aircraft_model: &'a str,
}

/// Renders boarding cards. Called once per occupied seat.
pub trait CardPrinter {
    fn print_card(&mut self, card: &BoardingCard<'_>) -> io::Result<()>;
}

impl<F> CardPrinter for F
where
    F: FnMut(&BoardingCard<'_>),
{
    fn print_card(&mut self, card: &BoardingCard<'_>) -> io::Result<()> {
        self(card);
        Ok(())
    }
}
