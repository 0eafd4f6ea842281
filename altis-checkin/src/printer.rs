use std::io::{self, Write};

use altis_seating::{BoardingCard, CardPrinter};
use serde::{Deserialize, Serialize};

/// Output format for boarding cards
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardFormat {
    #[default]
    Text,
    Json,
}

/// Bordered plain-text card, followed by a blank line
pub struct TextCardPrinter<W> {
    out: W,
}

impl<W: Write> TextCardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CardPrinter for TextCardPrinter<W> {
    fn print_card(&mut self, card: &BoardingCard<'_>) -> io::Result<()> {
        let output = format!(
            "| Name: {} Flight: {} Seat: {} Aircraft: {} |",
            card.passenger, card.flight_number, card.seat, card.aircraft_model
        );
        let width = output.chars().count() - 2;
        let banner = format!("+{}+", "-".repeat(width));
        let border = format!("|{}|", " ".repeat(width));

        let lines = [&banner, &border, &output, &border, &banner];
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)
    }
}

/// One JSON object per line
pub struct JsonCardPrinter<W> {
    out: W,
}

impl<W: Write> JsonCardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CardPrinter for JsonCardPrinter<W> {
    fn print_card(&mut self, card: &BoardingCard<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, card)?;
        writeln!(self.out)
    }
}
