use std::io::Write;

use altis_seating::Flight;

pub mod app_config;
pub mod error;
pub mod manifest;
pub mod printer;

pub use app_config::Config;
pub use error::{CheckinError, CheckinResult};
pub use manifest::{FlightManifest, Relocation, SeatAllocation};
pub use printer::{CardFormat, JsonCardPrinter, TextCardPrinter};

/// Build every manifest, failing on the first one that does not apply cleanly
pub fn build_flights(manifests: &[FlightManifest]) -> CheckinResult<Vec<Flight>> {
    manifests
        .iter()
        .map(|manifest| -> CheckinResult<Flight> {
            let flight = manifest.build_flight()?;
            tracing::info!(
                "Flight {} ({} {}): {} passengers, {} of {} seats available",
                flight.number(),
                flight.aircraft_model(),
                flight.registration(),
                flight.passenger_seats().count(),
                flight.num_available_seats(),
                flight.aircraft().num_seats()
            );
            Ok(flight)
        })
        .collect()
}

/// Print the boarding cards of each flight, in order, to `out`
pub fn print_boarding_cards<W: Write>(flights: &[Flight], format: CardFormat, out: W) -> CheckinResult<()> {
    match format {
        CardFormat::Text => {
            let mut printer = TextCardPrinter::new(out);
            for flight in flights {
                flight.make_boarding_card(&mut printer)?;
            }
            printer.into_inner().flush()?;
        }
        CardFormat::Json => {
            let mut printer = JsonCardPrinter::new(out);
            for flight in flights {
                flight.make_boarding_card(&mut printer)?;
            }
            printer.into_inner().flush()?;
        }
    }

    Ok(())
}
