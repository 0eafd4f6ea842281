use altis_checkin::{build_flights, print_boarding_cards, CardFormat, CheckinError, Config};

fn default_config() -> Config {
    Config::from_toml(include_str!("../../config/default.toml")).expect("default config should parse")
}

#[test]
fn test_default_manifests_build() {
    let config = default_config();
    let flights = build_flights(&config.flights).unwrap();

    let summary: Vec<(&str, &str, usize)> = flights
        .iter()
        .map(|f| (f.number(), f.aircraft_model(), f.num_available_seats()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("EK973", "Airbus A380", 22 * 6 - 6),
            ("EK231", "Airbus A319", 22 * 6 - 6),
            ("EK973", "Boeing 777", 55 * 9 - 6),
        ]
    );
}

#[test]
fn test_text_cards_for_all_flights() {
    let flights = build_flights(&default_config().flights).unwrap();
    let mut out = Vec::new();
    print_boarding_cards(&flights, CardFormat::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let names: Vec<&str> = text.lines().filter(|l| l.starts_with("| Name:")).collect();
    assert_eq!(names.len(), 18);
    assert_eq!(names[0], "| Name: Ahmed Maher Flight: EK973 Seat: 2A Aircraft: Airbus A380 |");
    assert_eq!(names[5], "| Name: Mohammed Elkholy Flight: EK973 Seat: 1A Aircraft: Airbus A380 |");
    assert_eq!(names[6], "| Name: Ahmed Maher Flight: EK231 Seat: 2A Aircraft: Airbus A319 |");
    assert_eq!(names[17], "| Name: Mohammed Elkholy Flight: EK973 Seat: 1A Aircraft: Boeing 777 |");
}

#[test]
fn test_json_cards_sorted_by_passenger() {
    let flights = build_flights(&default_config().flights[1..2]).unwrap();
    let mut out = Vec::new();
    print_boarding_cards(&flights, CardFormat::Json, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let passengers: Vec<String> = text
        .lines()
        .map(|l| {
            let card: serde_json::Value = serde_json::from_str(l).unwrap();
            format!("{} {}", card["passenger"].as_str().unwrap(), card["seat"].as_str().unwrap())
        })
        .collect();
    assert_eq!(
        passengers,
        vec![
            "Ahmed Maher 2A",
            "Andres Heljsberg 22B",
            "Guido Van Rossum 22A",
            "John McCarthy 11A",
            "Leen Hito 1B",
            "Mohammed Elkholy 1A",
        ]
    );
}

#[test]
fn test_bad_manifest_names_flight() {
    let config = Config::from_toml(
        r#"
        [[flights]]
        number = "EK231"
        aircraft = { kind = "airbus319", registration = "EK-YGH" }

        [[flights.allocations]]
        seat = "99Z"
        passenger = "Nobody"
        "#,
    )
    .unwrap();

    match build_flights(&config.flights) {
        Err(err @ CheckinError::Seating { .. }) => {
            assert_eq!(err.to_string(), "Flight EK231: Invalid seat letter \"Z\"");
        }
        other => panic!("expected seating error, got {:?}", other),
    }
}
