use chrono::NaiveDate;
use fred_api::types::{Observation, ObservationsResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_observations_full() {
    let json = load_fixture("observations.json");
    let resp: ObservationsResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.count, Some(3));
    assert_eq!(resp.sort_order.as_deref(), Some("asc"));
    assert_eq!(resp.observations.len(), 3);

    let first = &resp.observations[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(first.value, "259.127");
    assert_eq!(first.realtime_start.as_deref(), Some("2025-03-01"));
    assert!(!first.is_missing());

    let last = resp.observations.last().unwrap();
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap());
    assert_eq!(last.value, "258.076");
}

#[test]
fn deserialize_observations_empty() {
    let json = load_fixture("observations_empty.json");
    let resp: ObservationsResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.count, Some(0));
    assert!(resp.observations.is_empty());
}

#[test]
fn deserialize_observations_with_missing_value() {
    let json = load_fixture("observations_missing.json");
    let resp: ObservationsResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.observations.len(), 3);
    assert!(resp.observations[1].is_missing());
    assert!(resp.units.is_none());
}

#[test]
fn deserialize_minimal_observation() {
    let json = r#"{"date": "2024-02-01", "value": "310.326"}"#;
    let obs: Observation = serde_json::from_str(json).unwrap();
    assert_eq!(obs.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert!(obs.realtime_start.is_none());
}

#[test]
fn observations_field_is_required() {
    let json = load_fixture("error_bad_api_key.json");
    assert!(serde_json::from_str::<ObservationsResponse>(&json).is_err());
}

#[test]
fn invalid_observation_date_is_rejected() {
    let json = r#"{"date": "2024-13-01", "value": "310.326"}"#;
    assert!(serde_json::from_str::<Observation>(json).is_err());
}
