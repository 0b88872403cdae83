use serde_json::json;

use super::sample_payload;
use crate::errors::ModelError;
use crate::flight::{validate_payload, validate_rating, validate_text, FlightPayload, Model};

#[test]
fn rating_bounds() {
    for r in 1..=5 {
        assert!(validate_rating(r).is_ok(), "rating {r} should pass");
    }
    let high = validate_rating(6).unwrap_err();
    assert_eq!(high.detail(), "rating must be ≤ 5");
    let low = validate_rating(0).unwrap_err();
    assert_eq!(low.detail(), "rating must be ≥ 1");
    assert!(validate_rating(-3).is_err());
}

#[test]
fn text_fields_required_and_bounded() {
    assert!(validate_text("origen", "MDE").is_ok());
    assert!(validate_text("origen", &"x".repeat(80)).is_ok());

    match validate_text("origen", "   ") {
        Err(ModelError::Validation(m)) => assert_eq!(m, "origen is required"),
        other => panic!("unexpected: {:?}", other),
    }
    match validate_text("destino", &"x".repeat(81)) {
        Err(ModelError::Validation(m)) => assert_eq!(m, "destino must be at most 80 characters"),
        other => panic!("unexpected: {:?}", other),
    }
    // characters, not bytes
    assert!(validate_text("destino", &"ñ".repeat(80)).is_ok());
}

#[test]
fn payload_reports_rating_first() {
    let mut p = sample_payload();
    assert!(validate_payload(&p).is_ok());

    p.rating = 9;
    p.origin = String::new();
    assert_eq!(validate_payload(&p).unwrap_err().detail(), "rating must be ≤ 5");

    p.rating = 3;
    assert_eq!(validate_payload(&p).unwrap_err().detail(), "origen is required");
}

#[test]
fn payload_uses_public_field_names() {
    let p: FlightPayload = serde_json::from_value(json!({
        "nombreAvion": "Boeing737",
        "numeroVuelo": "AB123",
        "origen": "MDE",
        "destino": "BOG",
        "capacidad": 180,
        "rating": 5,
        "planvuelo": 42
    }))
    .unwrap();
    assert_eq!(p, sample_payload());

    // a missing required field is a decode error
    let missing = serde_json::from_value::<FlightPayload>(json!({"nombreAvion": "A320"}));
    assert!(missing.is_err());
}

#[test]
fn model_serializes_flat_object() {
    let m = Model {
        id: 7,
        aircraft_name: "A320".into(),
        flight_number: "AV9".into(),
        origin: "BOG".into(),
        destination: "CTG".into(),
        capacity: 150,
        rating: 4,
        flight_plan_id: 9_000_000_000,
        completed: Some(true),
    };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(
        v,
        json!({
            "idFlight": 7,
            "nombreAvion": "A320",
            "numeroVuelo": "AV9",
            "origen": "BOG",
            "destino": "CTG",
            "capacidad": 150,
            "rating": 4,
            "planvuelo": 9_000_000_000i64,
            "cumplido": true
        })
    );

    let back = FlightPayload::from(m);
    assert_eq!(back.id, Some(7));
}

#[test]
fn model_errors_are_validation_only() {
    let e = validate_rating(9).unwrap_err();
    assert_eq!(e.to_string(), "validation error: rating must be ≤ 5");
    let ModelError::Validation(m) = &e;
    assert_eq!(m, e.detail());
}
