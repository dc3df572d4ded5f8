use chrono::{NaiveDate, NaiveDateTime};
use neodb_model::{
    cd_to_datetime, datetime_to_str, ApproachEvent, Body, BodyId, Designation, EventId,
    ValidationError,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn designation_is_canonical_uppercase() {
    let lower = Designation::parse(" 2015 ab ").unwrap();
    let upper = Designation::parse("2015 AB").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.as_str(), "2015 AB");
    assert_eq!(lower.to_string(), "2015 AB");
}

#[test]
fn designation_rejects_blank_input() {
    assert_eq!(
        Designation::parse("   ").unwrap_err(),
        ValidationError::Empty {
            field: "designation"
        }
    );
    assert!(serde_json::from_str::<Designation>(r#""""#).is_err());
}

#[test]
fn designation_serializes_transparently() {
    let designation: Designation = serde_json::from_str(r#""1036 ganymed""#).unwrap();
    assert_eq!(
        serde_json::to_string(&designation).unwrap(),
        r#""1036 GANYMED""#
    );
}

#[test]
fn body_blank_name_is_absent() {
    let body = Body::new(Designation::parse("2015 AB").unwrap(), Some("  ".into()), f64::NAN, false);
    assert_eq!(body.name, None);
    assert_eq!(body.fullname(), "2015 AB");
    assert_eq!(body.diameter(), None);
    assert!(body.events().is_empty());
}

#[test]
fn body_fullname_includes_name() {
    let body = Body::new(Designation::parse("433").unwrap(), Some("Eros".into()), 16.84, false);
    assert_eq!(body.fullname(), "433 (Eros)");
    assert_eq!(body.diameter(), Some(16.84));
}

#[test]
fn body_display_reports_hazard_and_diameter() {
    let known = Body::new(Designation::parse("433").unwrap(), Some("Eros".into()), 16.84, false);
    assert_eq!(
        known.to_string(),
        "NEO 433 (Eros) has a diameter of 16.840 km and is not potentially hazardous"
    );

    let unknown = Body::new(Designation::parse("2020 FK").unwrap(), None, f64::NAN, true);
    assert_eq!(
        unknown.to_string(),
        "NEO 2020 FK has an unknown diameter and is potentially hazardous"
    );
}

#[test]
fn body_serializes_to_golden_json() {
    let body = Body::new(Designation::parse("433").unwrap(), Some("Eros".into()), 16.84, false);
    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"designation":"433","name":"Eros","diameter_km":16.84,"potentially_hazardous":false}"#
    );

    let unnamed = Body::new(Designation::parse("2015 AB").unwrap(), None, f64::NAN, true);
    assert_eq!(
        serde_json::to_string(&unnamed).unwrap(),
        r#"{"designation":"2015 AB","name":"","diameter_km":null,"potentially_hazardous":true}"#
    );
}

#[test]
fn body_links_accumulate_in_order() {
    let mut body = Body::new(Designation::parse("433").unwrap(), None, 16.84, false);
    body.attach_event(EventId::new(3));
    body.attach_event(EventId::new(7));
    assert_eq!(body.events(), &[EventId::new(3), EventId::new(7)]);
    body.clear_events();
    assert!(body.events().is_empty());
}

#[test]
fn approach_starts_unlinked() {
    let mut event = ApproachEvent::new(
        Designation::parse("433").unwrap(),
        at(2020, 1, 1, 0, 0),
        0.5,
        10.0,
    );
    assert_eq!(event.body(), None);
    event.set_body(Some(BodyId::new(0)));
    assert_eq!(event.body(), Some(BodyId::new(0)));
    assert_eq!(event.time_str(), "2020-01-01 00:00");
}

#[test]
fn cd_dates_parse_and_format() {
    assert_eq!(cd_to_datetime("2020-Jan-01 00:00").unwrap(), at(2020, 1, 1, 0, 0));
    assert_eq!(cd_to_datetime("1900-Dec-31 23:59").unwrap(), at(1900, 12, 31, 23, 59));
    assert_eq!(datetime_to_str(&at(2025, 11, 30, 2, 52)), "2025-11-30 02:52");
}

#[test]
fn cd_dates_reject_other_formats() {
    assert!(matches!(
        cd_to_datetime("2020-01-01 00:00"),
        Err(ValidationError::Timestamp { .. })
    ));
    assert!(cd_to_datetime("").is_err());
}
