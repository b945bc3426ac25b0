//! Record Model Tests
//!
//! - bmi = round(weight / height², 2)
//! - verdict thresholds at 18.5, 25 and 30, evaluated on the rounded bmi
//! - derived fields never drift from height and weight

use patientdb::patient::{compute_bmi, Gender, Patient, PatientUpdate, Verdict};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn patient_with(height: f64, weight: f64) -> Patient {
    Patient::new("P100", "Meera", "Pune", 33, Gender::Female, height, weight).unwrap()
}

fn stored_document() -> Value {
    json!({
        "name": "Meera", "city": "Pune", "age": 33, "gender": "female",
        "height": 2.0, "weight": 74.0, "bmi": 18.5, "verdict": "Normal weight"
    })
}

// =============================================================================
// BMI and Verdict
// =============================================================================

#[test]
fn test_bmi_matches_rounded_formula() {
    for (height, weight) in [(1.75, 70.0), (1.6, 45.0), (1.82, 101.3), (1.5, 60.0)] {
        let patient = patient_with(height, weight);
        let expected = (weight / (height * height) * 100.0).round() / 100.0;
        assert_eq!(patient.bmi(), expected);
        assert_eq!(patient.bmi(), compute_bmi(height, weight));
    }
}

#[test]
fn test_verdict_boundaries_on_real_measurements() {
    // height 2.0 makes bmi = weight / 4
    let cases = [
        (73.96, 18.49, Verdict::Underweight),
        (74.0, 18.5, Verdict::NormalWeight),
        (99.96, 24.99, Verdict::NormalWeight),
        (100.0, 25.0, Verdict::Overweight),
        (119.96, 29.99, Verdict::Overweight),
        (120.0, 30.0, Verdict::Obesity),
    ];

    for (weight, bmi, verdict) in cases {
        let patient = patient_with(2.0, weight);
        assert_eq!(patient.bmi(), bmi, "weight {}", weight);
        assert_eq!(patient.verdict(), verdict, "weight {}", weight);
    }
}

#[test]
fn test_stored_document_shape() {
    let doc = patient_with(1.75, 70.0).to_document();
    let mut keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["age", "bmi", "city", "gender", "height", "name", "verdict", "weight"]
    );
    assert_eq!(doc["verdict"], "Normal weight");
}

// =============================================================================
// Partial Update Merge
// =============================================================================

#[test]
fn test_weight_only_update_recomputes_from_merged_values() {
    let update = PatientUpdate::from_document(&json!({"weight": 120.0})).unwrap();
    let merged = update.apply(&stored_document());
    let patient = Patient::from_document("P100", &merged).unwrap();

    assert_eq!(patient.height(), 2.0);
    assert_eq!(patient.weight(), 120.0);
    assert_eq!(patient.bmi(), 30.0);
    assert_eq!(patient.verdict(), Verdict::Obesity);
    assert_eq!(patient.name(), "Meera");
    assert_eq!(patient.age(), 33);
}

#[test]
fn test_height_only_update_recomputes() {
    let update = PatientUpdate::from_document(&json!({"height": 1.0})).unwrap();
    let patient = Patient::from_document("P100", &update.apply(&stored_document())).unwrap();
    assert_eq!(patient.bmi(), 74.0);
    assert_eq!(patient.verdict(), Verdict::Obesity);
}

#[test]
fn test_legacy_gender_spelling_is_normalised() {
    let mut doc = stored_document();
    doc["gender"] = json!("others");
    let patient = Patient::from_document("P100", &doc).unwrap();
    assert_eq!(patient.gender(), Gender::Other);
    assert_eq!(patient.to_document()["gender"], "other");
}

#[test]
fn test_validation_is_deterministic() {
    let mut doc = stored_document();
    doc["age"] = json!(0);
    doc["height"] = json!(-1.0);

    for _ in 0..50 {
        let err = Patient::from_document("P100", &doc).unwrap_err();
        assert_eq!(err.fields(), vec!["age", "height"]);
    }
}

// =============================================================================
// Text Fields
// =============================================================================

#[test]
fn test_whitespace_text_is_a_valid_value() {
    let body = json!({
        "id": "P1", "name": " ", "city": "Pune", "age": 30,
        "gender": "male", "height": 1.7, "weight": 60.0
    });
    let patient = Patient::from_body(&body).unwrap();
    assert_eq!(patient.name(), " ");
    assert_eq!(patient.to_document()["name"], " ");

    let update = PatientUpdate::from_document(&json!({"city": "  "})).unwrap();
    let merged = Patient::from_document("P1", &update.apply(&patient.to_document())).unwrap();
    assert_eq!(merged.city(), "  ");
}

#[test]
fn test_empty_text_is_rejected() {
    let mut doc = stored_document();
    doc["name"] = json!("");
    let err = Patient::from_document("P100", &doc).unwrap_err();
    assert_eq!(err.fields(), vec!["name"]);

    assert!(PatientUpdate::from_document(&json!({"city": ""})).is_err());
}
