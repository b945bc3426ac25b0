//! Validated patient record
//!
//! A `Patient` is only ever produced by validation. `bmi` and `verdict` are
//! computed once at construction from `height` and `weight`; changing either
//! measurement means constructing a new `Patient`.

use serde_json::{json, Map, Value};

use super::errors::{ValidationDetails, ValidationError, ValidationResult};
use super::types::{compute_bmi, Gender, Verdict};

pub(crate) const AGE_EXPECTATION: &str = "integer between 1 and 119";
pub(crate) const MEASURE_EXPECTATION: &str = "number greater than 0";
pub(crate) const TEXT_EXPECTATION: &str = "non-empty string";

/// A validated patient record
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    id: String,
    name: String,
    city: String,
    age: u8,
    gender: Gender,
    height: f64,
    weight: f64,
    bmi: f64,
    verdict: Verdict,
}

impl Patient {
    /// Build a record from typed values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every field that violates its
    /// constraint.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        age: i64,
        gender: Gender,
        height: f64,
        weight: f64,
    ) -> ValidationResult<Self> {
        let id = id.into();
        let name = name.into();
        let city = city.into();

        let mut details = Vec::new();
        collect(&mut details, validate_text("id", &id));
        collect(&mut details, validate_text("name", &name));
        collect(&mut details, validate_text("city", &city));
        let age = collect(&mut details, validate_age(age, &json!(age)));
        collect(&mut details, validate_measure("height", height));
        collect(&mut details, validate_measure("weight", weight));

        match age {
            Some(age) if details.is_empty() => {
                Self::assemble(id, name, city, age, gender, height, weight)
            }
            _ => Err(ValidationError::new(details)),
        }
    }

    /// Validate a stored document. `id` is the collection key; any `id`
    /// inside the document is ignored, as are `bmi`, `verdict` and unknown
    /// keys.
    pub fn from_document(id: &str, document: &Value) -> ValidationResult<Self> {
        Self::parse(check_text_value("id", Some(&Value::String(id.to_string()))), document)
    }

    /// Validate a full create body, which carries its own `id`.
    pub fn from_body(body: &Value) -> ValidationResult<Self> {
        let id = body.as_object().and_then(|obj| obj.get("id"));
        Self::parse(check_text_value("id", id), body)
    }

    fn parse(id: Result<String, ValidationDetails>, document: &Value) -> ValidationResult<Self> {
        let obj = as_object(document)?;
        let mut details = Vec::new();

        let id = collect(&mut details, id);
        let name = collect(&mut details, check_text_value("name", obj.get("name")));
        let city = collect(&mut details, check_text_value("city", obj.get("city")));
        let age = collect(&mut details, check_age_value(obj.get("age")));
        let gender = collect(&mut details, check_gender_value(obj.get("gender")));
        let height = collect(&mut details, check_measure_value("height", obj.get("height")));
        let weight = collect(&mut details, check_measure_value("weight", obj.get("weight")));

        match (id, name, city, age, gender, height, weight) {
            (Some(id), Some(name), Some(city), Some(age), Some(gender), Some(height), Some(weight)) => {
                Self::assemble(id, name, city, age, gender, height, weight)
            }
            _ => Err(ValidationError::new(details)),
        }
    }

    fn assemble(
        id: String,
        name: String,
        city: String,
        age: u8,
        gender: Gender,
        height: f64,
        weight: f64,
    ) -> ValidationResult<Self> {
        let bmi = compute_bmi(height, weight);
        if !bmi.is_finite() {
            return Err(ValidationError::single(ValidationDetails::new(
                "height",
                "a height that yields a finite BMI",
                height.to_string(),
            )));
        }

        Ok(Self {
            id,
            name,
            city,
            age,
            gender,
            height,
            weight,
            bmi,
            verdict: Verdict::from_bmi(bmi),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// The stored shape: every field except `id`, derived fields included.
    pub fn to_document(&self) -> Value {
        json!({
            "name": self.name,
            "city": self.city,
            "age": self.age,
            "gender": self.gender,
            "height": self.height,
            "weight": self.weight,
            "bmi": self.bmi,
            "verdict": self.verdict,
        })
    }
}

fn collect<T>(details: &mut Vec<ValidationDetails>, result: Result<T, ValidationDetails>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(detail) => {
            details.push(detail);
            None
        }
    }
}

pub(crate) fn as_object(document: &Value) -> ValidationResult<&Map<String, Value>> {
    document.as_object().ok_or_else(|| {
        ValidationError::single(ValidationDetails::new(
            "body",
            "JSON object",
            json_type_name(document),
        ))
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), ValidationDetails> {
    if value.is_empty() {
        return Err(ValidationDetails::new(field, TEXT_EXPECTATION, format!("{:?}", value)));
    }
    Ok(())
}

fn validate_age(age: i64, raw: &Value) -> Result<u8, ValidationDetails> {
    if (1..=119).contains(&age) {
        Ok(age as u8)
    } else {
        Err(ValidationDetails::invalid_value("age", AGE_EXPECTATION, raw))
    }
}

fn validate_measure(field: &str, value: f64) -> Result<(), ValidationDetails> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationDetails::new(field, MEASURE_EXPECTATION, value.to_string()))
    }
}

pub(crate) fn check_text_value(field: &str, value: Option<&Value>) -> Result<String, ValidationDetails> {
    match value {
        None => Err(ValidationDetails::missing_field(field)),
        Some(Value::String(s)) => validate_text(field, s).map(|_| s.clone()),
        Some(other) => Err(ValidationDetails::invalid_value(field, TEXT_EXPECTATION, other)),
    }
}

pub(crate) fn check_age_value(value: Option<&Value>) -> Result<u8, ValidationDetails> {
    match value {
        None => Err(ValidationDetails::missing_field("age")),
        Some(raw) => match raw.as_i64() {
            Some(age) => validate_age(age, raw),
            None => Err(ValidationDetails::invalid_value("age", AGE_EXPECTATION, raw)),
        },
    }
}

pub(crate) fn check_gender_value(value: Option<&Value>) -> Result<Gender, ValidationDetails> {
    let expected = format!("one of {:?}", Gender::ALLOWED);
    match value {
        None => Err(ValidationDetails::missing_field("gender")),
        Some(raw) => raw
            .as_str()
            .and_then(|s| s.parse::<Gender>().ok())
            .ok_or_else(|| ValidationDetails::invalid_value("gender", expected, raw)),
    }
}

pub(crate) fn check_measure_value(field: &str, value: Option<&Value>) -> Result<f64, ValidationDetails> {
    match value {
        None => Err(ValidationDetails::missing_field(field)),
        Some(raw) => match raw.as_f64() {
            Some(v) if v.is_finite() && v > 0.0 => Ok(v),
            _ => Err(ValidationDetails::invalid_value(field, MEASURE_EXPECTATION, raw)),
        },
    }
}
