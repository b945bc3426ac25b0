//! Partial update payloads
//!
//! Every mutable field is optional. An absent field (or an explicit JSON
//! `null`) leaves the stored value unchanged. The merged document must be
//! revalidated as a whole with `Patient::from_document`.

use serde_json::{Map, Value};

use super::errors::{ValidationDetails, ValidationError, ValidationResult};
use super::record::{
    as_object, check_age_value, check_gender_value, check_measure_value, check_text_value,
};
use super::types::Gender;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub city: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

impl PatientUpdate {
    /// Parse a partial payload. Present fields are checked against the same
    /// constraints as a full record; unknown keys are ignored.
    pub fn from_document(document: &Value) -> ValidationResult<Self> {
        let obj = as_object(document)?;
        let mut details = Vec::new();
        let update = PatientUpdate {
            name: take(obj, "name", &mut details, |v| check_text_value("name", v)),
            city: take(obj, "city", &mut details, |v| check_text_value("city", v)),
            age: take(obj, "age", &mut details, check_age_value),
            gender: take(obj, "gender", &mut details, check_gender_value),
            height: take(obj, "height", &mut details, |v| check_measure_value("height", v)),
            weight: take(obj, "weight", &mut details, |v| check_measure_value("weight", v)),
        };

        if details.is_empty() {
            Ok(update)
        } else {
            Err(ValidationError::new(details))
        }
    }

    /// Overlay the present fields onto a stored document.
    ///
    /// A stored value that is not an object is treated as empty, so the
    /// merged result fails revalidation rather than being silently kept.
    pub fn apply(&self, stored: &Value) -> Value {
        let mut merged = stored.as_object().cloned().unwrap_or_default();

        if let Some(name) = &self.name {
            merged.insert("name".into(), Value::from(name.as_str()));
        }
        if let Some(city) = &self.city {
            merged.insert("city".into(), Value::from(city.as_str()));
        }
        if let Some(age) = self.age {
            merged.insert("age".into(), Value::from(age));
        }
        if let Some(gender) = self.gender {
            merged.insert("gender".into(), Value::from(gender.as_str()));
        }
        if let Some(height) = self.height {
            merged.insert("height".into(), Value::from(height));
        }
        if let Some(weight) = self.weight {
            merged.insert("weight".into(), Value::from(weight));
        }

        Value::Object(merged)
    }
}

fn take<T>(
    obj: &Map<String, Value>,
    key: &str,
    details: &mut Vec<ValidationDetails>,
    check: impl FnOnce(Option<&Value>) -> Result<T, ValidationDetails>,
) -> Option<T> {
    let raw = obj.get(key).filter(|v| !v.is_null())?;
    match check(Some(raw)) {
        Ok(value) => Some(value),
        Err(detail) => {
            details.push(detail);
            None
        }
    }
}
