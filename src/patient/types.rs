//! Enumerated record values: gender and BMI verdict

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[serde(alias = "others")]
    Other,
}

impl Gender {
    pub const ALLOWED: [&'static str; 3] = ["male", "female", "other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    /// `others` is the spelling older stores were written with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" | "others" => Ok(Gender::Other),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

impl Verdict {
    /// Classify an already-rounded BMI. First match wins:
    /// `< 18.5`, `< 25`, `< 30`, otherwise obesity.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Verdict::Underweight
        } else if bmi < 25.0 {
            Verdict::NormalWeight
        } else if bmi < 30.0 {
            Verdict::Overweight
        } else {
            Verdict::Obesity
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Underweight => "Underweight",
            Verdict::NormalWeight => "Normal weight",
            Verdict::Overweight => "Overweight",
            Verdict::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `weight / height²`, rounded to two decimals, half away from zero.
pub fn compute_bmi(height: f64, weight: f64) -> f64 {
    let raw = weight / (height * height);
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("other".parse::<Gender>(), Ok(Gender::Other));
        assert_eq!("others".parse::<Gender>(), Ok(Gender::Other));
        assert!("Male".parse::<Gender>().is_err());
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Other).unwrap(), "\"other\"");
        let parsed: Gender = serde_json::from_str("\"others\"").unwrap();
        assert_eq!(parsed, Gender::Other);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(Verdict::from_bmi(18.49), Verdict::Underweight);
        assert_eq!(Verdict::from_bmi(18.5), Verdict::NormalWeight);
        assert_eq!(Verdict::from_bmi(24.99), Verdict::NormalWeight);
        assert_eq!(Verdict::from_bmi(25.0), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(29.99), Verdict::Overweight);
        assert_eq!(Verdict::from_bmi(30.0), Verdict::Obesity);
    }

    #[test]
    fn test_verdict_serialized_name() {
        assert_eq!(
            serde_json::to_string(&Verdict::NormalWeight).unwrap(),
            "\"Normal weight\""
        );
    }

    #[test]
    fn test_compute_bmi_rounds_to_two_decimals() {
        // 70 / 1.75² = 22.857...
        assert_eq!(compute_bmi(1.75, 70.0), 22.86);
        // 50 / 1.8² = 15.432...
        assert_eq!(compute_bmi(1.8, 50.0), 15.43);
        assert_eq!(compute_bmi(2.0, 100.0), 25.0);
    }
}
