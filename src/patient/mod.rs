//! Patient record model
//!
//! Maps raw measurements to a validated record whose derived fields
//! (`bmi`, `verdict`) are computed at construction and never stored
//! independently.
//!
//! # Record shape
//!
//! | field   | constraint                    |
//! |---------|-------------------------------|
//! | id      | non-empty string, storage key |
//! | name    | non-empty string              |
//! | city    | non-empty string              |
//! | age     | integer, 1..=119              |
//! | gender  | male, female, other           |
//! | height  | number > 0 (meters)           |
//! | weight  | number > 0 (kilograms)        |
//! | bmi     | derived                       |
//! | verdict | derived                       |

mod errors;
mod record;
mod types;
mod update;

pub use errors::{ValidationDetails, ValidationError, ValidationResult};
pub use record::Patient;
pub use types::{compute_bmi, Gender, Verdict};
pub use update::PatientUpdate;
