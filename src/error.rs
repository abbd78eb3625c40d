use thiserror::Error;

use crate::{Field, Num};

/// The element set describes something other than a closed orbit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementsError {
    #[error("eccentricity must be in [0, 1) for a closed orbit, got {0}")]
    Eccentricity(Num),
    #[error("semi-major axis must be positive, got {0} km")]
    SemiMajorAxis(Num),
    #[error("{0} must be a finite number")]
    NonFinite(Field),
}

/// Fields a free-form description did not provide usable values for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error(
    "missing or malformed parameters{}{}",
    section("missing", .missing),
    section("malformed", .malformed)
)]
pub struct ParseFailure {
    pub missing: Vec<Field>,
    pub malformed: Vec<Field>,
}

impl ParseFailure {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty()
    }
}

fn section(title: &str, fields: &[Field]) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let names: Vec<_> = fields.iter().map(Field::name).collect();

    format!("; {title}: {}", names.join(", "))
}

/// No complete element set could be obtained.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error(transparent)]
    Incomplete(#[from] ParseFailure),
    #[error("{field} must be a number, got {input:?}")]
    Malformed { field: Field, input: String },
    #[error("input ended before {0} was entered")]
    EndOfInput(Field),
    #[error("text generation failed: {0}")]
    Generator(String),
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}
