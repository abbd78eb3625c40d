//! Obtaining an element set from outside the simulation.
//!
//! Two sources exist: numbers typed in one by one ([`read_manual`]) and a
//! free-form description produced by a [`TextGenerator`], scanned by
//! [`parse_description`]. Both hand back [`RawElements`] with angles in
//! radians; validation happens in [`crate::OrbitalElements::new`].

use std::io::{BufRead, Write};

use crate::error::{AcquisitionError, ParseFailure};
use crate::{Field, Num, RawElements};

/// Produces free-form text describing an orbit.
///
/// Implementations own whatever client or session they need; callers pass
/// them in explicitly.
pub trait TextGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String, AcquisitionError>;
}

/// Request sent to a [`TextGenerator`] for a named satellite.
pub fn satellite_prompt(satellite: &str) -> String {
    format!(
        "Provide the 'MOST RECENT' and 'KNOWN' orbital parameters (eccentricity, \
         semi-major axis in km, inclination in degrees, longitude of the ascending \
         node in degrees, and argument of periapsis in degrees) for the satellite \
         named {satellite}."
    )
}

/// Asks `generator` about `satellite` and extracts the elements from its answer.
pub fn acquire_from_generator<G: TextGenerator + ?Sized>(
    generator: &mut G,
    satellite: &str,
) -> Result<RawElements, AcquisitionError> {
    let text = generator.generate(&satellite_prompt(satellite))?;
    log::debug!("Generated description: {text}");

    parse_description(&text).map_err(|failure| {
        log::warn!("Could not extract elements for {satellite}: {failure}");
        AcquisitionError::Incomplete(failure)
    })
}

/// Prints `prompt` and reads one trimmed line.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, AcquisitionError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_owned()))
}

/// Prompts for every element in turn. Angles are entered in degrees.
pub fn read_manual<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<RawElements, AcquisitionError> {
    let mut number = |field, prompt| -> Result<Num, AcquisitionError> {
        let line = ask(&mut *input, &mut *output, prompt)?
            .ok_or(AcquisitionError::EndOfInput(field))?;

        line.parse::<Num>()
            .map_err(|_| AcquisitionError::Malformed { field, input: line })
    };

    let eccentricity =
        number(Field::Eccentricity, "Eccentricity (as a decimal): ")?;
    let semi_major_axis =
        number(Field::SemiMajorAxis, "Semi-Major Axis (in km): ")?;
    let inclination =
        number(Field::Inclination, "Inclination (in degrees): ")?;
    let ascending_node = number(
        Field::AscendingNode,
        "Longitude of the Ascending Node (in degrees): ",
    )?;
    let argument_of_periapsis = number(
        Field::ArgumentOfPeriapsis,
        "Argument of Periapsis (in degrees): ",
    )?;

    Ok(RawElements {
        eccentricity,
        semi_major_axis,
        inclination: inclination.to_radians(),
        ascending_node: ascending_node.to_radians(),
        argument_of_periapsis: argument_of_periapsis.to_radians(),
    })
}

enum Scan {
    Missing,
    Malformed,
    Found(Num),
}

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Eccentricity => "eccentricity:",
            Field::SemiMajorAxis => "semi-major axis:",
            Field::Inclination => "inclination:",
            Field::AscendingNode => "longitude of the ascending node:",
            Field::ArgumentOfPeriapsis => "argument of periapsis:",
        }
    }
}

/// Extracts the five elements from prose such as
///
/// ```text
/// Eccentricity: 0.0001
/// Semi-major axis: ~6,780 km
/// Inclination: 51.64 degrees
/// ```
///
/// Labels are matched case-insensitively. The semi-major axis must carry a
/// `km` unit and may use thousands separators; every value except the
/// eccentricity may be prefixed with `~`. Angles are read as degrees.
pub fn parse_description(text: &str) -> Result<RawElements, ParseFailure> {
    let lower = text.to_ascii_lowercase();
    let mut failure = ParseFailure::default();
    let mut values = [0.0; 5];

    for (slot, field) in values.iter_mut().zip(Field::ALL) {
        match scan(&lower, field) {
            Scan::Found(value) => *slot = value,
            Scan::Missing => failure.missing.push(field),
            Scan::Malformed => failure.malformed.push(field),
        }
    }

    if !failure.is_empty() {
        return Err(failure);
    }

    let [eccentricity, semi_major_axis, inclination, node, periapsis] = values;

    Ok(RawElements {
        eccentricity,
        semi_major_axis,
        inclination: inclination.to_radians(),
        ascending_node: node.to_radians(),
        argument_of_periapsis: periapsis.to_radians(),
    })
}

/// Looks at every occurrence of the field's label and takes the first one
/// followed by a value.
fn scan(lower: &str, field: Field) -> Scan {
    let label = field.label();
    let mut result = Scan::Missing;

    for (start, _) in lower.match_indices(label) {
        match scan_value(&lower[start + label.len()..], field) {
            Scan::Missing => continue,
            Scan::Malformed => result = Scan::Malformed,
            found => return found,
        }
    }

    result
}

fn scan_value(rest: &str, field: Field) -> Scan {
    let mut rest = rest.trim_start();

    if field != Field::Eccentricity {
        rest = rest.strip_prefix('~').unwrap_or(rest);
    }

    let separators = field == Field::SemiMajorAxis;
    let numeric =
        |c: char| c.is_ascii_digit() || c == '.' || (separators && c == ',');
    let end = rest.find(|c| !numeric(c)).unwrap_or(rest.len());

    let (number, tail) = rest.split_at(end);
    // A sentence may end right after the number
    let number = number.strip_suffix('.').unwrap_or(number);

    if !number.chars().any(|c| c.is_ascii_digit()) {
        return Scan::Missing;
    }

    if field == Field::SemiMajorAxis && !tail.trim_start().starts_with("km") {
        return Scan::Missing;
    }

    match number.replace(',', "").parse::<Num>() {
        Ok(value) => Scan::Found(value),
        Err(_) => Scan::Malformed,
    }
}
