//! Terminal dialogue that runs before the window opens.

use std::io::{BufRead, Write};

use kepler_orbit::acquisition::{
    acquire_from_generator, ask, read_manual, TextGenerator,
};
use kepler_orbit::{AcquisitionError, Field, RawElements};

use crate::ViewerError;

/// Stands in for a text generation service: the user pastes a description
/// obtained elsewhere, terminated by an empty line.
pub struct PastedResponse<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> PastedResponse<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> TextGenerator for PastedResponse<'_, R, W> {
    fn generate(&mut self, prompt: &str) -> Result<String, AcquisitionError> {
        writeln!(self.output, "Request:\n{prompt}\n")?;
        writeln!(
            self.output,
            "Paste the response and finish with an empty line:"
        )?;
        self.output.flush()?;

        let mut text = String::new();
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 || line.trim().is_empty() {
                break;
            }
            text.push_str(&line);
        }

        if text.is_empty() {
            return Err(AcquisitionError::Generator("empty response".into()));
        }

        Ok(text)
    }
}

/// Asks how the elements should be obtained and collects them.
pub fn acquire<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<RawElements, ViewerError> {
    let choice = ask(
        input,
        output,
        "Please type 'a' for manual input and 'b' for AI input: ",
    )?
    .unwrap_or_default();

    let raw = match choice.to_ascii_lowercase().as_str() {
        "a" => read_manual(input, output)?,
        "b" => {
            let satellite = ask(input, output, "Satellite name: ")?
                .filter(|name| !name.is_empty())
                .ok_or(AcquisitionError::Generator(
                    "no satellite name given".into(),
                ))?;

            let raw = {
                let mut generator = PastedResponse::new(input, output);
                acquire_from_generator(&mut generator, &satellite)?
            };

            writeln!(output, "Retrieved Orbital Parameters")
                .map_err(AcquisitionError::from)?;
            for field in Field::ALL {
                writeln!(output, "  {field}: {}", raw.get(field))
                    .map_err(AcquisitionError::from)?;
            }

            raw
        }
        _ => return Err(ViewerError::InvalidChoice(choice)),
    };

    Ok(raw)
}
