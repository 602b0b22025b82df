use std::io::{BufRead, Write};

use log::debug;

use crate::{
    features::{BinaryAttribute, BoundedValue, Furnishing, NumericAttribute, YesNo},
    input::HouseForm,
    PredictorError, Result,
};

/// Collects a [`HouseForm`] by prompting on a line-oriented terminal.
///
/// Every value it hands back is already coerced to its domain: out-of-range or
/// off-step slider values are re-prompted, never clamped.
pub struct Collector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts for every field of the form, in display order.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the input ends before the form is complete, or
    /// `Io` if reading or writing fails.
    pub fn collect(&mut self) -> Result<HouseForm> {
        let mut form = HouseForm::default();

        for attr in BinaryAttribute::ALL {
            let answer = self.select(attr.label(), &YesNo::OPTIONS, YesNo::label)?;
            form.set_binary(attr, answer);
        }

        writeln!(self.output, "\nHouse Specifications")?;
        for attr in NumericAttribute::ALL {
            form.set_numeric(self.slider(attr)?);
        }

        writeln!(self.output, "\nFurnishing Status")?;
        let furnishing =
            self.select("Furnishing Status", &Furnishing::OPTIONS, Furnishing::label)?;
        form.set_furnishing(furnishing);

        debug!("collected form {form:?}");
        Ok(form)
    }

    /// Asks for one of `options`; an empty answer picks the first.
    fn select<T: Copy>(
        &mut self,
        label: &str,
        options: &[T],
        name: fn(T) -> &'static str,
    ) -> Result<T> {
        let listing = options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}) {}", i + 1, name(*o)))
            .collect::<Vec<_>>()
            .join("  ");

        loop {
            let prompt = format!("{label} [{listing}] (default {}): ", name(options[0]));
            let line = self.ask(&prompt)?;
            if line.is_empty() {
                return Ok(options[0]);
            }

            match pick_option(&line, options, name) {
                Some(option) => return Ok(option),
                None => writeln!(self.output, "  '{line}' is not one of the options")?,
            }
        }
    }

    /// Asks for a slider value until one in range and on the step grid is given.
    fn slider(&mut self, attr: NumericAttribute) -> Result<BoundedValue> {
        let range = attr.range();
        let prompt = format!(
            "{} [{}-{}, step {}] (default {}): ",
            attr.label(),
            range.min,
            range.max,
            range.step,
            range.default
        );

        loop {
            let line = self.ask(&prompt)?;
            if line.is_empty() {
                return Ok(BoundedValue::default_for(attr));
            }

            match parse_bounded(attr, &line) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "  {e}")?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PredictorError::InvalidInput(
                "input ended before the form was complete".into(),
            ));
        }

        Ok(line.trim().to_string())
    }
}

/// Matches an answer by 1-based option number or by label, ignoring case.
fn pick_option<T: Copy>(answer: &str, options: &[T], name: fn(T) -> &'static str) -> Option<T> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).copied();
    }

    options
        .iter()
        .copied()
        .find(|o| name(*o).eq_ignore_ascii_case(answer))
}

fn parse_bounded(attr: NumericAttribute, raw: &str) -> Result<BoundedValue> {
    let value = raw.trim().parse::<i64>().map_err(|_| {
        PredictorError::InvalidInput(format!("{}: '{raw}' is not an integer", attr.label()))
    })?;
    BoundedValue::new(attr, value)
}

/// Builds a form from `key=value` arguments on top of the widget defaults.
///
/// Keys are the schema column names of the yes/no and numeric attributes plus
/// `furnishing`, whose value is an option label.
///
/// # Errors
/// Returns `InvalidInput` for a malformed argument, an unknown key or an
/// unparseable value, and `OutOfRange` for a slider value it could not reach.
pub fn form_from_args<I, S>(args: I) -> Result<HouseForm>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut form = HouseForm::default();

    for arg in args {
        let arg = arg.as_ref();
        let (key, value) = arg.split_once('=').ok_or_else(|| {
            PredictorError::InvalidInput(format!("expected key=value, got '{arg}'"))
        })?;

        if key == "furnishing" {
            let furnishing = pick_option(value, &Furnishing::OPTIONS, Furnishing::label)
                .ok_or_else(|| {
                    PredictorError::InvalidInput(format!("unknown furnishing status '{value}'"))
                })?;
            form.set_furnishing(furnishing);
        } else if let Some(attr) = BinaryAttribute::from_column(key) {
            form.set_binary(attr, YesNo::parse(value)?);
        } else if let Some(attr) = NumericAttribute::from_column(key) {
            form.set_numeric(parse_bounded(attr, value)?);
        } else {
            return Err(PredictorError::InvalidInput(format!("unknown field '{key}'")));
        }
    }

    Ok(form)
}
