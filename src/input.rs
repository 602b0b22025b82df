use std::collections::{BTreeSet, HashMap};

use crate::features::{BinaryAttribute, BoundedValue, Furnishing, NumericAttribute, YesNo};

/// A sparse mapping from feature name to a value already coerced to its numeric domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    values: HashMap<String, f64>,
}

impl RawInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `feature` to `value`, replacing any earlier value.
    pub fn set(&mut self, feature: impl Into<String>, value: f64) {
        self.values.insert(feature.into(), value);
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.values.get(feature).copied()
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.values.contains_key(feature)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub(crate) fn as_map(&self) -> &HashMap<String, f64> {
        &self.values
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The typed state of the input form.
///
/// `Default` matches the widgets' initial state: every yes/no attribute `No`,
/// each slider at its default and `Unfurnished`.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseForm {
    binary: [YesNo; 6],
    numeric: [BoundedValue; 4],
    furnishing: Furnishing,
}

impl Default for HouseForm {
    fn default() -> Self {
        Self {
            binary: [YesNo::No; 6],
            numeric: NumericAttribute::ALL.map(BoundedValue::default_for),
            furnishing: Furnishing::default(),
        }
    }
}

impl HouseForm {
    pub fn set_binary(&mut self, attribute: BinaryAttribute, answer: YesNo) {
        self.binary[binary_index(attribute)] = answer;
    }

    pub fn binary(&self, attribute: BinaryAttribute) -> YesNo {
        self.binary[binary_index(attribute)]
    }

    pub fn set_numeric(&mut self, value: BoundedValue) {
        self.numeric[numeric_index(value.attribute())] = value;
    }

    pub fn numeric(&self, attribute: NumericAttribute) -> BoundedValue {
        self.numeric[numeric_index(attribute)]
    }

    pub fn set_furnishing(&mut self, furnishing: Furnishing) {
        self.furnishing = furnishing;
    }

    pub fn furnishing(&self) -> Furnishing {
        self.furnishing
    }

    /// Builds the raw input mapping, expanding the furnishing categorical.
    ///
    /// Only the selected category's indicator is written. The other indicators of
    /// the group are left for the assembler's default-fill, and the reference
    /// category writes none.
    pub fn to_raw_input(&self) -> RawInput {
        let mut raw = RawInput::new();

        for attr in BinaryAttribute::ALL {
            raw.set(attr.column(), self.binary(attr).indicator());
        }

        for attr in NumericAttribute::ALL {
            raw.set(attr.column(), self.numeric(attr).get() as f64);
        }

        if let Some(column) = self.furnishing.indicator_column() {
            raw.set(column, 1.0);
        }

        raw
    }

    /// Columns this form may legitimately leave absent from its raw input.
    pub fn expected_optional() -> BTreeSet<&'static str> {
        Furnishing::indicator_columns().collect()
    }
}

// Variants are declared in the same order as their `ALL` arrays.
fn binary_index(attribute: BinaryAttribute) -> usize {
    attribute as usize
}

fn numeric_index(attribute: NumericAttribute) -> usize {
    attribute as usize
}
