use std::collections::{BTreeSet, HashMap};

use log::{debug, warn};
use ndarray::{Array1, ArrayView1};

use crate::{
    input::RawInput,
    schema::{FeatureSchema, INTERCEPT_COLUMN},
    PredictorError, Result,
};

/// A dense vector with exactly one value per schema column, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector<'s> {
    schema: &'s FeatureSchema,
    values: Array1<f64>,
}

impl<'s> FeatureVector<'s> {
    pub fn columns(&self) -> &'s [String] {
        self.schema.columns()
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value assembled for `column`, if it is a schema column.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.schema.position(column).map(|i| self.values[i])
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

/// Aligns `raw` to `schema`, default-filling every column the input does not populate.
///
/// The intercept column, when the schema declares one, is always 1 regardless of
/// `raw`. Raw features without a schema column are ignored.
///
/// # Errors
/// Returns `MissingColumn` if a schema column is still absent after default-fill.
pub fn assemble<'s>(raw: &RawInput, schema: &'s FeatureSchema) -> Result<FeatureVector<'s>> {
    let mut working = working_mapping(raw, schema);

    for column in schema.columns() {
        if !working.contains_key(column.as_str()) {
            debug!("default-filling column '{column}' with 0");
            working.insert(column.as_str(), 0.0);
        }
    }

    read_in_order(&working, schema)
}

/// Like [`assemble`], but only columns in `expected_optional` may be default-filled.
///
/// # Errors
/// Returns `UnknownFeature` if `raw` holds a feature the schema does not have,
/// `UnexpectedAbsentColumn` if a schema column is absent from `raw` without being
/// the intercept or expected-optional, and `MissingColumn` as [`assemble`] does.
pub fn assemble_strict<'s>(
    raw: &RawInput,
    schema: &'s FeatureSchema,
    expected_optional: &BTreeSet<&str>,
) -> Result<FeatureVector<'s>> {
    let mut unknown: Vec<&str> = raw.features().filter(|f| !schema.contains(f)).collect();
    unknown.sort_unstable();
    if let Some(feature) = unknown.first() {
        return Err(PredictorError::UnknownFeature {
            feature: feature.to_string(),
        });
    }

    let mut working = working_mapping(raw, schema);

    for column in schema.columns() {
        if working.contains_key(column.as_str()) {
            continue;
        }

        if !expected_optional.contains(column.as_str()) {
            return Err(PredictorError::UnexpectedAbsentColumn {
                column: column.clone(),
            });
        }

        debug!("expected-optional column '{column}' default-filled with 0");
        working.insert(column.as_str(), 0.0);
    }

    read_in_order(&working, schema)
}

/// Copies the raw values that belong to the schema and applies the intercept.
fn working_mapping<'a>(raw: &'a RawInput, schema: &FeatureSchema) -> HashMap<&'a str, f64> {
    let mut working: HashMap<&str, f64> = raw
        .as_map()
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();

    if schema.has_intercept() {
        if let Some(v) = working.get(INTERCEPT_COLUMN).filter(|v| **v != 1.0) {
            warn!("overriding raw intercept value {v} with 1");
        }
        working.insert(INTERCEPT_COLUMN, 1.0);
    }

    working
}

fn read_in_order<'s>(
    working: &HashMap<&str, f64>,
    schema: &'s FeatureSchema,
) -> Result<FeatureVector<'s>> {
    let values = schema
        .columns()
        .iter()
        .map(|column| {
            working
                .get(column.as_str())
                .copied()
                .ok_or_else(|| PredictorError::MissingColumn {
                    column: column.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("assembled vector {values:?}");

    Ok(FeatureVector {
        schema,
        values: Array1::from_vec(values),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(columns: &[&str]) -> FeatureSchema {
        FeatureSchema::new(columns.iter().copied()).unwrap()
    }

    #[test]
    fn missing_columns_are_zero() {
        let schema = schema(&["a", "b", "c"]);
        let raw: RawInput = [("b", 7.0)].into_iter().collect();

        let v = assemble(&raw, &schema).unwrap();
        assert_eq!(v.to_vec(), [0.0, 7.0, 0.0]);
    }

    #[test]
    fn intercept_is_one_regardless_of_input() {
        let schema = schema(&["const", "a"]);
        let raw: RawInput = [("const", 5.0), ("a", 2.0)].into_iter().collect();

        let v = assemble(&raw, &schema).unwrap();
        assert_eq!(v.get("const"), Some(1.0));
        assert_eq!(v.get("a"), Some(2.0));
    }

    #[test]
    fn no_intercept_without_const_column() {
        let schema = schema(&["a"]);
        let raw = RawInput::new();

        let v = assemble(&raw, &schema).unwrap();
        assert_eq!(v.to_vec(), [0.0]);
        assert_eq!(v.get("const"), None);
    }

    #[test]
    fn extra_raw_features_are_dropped() {
        let schema = schema(&["a"]);
        let raw: RawInput = [("a", 1.0), ("z", 9.0)].into_iter().collect();

        let v = assemble(&raw, &schema).unwrap();
        assert_eq!(v.len(), 1);
        assert_eq!(v.to_vec(), [1.0]);
    }

    #[test]
    fn strict_fills_expected_optional() {
        let schema = schema(&["a", "dummy", "const"]);
        let raw: RawInput = [("a", 3.0)].into_iter().collect();
        let optional = BTreeSet::from(["dummy"]);

        let v = assemble_strict(&raw, &schema, &optional).unwrap();
        assert_eq!(v.to_vec(), [3.0, 0.0, 1.0]);
    }

    #[test]
    fn strict_rejects_unexpected_absent() {
        let schema = schema(&["a", "b"]);
        let raw: RawInput = [("a", 3.0)].into_iter().collect();

        let err = assemble_strict(&raw, &schema, &BTreeSet::new()).unwrap_err();
        match err {
            PredictorError::UnexpectedAbsentColumn { column } => assert_eq!(column, "b"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_unknown_feature() {
        let schema = schema(&["a"]);
        let raw: RawInput = [("a", 3.0), ("ab", 1.0)].into_iter().collect();

        let err = assemble_strict(&raw, &schema, &BTreeSet::new()).unwrap_err();
        match err {
            PredictorError::UnknownFeature { feature } => assert_eq!(feature, "ab"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn strict_accepts_raw_intercept() {
        let schema = schema(&["const", "a"]);
        let raw: RawInput = [("const", 1.0), ("a", 3.0)].into_iter().collect();

        let v = assemble_strict(&raw, &schema, &BTreeSet::new()).unwrap();
        assert_eq!(v.to_vec(), [1.0, 3.0]);
    }
}
