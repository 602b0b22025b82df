use std::{collections::HashMap, fs, path::Path};

use log::info;
use ndarray::Array1;
use serde::Deserialize;

use crate::{assembler::FeatureVector, schema::FeatureSchema, PredictorError, Result};

/// A trained model that scores assembled feature vectors.
///
/// The only contract with the assembler is the shape and order of the vector.
pub trait Predictor {
    /// Returns the point estimate for `x`.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` or `SchemaMismatch` if `x` is not aligned to the
    /// columns this predictor was trained on, and `NonFinitePrediction` if the
    /// estimate is infinite or NaN.
    fn predict(&self, x: &FeatureVector<'_>) -> Result<f64>;
}

/// On-disk form of a fitted OLS model: its parameters keyed by column name.
#[derive(Debug, Deserialize)]
struct OlsArtifact {
    params: HashMap<String, f64>,
}

/// An ordinary least squares model with coefficients aligned to a schema.
#[derive(Debug, Clone)]
pub struct LinearModel {
    columns: Vec<String>,
    coefficients: Array1<f64>,
}

impl LinearModel {
    /// Creates a model from its coefficients, keyed by column name.
    ///
    /// # Args
    /// * `schema` - The schema the model was fitted on.
    /// * `params` - One coefficient per schema column.
    ///
    /// # Errors
    /// Returns `ModelSchemaMismatch` if a schema column has no coefficient or a
    /// coefficient names a column the schema does not have.
    pub fn from_params(schema: &FeatureSchema, params: &HashMap<String, f64>) -> Result<Self> {
        let mut extra: Vec<&str> = params
            .keys()
            .map(String::as_str)
            .filter(|k| !schema.contains(k))
            .collect();
        extra.sort_unstable();
        if !extra.is_empty() {
            return Err(PredictorError::ModelSchemaMismatch(format!(
                "coefficients without a schema column: {}",
                extra.join(", ")
            )));
        }

        let coefficients = schema
            .columns()
            .iter()
            .map(|c| {
                params.get(c).copied().ok_or_else(|| {
                    PredictorError::ModelSchemaMismatch(format!("no coefficient for column '{c}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            columns: schema.columns().to_vec(),
            coefficients: Array1::from_vec(coefficients),
        })
    }

    /// Loads a model artifact and aligns it to `schema`.
    ///
    /// # Errors
    /// Returns `MissingArtifact` if the file does not exist, `Io`/`Json` if it cannot
    /// be read or parsed, and `ModelSchemaMismatch` as [`LinearModel::from_params`] does.
    pub fn load(path: impl AsRef<Path>, schema: &FeatureSchema) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PredictorError::MissingArtifact {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let artifact: OlsArtifact = serde_json::from_str(&content)?;
        let model = Self::from_params(schema, &artifact.params)?;

        info!(
            "loaded linear model with {} coefficient(s) from {}",
            model.coefficients.len(),
            path.display()
        );
        Ok(model)
    }

    /// Checks that `x` has this model's columns, in this model's order.
    fn check_alignment(&self, x: &FeatureVector<'_>) -> Result<()> {
        let actual = x.columns();
        if actual.len() != self.columns.len() || x.len() != self.coefficients.len() {
            return Err(PredictorError::ShapeMismatch {
                got: x.len(),
                expected: self.coefficients.len(),
            });
        }

        if let Some((position, (expected, got))) = self
            .columns
            .iter()
            .zip(actual)
            .enumerate()
            .find(|(_, (e, g))| e != g)
        {
            return Err(PredictorError::SchemaMismatch {
                position,
                expected: expected.clone(),
                got: got.clone(),
            });
        }

        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, x: &FeatureVector<'_>) -> Result<f64> {
        self.check_alignment(x)?;

        let estimate = self.coefficients.dot(&x.values());
        if !estimate.is_finite() {
            return Err(PredictorError::NonFinitePrediction(estimate));
        }
        Ok(estimate)
    }
}
