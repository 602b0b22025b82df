use std::{collections::HashSet, fs, path::Path};

use log::info;

use crate::{PredictorError, Result};

/// Name of the intercept column added by the training pipeline.
pub const INTERCEPT_COLUMN: &str = "const";

/// The ordered list of columns a trained model consumes.
///
/// Fixed at training time and immutable once loaded. Both the presence and the
/// left-to-right order of every column are part of the contract with the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Creates a new schema from its ordered column names.
    ///
    /// # Args
    /// * `columns` - The column names in model order.
    ///
    /// # Errors
    /// Returns `InvalidSchema` if `columns` is empty or contains duplicates.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Result<Self> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        if columns.is_empty() {
            return Err(PredictorError::InvalidSchema(
                "schema must contain at least one column".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        if let Some(dup) = columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(PredictorError::InvalidSchema(format!(
                "duplicate column '{dup}'"
            )));
        }

        Ok(Self { columns })
    }

    /// Loads a schema from a JSON array of column names.
    ///
    /// # Errors
    /// Returns `MissingArtifact` if the file does not exist, `Io`/`Json` if it cannot be
    /// read or parsed, and `InvalidSchema` if the columns break an invariant.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PredictorError::MissingArtifact {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let columns: Vec<String> = serde_json::from_str(&content)?;
        let schema = Self::new(columns)?;

        info!(
            "loaded schema with {} column(s) from {}",
            schema.len(),
            path.display()
        );
        Ok(schema)
    }

    /// Returns the columns in model order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether the schema declares the regression's intercept column.
    pub fn has_intercept(&self) -> bool {
        self.contains(INTERCEPT_COLUMN)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Returns the position of `column` in the schema, if present.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}
