use std::{
    env,
    path::{Path, PathBuf},
};

use log::info;

use crate::{model::LinearModel, schema::FeatureSchema, PredictorError, Result};

const DEFAULT_MODEL_PATH: &str = "ols_model.json";
const DEFAULT_COLUMNS_PATH: &str = "model_columns.json";

const MODEL_PATH_VAR: &str = "HOUSING_MODEL_PATH";
const COLUMNS_PATH_VAR: &str = "HOUSING_COLUMNS_PATH";

/// Where the startup artifacts live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    model: PathBuf,
    columns: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH, DEFAULT_COLUMNS_PATH)
    }
}

impl ArtifactPaths {
    pub fn new(model: impl Into<PathBuf>, columns: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            columns: columns.into(),
        }
    }

    /// Reads the paths from `HOUSING_MODEL_PATH` and `HOUSING_COLUMNS_PATH`,
    /// falling back to the working directory defaults.
    pub fn from_env() -> Self {
        let mut paths = Self::default();
        if let Ok(model) = env::var(MODEL_PATH_VAR) {
            paths.model = model.into();
        }
        if let Ok(columns) = env::var(COLUMNS_PATH_VAR) {
            paths.columns = columns.into();
        }
        paths
    }

    pub fn with_model(mut self, model: impl Into<PathBuf>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_columns(mut self, columns: impl Into<PathBuf>) -> Self {
        self.columns = columns.into();
        self
    }

    pub fn model(&self) -> &Path {
        &self.model
    }

    pub fn columns(&self) -> &Path {
        &self.columns
    }
}

/// The immutable state every prediction borrows: schema and trained model.
#[derive(Debug, Clone)]
pub struct Artifacts {
    schema: FeatureSchema,
    model: LinearModel,
}

impl Artifacts {
    /// Loads the schema, then the model aligned to it.
    ///
    /// Both files must exist before either is read, so a missing file is always
    /// reported as `MissingArtifact` even when the other one is malformed.
    ///
    /// # Errors
    /// Returns `MissingArtifact` if either file is absent, or any error of
    /// [`FeatureSchema::load`] and [`LinearModel::load`].
    pub fn load(paths: &ArtifactPaths) -> Result<Self> {
        info!(
            "loading artifacts: model={}, columns={}",
            paths.model().display(),
            paths.columns().display()
        );

        if let Some(missing) = [paths.columns(), paths.model()]
            .into_iter()
            .find(|p| !p.exists())
        {
            return Err(PredictorError::MissingArtifact {
                path: missing.to_path_buf(),
            });
        }

        let schema = FeatureSchema::load(paths.columns())?;
        let model = LinearModel::load(paths.model(), &schema)?;
        Ok(Self { schema, model })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }
}
