pub mod artifacts;
pub mod assembler;
pub mod collector;
pub mod currency;
pub mod error;
pub mod features;
pub mod input;
pub mod model;
pub mod schema;

use log::info;

pub use artifacts::{ArtifactPaths, Artifacts};
pub use assembler::{assemble, assemble_strict, FeatureVector};
pub use error::{PredictorError, Result};
pub use input::{HouseForm, RawInput};
pub use model::{LinearModel, Predictor};
pub use schema::FeatureSchema;

/// Scores a completed form against the loaded artifacts.
///
/// Assembly is strict: only the form's expected-optional columns may be
/// default-filled, so a schema the form cannot populate is an error rather than a
/// confidently wrong price.
///
/// # Errors
/// Returns any assembly or alignment error of [`assemble_strict`] and [`Predictor::predict`].
pub fn predict_price(form: &HouseForm, artifacts: &Artifacts) -> Result<f64> {
    let raw = form.to_raw_input();
    let x = assemble_strict(&raw, artifacts.schema(), &HouseForm::expected_optional())?;
    let price = artifacts.model().predict(&x)?;

    info!("predicted price {price:.2}");
    Ok(price)
}
