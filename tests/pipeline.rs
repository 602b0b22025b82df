use std::{fs, path::PathBuf, process};

use housing_predictor::{
    collector::form_from_args, currency::format_price, predict_price, ArtifactPaths, Artifacts,
    HouseForm, PredictorError,
};

const COLUMNS_JSON: &str = r#"["area", "bedrooms", "bathrooms", "stories", "mainroad",
"guestroom", "basement", "hotwaterheating", "airconditioning", "prefarea",
"furnishingstatus_semi_furnished", "furnishingstatus_furnished", "const"]"#;

const MODEL_JSON: &str = r#"{
  "params": {
    "const": 200000.0,
    "area": 250.0,
    "bedrooms": 100000.0,
    "bathrooms": 500000.0,
    "stories": 300000.0,
    "mainroad": 400000.0,
    "guestroom": 250000.0,
    "basement": 350000.0,
    "hotwaterheating": 800000.0,
    "airconditioning": 850000.0,
    "prefarea": 600000.0,
    "furnishingstatus_semi_furnished": 50000.0,
    "furnishingstatus_furnished": 250000.0
  }
}"#;

/// A scratch directory holding one pair of artifacts, removed on drop.
struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new(name: &str, model: &str, columns: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("housing-predictor-{name}-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ols_model.json"), model).unwrap();
        fs::write(dir.join("model_columns.json"), columns).unwrap();
        Self { dir }
    }

    fn paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(
            self.dir.join("ols_model.json"),
            self.dir.join("model_columns.json"),
        )
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

#[test]
fn predicts_default_form() {
    let scratch = Scratch::new("default", MODEL_JSON, COLUMNS_JSON);
    let artifacts = Artifacts::load(&scratch.paths()).unwrap();

    let price = predict_price(&HouseForm::default(), &artifacts).unwrap();

    // const + 500 * area + 2 * bedrooms + 2 * bathrooms + 1 * stories
    let expected = 200_000.0 + 500.0 * 250.0 + 2.0 * 100_000.0 + 2.0 * 500_000.0 + 300_000.0;
    assert_eq!(price, expected);
    assert_eq!(format_price(price), "₹ 1,825,000.00");
}

#[test]
fn predicts_from_field_arguments() {
    let scratch = Scratch::new("args", MODEL_JSON, COLUMNS_JSON);
    let artifacts = Artifacts::load(&scratch.paths()).unwrap();
    let form = form_from_args([
        "area=1000",
        "bedrooms=3",
        "bathrooms=1",
        "stories=2",
        "airconditioning=Yes",
        "furnishing=Semi-Furnished",
    ])
    .unwrap();

    let price = predict_price(&form, &artifacts).unwrap();

    let expected = 200_000.0
        + 1000.0 * 250.0
        + 3.0 * 100_000.0
        + 500_000.0
        + 2.0 * 300_000.0
        + 850_000.0
        + 50_000.0;
    assert_eq!(price, expected);
}

#[test]
fn missing_model_file_is_missing_artifact() {
    let scratch = Scratch::new("nomodel", MODEL_JSON, COLUMNS_JSON);
    let paths = scratch.paths().with_model(scratch.dir.join("absent.json"));

    let err = Artifacts::load(&paths).unwrap_err();
    assert!(matches!(err, PredictorError::MissingArtifact { .. }));
}

#[test]
fn model_missing_a_coefficient_is_rejected_at_load() {
    let model = MODEL_JSON.replace("\"prefarea\": 600000.0,", "");
    let scratch = Scratch::new("partial", &model, COLUMNS_JSON);

    let err = Artifacts::load(&scratch.paths()).unwrap_err();
    match err {
        PredictorError::ModelSchemaMismatch(msg) => assert!(msg.contains("prefarea")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn malformed_columns_file_is_json_error() {
    let scratch = Scratch::new("badjson", MODEL_JSON, "{\"area\": 1}");

    let err = Artifacts::load(&scratch.paths()).unwrap_err();
    assert!(matches!(err, PredictorError::Json(_)));
}

#[test]
fn typo_in_schema_blocks_prediction() {
    let columns = COLUMNS_JSON.replace("furnishingstatus_furnished", "furnishingstatus_furnishd");
    let model = MODEL_JSON.replace("furnishingstatus_furnished", "furnishingstatus_furnishd");
    let scratch = Scratch::new("typo", &model, &columns);
    let artifacts = Artifacts::load(&scratch.paths()).unwrap();

    let err = predict_price(&HouseForm::default(), &artifacts).unwrap_err();
    match err {
        PredictorError::UnexpectedAbsentColumn { column } => {
            assert_eq!(column, "furnishingstatus_furnishd")
        }
        other => panic!("unexpected error {other:?}"),
    }
}
