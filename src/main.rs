use std::{env, io, process};

use anyhow::Context;
use log::{error, info};

use housing_predictor::{
    collector::{form_from_args, Collector},
    currency::format_price,
    predict_price, ArtifactPaths, Artifacts, HouseForm, PredictorError,
};

const USAGE: &str = "Usage: housing-predictor [--model PATH] [--columns PATH] [field=value ...]";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut paths = ArtifactPaths::from_env();
    let mut fields = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--model" => paths = paths.with_model(args.next().context(USAGE)?),
            "--columns" => paths = paths.with_columns(args.next().context(USAGE)?),
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => fields.push(arg),
        }
    }

    println!("Housing Price Predictor");
    println!("Enter the values of features to predict housing price:\n");

    let artifacts = match Artifacts::load(&paths) {
        Ok(artifacts) => Some(artifacts),
        Err(e @ PredictorError::MissingArtifact { .. }) => {
            error!("{e}");
            println!("Model or columns file not found.");
            None
        }
        Err(e) => return Err(e).context("loading model artifacts"),
    };

    let Some(artifacts) = artifacts else {
        info!("prediction disabled for this session");
        return Ok(());
    };

    let form: HouseForm = if fields.is_empty() {
        let stdin = io::stdin();
        Collector::new(stdin.lock(), io::stdout())
            .collect()
            .context("collecting input")?
    } else {
        form_from_args(&fields).context("parsing field arguments")?
    };

    let price = predict_price(&form, &artifacts)?;
    println!("\nPredicted House Price: {}", format_price(price));

    Ok(())
}
