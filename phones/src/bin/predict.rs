use std::{fs, io::Read, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;

use phones::{
    form::{PhoneForm, display_label},
    schema,
};
use pricing::{
    executable_utils::{initialize_tracing, load_config},
    predictor::Predictor,
    registry::ModelRegistry,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Predict the price category of one smartphone", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "target/debug/config/total_config.yaml")]
    config: String,

    /// Phone description as JSON; `-` reads stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Classifier to use instead of the configured default
    #[arg(short, long)]
    model: Option<String>,

    /// Print the full prediction as JSON
    #[arg(long)]
    json: bool,
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read phone description from stdin")?;
        return Ok(body);
    }
    fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args.config).map_err(|e| anyhow::anyhow!(e))?;
    initialize_tracing(&config.predict.log_level);

    let mut form: PhoneForm = serde_json::from_str(&read_input(&args.input)?)
        .context("phone description is not valid JSON")?;
    if args.model.is_some() {
        form.model = args.model;
    }

    let registry = ModelRegistry::load(&config.common, &config.models, &schema::PHONE_SCHEMA)
        .context("failed to load models")?;
    tracing::debug!(models = ?registry.names(), input = %args.input, "Predicting");
    let predictor = Predictor::new(schema::phone_builder(), Arc::new(registry));
    let prediction = predictor.predict_submission(form)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        match prediction.probability {
            Some(p) => println!(
                "{}: {} (p = {:.3})",
                prediction.model,
                display_label(prediction.label),
                p
            ),
            None => println!("{}: {}", prediction.model, display_label(prediction.label)),
        }
    }
    Ok(())
}
