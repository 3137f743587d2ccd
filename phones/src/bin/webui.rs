use std::error::Error;
use std::sync::Arc;

use phones::{form::PhoneForm, form::form_options, page::INDEX_HTML, schema};
use pricing::{
    executable_utils::{
        WebuiState, initialize_executable, initialize_tracing, install_metrics_recorder, run_webui,
    },
    predictor::Predictor,
    registry::ModelRegistry,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting web UI...");
    let config = initialize_executable()?;
    initialize_tracing(&config.webui.log_level);
    let metrics = install_metrics_recorder()?;

    let registry = ModelRegistry::load(&config.common, &config.models, &schema::PHONE_SCHEMA)?;
    tracing::info!(
        models = ?registry.names(),
        default = registry.default_name(),
        "Serving smartphone form"
    );
    let options = form_options(&registry.names(), registry.default_name());
    let predictor = Arc::new(Predictor::new(schema::phone_builder(), Arc::new(registry)));

    let state = WebuiState::<PhoneForm>::new(predictor, INDEX_HTML, options).with_metrics(metrics);
    run_webui(config.webui, state).await
}
