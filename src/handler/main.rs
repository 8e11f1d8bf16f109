use departures::{Config, Request, Response};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{error, info};

async fn function_handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let config = Config::from_env();

    match departures::handle(event.payload, &config).await {
        Ok(response) => {
            info!(response = %response.message, "Finished");
            Ok(response)
        }
        Err(e) => {
            error!(stage = %e.stage(), error = %e, "Relaying departures failed");
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    info!("Started");
    run(service_fn(function_handler)).await
}
