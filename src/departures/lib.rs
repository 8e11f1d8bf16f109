//! Fetches departure times for a stop from the 9292 API and posts them to a
//! Slack incoming webhook.
//!
//! The source and webhook URLs come from `LOCATION_URL` and `SLACK_WEBHOOK`
//! (see [`Config::from_env`]). Every failure is returned as an [`Error`]
//! tagged with the [`Stage`] it happened in; nothing here exits the process.

pub mod api;
pub mod config;
pub mod error;
pub mod slack;
pub mod types;

#[cfg(test)]
mod test_server;

use tracing::{debug, info};

pub use config::Config;
pub use error::{Error, Result, Stage};
pub use types::*;

use api::{decode_departures, http_client, DeparturesClient};
use slack::{departures_message, SlackWebhook};

/// Runs fetch, decode, format and notify once. Returns the text sent to Slack.
pub async fn relay(config: &Config) -> Result<String> {
    let client = http_client(config.timeout)?;

    info!("Make a request to API...");
    let body = DeparturesClient::new(client.clone(), config.location_url.clone())
        .fetch()
        .await?;

    info!("Converting response to location object...");
    let location = decode_departures(&body)?;

    info!("Making a message for sending to Slack");
    let message = SlackMessage {
        text: departures_message(&location)?,
    };
    debug!(text = %message.text, "Message to send");

    info!("Sending a message to Slack...");
    SlackWebhook::new(client, config.slack_webhook.clone())
        .send(&message)
        .await?;

    Ok(message.text)
}

/// Lambda entrypoint: relays once and acknowledges the request by its id.
pub async fn handle(request: Request, config: &Config) -> Result<Response> {
    relay(config).await?;

    Ok(Response {
        message: format!("Processed request ID {}", request.id),
        ok: true,
    })
}
