use reqwest::Client;

use crate::error::{Error, Result};
use crate::types::{LocationDepartures, SlackMessage};

/// Renders the first tab as one `At: <time> To: <destination>` line per
/// departure, in API order.
pub fn departures_message(location: &LocationDepartures) -> Result<String> {
    let tab = location.tabs.first().ok_or(Error::NoTabs)?;

    let mut message = String::new();
    for departure in &tab.departures {
        message.push_str(&format!(
            "At: {} To: {}\n",
            departure.time, departure.destination_name
        ));
    }

    Ok(message)
}

/// Slack incoming webhook.
pub struct SlackWebhook {
    client: Client,
    url: String,
}

impl SlackWebhook {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }

    pub async fn send(&self, message: &SlackMessage) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .map_err(Error::Notify)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.map_err(Error::Notify)?;
            return Err(Error::NotifyStatus {
                status: status.to_string(),
                body,
            });
        }

        Ok(())
    }
}
