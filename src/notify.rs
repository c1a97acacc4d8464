use std::time::Duration;

use reqwest::Client;

use crate::jobs;
use crate::ui;

/// Render the notification for one rebirth.
///
/// Codes resolve to display names through the registry; an unknown code
/// falls back to the raw digits. A quote, when present, is prefixed with a
/// trailing space.
pub fn build_message(quote: Option<&str>, player: &str, old_code: &str, new_code: &str) -> String {
    let old_name = jobs::display_name(old_code).unwrap_or(old_code);
    let new_name = jobs::display_name(new_code).unwrap_or(new_code);
    let prefix = match quote {
        Some(q) => format!("{q} "),
        None => String::new(),
    };
    format!("{prefix}{player} rebirthed from {old_name} to {new_name}.")
}

#[derive(serde::Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Delivers notifications to a Discord-compatible webhook.
///
/// Delivery problems are never fatal: a broken webhook must not stop later
/// notifications or the final persistence step.
pub struct WebhookNotifier {
    client: Client,
    url: Option<String>,
}

impl WebhookNotifier {
    /// A `url` of `None` turns delivery into a logged no-op.
    pub fn new(url: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { client, url }
    }

    /// Post one message as `{"content": ...}`.
    pub async fn send(&self, content: &str) {
        let Some(url) = &self.url else {
            ui::warn("DISCORD_WEBHOOK_URL not set, skipping delivery");
            return;
        };

        let result = self
            .client
            .post(url)
            .json(&WebhookPayload { content })
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unreadable body".to_string());
                ui::warn(&format!("webhook returned {status}: {body}"));
            }
            Ok(_) => {}
            Err(err) => ui::warn(&format!("webhook delivery failed: {err}")),
        }
    }
}
