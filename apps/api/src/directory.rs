//! Document-store collaborator: per-company phone-number presence.
//!
//! The lookup is a UI hint only. Any failure — network, status, shape —
//! reads as "absent" and is logged at debug, never surfaced.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

const CLIENT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct PresenceDoc {
    #[serde(default)]
    present: bool,
}

#[derive(Clone)]
pub struct PhoneDirectory {
    client: Client,
    base_url: String,
}

impl PhoneDirectory {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(CLIENT_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Whether the company has candidate phone numbers on record.
    pub async fn has_phone_numbers(&self, company_id: Uuid) -> bool {
        let url = format!("{}/companies/{}/phone-numbers", self.base_url, company_id);
        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response
                .json::<PresenceDoc>()
                .await
                .map(|doc| doc.present)
                .unwrap_or(false),
            Ok(response) => {
                debug!("phone directory returned {}", response.status());
                false
            }
            Err(e) => {
                debug!("phone directory lookup failed: {e}");
                false
            }
        }
    }
}
