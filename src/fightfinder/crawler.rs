use crate::config::SourceConfig;
use crate::error::Result;
use crate::records::{EventRecord, FighterRecord};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::info;

use super::{event, fighter};

/// Blocking client for the fight-finder site.
pub struct FightFinder {
    client: Client,
    base_url: String,
}

impl FightFinder {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn event_url(&self, event_id: &str) -> String {
        format!("{}?eventID={}", self.base_url, event_id)
    }

    pub fn fighter_url(&self, fighter_id: &str) -> String {
        format!("{}?fighterID={}", self.base_url, fighter_id)
    }

    /// Fetches a page and returns its raw markup. Connection failure,
    /// timeout and non-success status all surface as `LibraryError::Http`
    /// and are never retried here. The response is dropped on every exit
    /// path, releasing the connection.
    pub fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        let text = response.text()?;
        Ok(text)
    }

    /// Fetches and parses one event page.
    pub fn get_event(&self, event_id: &str) -> Result<EventRecord> {
        let raw_html = self.fetch(&self.event_url(event_id))?;
        event::parse_event(&raw_html, event_id)
    }

    /// Fetches and parses one fighter page.
    pub fn get_fighter(&self, fighter_id: &str) -> Result<FighterRecord> {
        let raw_html = self.fetch(&self.fighter_url(fighter_id))?;
        fighter::parse_fighter(&raw_html, fighter_id)
    }
}
