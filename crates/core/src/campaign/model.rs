//! Campaign model definitions and API key generation

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

const API_KEY_PREFIX: &str = "camp";
const API_KEY_SUFFIX_LEN: usize = 8;
const API_KEY_SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Whether a campaign is currently collecting leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Inactive,
}

impl Default for CampaignStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A lead generation campaign with its generated API key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub website: String,
    pub api_key: String,
    pub created_at: DateTime<Utc>,
    pub status: CampaignStatus,
    pub leads: u32,
}

impl Campaign {
    /// Create a new campaign with a fresh random id and a generated API key
    ///
    /// Rejects an empty or blank name or website; the registry stays
    /// unchanged in that case.
    pub fn new(name: impl Into<String>, website: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let website = website.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Campaign name cannot be empty".to_string(),
            ));
        }
        if website.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Campaign website cannot be empty".to_string(),
            ));
        }

        let api_key = generate_api_key(&name);
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            website,
            api_key,
            created_at: Utc::now(),
            status: CampaignStatus::default(),
            leads: 0,
        })
    }
}

/// Generate an API key of the form `camp_<slug>_<random8>`
pub fn generate_api_key(name: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..API_KEY_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..API_KEY_SUFFIX_CHARSET.len());
            API_KEY_SUFFIX_CHARSET[idx] as char
        })
        .collect();
    format!("{}_{}_{}", API_KEY_PREFIX, slugify(name), suffix)
}

/// Lowercase a campaign name and strip all whitespace
pub fn slugify(name: &str) -> String {
    name.chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(|ch| ch.to_lowercase())
        .collect()
}
