//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    #[error("Lead not found: {0}")]
    LeadNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
