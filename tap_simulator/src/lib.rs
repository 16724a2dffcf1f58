//! Payload construction for the interactive tap simulator.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Mobile tokens are issued with this prefix; anything else is treated as a card UID.
pub const MOBILE_TOKEN_PREFIX: &str = "mtu-token-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    Card,
    Mobile,
}

pub fn classify_credential(credential: &str) -> CredentialType {
    if credential.starts_with(MOBILE_TOKEN_PREFIX) {
        CredentialType::Mobile
    } else {
        CredentialType::Card
    }
}

/// Body sent to `POST /api/tap`.
#[derive(Debug, Serialize)]
pub struct TapPayload {
    pub credential: String,
    pub credential_type: CredentialType,
    pub reader_id: String,
    pub method: &'static str,
    pub tapped_at: String,
}

impl TapPayload {
    pub fn new(credential: &str, reader_id: &str, tapped_at: NaiveDateTime) -> Self {
        Self {
            credential: credential.to_owned(),
            credential_type: classify_credential(credential),
            reader_id: reader_id.to_owned(),
            method: "NFC",
            tapped_at: tapped_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// What one line of operator input asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Exit,
    Skip,
    Credential(&'a str),
}

pub fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        Input::Skip
    } else if line.eq_ignore_ascii_case("exit") {
        Input::Exit
    } else {
        Input::Credential(line)
    }
}
