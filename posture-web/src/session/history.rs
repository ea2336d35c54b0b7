//! Finished-session summaries persisted by the page
//!
//! The page stores `SessionHistory::to_json()` in localStorage and hands
//! it back on load. Newest session first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Oldest summaries beyond this are dropped
pub const MAX_SESSIONS: usize = 50;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("session history JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    /// Display date, formatted by the page
    pub date: String,
    /// Duration in whole seconds
    pub duration: u64,
    pub good_percentage: u32,
    pub bad_percentage: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHistory {
    sessions: Vec<SessionSummary>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let mut history: Self = serde_json::from_str(json)?;
        history.sessions.truncate(MAX_SESSIONS);
        Ok(history)
    }

    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn push(&mut self, summary: SessionSummary) {
        self.sessions.insert(0, summary);
        self.sessions.truncate(MAX_SESSIONS);
    }

    pub fn sessions(&self) -> &[SessionSummary] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
