//! Run configuration passed explicitly into the orchestrator.

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::digest::LookaheadWindow;
use crate::domain::DigestError;
use crate::domain::due::offset_from_minutes;

pub const DEFAULT_SUBJECT_PREFIX: &str = "Todoist Tasks Summary";

/// Everything one run needs besides its ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestConfig {
    pub recipient: String,
    pub sender: String,

    #[serde(default)]
    pub window: LookaheadWindow,

    /// Offset of the recipient's timezone, in minutes east of UTC.
    /// Both "today" and timestamped due dates are read in this offset.
    #[serde(default)]
    pub utc_offset_minutes: i32,

    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

fn default_subject_prefix() -> String {
    DEFAULT_SUBJECT_PREFIX.to_string()
}

impl DigestConfig {
    pub fn new(recipient: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            sender: sender.into(),
            window: LookaheadWindow::default(),
            utc_offset_minutes: 0,
            subject_prefix: default_subject_prefix(),
        }
    }

    pub fn with_window(mut self, window: LookaheadWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub fn with_subject_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.subject_prefix = prefix.into();
        self
    }

    pub fn timezone(&self) -> Result<FixedOffset, DigestError> {
        offset_from_minutes(self.utc_offset_minutes).ok_or_else(|| {
            DigestError::Config(format!(
                "utc offset {} minutes is out of range",
                self.utc_offset_minutes
            ))
        })
    }

    /// Subject line for the run date, e.g. `Todoist Tasks Summary - 2024-03-10`.
    pub fn subject_for(&self, today: NaiveDate) -> String {
        format!("{} - {}", self.subject_prefix, today.format("%Y-%m-%d"))
    }

    /// Check the fields a run cannot do without.
    pub fn validate(&self) -> Result<(), DigestError> {
        if self.recipient.trim().is_empty() {
            return Err(DigestError::Config("recipient address is empty".to_string()));
        }
        if self.sender.trim().is_empty() {
            return Err(DigestError::Config("sender address is empty".to_string()));
        }
        self.timezone()?;
        Ok(())
    }
}
