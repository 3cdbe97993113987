use amani_catalog::{Campaign, RecordKind, Session, Tip};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operations exposed by the command API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    Search,
    Categories,
    Browse,
    Submit,
    Validate,
}

/// A command request: an action plus its JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub action: CommandAction,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Ok,
    Error,
}

/// Envelope returned for every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Value,
}

impl CommandResponse {
    pub(crate) fn ok(data: Value) -> Self {
        Self {
            status: CommandStatus::Ok,
            message: None,
            data,
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Error,
            message: Some(message.into()),
            data: Value::Null,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.status, CommandStatus::Error)
    }
}

/// Which catalogs a search runs over (the type dropdown on the
/// browsing page).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindFilter {
    #[default]
    All,
    Tips,
    Campaigns,
    Sessions,
}

impl KindFilter {
    pub(crate) const fn includes_tips(self) -> bool {
        matches!(self, Self::All | Self::Tips)
    }

    pub(crate) const fn includes_campaigns(self) -> bool {
        matches!(self, Self::All | Self::Campaigns)
    }

    pub(crate) const fn includes_sessions(self) -> bool {
        matches!(self, Self::All | Self::Sessions)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPayload {
    pub query: String,
    /// Category constraint; the "all" sentinel means unconstrained
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub kind: KindFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

fn default_category() -> String {
    amani_search::CategoryFilter::SENTINEL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutput {
    pub query: String,
    pub category: String,
    pub total: usize,
    pub tips: Vec<Tip>,
    pub campaigns: Vec<Campaign>,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesOutput {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseOutput {
    pub total: usize,
    pub tips: Vec<Tip>,
    pub campaigns: Vec<Campaign>,
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPayload {
    pub kind: RecordKind,
    pub data: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOutput {
    pub kind: RecordKind,
    pub title: String,
    pub accepted: bool,
    pub draft: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    pub tips: usize,
    pub campaigns: usize,
    pub sessions: usize,
    pub categories: usize,
}
