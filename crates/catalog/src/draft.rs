//! Submission drafts.
//!
//! Partner organisations submit new content as form payloads keyed by
//! record kind. Drafts are validated and echoed back; nothing is
//! persisted at this layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dates;
use crate::error::{CatalogError, Result};
use crate::records::RecordKind;

/// Draft payload for a new safety tip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TipDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub estimated_impact: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: String,
}

impl TipDraft {
    pub fn validate(&self) -> Result<()> {
        require(RecordKind::Tip, "title", &self.title)?;
        require(RecordKind::Tip, "content", &self.content)?;
        require(RecordKind::Tip, "category", &self.category)?;
        Ok(())
    }
}

/// Draft payload for a new campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    pub campaign_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub kpis: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub author: String,
}

impl CampaignDraft {
    pub fn validate(&self) -> Result<()> {
        require(RecordKind::Campaign, "title", &self.title)?;
        require(RecordKind::Campaign, "description", &self.description)?;
        require(RecordKind::Campaign, "campaignType", &self.campaign_type)?;
        require_date(RecordKind::Campaign, "startDate", &self.start_date)?;
        require_date(RecordKind::Campaign, "endDate", &self.end_date)?;
        Ok(())
    }
}

/// Draft payload for a new live session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionDraft {
    pub title: String,
    pub description: String,
    pub topic: String,
    pub scheduled_date: String,
    #[serde(default)]
    pub session_type: String,
    #[serde(default)]
    pub scheduled_time: String,
    #[serde(default)]
    pub max_participants: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub facilitator: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub expected_outcomes: String,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: String,
}

impl SessionDraft {
    pub fn validate(&self) -> Result<()> {
        require(RecordKind::Session, "title", &self.title)?;
        require(RecordKind::Session, "description", &self.description)?;
        require(RecordKind::Session, "topic", &self.topic)?;
        require_date(RecordKind::Session, "scheduledDate", &self.scheduled_date)?;
        Ok(())
    }
}

/// A submission of any kind, parsed from its JSON form payload.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Draft {
    Tip(TipDraft),
    Campaign(CampaignDraft),
    Session(SessionDraft),
}

impl Draft {
    /// Parse the form payload for the given kind.
    pub fn from_value(kind: RecordKind, data: Value) -> Result<Self> {
        let draft = match kind {
            RecordKind::Tip => Self::Tip(serde_json::from_value(data)?),
            RecordKind::Campaign => Self::Campaign(serde_json::from_value(data)?),
            RecordKind::Session => Self::Session(serde_json::from_value(data)?),
        };
        Ok(draft)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Tip(draft) => draft.validate(),
            Self::Campaign(draft) => draft.validate(),
            Self::Session(draft) => draft.validate(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Tip(_) => RecordKind::Tip,
            Self::Campaign(_) => RecordKind::Campaign,
            Self::Session(_) => RecordKind::Session,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Tip(draft) => &draft.title,
            Self::Campaign(draft) => &draft.title,
            Self::Session(draft) => &draft.title,
        }
    }
}

fn require(kind: RecordKind, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField { kind, field });
    }
    Ok(())
}

fn require_date(kind: RecordKind, field: &'static str, value: &str) -> Result<()> {
    require(kind, field, value)?;
    if !dates::is_valid(value) {
        return Err(CatalogError::InvalidDraftDate {
            kind,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn tip_draft_round_trips_through_kind_dispatch() {
        let data = json!({
            "title": "Check in with a friend",
            "content": "Share your route before travelling at night.",
            "category": "Personal Safety",
            "tags": ["safety", "night"]
        });

        let draft = Draft::from_value(RecordKind::Tip, data).unwrap();
        assert!(draft.validate().is_ok());
        assert_eq!(draft.kind(), RecordKind::Tip);
        assert_eq!(draft.title(), "Check in with a friend");
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let data = json!({
            "title": "   ",
            "content": "x",
            "category": "Personal Safety"
        });

        let draft = Draft::from_value(RecordKind::Tip, data).unwrap();
        let err = draft.validate().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptyField {
                kind: RecordKind::Tip,
                field: "title",
            }
        ));
    }

    #[test]
    fn campaign_draft_requires_parseable_dates() {
        let data = json!({
            "title": "School outreach",
            "description": "Visits to partner schools",
            "campaignType": "Awareness Campaign",
            "startDate": "2024-04-01",
            "endDate": "next month"
        });

        let draft = Draft::from_value(RecordKind::Campaign, data).unwrap();
        let err = draft.validate().unwrap_err();
        match err {
            CatalogError::InvalidDraftDate { kind, field, value } => {
                assert_eq!(kind, RecordKind::Campaign);
                assert_eq!(field, "endDate");
                assert_eq!(value, "next month");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn session_draft_missing_topic_fails_to_parse() {
        let data = json!({
            "title": "Ask the expert",
            "description": "Open floor",
            "scheduledDate": "2024-05-01"
        });

        let err = Draft::from_value(RecordKind::Session, data).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn unknown_draft_fields_are_ignored() {
        let data = json!({
            "title": "Ask the expert",
            "description": "Open floor",
            "topic": "Online Safety",
            "scheduledDate": "2024-05-01",
            "captchaToken": "abc123"
        });

        let draft = Draft::from_value(RecordKind::Session, data).unwrap();
        assert!(draft.validate().is_ok());
    }
}
