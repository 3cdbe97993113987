use std::fmt;

use serde::{Deserialize, Serialize};

/// A published safety tip.
///
/// Field names serialize camelCase to stay compatible with the platform's
/// existing content JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    /// Unique id within the tip catalog
    pub id: String,

    /// Headline shown on the tip card
    pub title: String,

    /// The advice itself
    pub content: String,

    /// Classification used for category filtering (e.g. "Personal Safety")
    pub category: String,

    /// Audience label (e.g. "Youth (13-17)")
    pub target_audience: String,

    /// Editorial priority label (e.g. "High Impact")
    pub priority: String,

    /// Estimated number of people reached, as entered by the author
    pub estimated_impact: String,

    /// Short searchable labels
    pub tags: Vec<String>,

    /// Publishing organisation
    pub author: String,

    /// Publication date (YYYY-MM-DD)
    pub timestamp: String,

    /// View counter
    pub views: u64,

    /// Like counter
    pub likes: u64,
}

/// An awareness campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Unique id within the campaign catalog
    pub id: String,

    /// Campaign headline
    pub title: String,

    /// Campaign summary
    pub description: String,

    /// Classification label (display-only; campaigns are not category-filtered)
    pub campaign_type: String,

    /// Audience label
    pub target_audience: String,

    /// Campaign start (YYYY-MM-DD)
    pub start_date: String,

    /// Campaign end (YYYY-MM-DD)
    pub end_date: String,

    /// Distribution channels (e.g. "Social Media", "SMS/Text")
    pub platforms: Vec<String>,

    /// Budget figure, as entered by the author
    pub budget: String,

    /// Stated campaign goals
    pub goals: String,

    /// Key performance indicators
    pub kpis: Vec<String>,

    /// Short searchable labels
    pub keywords: Vec<String>,

    /// Publishing organisation
    pub author: String,

    /// Publication date (YYYY-MM-DD)
    pub timestamp: String,

    /// View counter
    pub views: u64,

    /// Participant counter
    pub participants: u64,
}

/// A live community session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique id within the session catalog
    pub id: String,

    /// Session headline
    pub title: String,

    /// Session summary
    pub description: String,

    /// Format label (e.g. "Expert Discussion", "Live Q&A Session")
    pub session_type: String,

    /// Classification used for category filtering (e.g. "Online Safety")
    pub topic: String,

    /// Capacity, as entered by the facilitator
    pub max_participants: String,

    /// Duration label (e.g. "60 minutes")
    pub duration: String,

    /// Scheduled date (YYYY-MM-DD)
    pub scheduled_date: String,

    /// Scheduled start time (HH:MM)
    pub scheduled_time: String,

    /// Who runs the session
    pub facilitator: String,

    /// Audience label
    pub target_audience: String,

    /// What attendees should take away
    pub expected_outcomes: String,

    /// Free-form engagement notes (e.g. "Questions asked: 25")
    pub engagement_metrics: Vec<String>,

    /// Supporting material
    pub resources: Vec<String>,

    /// Short searchable labels
    pub tags: Vec<String>,

    /// Publishing organisation
    pub author: String,

    /// Publication date (YYYY-MM-DD)
    pub timestamp: String,

    /// View counter
    pub views: u64,

    /// Registration counter
    pub registrations: u64,
}

/// The three record kinds the platform publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Tip,
    Campaign,
    Session,
}

impl RecordKind {
    /// Human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tip => "tip",
            Self::Campaign => "campaign",
            Self::Session => "session",
        }
    }

    /// Parse a kind from its name, if known
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tip" | "tips" => Some(Self::Tip),
            "campaign" | "campaigns" => Some(Self::Campaign),
            "session" | "sessions" => Some(Self::Session),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engagement counters shared by every record kind: views plus a
/// kind-specific secondary counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub views: u64,
    pub secondary: u64,
    pub secondary_label: &'static str,
}
