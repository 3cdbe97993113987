use crate::records::{Campaign, Engagement, Session, Tip};

/// The seam between content records and the filter engine.
///
/// A record exposes the three free-text match targets (title, body,
/// tokens) and, when it participates in category filtering, its
/// classification value.
pub trait Searchable {
    /// Title field, always matched
    fn title(&self) -> &str;

    /// Primary descriptive text (content or description)
    fn body(&self) -> &str;

    /// Searchable token collection (tags or keywords)
    fn tokens(&self) -> &[String];

    /// Classification value used for category filtering and the category
    /// index. `None` means the record kind is exempt from both.
    fn filter_class(&self) -> Option<&str>;

    /// Views plus the kind-specific secondary counter
    fn engagement(&self) -> Engagement;
}

impl Searchable for Tip {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn tokens(&self) -> &[String] {
        &self.tags
    }

    fn filter_class(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn engagement(&self) -> Engagement {
        Engagement {
            views: self.views,
            secondary: self.likes,
            secondary_label: "likes",
        }
    }
}

impl Searchable for Campaign {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.description
    }

    fn tokens(&self) -> &[String] {
        &self.keywords
    }

    // Campaigns are exempt from category filtering; campaignType is
    // display-only.
    fn filter_class(&self) -> Option<&str> {
        None
    }

    fn engagement(&self) -> Engagement {
        Engagement {
            views: self.views,
            secondary: self.participants,
            secondary_label: "participants",
        }
    }
}

impl Searchable for Session {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.description
    }

    fn tokens(&self) -> &[String] {
        &self.tags
    }

    fn filter_class(&self) -> Option<&str> {
        Some(&self.topic)
    }

    fn engagement(&self) -> Engagement {
        Engagement {
            views: self.views,
            secondary: self.registrations,
            secondary_label: "registrations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentStore;

    #[test]
    fn campaigns_have_no_filter_class() {
        let store = ContentStore::sample();
        assert!(store.campaigns.iter().all(|c| c.filter_class().is_none()));
        assert!(store.tips.iter().all(|t| t.filter_class().is_some()));
        assert!(store.sessions.iter().all(|s| s.filter_class().is_some()));
    }

    #[test]
    fn engagement_uses_kind_specific_counter() {
        let store = ContentStore::sample();
        let tip = &store.tips[0];
        let engagement = tip.engagement();
        assert_eq!(engagement.views, tip.views);
        assert_eq!(engagement.secondary, tip.likes);
        assert_eq!(engagement.secondary_label, "likes");
        assert_eq!(store.sessions[0].engagement().secondary_label, "registrations");
    }
}
