use amani_catalog::Searchable;

/// Category constraint applied by a filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No constraint (the `"all"` sentinel)
    #[default]
    All,
    /// Exact, case-sensitive classification match
    Exact(String),
}

impl CategoryFilter {
    /// Reserved classification value meaning "no constraint".
    pub const SENTINEL: &'static str = "all";

    /// Interpret a raw filter value from the caller.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == Self::SENTINEL {
            Self::All
        } else {
            Self::Exact(raw.to_string())
        }
    }

    /// Whether a record with the given classification passes.
    ///
    /// Records without a classification always pass: their kind is
    /// exempt from category filtering.
    #[must_use]
    pub fn accepts(&self, class: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Exact(want) => class.is_none_or(|have| have == want.as_str()),
        }
    }
}

/// Select the records matching `query` and `category`, preserving
/// catalog order.
///
/// The query is matched case-insensitively as a substring against the
/// title, the body, and each token; any hit includes the record. An
/// empty query matches every record. Inclusion requires both the text
/// match and the category constraint.
pub fn filter<'a, T: Searchable>(
    catalog: &'a [T],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|record| {
            matches_text(*record, &needle) && category.accepts(record.filter_class())
        })
        .collect()
}

fn matches_text<T: Searchable>(record: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title().to_lowercase().contains(needle)
        || record.body().to_lowercase().contains(needle)
        || record
            .tokens()
            .iter()
            .any(|token| token.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use amani_catalog::ContentStore;
    use pretty_assertions::assert_eq;

    fn titles<T: Searchable>(hits: &[&T]) -> Vec<String> {
        hits.iter().map(|r| r.title().to_string()).collect()
    }

    #[test]
    fn empty_query_matches_every_record() {
        let store = ContentStore::sample();
        let hits = filter(&store.tips, "", &CategoryFilter::All);
        assert_eq!(hits.len(), store.tips.len());
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let store = ContentStore::sample();
        let hits = filter(&store.tips, "ONLINE PRIVACY", &CategoryFilter::All);
        assert_eq!(titles(&hits), vec!["Online Privacy Protection Tips"]);
    }

    #[test]
    fn query_matches_body_text() {
        let store = ContentStore::sample();
        let hits = filter(&store.tips, "two-factor", &CategoryFilter::All);
        assert_eq!(titles(&hits), vec!["Online Privacy Protection Tips"]);
    }

    #[test]
    fn query_matches_tokens() {
        let store = ContentStore::sample();
        let hits = filter(&store.tips, "privacy", &CategoryFilter::All);
        assert_eq!(titles(&hits), vec!["Online Privacy Protection Tips"]);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let store = ContentStore::sample();
        assert!(filter(&store.tips, "zzz", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn category_requires_exact_match() {
        let store = ContentStore::sample();
        let hits = filter(&store.tips, "", &CategoryFilter::parse("Personal Safety"));
        assert_eq!(titles(&hits), vec!["Personal Safety During Public Transport"]);

        // Equality, not substring, and case-sensitive.
        assert!(filter(&store.tips, "", &CategoryFilter::parse("Personal")).is_empty());
        assert!(filter(&store.tips, "", &CategoryFilter::parse("personal safety")).is_empty());
    }

    #[test]
    fn category_and_query_are_both_required() {
        let store = ContentStore::sample();
        let hits = filter(
            &store.tips,
            "privacy",
            &CategoryFilter::parse("Personal Safety"),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn campaigns_ignore_the_category_constraint() {
        let store = ContentStore::sample();
        let hits = filter(
            &store.campaigns,
            "",
            &CategoryFilter::parse("Awareness Campaign"),
        );
        // Both campaigns come back even though only one is an awareness
        // campaign: campaignType is exempt from filtering.
        assert_eq!(hits.len(), store.campaigns.len());
    }

    #[test]
    fn sessions_filter_on_topic() {
        let store = ContentStore::sample();
        let hits = filter(&store.sessions, "", &CategoryFilter::parse("Online Safety"));
        assert_eq!(titles(&hits), vec!["Online Safety Q&A for Parents"]);
    }

    #[test]
    fn results_keep_catalog_order() {
        let store = ContentStore::sample();
        // "safety" appears in both tips (tag on the first, title on the
        // second); order must match the catalog.
        let hits = filter(&store.tips, "safety", &CategoryFilter::All);
        assert_eq!(
            titles(&hits),
            vec![
                "Personal Safety During Public Transport",
                "Online Privacy Protection Tips",
            ]
        );
    }

    #[test]
    fn non_ascii_queries_lowercase_correctly() {
        let mut store = ContentStore::sample();
        store.tips[0].title = "Sécurité en ligne".to_string();
        let hits = filter(&store.tips, "SÉCURITÉ", &CategoryFilter::All);
        assert_eq!(titles(&hits), vec!["Sécurité en ligne"]);
    }

    #[test]
    fn sentinel_parses_to_all() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Exact("All".to_string())
        );
    }
}
