mod domain;

pub use domain::{
    BrowseOutput, CategoriesOutput, CommandAction, CommandRequest, CommandResponse,
    KindFilter, SearchOutput, SearchPayload, SubmitOutput, SubmitPayload, ValidateOutput,
};

use amani_catalog::{ContentStore, Draft};
use amani_search::{category_index, filter, CategoryFilter};
use anyhow::{Context, Result};
use serde_json::Value;

/// Execute a command request against an immutable content store.
pub fn execute(request: CommandRequest, store: &ContentStore) -> CommandResponse {
    let CommandRequest { action, payload } = request;
    match route(action, payload, store) {
        Ok(data) => CommandResponse::ok(data),
        Err(err) => CommandResponse::error(format!("{err:#}")),
    }
}

fn route(action: CommandAction, payload: Value, store: &ContentStore) -> Result<Value> {
    match action {
        CommandAction::Search => run_search(payload, store),
        CommandAction::Categories => run_categories(store),
        CommandAction::Browse => run_browse(store),
        CommandAction::Submit => run_submit(payload),
        CommandAction::Validate => run_validate(store),
    }
}

fn run_search(payload: Value, store: &ContentStore) -> Result<Value> {
    let payload: SearchPayload =
        serde_json::from_value(payload).context("Invalid search payload")?;
    let category = CategoryFilter::parse(&payload.category);

    let tips = if payload.kind.includes_tips() {
        clipped(filter(&store.tips, &payload.query, &category), payload.limit)
    } else {
        Vec::new()
    };
    let campaigns = if payload.kind.includes_campaigns() {
        clipped(
            filter(&store.campaigns, &payload.query, &category),
            payload.limit,
        )
    } else {
        Vec::new()
    };
    let sessions = if payload.kind.includes_sessions() {
        clipped(
            filter(&store.sessions, &payload.query, &category),
            payload.limit,
        )
    } else {
        Vec::new()
    };

    let output = SearchOutput {
        total: tips.len() + campaigns.len() + sessions.len(),
        query: payload.query,
        category: payload.category,
        tips,
        campaigns,
        sessions,
    };
    log::debug!(
        "search '{}' (category: {}) matched {} records",
        output.query,
        output.category,
        output.total
    );
    serde_json::to_value(output).map_err(Into::into)
}

fn clipped<T: Clone>(hits: Vec<&T>, limit: Option<usize>) -> Vec<T> {
    hits.into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

fn run_categories(store: &ContentStore) -> Result<Value> {
    let output = CategoriesOutput {
        categories: category_index(store.classification_values()),
    };
    serde_json::to_value(output).map_err(Into::into)
}

fn run_browse(store: &ContentStore) -> Result<Value> {
    let output = BrowseOutput {
        total: store.len(),
        tips: store.tips.clone(),
        campaigns: store.campaigns.clone(),
        sessions: store.sessions.clone(),
    };
    serde_json::to_value(output).map_err(Into::into)
}

fn run_submit(payload: Value) -> Result<Value> {
    let payload: SubmitPayload =
        serde_json::from_value(payload).context("Invalid submit payload")?;
    let draft = Draft::from_value(payload.kind, payload.data)
        .with_context(|| format!("Invalid {} submission", payload.kind))?;
    draft.validate()?;

    // Submissions are diagnostic-only: log and echo, nothing is stored.
    log::info!("{} submitted: {}", draft.kind(), draft.title());

    let output = SubmitOutput {
        kind: draft.kind(),
        title: draft.title().to_string(),
        accepted: true,
        draft: serde_json::to_value(&draft)?,
    };
    serde_json::to_value(output).map_err(Into::into)
}

fn run_validate(store: &ContentStore) -> Result<Value> {
    store.validate()?;
    let output = ValidateOutput {
        tips: store.tips.len(),
        campaigns: store.campaigns.len(),
        sessions: store.sessions.len(),
        categories: category_index(store.classification_values()).len(),
    };
    serde_json::to_value(output).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn search_request(payload: Value) -> CommandRequest {
        CommandRequest {
            action: CommandAction::Search,
            payload,
        }
    }

    #[test]
    fn search_returns_matching_records_per_kind() {
        let store = ContentStore::sample();
        let response = execute(
            search_request(json!({"query": "privacy"})),
            &store,
        );
        assert!(!response.is_error());

        let output: SearchOutput = serde_json::from_value(response.data).unwrap();
        assert_eq!(output.total, 1);
        assert_eq!(output.tips[0].title, "Online Privacy Protection Tips");
        assert!(output.campaigns.is_empty());
        assert!(output.sessions.is_empty());
    }

    #[test]
    fn search_category_is_a_no_op_for_campaigns() {
        let store = ContentStore::sample();
        let response = execute(
            search_request(json!({
                "query": "",
                "category": "Awareness Campaign",
                "kind": "campaigns"
            })),
            &store,
        );

        let output: SearchOutput = serde_json::from_value(response.data).unwrap();
        assert_eq!(output.campaigns.len(), 2);
        assert!(output.tips.is_empty());
        assert!(output.sessions.is_empty());
    }

    #[test]
    fn search_limit_caps_each_catalog() {
        let store = ContentStore::sample();
        let response = execute(search_request(json!({"query": "", "limit": 1})), &store);

        let output: SearchOutput = serde_json::from_value(response.data).unwrap();
        assert_eq!(output.tips.len(), 1);
        assert_eq!(output.campaigns.len(), 1);
        assert_eq!(output.sessions.len(), 1);
    }

    #[test]
    fn malformed_search_payload_reports_an_error() {
        let store = ContentStore::sample();
        let response = execute(search_request(json!({"limit": 5})), &store);
        assert!(response.is_error());
        assert!(response
            .message
            .as_deref()
            .unwrap()
            .contains("Invalid search payload"));
    }

    #[test]
    fn categories_action_returns_the_index() {
        let store = ContentStore::sample();
        let response = execute(
            CommandRequest {
                action: CommandAction::Categories,
                payload: Value::Null,
            },
            &store,
        );

        let output: CategoriesOutput = serde_json::from_value(response.data).unwrap();
        assert_eq!(output.categories[0], "all");
        assert_eq!(output.categories.len(), 5);
    }

    #[test]
    fn browse_returns_every_catalog() {
        let store = ContentStore::sample();
        let response = execute(
            CommandRequest {
                action: CommandAction::Browse,
                payload: Value::Null,
            },
            &store,
        );

        let output: BrowseOutput = serde_json::from_value(response.data).unwrap();
        assert_eq!(output.total, store.len());
        assert_eq!(output.tips, store.tips);
    }

    #[test]
    fn submit_accepts_a_valid_tip_draft() {
        let store = ContentStore::sample();
        let response = execute(
            CommandRequest {
                action: CommandAction::Submit,
                payload: json!({
                    "kind": "tip",
                    "data": {
                        "title": "Walk in groups after dark",
                        "content": "Travel with people you trust at night.",
                        "category": "Personal Safety"
                    }
                }),
            },
            &store,
        );
        assert!(!response.is_error());

        let output: SubmitOutput = serde_json::from_value(response.data).unwrap();
        assert!(output.accepted);
        assert_eq!(output.title, "Walk in groups after dark");
        assert_eq!(output.draft["category"], "Personal Safety");
    }

    #[test]
    fn submit_rejects_an_invalid_draft() {
        let store = ContentStore::sample();
        let response = execute(
            CommandRequest {
                action: CommandAction::Submit,
                payload: json!({
                    "kind": "session",
                    "data": {
                        "title": "Ask the expert",
                        "description": "Open floor",
                        "topic": "Online Safety",
                        "scheduledDate": "whenever"
                    }
                }),
            },
            &store,
        );
        assert!(response.is_error());
        assert!(response.message.as_deref().unwrap().contains("scheduledDate"));
    }

    #[test]
    fn validate_reports_catalog_sizes() {
        let store = ContentStore::sample();
        let response = execute(
            CommandRequest {
                action: CommandAction::Validate,
                payload: Value::Null,
            },
            &store,
        );

        let output: ValidateOutput = serde_json::from_value(response.data).unwrap();
        assert_eq!(output.tips, 2);
        assert_eq!(output.campaigns, 2);
        assert_eq!(output.sessions, 2);
        assert_eq!(output.categories, 5);
    }

    #[test]
    fn validate_surfaces_invariant_violations() {
        let mut store = ContentStore::sample();
        store.sessions[1].id = store.sessions[0].id.clone();

        let response = execute(
            CommandRequest {
                action: CommandAction::Validate,
                payload: Value::Null,
            },
            &store,
        );
        assert!(response.is_error());
        assert!(response.message.as_deref().unwrap().contains("duplicate"));
    }
}
