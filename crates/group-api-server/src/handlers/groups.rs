use crate::response::ResponseEnvelope;
use crate::services::GroupAggregator;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info};

pub const MISSING_GROUPS_BODY: &str = "Please provide a group name.";

#[derive(Debug, Deserialize)]
pub struct GroupsQuery {
    pub groups: Option<String>,
}

/// GET / — resolves `?groups=<a>,<b>,...` into the member UPNs of each group.
///
/// Missing or empty parameter short-circuits to a plain-text 400 before any
/// envelope logic. Everything downstream (token acquisition, lookups) answers
/// with the JSON envelope, 200 on success and 500 on any directory failure.
pub async fn get_users_by_group(
    State(state): State<AppState>,
    Query(query): Query<GroupsQuery>,
) -> Response {
    let raw_groups = match query.groups.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => return (StatusCode::BAD_REQUEST, MISSING_GROUPS_BODY).into_response(),
    };

    // Entries pass through verbatim: no trimming, no dedup.
    let group_names: Vec<&str> = raw_groups.split(',').collect();
    info!("resolving {} group(s): {}", group_names.len(), raw_groups);

    let aggregator = GroupAggregator::new(&state.graph);
    match aggregator.resolve_all(&group_names).await {
        Ok(users) => ResponseEnvelope::success(users, raw_groups).into_response(),
        Err(failure) => {
            error!("Error: {}", failure.error);
            ResponseEnvelope::failure(failure.partial, raw_groups, &failure.error).into_response()
        }
    }
}
