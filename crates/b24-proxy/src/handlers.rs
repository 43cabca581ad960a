//! Request handlers for the proxy endpoints.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde_json::Value;

use b24_client::{BitrixClient, BitrixResponse};
use b24_core::Action;

use crate::comments;
use crate::error::ProxyError;
use crate::state::AppState;

/// Entity type id of the invoice smart process.
const SMART_INVOICE_ENTITY_TYPE: &str = "31";
/// Entity type id of the production smart process.
const SMART_PRODUCTION_ENTITY_TYPE: &str = "1070";

/// Handle `GET /proxy`.
///
/// Validates the action and its required parameter before any upstream
/// call, performs the mapped call(s), and returns the resulting JSON.
/// Upstream failures travel inside the 200 body, not the status; the
/// 400/500 paths live in [`ProxyError`].
pub async fn handle_proxy(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ProxyError> {
    let name = non_empty(&params, "action").ok_or(ProxyError::MissingAction)?;
    let action = Action::parse(name).ok_or_else(|| ProxyError::UnknownAction(name.to_string()))?;
    let id = non_empty(&params, action.required_param()).ok_or(ProxyError::MissingParam {
        name: action.required_param(),
    })?;

    tracing::info!(action = %action, id = %id, "Proxying request");

    let response = match action {
        Action::Deal => entity_get(state.client(), "crm.deal.get", id).await,
        Action::Contact => entity_get(state.client(), "crm.contact.get", id).await,
        Action::Company => entity_get(state.client(), "crm.company.get", id).await,
        Action::Task => entity_get(state.client(), "tasks.task.get", id).await,
        Action::File => entity_get(state.client(), "disk.file.get", id).await,
        Action::Tasks => deal_tasks(state.client(), id).await,
        Action::Activities => deal_activities(state.client(), id).await,
        Action::SmartInvoice => smart_items(state.client(), SMART_INVOICE_ENTITY_TYPE, id).await,
        Action::SmartProduction => {
            smart_items(state.client(), SMART_PRODUCTION_ENTITY_TYPE, id).await
        }
        Action::TaskComments => {
            let timeline = comments::comment_timeline(state.client(), id).await?;
            let body = serde_json::to_value(timeline).map_err(anyhow::Error::new)?;
            return Ok(Json(body));
        }
    };

    Ok(Json(response.into_value()))
}

/// Handle `GET /health`.
///
/// Answers without touching the upstream, so it stays green while
/// Bitrix24 is unreachable.
pub async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Bitrix proxy is running"
    }))
}

/// Fetch a single entity by id.
async fn entity_get(client: &BitrixClient, method: &str, id: &str) -> BitrixResponse {
    client.call(method, &[("id", id)]).await
}

/// List tasks bound to a deal, oldest first.
///
/// Tasks reference their deal through the `UF_CRM_TASK` user field, with
/// values of the form `D_<deal id>`.
async fn deal_tasks(client: &BitrixClient, deal_id: &str) -> BitrixResponse {
    let crm_binding = format!("D_{deal_id}");
    client
        .call(
            "tasks.task.list",
            &[
                ("filter[UF_CRM_TASK][0]", crm_binding.as_str()),
                ("order[CREATED_DATE]", "ASC"),
            ],
        )
        .await
}

/// List CRM activities for a deal, oldest first.
///
/// Owner type 2 is the deal entity in the CRM activity model.
async fn deal_activities(client: &BitrixClient, owner_id: &str) -> BitrixResponse {
    client
        .call(
            "crm.activity.list",
            &[
                ("filter[OWNER_TYPE]", "2"),
                ("filter[OWNER_ID]", owner_id),
                ("order[CREATED]", "ASC"),
                ("select[]", "*"),
            ],
        )
        .await
}

/// List smart process items attached to a deal.
async fn smart_items(
    client: &BitrixClient,
    entity_type_id: &str,
    parent_id: &str,
) -> BitrixResponse {
    client
        .call(
            "crm.item.list",
            &[
                ("entityTypeId", entity_type_id),
                ("filter[parentId2]", parent_id),
                ("select[]", "*"),
            ],
        )
        .await
}

/// Look up a query parameter, treating empty values as absent.
fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_rejects_empty_values() {
        let mut params = HashMap::new();
        params.insert("action".to_string(), "".to_string());
        params.insert("deal_id".to_string(), "42".to_string());

        assert_eq!(non_empty(&params, "action"), None);
        assert_eq!(non_empty(&params, "deal_id"), Some("42"));
        assert_eq!(non_empty(&params, "missing"), None);
    }
}
