//! Public events API

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use steeple_shared::Event;

use crate::{
    error::{SiteError, SiteResult},
    routing::{RequestTenant, TENANT_ID_HEADER},
    state::AppState,
};

/// Edge caches keep a copy for 60s and may serve it stale for 5 minutes
const EVENTS_CACHE_CONTROL: &str = "s-maxage=60, stale-while-revalidate=300";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse<'a> {
    pub tenant_id: &'a str,
    pub count: usize,
    pub events: &'a [Event],
}

/// GET /api/public/events
///
/// Lists the events of the tenant resolved for the request.
pub async fn list_public_events(
    State(state): State<AppState>,
    tenant: RequestTenant,
) -> SiteResult<Response> {
    let tenant_id = tenant
        .current_tenant_id()
        .ok_or(SiteError::TenantNotIdentified)?;

    let events = state.events.for_church(tenant_id);

    let mut response = Json(EventsResponse {
        tenant_id,
        count: events.len(),
        events,
    })
    .into_response();

    // Responses differ per tenant, so shared caches must key on Host
    let headers = response.headers_mut();
    headers.insert(header::VARY, HeaderValue::from_static("Host"));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(EVENTS_CACHE_CONTROL),
    );
    if let Ok(value) = HeaderValue::from_str(tenant_id) {
        headers.insert(TENANT_ID_HEADER, value);
    }

    Ok(response)
}
