//! Resource registry CRUD and statistics.

use axum::extract::State;
use tracing::{debug, info, warn};

use reliefmap_lib::{NewResource, Resource, ResourceStats, ResourceUpdate};
use reliefmap_service_shared::{
    ApiError, ApiJson, ApiPath, ApiQuery, AppState, Created, Envelope, ListResourcesParams,
    parse_resource_id, record_resource_created, record_resource_deleted, record_resource_updated,
};

use super::{MSG_RESOURCE_ADDED, MSG_RESOURCE_DELETED, MSG_RESOURCE_UPDATED};

/// Handle `GET /api/resources`.
pub async fn list_resources(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListResourcesParams>,
) -> Envelope<Vec<Resource>> {
    let query = params.into_query();
    let page = state.resources().read().await.list(&query);

    debug!(
        kind = ?query.kind,
        search = ?query.search,
        limit = query.limit,
        total = page.total,
        "listed resources"
    );

    Envelope::data(page.resources).with_total(page.total)
}

/// Handle `GET /api/resources/{id}`.
pub async fn get_resource(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> Result<Envelope<Resource>, ApiError> {
    let id = parse_resource_id(&raw_id)?;
    let store = state.resources().read().await;
    let resource = store.get(id)?.clone();
    Ok(Envelope::data(resource))
}

/// Handle `POST /api/resources`.
pub async fn create_resource(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewResource>,
) -> Result<Created<Resource>, ApiError> {
    let created = state.resources().write().await.create(input);

    let resource = created.map_err(|e| {
        warn!(error = %e, "rejected new resource");
        ApiError::from(e)
    })?;

    record_resource_created(&resource.kind);
    info!(
        resource_id = resource.id,
        kind = %resource.kind,
        name = %resource.name,
        "resource created"
    );

    Ok(Created(
        Envelope::data(resource).with_message(MSG_RESOURCE_ADDED),
    ))
}

/// Handle `PUT /api/resources/{id}`.
///
/// Only whitelisted fields are merged; `id` and `dateAdded` in the body are
/// ignored.
pub async fn update_resource(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
    ApiJson(update): ApiJson<ResourceUpdate>,
) -> Result<Envelope<Resource>, ApiError> {
    let id = parse_resource_id(&raw_id)?;
    let resource = state.resources().write().await.update(id, update)?;

    record_resource_updated();
    info!(resource_id = id, "resource updated");

    Ok(Envelope::data(resource).with_message(MSG_RESOURCE_UPDATED))
}

/// Handle `DELETE /api/resources/{id}`.
pub async fn delete_resource(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> Result<Envelope<()>, ApiError> {
    let id = parse_resource_id(&raw_id)?;
    let removed = state.resources().write().await.delete(id)?;

    record_resource_deleted();
    info!(resource_id = id, name = %removed.name, "resource deleted");

    Ok(Envelope::message(MSG_RESOURCE_DELETED))
}

/// Handle `GET /api/stats`.
pub async fn resource_stats(State(state): State<AppState>) -> Envelope<ResourceStats> {
    Envelope::data(state.resources().read().await.stats())
}
