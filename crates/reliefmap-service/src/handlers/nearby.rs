use axum::extract::State;
use tracing::info;

use reliefmap_lib::NearbyResource;
use reliefmap_service_shared::{
    ApiError, ApiPath, ApiQuery, AppState, Envelope, NearbyParams, NearbyPath, Validate,
    record_nearby_search,
};

/// Handle `GET /api/resources/nearby/{lat}/{lng}?radius=&type=`.
///
/// Results carry a `distance` field in kilometres and are sorted nearest
/// first.
pub async fn nearby_resources(
    State(state): State<AppState>,
    ApiPath(path): ApiPath<NearbyPath>,
    ApiQuery(params): ApiQuery<NearbyParams>,
) -> Result<Envelope<Vec<NearbyResource>>, ApiError> {
    let origin = path.origin()?;
    params.validate()?;

    let query = params.into_query(origin);
    let results = state.resources().read().await.nearby(&query);

    record_nearby_search(results.len());
    info!(
        lat = origin.lat,
        lng = origin.lng,
        radius_km = query.radius_km,
        kind = ?query.kind,
        found = results.len(),
        "nearby search completed"
    );

    let total = results.len();
    Ok(Envelope::data(results).with_total(total))
}
