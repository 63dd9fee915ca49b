//! HTTP handlers for the packing slice.

use crate::{Packing, PackingError};
use axum::Json;
use axum::extract::{Query, State};
use packhub_domain::constants::{ITEM_COUNT_PARAM, PACKING_TAG};
use packhub_domain::packs::{AllocationPlan, PackSize};
use packhub_kernel::prelude::{ApiError, ApiState};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

impl From<PackingError> for ApiError {
    fn from(err: PackingError) -> Self {
        match &err {
            PackingError::EmptySizeSet => Self::conflict(err.to_string()),
            _ => Self::bad_request(err.to_string()),
        }
    }
}

/// Routes of the packing slice.
///
/// Only the mutating routes reject a wrong verb; the read routes answer every method.
pub fn router() -> OpenApiRouter<ApiState> {
    let (sizes_schemas, sizes_paths, sizes_route) = routes!(get_pack_sizes);
    let (packages_schemas, packages_paths, packages_route) = routes!(get_packages);

    OpenApiRouter::new()
        .routes((sizes_schemas, sizes_paths, sizes_route.fallback(get_pack_sizes)))
        .routes(routes!(add_pack_size))
        .routes(routes!(remove_pack_size))
        .routes((packages_schemas, packages_paths, packages_route.fallback(get_packages)))
}

#[derive(Debug, Deserialize)]
struct PackagesQuery {
    #[serde(rename = "itemCount")]
    item_count: Option<String>,
}

#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    path = "/getPackSizes",
    responses((status = OK, description = "Registered pack sizes, ascending", body = Vec<u32>)),
    tag = PACKING_TAG,
)]
async fn get_pack_sizes(State(state): State<ApiState>) -> Result<Json<Vec<PackSize>>, ApiError> {
    let packing = state.try_get_slice::<Packing>()?;
    Ok(Json(packing.registry().snapshot()))
}

#[allow(clippy::unused_async)]
#[utoipa::path(
    post,
    path = "/addPackSize",
    request_body(content = String, description = "Pack size as a decimal integer", content_type = "text/plain"),
    responses(
        (status = OK, description = "Pack size added", body = String),
        (status = BAD_REQUEST, description = "Not a positive integer, or already registered", body = String),
    ),
    tag = PACKING_TAG,
)]
async fn add_pack_size(State(state): State<ApiState>, body: String) -> Result<String, ApiError> {
    let packing = state.try_get_slice::<Packing>()?;
    let size = packing.registry().add(parse_size(&body)?)?;
    Ok(format!("Pack size {size} added successfully"))
}

#[allow(clippy::unused_async)]
#[utoipa::path(
    post,
    path = "/removePackSize",
    request_body(content = String, description = "Pack size as a decimal integer", content_type = "text/plain"),
    responses(
        (status = OK, description = "Pack size removed", body = String),
        (status = BAD_REQUEST, description = "Not a positive integer, or not registered", body = String),
    ),
    tag = PACKING_TAG,
)]
async fn remove_pack_size(State(state): State<ApiState>, body: String) -> Result<String, ApiError> {
    let packing = state.try_get_slice::<Packing>()?;
    let size = packing.registry().remove(parse_size(&body)?)?;
    Ok(format!("Pack size {size} removed successfully"))
}

#[allow(clippy::unused_async)]
#[utoipa::path(
    get,
    path = "/getPackages",
    params(("itemCount" = i64, Query, description = "Number of items to ship")),
    responses(
        (status = OK, description = "Pack count per registered size", body = BTreeMap<String, u64>),
        (status = BAD_REQUEST, description = "Missing or non-integer itemCount", body = String),
        (status = CONFLICT, description = "No pack sizes are registered", body = String),
    ),
    tag = PACKING_TAG,
)]
async fn get_packages(
    State(state): State<ApiState>,
    Query(query): Query<PackagesQuery>,
) -> Result<Json<AllocationPlan>, ApiError> {
    let item_count = parse_item_count(query.item_count.as_deref())?;
    let packing = state.try_get_slice::<Packing>()?;
    Ok(Json(packing.plan(item_count)?))
}

/// Request bodies may carry a trailing newline; anything else must be a decimal integer.
fn parse_size(body: &str) -> Result<i64, PackingError> {
    let trimmed = body.trim();
    trimmed.parse().map_err(|_| PackingError::InvalidSize { input: Cow::Owned(trimmed.to_owned()) })
}

fn parse_item_count(raw: Option<&str>) -> Result<i64, PackingError> {
    let raw = raw.ok_or(PackingError::MissingParameter { name: ITEM_COUNT_PARAM })?;
    raw.parse().map_err(|_| PackingError::InvalidParameter {
        name: ITEM_COUNT_PARAM,
        value: Cow::Owned(raw.to_owned()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_trims_whitespace() {
        assert_eq!(parse_size(" 750\n"), Ok(750));
        assert_eq!(parse_size("-3"), Ok(-3));
        assert!(matches!(parse_size("12abc"), Err(PackingError::InvalidSize { .. })));
        assert!(matches!(parse_size(""), Err(PackingError::InvalidSize { .. })));
    }

    #[test]
    fn parse_item_count_distinguishes_missing_from_malformed() {
        assert_eq!(parse_item_count(Some("12001")), Ok(12_001));
        assert_eq!(parse_item_count(Some("-1")), Ok(-1));
        assert_eq!(
            parse_item_count(None),
            Err(PackingError::MissingParameter { name: "itemCount" })
        );
        assert!(matches!(
            parse_item_count(Some("ten")),
            Err(PackingError::InvalidParameter { name: "itemCount", .. })
        ));
    }

    #[test]
    fn empty_size_set_maps_to_conflict() {
        let err = ApiError::from(PackingError::EmptySizeSet);
        assert_eq!(err.status(), axum::http::StatusCode::CONFLICT);

        let err = ApiError::from(PackingError::MissingParameter { name: "itemCount" });
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
