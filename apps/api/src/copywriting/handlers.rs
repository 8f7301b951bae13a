//! Axum route handlers for the copywriting API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::copywriting::description::{generate_description, DescriptionRequest, DescriptionResult};
use crate::copywriting::seo::{optimize_for_seo, SeoRequest, SeoResult};
use crate::copywriting::variants::{generate_variants, VariantsRequest, VariantsResult};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/descriptions/generate
///
/// Generates a product description from basic product details.
pub async fn handle_generate_description(
    State(state): State<AppState>,
    payload: Result<Json<DescriptionRequest>, JsonRejection>,
) -> Result<Json<DescriptionResult>, AppError> {
    let Json(request) = payload?;
    let result = generate_description(state.llm.as_ref(), &request).await?;
    Ok(Json(result))
}

/// POST /api/v1/descriptions/optimize
///
/// Optimizes an existing description for search engines.
pub async fn handle_optimize_description(
    State(state): State<AppState>,
    payload: Result<Json<SeoRequest>, JsonRejection>,
) -> Result<Json<SeoResult>, AppError> {
    let Json(request) = payload?;
    let result = optimize_for_seo(state.llm.as_ref(), &request).await?;
    Ok(Json(result))
}

/// POST /api/v1/descriptions/variants
///
/// Generates distinct description variants for A/B testing.
pub async fn handle_generate_variants(
    State(state): State<AppState>,
    payload: Result<Json<VariantsRequest>, JsonRejection>,
) -> Result<Json<VariantsResult>, AppError> {
    let Json(request) = payload?;
    let result = generate_variants(state.llm.as_ref(), &request).await?;
    Ok(Json(result))
}
