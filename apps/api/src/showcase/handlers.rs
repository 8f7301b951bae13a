use axum::Json;

use crate::showcase::data::{dashboard_overview, saved_templates, DashboardOverview, SavedTemplate};

/// GET /api/v1/dashboard
pub async fn handle_dashboard() -> Json<DashboardOverview> {
    Json(dashboard_overview())
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<SavedTemplate>> {
    Json(saved_templates())
}
