use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, patch},
};

/// Admin Router Module
///
/// Routes exclusively for principals with the ADMIN role. Each handler
/// resolves `AuthUser` and rejects non-admin roles before touching the
/// store.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin/stats
        // The dashboard aggregate: ten figures from one snapshot.
        .route("/stats", get(handlers::get_stats))
        // PATCH /admin/comments/{id}/moderate
        // The moderation endpoint: PENDING -> APPROVED | REJECTED (or back),
        // never to the current status.
        .route(
            "/comments/{id}/moderate",
            patch(handlers::moderate_comment),
        )
}
