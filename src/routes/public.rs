use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints accessible to any client, anonymous or logged-in. These are
/// read paths; the only write effect reachable here is the view-counter
/// increment on the post detail read, which is a side effect of viewing,
/// not a client mutation.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated liveness check for monitors and load balancers.
        .route("/health", get(|| async { "ok" }))
        // GET /posts?search=...&tags=...&isFeatured=...&status=...&authorId=...
        // Filtered, paginated listing. Absent parameters impose no
        // constraint; malformed paging input degrades to defaults.
        .route("/posts", get(handlers::list_posts))
        // GET /posts/{id}
        // Post detail with the atomic view increment and the approved
        // 3-level comment tree.
        .route("/posts/{id}", get(handlers::get_post))
        // GET /comments/{id}
        // Single comment with post summary; not moderation-filtered.
        .route("/comments/{id}", get(handlers::get_comment))
        // GET /comments/author/{author_id}
        // All comments by an author, any moderation state.
        .route(
            "/comments/author/{author_id}",
            get(handlers::get_comments_by_author),
        )
}
