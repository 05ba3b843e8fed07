use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, patch, post, put},
};

/// Authenticated Router Module
///
/// Routes for any principal that passed the authentication layer. Every
/// handler here receives a validated `AuthUser`; ownership checks happen in
/// the repository against that principal, so a USER can only mutate its own
/// posts and comments while an ADMIN passes the shared guard everywhere.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /me/posts
        // The author's own posts, drafts included, after the ACTIVE check.
        .route("/me/posts", get(handlers::get_my_posts))
        // POST /posts
        // Submits a new post; the author id is forced from the principal.
        .route("/posts", post(handlers::create_post))
        // PUT/DELETE /posts/{id}
        // Owner-or-admin mutation; non-admin updates lose `isFeatured`.
        .route(
            "/posts/{id}",
            put(handlers::update_post).delete(handlers::delete_post),
        )
        // POST /comments
        // Creates a PENDING comment after validating the post and parent.
        .route("/comments", post(handlers::create_comment))
        // PATCH/DELETE /comments/{id}
        // PATCH is authorship-only; DELETE goes through the shared guard,
        // so admins may remove any comment.
        .route(
            "/comments/{id}",
            patch(handlers::update_comment).delete(handlers::delete_comment),
        )
}
