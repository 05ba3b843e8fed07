use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application components.
pub mod auth;
pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod repository;

// Routing segregation (Public, Authenticated, Admin).
pub mod routes;
use auth::AuthUser;
use routes::{admin, authenticated, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the binary entry point.
pub use config::AppConfig;
pub use error::ApiError;
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation for the service, aggregating
/// every handler annotated with `#[utoipa::path]` and every schema derived
/// with `ToSchema`. Served as JSON at `/api-docs/openapi.json` and browsable
/// at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_posts, handlers::get_post, handlers::create_post,
        handlers::get_my_posts, handlers::update_post, handlers::delete_post,
        handlers::get_stats, handlers::create_comment, handlers::get_comment,
        handlers::get_comments_by_author, handlers::update_comment,
        handlers::delete_comment, handlers::moderate_comment
    ),
    components(
        schemas(
            models::Post, models::Comment, models::User, models::PostRef,
            models::CommentWithPost, models::CommentNode, models::PostDetail,
            models::PostPage, models::PaginationMeta, models::DashboardStats,
            models::CreatePostRequest, models::UpdatePostRequest,
            models::CreateCommentRequest, models::UpdateCommentRequest,
            models::ModerateCommentRequest, models::PostStatus,
            models::CommentStatus, models::UserRole, models::UserStatus,
            error::ErrorBody,
        )
    ),
    tags(
        (name = "blog-api", description = "Blog content and moderation API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding the application
/// services and configuration, shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository layer: abstracts store access behind `Arc<dyn Repository>`.
    pub repo: RepositoryState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Allow extractors (notably AuthUser) to pull individual components out of
// the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication for the authenticated routes by running the
/// `AuthUser` extractor ahead of the handler: a request without a resolvable
/// principal is rejected with 401 before any handler executes.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the routing structure, applies the observability and CORS
/// layers, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        // Documentation: auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: no middleware.
        .merge(public::public_routes())
        // Authenticated routes: principal resolution enforced up front.
        .merge(
            authenticated::authenticated_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Admin routes: nested under /admin; the ADMIN role check happens
        // inside the handlers after principal resolution.
        .nest("/admin", admin::admin_routes())
        .with_state(state);

    // Observability and correlation layers, outermost.
    base_router
        .layer(
            ServiceBuilder::new()
                // Request ID generation for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // Wrap the request/response lifecycle in a tracing span keyed
                // by the request id.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // Return the generated x-request-id header to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes the TraceLayer span so every log line for a request carries
/// the method, URI and correlation id.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
