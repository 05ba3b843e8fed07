use crate::{
    AppState,
    auth::AuthUser,
    error::ApiError,
    filter::{self, PostFilterParams},
    models::{
        Comment, CommentWithPost, CreateCommentRequest, CreatePostRequest, DashboardStats,
        ModerateCommentRequest, Post, PostDetail, PostPage, UpdateCommentRequest,
        UpdatePostRequest,
    },
    pagination::{self, PageParams},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

// Handlers stay thin: extract the principal and parameters, call the core,
// and let ApiError's IntoResponse do the status mapping. Ownership checks
// and payload stripping live in the repository, next to the data they guard.

/// list_posts
///
/// [Public Route] Filtered, paginated post listing. The filter composer and
/// pagination normalizer turn the raw query string into predicates and
/// paging directives; both are lenient, so malformed paging input degrades
/// to defaults rather than failing.
#[utoipa::path(
    get,
    path = "/posts",
    params(PostFilterParams, PageParams),
    responses((status = 200, description = "Paginated posts", body = PostPage))
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(filters): Query<PostFilterParams>,
    Query(paging): Query<PageParams>,
) -> Result<Json<PostPage>, ApiError> {
    let predicates = filter::compose(&filters);
    let options = pagination::normalize(&paging);
    let page = state.repo.list_posts(&predicates, &options).await?;
    Ok(Json(page))
}

/// get_post
///
/// [Public Route] Post detail with the view-count side effect: the counter
/// increment and the read of the approved comment tree happen in one
/// transaction, so the returned post always reflects the post-increment
/// value.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post with approved comment tree", body = PostDetail),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostDetail>, ApiError> {
    let detail = state.repo.view_post(id).await?;
    Ok(Json(detail))
}

/// create_post
///
/// [Authenticated Route] Submits a new post. The author id comes from the
/// resolved principal, never from the payload.
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses((status = 201, description = "Created", body = Post))
)]
pub async fn create_post(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.repo.create_post(payload, id).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// get_my_posts
///
/// [Authenticated Route] Lists the requesting author's posts, drafts
/// included, after verifying the account is still ACTIVE.
#[utoipa::path(
    get,
    path = "/me/posts",
    responses((status = 200, description = "My Posts", body = [Post]))
)]
pub async fn get_my_posts(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = state.repo.list_posts_by_author(id).await?;
    Ok(Json(posts))
}

/// update_post
///
/// [Authenticated Route] Partial update of a post. The repository enforces
/// existence, then ownership/role, and strips `isFeatured` for non-admin
/// principals.
#[utoipa::path(
    put,
    path = "/posts/{id}",
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated", body = Post),
        (status = 403, description = "Not Owner"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_post(
    principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let post = state.repo.update_post(id, payload, &principal).await?;
    Ok(Json(post))
}

/// delete_post
///
/// [Authenticated Route] Deletes a post as its author or as an admin;
/// returns the deleted record.
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    responses(
        (status = 200, description = "Deleted", body = Post),
        (status = 403, description = "Not Owner"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_post(
    principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    let post = state.repo.delete_post(id, &principal).await?;
    Ok(Json(post))
}

/// get_stats
///
/// [Admin Route] The ten dashboard figures, computed against one snapshot.
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses(
        (status = 200, description = "Stats", body = DashboardStats),
        (status = 403, description = "Admin Only")
    )
)]
pub async fn get_stats(
    principal: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, ApiError> {
    if !principal.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let stats = state.repo.get_stats().await?;
    Ok(Json(stats))
}

/// create_comment
///
/// [Authenticated Route] Posts a new PENDING comment. The author is forced
/// from the principal; post and parent references are validated before the
/// insert, so nothing is created on a dangling reference.
#[utoipa::path(
    post,
    path = "/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment Created", body = Comment),
        (status = 404, description = "Post or parent comment not found")
    )
)]
pub async fn create_comment(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let comment = state.repo.create_comment(payload, id).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// get_comment
///
/// [Public Route] Single comment with its post summary. Not
/// status-filtered; moderation only hides comments from the nested tree on
/// the post detail read.
#[utoipa::path(
    get,
    path = "/comments/{id}",
    params(("id" = Uuid, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment", body = CommentWithPost),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommentWithPost>, ApiError> {
    let comment = state.repo.get_comment(id).await?;
    Ok(Json(comment))
}

/// get_comments_by_author
///
/// [Public Route] All comments by one author, regardless of moderation
/// state, each with its post summary.
#[utoipa::path(
    get,
    path = "/comments/author/{author_id}",
    params(("author_id" = Uuid, Path, description = "Author ID")),
    responses((status = 200, description = "Comments", body = [CommentWithPost]))
)]
pub async fn get_comments_by_author(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<Json<Vec<CommentWithPost>>, ApiError> {
    let comments = state.repo.list_comments_by_author(author_id).await?;
    Ok(Json(comments))
}

/// update_comment
///
/// [Authenticated Route] Author-scoped partial update; the check is
/// authorship only, deliberately not role-elevated.
#[utoipa::path(
    patch,
    path = "/comments/{id}",
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Updated", body = Comment),
        (status = 403, description = "Not Author"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_comment(
    AuthUser { id: author_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    let comment = state.repo.update_own_comment(id, payload, author_id).await?;
    Ok(Json(comment))
}

/// delete_comment
///
/// [Authenticated Route] Deletes a comment as its author or as an admin
/// (the shared ownership guard admits the admin override).
#[utoipa::path(
    delete,
    path = "/comments/{id}",
    params(("id" = Uuid, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Deleted", body = Comment),
        (status = 403, description = "Not Author"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_comment(
    principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Comment>, ApiError> {
    let comment = state.repo.delete_comment(id, &principal).await?;
    Ok(Json(comment))
}

/// moderate_comment
///
/// [Admin Route] Transitions a comment's moderation status. Transitioning
/// to the current status is rejected as a no-op conflict.
#[utoipa::path(
    patch,
    path = "/admin/comments/{id}/moderate",
    params(("id" = Uuid, Path, description = "Comment ID")),
    request_body = ModerateCommentRequest,
    responses(
        (status = 200, description = "Moderated", body = Comment),
        (status = 403, description = "Admin Only"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Already in target status")
    )
)]
pub async fn moderate_comment(
    principal: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ModerateCommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    if !principal.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let comment = state.repo.moderate_comment(id, payload.status).await?;
    Ok(Json(comment))
}
