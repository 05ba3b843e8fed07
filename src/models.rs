use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enumerations (Mapped to Postgres enum types) ---

/// UserRole
///
/// The RBAC field carried by every authenticated principal. ADMIN unlocks
/// moderation, stats and the ownership override on mutation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[ts(export)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// UserStatus
///
/// Account state maintained by the external identity provider. Only ACTIVE
/// authors may list their own posts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_status", rename_all = "UPPERCASE")]
#[ts(export)]
pub enum UserStatus {
    #[default]
    Active,
    Blocked,
}

/// PostStatus
///
/// Publication lifecycle of a post. New posts default to DRAFT.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "post_status", rename_all = "UPPERCASE")]
#[ts(export)]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// CommentStatus
///
/// Moderation state machine: comments are created PENDING and transitioned
/// only through the admin moderation endpoint. Re-moderation to the same
/// state is rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "comment_status", rename_all = "UPPERCASE")]
#[ts(export)]
pub enum CommentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

// --- Core Application Schemas (Mapped to Database) ---

/// User
///
/// Identity facts mirrored from the external auth provider into the `users`
/// table. Consumed (never mutated) by this service for role resolution and
/// the ACTIVE-author check.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}

/// Post
///
/// A blog post record from the `posts` table. Owned by its author; mutable
/// by the author or an admin principal.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub status: PostStatus,
    // Monotonic view counter; only ever bumped by the atomic
    // increment-then-read transaction.
    pub views: i32,
    // FK to users.id (owner). Forced from the authenticated principal on
    // create, never trusted from a payload.
    pub author_id: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,

    /// Correlated comment count, selected only on list/detail reads.
    /// Absent (and omitted from JSON) on plain INSERT/UPDATE returns.
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
}

/// Comment
///
/// A comment record from the `comments` table. `parent_id` threads replies;
/// the read path materializes at most three levels (root, reply,
/// reply-of-reply).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author_id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub status: CommentStatus,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

// --- Read Shapes (Output Schemas) ---

/// PostRef
///
/// Compact post summary joined onto single-comment and comments-by-author
/// reads.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PostRef {
    pub id: Uuid,
    pub title: String,
    pub views: i32,
}

/// CommentWithPost
///
/// A comment enriched with its parent post summary. Used by the owner/admin
/// comment views, which are deliberately not status-filtered.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CommentWithPost {
    #[serde(flatten)]
    pub comment: Comment,
    pub post: PostRef,
}

/// CommentNode
///
/// One node of the approved comment tree returned by the post detail read.
/// Depth is bounded by assembly, not by this type: the innermost level is
/// returned with an empty `replies` vector.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    #[schema(no_recursion)]
    pub replies: Vec<CommentNode>,
}

/// PostDetail
///
/// The view-incremented post together with its approved comment tree:
/// top-level comments newest-first, replies (and their replies) oldest-first,
/// APPROVED only at every level.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<CommentNode>,
}

/// PaginationMeta
///
/// Envelope metadata for the post listing: `totalPages` is always
/// `ceil(totalData / dataLimit)`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaginationMeta {
    pub total_data: i64,
    pub current_page: i64,
    pub data_limit: i64,
    pub total_pages: i64,
}

/// PostPage
///
/// Paginated listing envelope: one page of posts plus the pagination
/// metadata computed from the separate count read.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PostPage {
    pub data: Vec<Post>,
    pub pagination: PaginationMeta,
}

/// DashboardStats
///
/// Output schema for the administrative statistics dashboard
/// (GET /admin/stats). All ten figures come from one snapshot; `totalViews`
/// is null when no posts exist.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardStats {
    pub total_posts: i64,
    pub published_posts: i64,
    pub draft_posts: i64,
    pub archived_posts: i64,
    pub total_comments: i64,
    pub approved_comments: i64,
    pub total_users: i64,
    pub admin_count: i64,
    pub user_count: i64,
    pub total_views: Option<i64>,
}

// --- Request Payloads (Input Schemas) ---

/// CreatePostRequest
///
/// Input payload for submitting a new post (POST /posts). The author is
/// taken from the authenticated principal and `views` starts at zero; the
/// payload cannot set either.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub status: PostStatus,
}

/// UpdatePostRequest
///
/// Partial update payload for PUT /posts/{id}. Uses `Option<T>` throughout
/// so only supplied fields are applied (COALESCE in the repository).
/// `isFeatured` is silently dropped for non-admin callers.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

/// CreateCommentRequest
///
/// Input payload for posting a comment. The author is forced from the
/// authenticated principal; `parentId` threads a reply under an existing
/// comment of the same post.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateCommentRequest {
    pub content: String,
    pub post_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

/// UpdateCommentRequest
///
/// Author-scoped partial update for PATCH /comments/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateCommentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentStatus>,
}

/// ModerateCommentRequest
///
/// Admin moderation payload; the target status must differ from the
/// comment's current status.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ModerateCommentRequest {
    pub status: CommentStatus,
}
