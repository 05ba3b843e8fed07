use crate::{
    auth::AuthUser,
    error::ApiError,
    filter::PostPredicate,
    models::{
        Comment, CommentNode, CommentStatus, CommentWithPost, CreateCommentRequest,
        CreatePostRequest, DashboardStats, PaginationMeta, Post, PostDetail, PostPage, PostRef,
        UpdateCommentRequest, UpdatePostRequest, User,
    },
    pagination::PageOptions,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, query_builder::QueryBuilder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// The abstract contract for all persistence operations, letting the
/// handlers interact with the data layer without knowing the concrete
/// implementation (Postgres, Mock, etc.).
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's task boundaries.
/// Operations that mutate owned resources take the acting principal
/// explicitly; nothing is read from ambient request state.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Post Retrieval ---
    // Filtered, paginated listing plus a separate count under the same
    // predicate set.
    async fn list_posts(
        &self,
        predicates: &[PostPredicate],
        options: &PageOptions,
    ) -> Result<PostPage, ApiError>;
    // Atomic view-increment, then the post with its approved 3-level
    // comment tree, inside one transaction.
    async fn view_post(&self, id: Uuid) -> Result<PostDetail, ApiError>;
    // Owner listing, including drafts; requires the author to be ACTIVE.
    async fn list_posts_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, ApiError>;

    // --- Post Mutation ---
    async fn create_post(&self, req: CreatePostRequest, author_id: Uuid)
    -> Result<Post, ApiError>;
    async fn update_post(
        &self,
        id: Uuid,
        req: UpdatePostRequest,
        principal: &AuthUser,
    ) -> Result<Post, ApiError>;
    async fn delete_post(&self, id: Uuid, principal: &AuthUser) -> Result<Post, ApiError>;

    // --- Comments & Moderation ---
    async fn create_comment(
        &self,
        req: CreateCommentRequest,
        author_id: Uuid,
    ) -> Result<Comment, ApiError>;
    // Owner/admin views: not status-filtered.
    async fn get_comment(&self, id: Uuid) -> Result<CommentWithPost, ApiError>;
    async fn list_comments_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<CommentWithPost>, ApiError>;
    // Authorship check only, no role elevation.
    async fn update_own_comment(
        &self,
        id: Uuid,
        req: UpdateCommentRequest,
        author_id: Uuid,
    ) -> Result<Comment, ApiError>;
    async fn delete_comment(&self, id: Uuid, principal: &AuthUser) -> Result<Comment, ApiError>;
    // Target status must differ from the current status.
    async fn moderate_comment(
        &self,
        id: Uuid,
        new_status: CommentStatus,
    ) -> Result<Comment, ApiError>;

    // --- Users / Stats ---
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn get_stats(&self) -> Result<DashboardStats, ApiError>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer across the
/// application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by
/// PostgreSQL.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Column lists shared by every SELECT/RETURNING so FromRow mapping stays
// uniform across queries.
const POST_COLUMNS: &str =
    "id, title, content, tags, is_featured, status, views, author_id, created_at, updated_at";
const COMMENT_COLUMNS: &str =
    "id, content, author_id, post_id, parent_id, status, created_at, updated_at";

fn post_select_with_count() -> String {
    format!(
        "SELECT {POST_COLUMNS}, \
         (SELECT COUNT(*) FROM comments c WHERE c.post_id = posts.id) AS comment_count \
         FROM posts"
    )
}

/// push_predicates
///
/// Translates the composer's tagged predicates into SQL, always through bind
/// parameters (QueryBuilder keeps raw input out of the query text). The
/// predicates are combined with AND; an empty slice leaves the query
/// unfiltered.
fn push_predicates(builder: &mut QueryBuilder<'_, Postgres>, predicates: &[PostPredicate]) {
    for (i, predicate) in predicates.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        match predicate {
            PostPredicate::Search(term) => {
                let pattern = format!("%{}%", term);
                builder.push("(title ILIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" OR content ILIKE ");
                builder.push_bind(pattern);
                builder.push(" OR ");
                builder.push_bind(term.clone());
                builder.push(" = ANY(tags))");
            }
            PostPredicate::TagsContainAll(tags) => {
                builder.push("tags @> ");
                builder.push_bind(tags.clone());
            }
            PostPredicate::FeaturedEquals(value) => {
                builder.push("is_featured = ");
                builder.push_bind(*value);
            }
            PostPredicate::StatusEquals(status) => {
                builder.push("status = ");
                builder.push_bind(*status);
            }
            PostPredicate::AuthorEquals(author_id) => {
                builder.push("author_id = ");
                builder.push_bind(*author_id);
            }
        }
    }
}

/// build_comment_tree
///
/// Shapes three pre-fetched, pre-ordered levels of approved comments into
/// the nested reply tree. Pure: grouping preserves the SQL ordering of each
/// level, and nothing below the third level is ever attached.
fn build_comment_tree(
    roots: Vec<Comment>,
    replies: Vec<Comment>,
    nested: Vec<Comment>,
) -> Vec<CommentNode> {
    let mut nested_by_parent: HashMap<Uuid, Vec<Comment>> = HashMap::new();
    for comment in nested {
        if let Some(parent_id) = comment.parent_id {
            nested_by_parent.entry(parent_id).or_default().push(comment);
        }
    }

    let mut replies_by_parent: HashMap<Uuid, Vec<CommentNode>> = HashMap::new();
    for comment in replies {
        let leaves = nested_by_parent
            .remove(&comment.id)
            .unwrap_or_default()
            .into_iter()
            .map(|leaf| CommentNode {
                comment: leaf,
                replies: Vec::new(),
            })
            .collect();
        if let Some(parent_id) = comment.parent_id {
            replies_by_parent
                .entry(parent_id)
                .or_default()
                .push(CommentNode {
                    comment,
                    replies: leaves,
                });
        }
    }

    roots
        .into_iter()
        .map(|root| CommentNode {
            replies: replies_by_parent.remove(&root.id).unwrap_or_default(),
            comment: root,
        })
        .collect()
}

/// CommentPostRow
///
/// Flat row shape for comment reads joined with the parent post summary;
/// mapped manually into the nested `CommentWithPost`.
#[derive(sqlx::FromRow)]
struct CommentPostRow {
    id: Uuid,
    content: String,
    author_id: Uuid,
    post_id: Uuid,
    parent_id: Option<Uuid>,
    status: CommentStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    post_title: String,
    post_views: i32,
}

impl From<CommentPostRow> for CommentWithPost {
    fn from(row: CommentPostRow) -> Self {
        CommentWithPost {
            post: PostRef {
                id: row.post_id,
                title: row.post_title,
                views: row.post_views,
            },
            comment: Comment {
                id: row.id,
                content: row.content,
                author_id: row.author_id,
                post_id: row.post_id,
                parent_id: row.parent_id,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

const COMMENT_WITH_POST_SELECT: &str = "SELECT c.id, c.content, c.author_id, c.post_id, \
     c.parent_id, c.status, c.created_at, c.updated_at, \
     p.title AS post_title, p.views AS post_views \
     FROM comments c JOIN posts p ON c.post_id = p.id";

#[async_trait]
impl Repository for PostgresRepository {
    /// list_posts
    ///
    /// Page fetch and total count are two separate reads under the same
    /// predicate set; under concurrent writes the envelope may be
    /// momentarily inconsistent with the page — an accepted tradeoff, not
    /// something to lock around.
    async fn list_posts(
        &self,
        predicates: &[PostPredicate],
        options: &PageOptions,
    ) -> Result<PostPage, ApiError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(post_select_with_count());
        push_predicates(&mut builder, predicates);
        builder.push(" ORDER BY ");
        builder.push(options.sort_column());
        builder.push(" ");
        builder.push(options.sort_direction());
        builder.push(" LIMIT ");
        builder.push_bind(options.limit);
        builder.push(" OFFSET ");
        builder.push_bind(options.skip);

        let data = builder
            .build_query_as::<Post>()
            .fetch_all(&self.pool)
            .await?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts");
        push_predicates(&mut count_builder, predicates);
        let total_data: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(PostPage {
            data,
            pagination: PaginationMeta {
                total_data,
                current_page: options.page,
                data_limit: options.limit,
                total_pages: (total_data as u64).div_ceil(options.limit as u64) as i64,
            },
        })
    }

    /// view_post
    ///
    /// One transaction: increment the view counter (fail-fast when the post
    /// does not exist — the read is never attempted), then read the
    /// post-increment row, the total comment count, and the approved comment
    /// tree. Concurrent increments on the same post serialize on the row
    /// lock taken by the UPDATE.
    async fn view_post(&self, id: Uuid) -> Result<PostDetail, ApiError> {
        let mut tx = self.pool.begin().await?;

        let update_sql =
            format!("UPDATE posts SET views = views + 1 WHERE id = $1 RETURNING {POST_COLUMNS}");
        let post: Option<Post> = sqlx::query_as(&update_sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        // Dropping the transaction rolls back; no partial effect remains.
        let mut post = post.ok_or(ApiError::NotFound("post"))?;

        let comment_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        post.comment_count = Some(comment_count);

        // Exactly three levels, APPROVED at every one: roots newest-first,
        // deeper levels oldest-first.
        let roots_sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE post_id = $1 AND parent_id IS NULL AND status = 'APPROVED' \
             ORDER BY created_at DESC"
        );
        let roots: Vec<Comment> = sqlx::query_as(&roots_sql)
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;

        let replies_sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE parent_id = ANY($1) AND status = 'APPROVED' \
             ORDER BY created_at ASC"
        );

        let root_ids: Vec<Uuid> = roots.iter().map(|c| c.id).collect();
        let replies: Vec<Comment> = if root_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as(&replies_sql)
                .bind(&root_ids[..])
                .fetch_all(&mut *tx)
                .await?
        };

        let reply_ids: Vec<Uuid> = replies.iter().map(|c| c.id).collect();
        let nested: Vec<Comment> = if reply_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as(&replies_sql)
                .bind(&reply_ids[..])
                .fetch_all(&mut *tx)
                .await?
        };

        tx.commit().await?;

        Ok(PostDetail {
            post,
            comments: build_comment_tree(roots, replies, nested),
        })
    }

    /// list_posts_by_author
    ///
    /// The author row must exist with status ACTIVE before anything is
    /// listed; a missing or blocked author surfaces as NotFound.
    async fn list_posts_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, ApiError> {
        let active: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM users WHERE id = $1 AND status = 'ACTIVE'")
                .bind(author_id)
                .fetch_optional(&self.pool)
                .await?;
        active.ok_or(ApiError::NotFound("active author"))?;

        let sql = format!(
            "{} WHERE author_id = $1 ORDER BY created_at DESC",
            post_select_with_count()
        );
        let posts = sqlx::query_as(&sql)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    /// create_post
    ///
    /// The author id comes from the authenticated principal, never from the
    /// payload; views start at zero.
    async fn create_post(
        &self,
        req: CreatePostRequest,
        author_id: Uuid,
    ) -> Result<Post, ApiError> {
        let sql = format!(
            "INSERT INTO posts (id, title, content, tags, is_featured, status, views, author_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, 0, $7, NOW(), NOW()) \
             RETURNING {POST_COLUMNS}"
        );
        let post = sqlx::query_as(&sql)
            .bind(Uuid::new_v4())
            .bind(req.title)
            .bind(req.content)
            .bind(req.tags)
            .bind(req.is_featured)
            .bind(req.status)
            .bind(author_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(post)
    }

    /// update_post
    ///
    /// Fetch-then-guard: existence first (NotFound), then ownership
    /// (OwnershipViolation), then the partial update via COALESCE. A
    /// non-admin payload has `is_featured` dropped silently. A row deleted
    /// between the check and the write surfaces as NotFound.
    async fn update_post(
        &self,
        id: Uuid,
        mut req: UpdatePostRequest,
        principal: &AuthUser,
    ) -> Result<Post, ApiError> {
        let owner: Option<Uuid> = sqlx::query_scalar("SELECT author_id FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let owner = owner.ok_or(ApiError::NotFound("post"))?;

        if !principal.can_mutate(owner) {
            return Err(ApiError::OwnershipViolation);
        }
        if !principal.is_admin() {
            req.is_featured = None;
        }

        let sql = format!(
            "UPDATE posts \
             SET title = COALESCE($2, title), \
                 content = COALESCE($3, content), \
                 tags = COALESCE($4, tags), \
                 is_featured = COALESCE($5, is_featured), \
                 status = COALESCE($6, status), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {POST_COLUMNS}"
        );
        sqlx::query_as(&sql)
            .bind(id)
            .bind(req.title)
            .bind(req.content)
            .bind(req.tags)
            .bind(req.is_featured)
            .bind(req.status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::NotFound("post"))
    }

    /// delete_post
    ///
    /// Same fetch-then-guard shape as update_post; returns the deleted row.
    async fn delete_post(&self, id: Uuid, principal: &AuthUser) -> Result<Post, ApiError> {
        let owner: Option<Uuid> = sqlx::query_scalar("SELECT author_id FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let owner = owner.ok_or(ApiError::NotFound("post"))?;

        if !principal.can_mutate(owner) {
            return Err(ApiError::OwnershipViolation);
        }

        let sql = format!("DELETE FROM posts WHERE id = $1 RETURNING {POST_COLUMNS}");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::NotFound("post"))
    }

    /// create_comment
    ///
    /// Validates the post, then the parent (which must belong to the same
    /// post's thread), before inserting the PENDING comment. Requiring the
    /// parent to already exist precludes cycles by construction.
    async fn create_comment(
        &self,
        req: CreateCommentRequest,
        author_id: Uuid,
    ) -> Result<Comment, ApiError> {
        let post: Option<Uuid> = sqlx::query_scalar("SELECT id FROM posts WHERE id = $1")
            .bind(req.post_id)
            .fetch_optional(&self.pool)
            .await?;
        post.ok_or(ApiError::NotFound("post"))?;

        if let Some(parent_id) = req.parent_id {
            let parent_post: Option<Uuid> =
                sqlx::query_scalar("SELECT post_id FROM comments WHERE id = $1")
                    .bind(parent_id)
                    .fetch_optional(&self.pool)
                    .await?;
            match parent_post {
                Some(post_id) if post_id == req.post_id => {}
                _ => return Err(ApiError::NotFound("parent comment")),
            }
        }

        let sql = format!(
            "INSERT INTO comments (id, content, author_id, post_id, parent_id, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, 'PENDING', NOW(), NOW()) \
             RETURNING {COMMENT_COLUMNS}"
        );
        let comment = sqlx::query_as(&sql)
            .bind(Uuid::new_v4())
            .bind(req.content)
            .bind(author_id)
            .bind(req.post_id)
            .bind(req.parent_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(comment)
    }

    /// get_comment
    ///
    /// Single comment joined with its post summary. Not status-filtered:
    /// this is the owner/admin view, not the public tree.
    async fn get_comment(&self, id: Uuid) -> Result<CommentWithPost, ApiError> {
        let sql = format!("{COMMENT_WITH_POST_SELECT} WHERE c.id = $1");
        let row: Option<CommentPostRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(CommentWithPost::from)
            .ok_or(ApiError::NotFound("comment"))
    }

    /// list_comments_by_author
    ///
    /// All of an author's comments regardless of moderation state, newest
    /// first, each with its post summary.
    async fn list_comments_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<CommentWithPost>, ApiError> {
        let sql = format!("{COMMENT_WITH_POST_SELECT} WHERE c.author_id = $1 ORDER BY c.created_at DESC");
        let rows: Vec<CommentPostRow> = sqlx::query_as(&sql)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(CommentWithPost::from).collect())
    }

    /// update_own_comment
    ///
    /// Authorship check only — an admin editing someone else's comment goes
    /// through moderation, not here.
    async fn update_own_comment(
        &self,
        id: Uuid,
        req: UpdateCommentRequest,
        author_id: Uuid,
    ) -> Result<Comment, ApiError> {
        let owner: Option<Uuid> =
            sqlx::query_scalar("SELECT author_id FROM comments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        let owner = owner.ok_or(ApiError::NotFound("comment"))?;

        if owner != author_id {
            return Err(ApiError::OwnershipViolation);
        }

        let sql = format!(
            "UPDATE comments \
             SET content = COALESCE($2, content), \
                 status = COALESCE($3, status), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as(&sql)
            .bind(id)
            .bind(req.content)
            .bind(req.status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::NotFound("comment"))
    }

    /// delete_comment
    ///
    /// Ownership via the shared guard, so an admin may delete any comment
    /// and an author only their own.
    async fn delete_comment(&self, id: Uuid, principal: &AuthUser) -> Result<Comment, ApiError> {
        let owner: Option<Uuid> =
            sqlx::query_scalar("SELECT author_id FROM comments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        let owner = owner.ok_or(ApiError::NotFound("comment"))?;

        if !principal.can_mutate(owner) {
            return Err(ApiError::OwnershipViolation);
        }

        let sql = format!("DELETE FROM comments WHERE id = $1 RETURNING {COMMENT_COLUMNS}");
        sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::NotFound("comment"))
    }

    /// moderate_comment
    ///
    /// The moderation state machine: the target status must differ from the
    /// current one, otherwise the transition is rejected before any write.
    async fn moderate_comment(
        &self,
        id: Uuid,
        new_status: CommentStatus,
    ) -> Result<Comment, ApiError> {
        let current: Option<CommentStatus> =
            sqlx::query_scalar("SELECT status FROM comments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        let current = current.ok_or(ApiError::NotFound("comment"))?;

        if current == new_status {
            return Err(ApiError::InvalidModerationTransition(current));
        }

        let sql = format!(
            "UPDATE comments SET status = $2, updated_at = NOW() WHERE id = $1 \
             RETURNING {COMMENT_COLUMNS}"
        );
        sqlx::query_as(&sql)
            .bind(id)
            .bind(new_status)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::NotFound("comment"))
    }

    /// get_user
    ///
    /// Identity facts needed by the auth extractor and the ACTIVE-author
    /// check. Read-only.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as("SELECT id, email, role, status FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// get_stats
    ///
    /// All ten dashboard figures inside one REPEATABLE READ transaction so
    /// they describe a single snapshot. `total_views` is NULL when there are
    /// no posts.
    async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let total_posts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&mut *tx)
            .await?;
        let published_posts: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = 'PUBLISHED'")
                .fetch_one(&mut *tx)
                .await?;
        let draft_posts: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = 'DRAFT'")
                .fetch_one(&mut *tx)
                .await?;
        let archived_posts: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = 'ARCHIVED'")
                .fetch_one(&mut *tx)
                .await?;
        let total_comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&mut *tx)
            .await?;
        let approved_comments: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE status = 'APPROVED'")
                .fetch_one(&mut *tx)
                .await?;
        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await?;
        let admin_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'ADMIN'")
                .fetch_one(&mut *tx)
                .await?;
        let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'USER'")
            .fetch_one(&mut *tx)
            .await?;
        let total_views: Option<i64> = sqlx::query_scalar("SELECT SUM(views) FROM posts")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(DashboardStats {
            total_posts,
            published_posts,
            draft_posts,
            archived_posts,
            total_comments,
            approved_comments,
            total_users,
            admin_count,
            user_count,
            total_views,
        })
    }
}
