use async_trait::async_trait;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use blog_api::{
    AppState,
    auth::AuthUser,
    config::AppConfig,
    error::ApiError,
    filter::{PostFilterParams, PostPredicate},
    handlers,
    models::{
        Comment, CommentStatus, CommentWithPost, CreateCommentRequest, CreatePostRequest,
        DashboardStats, ModerateCommentRequest, PaginationMeta, Post, PostDetail, PostPage,
        PostRef, UpdateCommentRequest, UpdatePostRequest, User, UserRole,
    },
    pagination::{PageOptions, PageParams},
    repository::Repository,
};
use std::sync::Arc;
use uuid::Uuid;

// --- Mock Repository Implementation ---

// Central control point for handler-logic tests: canned outputs plus
// failure switches, so handlers can be exercised without a database.
struct MockRepoControl {
    // When set, lookups and mutations report the resource as missing.
    missing: bool,
    // When set, mutation paths report an ownership violation.
    deny_ownership: bool,
    // When set, moderation reports a same-status transition.
    moderation_conflict: bool,

    page_to_return: PostPage,
    post_to_return: Post,
    comment_to_return: Comment,
    stats_to_return: DashboardStats,
}

impl Default for MockRepoControl {
    fn default() -> Self {
        MockRepoControl {
            missing: false,
            deny_ownership: false,
            moderation_conflict: false,
            page_to_return: PostPage {
                data: vec![Post::default()],
                pagination: PaginationMeta {
                    total_data: 1,
                    current_page: 1,
                    data_limit: 5,
                    total_pages: 1,
                },
            },
            post_to_return: Post::default(),
            comment_to_return: Comment::default(),
            stats_to_return: DashboardStats::default(),
        }
    }
}

impl MockRepoControl {
    fn guard(&self, resource: &'static str) -> Result<(), ApiError> {
        if self.missing {
            return Err(ApiError::NotFound(resource));
        }
        if self.deny_ownership {
            return Err(ApiError::OwnershipViolation);
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for MockRepoControl {
    async fn list_posts(
        &self,
        _predicates: &[PostPredicate],
        _options: &PageOptions,
    ) -> Result<PostPage, ApiError> {
        Ok(self.page_to_return.clone())
    }
    async fn view_post(&self, _id: Uuid) -> Result<PostDetail, ApiError> {
        if self.missing {
            return Err(ApiError::NotFound("post"));
        }
        Ok(PostDetail {
            post: self.post_to_return.clone(),
            comments: vec![],
        })
    }
    async fn list_posts_by_author(&self, _author_id: Uuid) -> Result<Vec<Post>, ApiError> {
        if self.missing {
            return Err(ApiError::NotFound("active author"));
        }
        Ok(vec![self.post_to_return.clone()])
    }
    async fn create_post(
        &self,
        _req: CreatePostRequest,
        _author_id: Uuid,
    ) -> Result<Post, ApiError> {
        Ok(self.post_to_return.clone())
    }
    async fn update_post(
        &self,
        _id: Uuid,
        _req: UpdatePostRequest,
        _principal: &AuthUser,
    ) -> Result<Post, ApiError> {
        self.guard("post")?;
        Ok(self.post_to_return.clone())
    }
    async fn delete_post(&self, _id: Uuid, _principal: &AuthUser) -> Result<Post, ApiError> {
        self.guard("post")?;
        Ok(self.post_to_return.clone())
    }
    async fn create_comment(
        &self,
        _req: CreateCommentRequest,
        _author_id: Uuid,
    ) -> Result<Comment, ApiError> {
        if self.missing {
            return Err(ApiError::NotFound("post"));
        }
        Ok(self.comment_to_return.clone())
    }
    async fn get_comment(&self, _id: Uuid) -> Result<CommentWithPost, ApiError> {
        if self.missing {
            return Err(ApiError::NotFound("comment"));
        }
        Ok(CommentWithPost {
            comment: self.comment_to_return.clone(),
            post: PostRef::default(),
        })
    }
    async fn list_comments_by_author(
        &self,
        _author_id: Uuid,
    ) -> Result<Vec<CommentWithPost>, ApiError> {
        Ok(vec![])
    }
    async fn update_own_comment(
        &self,
        _id: Uuid,
        _req: UpdateCommentRequest,
        _author_id: Uuid,
    ) -> Result<Comment, ApiError> {
        self.guard("comment")?;
        Ok(self.comment_to_return.clone())
    }
    async fn delete_comment(&self, _id: Uuid, _principal: &AuthUser) -> Result<Comment, ApiError> {
        self.guard("comment")?;
        Ok(self.comment_to_return.clone())
    }
    async fn moderate_comment(
        &self,
        _id: Uuid,
        new_status: CommentStatus,
    ) -> Result<Comment, ApiError> {
        if self.missing {
            return Err(ApiError::NotFound("comment"));
        }
        if self.moderation_conflict {
            return Err(ApiError::InvalidModerationTransition(new_status));
        }
        Ok(self.comment_to_return.clone())
    }
    async fn get_user(&self, _id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(None)
    }
    async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        Ok(self.stats_to_return.clone())
    }
}

// --- Helpers ---

fn state_with(mock: MockRepoControl) -> AppState {
    AppState {
        repo: Arc::new(mock),
        config: AppConfig::default(),
    }
}

fn user_principal() -> AuthUser {
    AuthUser {
        id: Uuid::new_v4(),
        role: UserRole::User,
    }
}

fn admin_principal() -> AuthUser {
    AuthUser {
        id: Uuid::new_v4(),
        role: UserRole::Admin,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_list_posts_passes_envelope_through() {
    let mut mock = MockRepoControl::default();
    mock.page_to_return.pagination = PaginationMeta {
        total_data: 25,
        current_page: 2,
        data_limit: 10,
        total_pages: 3,
    };
    let state = state_with(mock);

    let result = handlers::list_posts(
        State(state),
        Query(PostFilterParams::default()),
        Query(PageParams::default()),
    )
    .await
    .unwrap();

    assert_eq!(result.0.pagination.total_data, 25);
    assert_eq!(result.0.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_get_post_not_found_maps_to_404() {
    let state = state_with(MockRepoControl {
        missing: true,
        ..Default::default()
    });

    let err = handlers::get_post(State(state), Path(Uuid::new_v4()))
        .await
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_post_returns_created() {
    let state = state_with(MockRepoControl::default());

    let (status, _body) = handlers::create_post(
        user_principal(),
        State(state),
        axum::Json(CreatePostRequest {
            title: "Title".to_string(),
            content: "Body".to_string(),
            ..Default::default()
        }),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_update_post_ownership_violation_maps_to_403() {
    let state = state_with(MockRepoControl {
        deny_ownership: true,
        ..Default::default()
    });

    let err = handlers::update_post(
        user_principal(),
        State(state),
        Path(Uuid::new_v4()),
        axum::Json(UpdatePostRequest::default()),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::OwnershipViolation));
    assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_comment_not_found_maps_to_404() {
    let state = state_with(MockRepoControl {
        missing: true,
        ..Default::default()
    });

    let err = handlers::delete_comment(user_principal(), State(state), Path(Uuid::new_v4()))
        .await
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats_gate_rejects_non_admin() {
    let state = state_with(MockRepoControl::default());

    let err = handlers::get_stats(user_principal(), State(state))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden));
    assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_stats_gate_admits_admin() {
    let mut mock = MockRepoControl::default();
    mock.stats_to_return.total_posts = 7;
    let state = state_with(mock);

    let stats = handlers::get_stats(admin_principal(), State(state))
        .await
        .unwrap();

    assert_eq!(stats.0.total_posts, 7);
}

#[tokio::test]
async fn test_moderation_gate_rejects_non_admin() {
    let state = state_with(MockRepoControl::default());

    let err = handlers::moderate_comment(
        user_principal(),
        State(state),
        Path(Uuid::new_v4()),
        axum::Json(ModerateCommentRequest {
            status: CommentStatus::Approved,
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden));
}

#[tokio::test]
async fn test_moderation_conflict_maps_to_409() {
    let state = state_with(MockRepoControl {
        moderation_conflict: true,
        ..Default::default()
    });

    let err = handlers::moderate_comment(
        admin_principal(),
        State(state),
        Path(Uuid::new_v4()),
        axum::Json(ModerateCommentRequest {
            status: CommentStatus::Approved,
        }),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::InvalidModerationTransition(_)));
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_my_posts_surfaces_inactive_author_as_404() {
    let state = state_with(MockRepoControl {
        missing: true,
        ..Default::default()
    });

    let err = handlers::get_my_posts(user_principal(), State(state))
        .await
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}
