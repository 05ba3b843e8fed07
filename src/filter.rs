use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::models::PostStatus;

/// PostFilterParams
///
/// Raw query parameters accepted by the post listing endpoint (GET /posts).
/// Every field is optional; absent values impose no constraint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PostFilterParams {
    /// Case-insensitive substring search across title and content, plus
    /// exact tag membership. Not ranked retrieval.
    pub search: Option<String>,
    /// Comma-separated tag list; a post must carry every listed tag.
    pub tags: Option<String>,
    /// "true" or "false"; any other value imposes no constraint.
    pub is_featured: Option<String>,
    /// Exact publication status match.
    pub status: Option<PostStatus>,
    /// Exact author match.
    pub author_id: Option<Uuid>,
}

/// PostPredicate
///
/// One normalized filter condition. The list produced by `compose` is
/// combined with logical AND by the store adapter; the variants stay
/// store-agnostic so composition is unit-testable without a database.
#[derive(Debug, Clone, PartialEq)]
pub enum PostPredicate {
    /// OR of: title contains, content contains (both case-insensitive),
    /// tag set contains the exact term.
    Search(String),
    /// Tag set must contain every listed tag ("hasEvery").
    TagsContainAll(Vec<String>),
    FeaturedEquals(bool),
    StatusEquals(PostStatus),
    AuthorEquals(Uuid),
}

/// compose
///
/// Turns raw listing parameters into an ordered conjunction of predicates.
/// Pure: each predicate is added only when its source value is present and
/// non-empty, and an empty list means match-all.
pub fn compose(params: &PostFilterParams) -> Vec<PostPredicate> {
    let mut predicates = Vec::new();

    if let Some(search) = params.search.as_deref() {
        if !search.is_empty() {
            predicates.push(PostPredicate::Search(search.to_string()));
        }
    }

    if let Some(raw_tags) = params.tags.as_deref() {
        let tags: Vec<String> = raw_tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if !tags.is_empty() {
            predicates.push(PostPredicate::TagsContainAll(tags));
        }
    }

    // Mirrors the lenient tri-state parse on the wire: only the literal
    // strings "true"/"false" constrain the result.
    match params.is_featured.as_deref() {
        Some("true") => predicates.push(PostPredicate::FeaturedEquals(true)),
        Some("false") => predicates.push(PostPredicate::FeaturedEquals(false)),
        _ => {}
    }

    if let Some(status) = params.status {
        predicates.push(PostPredicate::StatusEquals(status));
    }

    if let Some(author_id) = params.author_id {
        predicates.push(PostPredicate::AuthorEquals(author_id));
    }

    predicates
}
