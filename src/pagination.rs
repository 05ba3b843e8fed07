use serde::Deserialize;
use utoipa::IntoParams;

/// Default page size when `limit` is missing or unusable.
pub const DEFAULT_LIMIT: i64 = 5;

/// Upper bound on the page size. Requests above it are normalized down
/// rather than rejected.
pub const MAX_LIMIT: i64 = 100;

/// PageParams
///
/// Raw paging/sorting parameters as they arrive on the query string. Kept as
/// strings on purpose: non-numeric input falls back to defaults instead of
/// failing extraction.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// PageOptions
///
/// Bounded, defaulted paging/sorting directives: `page >= 1`, `1 <= limit <=
/// MAX_LIMIT`, `skip = (page - 1) * limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub page: i64,
    pub limit: i64,
    pub skip: i64,
    pub sort_by: String,
    pub sort_order: String,
}

impl PageOptions {
    /// ORDER BY column for the normalized sort key. The whitelist is what
    /// keeps raw input out of the SQL text; unknown keys fall back to the
    /// creation timestamp.
    pub fn sort_column(&self) -> &'static str {
        match self.sort_by.as_str() {
            "updatedAt" => "updated_at",
            "title" => "title",
            "views" => "views",
            _ => "created_at",
        }
    }

    /// ORDER BY direction, already normalized to one of two values.
    pub fn sort_direction(&self) -> &'static str {
        if self.sort_order == "asc" { "ASC" } else { "DESC" }
    }
}

/// normalize
///
/// Turns raw paging parameters into usable directives. Missing, non-numeric
/// and non-positive values fall back to defaults; this is a leniency policy,
/// not an error path.
pub fn normalize(params: &PageParams) -> PageOptions {
    let page = parse_positive(params.page.as_deref()).unwrap_or(1);
    let limit = parse_positive(params.limit.as_deref())
        .unwrap_or(DEFAULT_LIMIT)
        .min(MAX_LIMIT);
    let skip = (page - 1) * limit;

    let sort_by = params
        .sort_by
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "createdAt".to_string());
    let sort_order = match params.sort_order.as_deref() {
        Some("asc") => "asc".to_string(),
        _ => "desc".to_string(),
    };

    PageOptions {
        page,
        limit,
        skip,
        sort_by,
        sort_order,
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
}
