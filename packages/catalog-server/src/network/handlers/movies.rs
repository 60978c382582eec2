//! Movie endpoints: listing with search/sort, point lookup, create, update.
//!
//! All query-parameter validation lives here, at the edge. The catalog
//! service receives only a fully validated [`ListQuery`] and performs no
//! re-validation.

use axum::extract::{Path, Query, State};
use axum::Json;
use catalog_core::{ListQuery, MovieDraft, MovieRecord, SearchColumn, SortField, SortOrder};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::network::error::ApiError;

/// Minimum search key length when no column scope is given.
///
/// A short key against the cross-column OR matches too much to be useful.
const MIN_UNSCOPED_KEY_LEN: usize = 4;

/// Raw query parameters for `GET /movies`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListParams {
    /// Column to scope the search to, or blank for the default set.
    pub search_column: String,
    /// Search text.
    pub search_key: String,
    /// Field to sort by, or blank for store order.
    pub sort_by: String,
    /// `asc` or `desc`, case-insensitive.
    pub sort_order: String,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            search_column: String::new(),
            search_key: String::new(),
            sort_by: String::new(),
            sort_order: "asc".to_string(),
        }
    }
}

/// Response body for a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedMovie {
    /// The store-assigned id.
    pub id: u64,
}

/// `GET /movies` — filtered, sorted listing.
///
/// # Errors
///
/// 400 for any invalid parameter combination, 500 for store failures.
pub async fn list_movies_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MovieRecord>>, ApiError> {
    let query = validate_list_params(&params)?;
    let movies = state.service.list_movies(&query).await?;
    Ok(Json(movies))
}

/// `GET /movies/{id}` — point lookup.
///
/// # Errors
///
/// 404 if no movie has that id, 500 for store failures.
pub async fn get_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MovieRecord>, ApiError> {
    match state.service.get_movie(id).await? {
        Some(movie) => Ok(Json(movie)),
        None => Err(ApiError::NotFound("no movie found for that id".to_string())),
    }
}

/// `POST /movies` — create a movie, returning its assigned id.
///
/// # Errors
///
/// 400 for a blank title, 500 for store failures.
pub async fn create_movie_handler(
    State(state): State<AppState>,
    Json(draft): Json<MovieDraft>,
) -> Result<Json<CreatedMovie>, ApiError> {
    let id = state.service.create_movie(draft).await?;
    Ok(Json(CreatedMovie { id }))
}

/// `PUT /movies` — update a movie in place.
///
/// # Errors
///
/// 404 for an unknown id, 400 for a blank title, 500 for store failures.
pub async fn update_movie_handler(
    State(state): State<AppState>,
    Json(record): Json<MovieRecord>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.service.update_movie(&record).await?;
    Ok(Json(serde_json::json!({ "message": "movie updated" })))
}

/// Validates the raw listing parameters into a [`ListQuery`].
///
/// The rules, in order:
/// 1. a non-blank `searchColumn` must name a record field;
/// 2. a column scope requires a non-blank `searchKey`;
/// 3. an unscoped `searchKey` must be at least 4 characters;
/// 4. `sortOrder` must be `asc` or `desc`;
/// 5. `sortBy=cast` is rejected outright, any other non-blank `sortBy`
///    must name a sortable field.
fn validate_list_params(params: &ListParams) -> Result<ListQuery, ApiError> {
    let column_name = params.search_column.trim();
    let search_key = params.search_key.trim();

    let column = if column_name.is_empty() {
        None
    } else {
        let column = SearchColumn::parse(column_name)
            .ok_or_else(|| ApiError::bad_request("invalid search column name supplied"))?;
        Some(column)
    };

    if column.is_some() && search_key.is_empty() {
        return Err(ApiError::bad_request(
            "searchKey cannot be blank if searchColumn is supplied",
        ));
    }

    if column.is_none()
        && !search_key.is_empty()
        && search_key.chars().count() < MIN_UNSCOPED_KEY_LEN
    {
        return Err(ApiError::bad_request("searchKey is too small to search"));
    }

    let sort_order = SortOrder::parse(&params.sort_order)
        .ok_or_else(|| ApiError::bad_request("invalid sort order"))?;

    let sort_name = params.sort_by.trim();
    let sort_field = if sort_name.is_empty() {
        None
    } else if sort_name.eq_ignore_ascii_case("cast") {
        return Err(ApiError::bad_request(
            "sort by cast is not available at this moment",
        ));
    } else {
        let field = SortField::parse(sort_name)
            .ok_or_else(|| ApiError::bad_request("invalid sort field supplied"))?;
        Some(field)
    };

    Ok(ListQuery {
        column,
        search_key: search_key.to_string(),
        sort_field,
        sort_order,
    })
}
