//! Search and pagination query parameters.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::search::{DocumentQuery, Page, PageRequest};
use crate::error::AppError;

/// Query string of listing endpoints: `?q=<text>&page=<n>`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,
}

impl SearchParams {
    /// The listing to run: everything when `q` is absent or blank.
    pub fn query(&self) -> DocumentQuery {
        DocumentQuery::from_param(self.q.as_deref())
    }

    /// Resolves the page number, defaulting to the first page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] for page 0.
    pub fn page_request(&self) -> Result<PageRequest, AppError> {
        match self.page {
            None => Ok(PageRequest::first()),
            Some(page) => PageRequest::new(page).ok_or_else(|| {
                AppError::bad_request("Page must be greater than 0", json!({ "page": page }))
            }),
        }
    }
}

/// Pagination metadata for responses.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl<T> From<&Page<T>> for PaginationMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages(),
        }
    }
}
