//! Page envelope returned by listings.

use serde::{Deserialize, Serialize};

use crate::{Cursor, CursorError, PageRequest};

/// One page of results plus the information needed to fetch the next.
///
/// # Examples
/// ```
/// use pagination::{Page, PageRequest};
///
/// let request = PageRequest::first(2);
/// let page = Page::from_window(vec![1, 2, 3], request).expect("page");
/// assert_eq!(page.content, vec![1, 2]);
/// assert!(page.has_next);
/// assert!(page.next.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in listing order.
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Whether a further page exists.
    pub has_next: bool,
    /// Cursor for the following page when `has_next` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Cursor>,
}

impl<T> Page<T> {
    /// Build a page from a repository window of up to `request.window()` rows.
    ///
    /// Rows beyond the page size are dropped and only signal that another
    /// page exists.
    ///
    /// # Errors
    /// Returns [`CursorError`] if the next-page cursor cannot be encoded.
    pub fn from_window(mut rows: Vec<T>, request: PageRequest) -> Result<Self, CursorError> {
        let has_next = rows.len() > request.limit();
        rows.truncate(request.limit());
        let next = if has_next {
            Some(Cursor::encode(&request.next())?)
        } else {
            None
        };
        Ok(Self {
            content: rows,
            page: request.page(),
            size: request.size(),
            has_next,
            next,
        })
    }

    /// Transform every item while keeping the paging metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            has_next: self.has_next,
            next: self.next,
        }
    }
}
