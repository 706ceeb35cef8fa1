//! Page request, opaque cursor, and page envelope primitives.
//!
//! Listing endpoints across the recipe backend share one vocabulary for
//! paging: callers describe the slice they want with a [`PageRequest`],
//! repositories return at most one window of rows, and services wrap the
//! result in a [`Page`] envelope. When a further page exists the envelope
//! carries an opaque [`Cursor`] that decodes back into the next request.

mod cursor;
mod page;
mod request;

pub use cursor::{Cursor, CursorError};
pub use page::Page;
pub use request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, SortDirection};
