//! Pagination module
//!
//! # Overview
//!
//! A listing is one logical request spread over several HTTP round trips.
//! A [`PageSource`] fetches single pages; the driver follows each page's
//! [`NextLink`] until a terminal page arrives, applies a [`Predicate`] and
//! gathers the matches into a [`ListCompleteResult`].
//!
//! The link is an opaque capability issued by the server. Nothing here looks
//! inside it; resolving it into a request is the page source's job.

mod driver;
mod types;

pub use driver::{list_complete_matching, list_stream};
pub use types::{
    ListCompleteResult, MatchAll, NextLink, Page, PageSource, Predicate, ResponseMeta,
};
