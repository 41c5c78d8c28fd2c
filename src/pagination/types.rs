//! Pagination types and traits
//!
//! Defines the page, continuation token, predicate and page source
//! abstractions the driver is written against.

use crate::context::RequestContext;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::fmt;
use url::Url;

/// Opaque server-issued reference to the next page
///
/// Not `Clone`: a link is moved into the fetch that consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct NextLink(String);

impl NextLink {
    /// Wrap a raw `nextLink` value
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    /// The raw link
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw link
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NextLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transport metadata of the response a page was decoded from
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// Final HTTP status
    pub status: StatusCode,
    /// Final request URL (after redirects)
    pub url: Url,
    /// Response headers
    pub headers: HeaderMap,
}

/// One HTTP round trip's worth of items plus optional continuation state
#[derive(Debug)]
pub struct Page<T> {
    items: Vec<T>,
    next_link: Option<NextLink>,
    response: Option<ResponseMeta>,
}

impl<T> Page<T> {
    /// Create a page from decoded items and an optional link to its successor
    pub fn new(items: Vec<T>, next_link: Option<NextLink>) -> Self {
        Self {
            items,
            next_link,
            response: None,
        }
    }

    /// A page with no successor
    pub fn terminal(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Attach the response this page was decoded from
    #[must_use]
    pub fn with_response(mut self, response: ResponseMeta) -> Self {
        self.response = Some(response);
        self
    }

    /// Items on this page, in server order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Link to the next page, if any
    pub fn next_link(&self) -> Option<&NextLink> {
        self.next_link.as_ref()
    }

    /// Whether another page follows this one
    pub fn has_more(&self) -> bool {
        self.next_link.is_some()
    }

    /// Transport metadata, when the page came off the wire
    pub fn response(&self) -> Option<&ResponseMeta> {
        self.response.as_ref()
    }

    /// Split into items and the continuation link
    pub fn into_parts(self) -> (Vec<T>, Option<NextLink>) {
        (self.items, self.next_link)
    }
}

/// Caller-supplied filter applied to every listed item
///
/// Implemented for any `Fn(&T) -> bool`, so closures can be passed directly.
pub trait Predicate<T> {
    /// Whether `item` belongs in the result
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Predicate that accepts every item
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl<T> Predicate<T> for MatchAll {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// Every matching item of a listing, in page-fetch order
#[derive(Debug, Clone, PartialEq)]
pub struct ListCompleteResult<T> {
    /// Matching items
    pub items: Vec<T>,
}

impl<T> ListCompleteResult<T> {
    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for ListCompleteResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Something that can fetch pages of a listing
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Identifies what is being listed
    type Parent: Sync + ?Sized;
    /// Listed item
    type Item: Send;

    /// Fetch the first page of the listing under `parent`
    async fn fetch_first(
        &self,
        ctx: &RequestContext,
        parent: &Self::Parent,
    ) -> Result<Page<Self::Item>>;

    /// Fetch the page a continuation link points to
    async fn fetch_next(
        &self,
        ctx: &RequestContext,
        next_link: NextLink,
    ) -> Result<Page<Self::Item>>;

    /// Consume `page` and fetch its successor
    ///
    /// Fails with [`Error::ExhaustedPages`] when `page` is terminal.
    async fn load_more(
        &self,
        ctx: &RequestContext,
        page: Page<Self::Item>,
    ) -> Result<Page<Self::Item>> {
        match page.into_parts() {
            (_, Some(next_link)) => self.fetch_next(ctx, next_link).await,
            (_, None) => Err(Error::ExhaustedPages),
        }
    }
}
