//! Pagination driver
//!
//! Follows continuation links until the server returns a terminal page.
//! There is no bound on the number of pages: a server that never stops
//! issuing links keeps the driver fetching.

use super::types::{ListCompleteResult, NextLink, PageSource, Predicate};
use crate::context::RequestContext;
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

/// Fetch every page under `parent` and keep the items matching `predicate`
///
/// Items keep page-fetch order, and server order within a page. The first
/// failure aborts the listing and the items gathered so far are dropped.
pub async fn list_complete_matching<S, P>(
    source: &S,
    ctx: &RequestContext,
    parent: &S::Parent,
    predicate: P,
) -> Result<ListCompleteResult<S::Item>>
where
    S: PageSource + ?Sized,
    P: Predicate<S::Item>,
{
    let mut items = Vec::new();
    let mut page_count = 1usize;

    let mut page = source
        .fetch_first(ctx, parent)
        .await
        .map_err(Error::initial_page)?;

    loop {
        let (page_items, next_link) = page.into_parts();
        let fetched = page_items.len();
        items.extend(page_items.into_iter().filter(|item| predicate.matches(item)));
        debug!(
            "Page {page_count}: {fetched} items, {} matched so far",
            items.len()
        );

        let Some(next_link) = next_link else {
            break;
        };

        page = source
            .fetch_next(ctx, next_link)
            .await
            .map_err(Error::next_page)?;
        page_count += 1;
    }

    debug!("Listing complete: {} items in {page_count} pages", items.len());
    Ok(ListCompleteResult { items })
}

enum Cursor {
    Start,
    Next(NextLink),
    Done,
}

/// Lazily list every item under `parent`, one page at a time
///
/// The next page is fetched only once the current one has been drained. The
/// stream yields the first error it meets and then ends; it never resumes
/// mid-chain. Call again to restart from the first page.
pub fn list_stream<'a, S>(
    source: &'a S,
    ctx: &'a RequestContext,
    parent: &'a S::Parent,
) -> impl Stream<Item = Result<S::Item>> + 'a
where
    S: PageSource + ?Sized,
{
    stream::try_unfold(Cursor::Start, move |cursor| async move {
        let page = match cursor {
            Cursor::Start => source
                .fetch_first(ctx, parent)
                .await
                .map_err(Error::initial_page)?,
            Cursor::Next(next_link) => source
                .fetch_next(ctx, next_link)
                .await
                .map_err(Error::next_page)?,
            Cursor::Done => return Ok(None),
        };

        let (items, next_link) = page.into_parts();
        let cursor = next_link.map_or(Cursor::Done, Cursor::Next);
        let items = stream::iter(items.into_iter().map(Ok::<_, Error>));
        Ok::<_, Error>(Some((items, cursor)))
    })
    .try_flatten()
}
