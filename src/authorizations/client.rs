//! Authorizations client
//!
//! Fetches pages of express route authorizations. Every request goes
//! through three stages (prepare, send, respond) and a failure in any of them
//! is reported with the stage it happened in.

use super::id::PrivateCloudId;
use super::models::ExpressRouteAuthorization;
use crate::config::ClientConfig;
use crate::context::RequestContext;
use crate::error::{Error, Result, Stage};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{
    self, ListCompleteResult, MatchAll, NextLink, Page, PageSource, Predicate, ResponseMeta,
};
use crate::types::OptionStringExt;
use async_trait::async_trait;
use futures::Stream;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// API version sent with the first page request
pub const DEFAULT_API_VERSION: &str = "2020-03-20";

const OPERATION: &str = "authorizations.AuthorizationsClient#List";
const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Wire shape of one listing page
#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(default)]
    value: Option<Vec<ExpressRouteAuthorization>>,
    #[serde(rename = "nextLink", default)]
    next_link: Option<String>,
}

/// A request ready to send
#[derive(Debug)]
struct PreparedRequest {
    url: Url,
    config: RequestConfig,
}

/// Lists express route authorizations of a private cloud
#[derive(Debug, Clone)]
pub struct AuthorizationsClient {
    client: HttpClient,
    base_uri: Url,
}

impl AuthorizationsClient {
    /// Create a client sending through `client` to `base_uri`
    pub fn new(client: HttpClient, base_uri: &str) -> Result<Self> {
        let base_uri = Url::parse(base_uri)?;
        if base_uri.cannot_be_a_base() {
            return Err(Error::config(format!("base URI {base_uri} cannot be a base")));
        }
        Ok(Self { client, base_uri })
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http_config())?;
        Self::new(client, &config.base_uri)
    }

    /// The base URI every request is sent to
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Fetch the first page of authorizations under `id`
    pub async fn list(
        &self,
        ctx: &RequestContext,
        id: &PrivateCloudId,
    ) -> Result<Page<ExpressRouteAuthorization>> {
        self.execute(ctx, self.prepare_list(id)).await
    }

    /// Fetch the page `next_link` points to
    pub async fn list_next(
        &self,
        ctx: &RequestContext,
        next_link: NextLink,
    ) -> Result<Page<ExpressRouteAuthorization>> {
        self.execute(ctx, self.prepare_list_with_next_link(&next_link))
            .await
    }

    /// Fetch every authorization under `id`
    pub async fn list_complete(
        &self,
        ctx: &RequestContext,
        id: &PrivateCloudId,
    ) -> Result<ListCompleteResult<ExpressRouteAuthorization>> {
        self.list_complete_matching_predicate(ctx, id, MatchAll)
            .await
    }

    /// Fetch every authorization under `id` and keep those matching `predicate`
    pub async fn list_complete_matching_predicate<P>(
        &self,
        ctx: &RequestContext,
        id: &PrivateCloudId,
        predicate: P,
    ) -> Result<ListCompleteResult<ExpressRouteAuthorization>>
    where
        P: Predicate<ExpressRouteAuthorization>,
    {
        pagination::list_complete_matching(self, ctx, id, predicate).await
    }

    /// Lazily list every authorization under `id`
    pub fn list_stream<'a>(
        &'a self,
        ctx: &'a RequestContext,
        id: &'a PrivateCloudId,
    ) -> impl Stream<Item = Result<ExpressRouteAuthorization>> + 'a {
        pagination::list_stream(self, ctx, id)
    }

    async fn execute(
        &self,
        ctx: &RequestContext,
        prepared: Result<PreparedRequest>,
    ) -> Result<Page<ExpressRouteAuthorization>> {
        let prepared = prepared.map_err(|e| Error::request(OPERATION, Stage::Preparing, e))?;

        let response = self
            .send(ctx, prepared)
            .await
            .map_err(|e| Error::request(OPERATION, Stage::Sending, e))?;

        ctx.run(respond(response))
            .await
            .map_err(|e| Error::request(OPERATION, Stage::Responding, e))
    }

    fn prepare_list(&self, id: &PrivateCloudId) -> Result<PreparedRequest> {
        let url = self.with_path(&format!("{}/authorizations", id.id()));
        let config = RequestConfig::new()
            .header("Content-Type", CONTENT_TYPE)
            .query("api-version", DEFAULT_API_VERSION);
        Ok(PreparedRequest { url, config })
    }

    /// Replay the link's path and query against our own base URI
    ///
    /// Only the first value of a repeated query key is kept. Values are
    /// decoded here and encoded once more when the request is built.
    fn prepare_list_with_next_link(&self, next_link: &NextLink) -> Result<PreparedRequest> {
        let raw = next_link.as_str();
        let uri = match Url::parse(raw) {
            Err(url::ParseError::RelativeUrlWithoutBase) => self.origin().join(raw),
            parsed => parsed,
        }
        .map_err(|source| Error::ParseNextLink {
            next_link: raw.to_string(),
            source,
        })?;

        let mut config = RequestConfig::new().header("Content-Type", CONTENT_TYPE);
        let mut seen = HashSet::new();
        for (key, value) in uri.query_pairs() {
            if seen.insert(key.clone()) {
                config = config.query(key, value);
            }
        }

        Ok(PreparedRequest {
            url: self.with_path(uri.path()),
            config,
        })
    }

    /// The base URI without its path, so `with_path` adds the base path once
    fn origin(&self) -> Url {
        let mut url = self.base_uri.clone();
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    fn with_path(&self, path: &str) -> Url {
        let mut url = self.base_uri.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{base_path}/{}", path.trim_start_matches('/')));
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    async fn send(&self, ctx: &RequestContext, prepared: PreparedRequest) -> Result<Response> {
        ctx.check()?;
        debug!("GET {}", prepared.url);
        ctx.run(
            self.client
                .get_with_config(prepared.url.as_str(), prepared.config),
        )
        .await
    }
}

/// Check the status and decode one page, consuming the body on every path
async fn respond(response: Response) -> Result<Page<ExpressRouteAuthorization>> {
    let meta = ResponseMeta {
        status: response.status(),
        url: response.url().clone(),
        headers: response.headers().clone(),
    };

    let body = response.bytes().await?;

    if meta.status != StatusCode::OK {
        return Err(Error::unexpected_status(
            meta.status.as_u16(),
            String::from_utf8_lossy(&body),
        ));
    }

    let page: ListPage = serde_json::from_slice(&body).map_err(Error::Decode)?;
    let items = page.value.unwrap_or_default();
    let next_link = page.next_link.none_if_empty().map(NextLink::new);
    debug!(
        "Decoded {} authorizations, more pages: {}",
        items.len(),
        next_link.is_some()
    );

    Ok(Page::new(items, next_link).with_response(meta))
}

#[async_trait]
impl PageSource for AuthorizationsClient {
    type Parent = PrivateCloudId;
    type Item = ExpressRouteAuthorization;

    async fn fetch_first(
        &self,
        ctx: &RequestContext,
        parent: &PrivateCloudId,
    ) -> Result<Page<ExpressRouteAuthorization>> {
        self.list(ctx, parent).await
    }

    async fn fetch_next(
        &self,
        ctx: &RequestContext,
        next_link: NextLink,
    ) -> Result<Page<ExpressRouteAuthorization>> {
        self.list_next(ctx, next_link).await
    }
}
