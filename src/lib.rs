// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # AVS Authorizations
//!
//! Lists the express route authorizations of an AVS private cloud, following
//! the server's `nextLink` continuation tokens transparently.
//!
//! ## Features
//!
//! - **Transparent Pagination**: One call fetches every page, in order
//! - **Client-Side Filtering**: Any `Fn(&T) -> bool` works as a predicate
//! - **All-or-Nothing**: A failed page aborts the listing, no partial results
//! - **Lazy Streaming**: Consume huge listings one page at a time
//! - **Cancellation**: Deadlines and cancellation tokens reach every request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use avs_authorizations::authorizations::{AuthorizationsClient, PrivateCloudId};
//! use avs_authorizations::{ClientConfig, RequestContext, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = AuthorizationsClient::from_config(&ClientConfig::default())?;
//!     let id = PrivateCloudId::parse(
//!         "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.AVS/privateClouds/cloud1",
//!     )?;
//!
//!     let ctx = RequestContext::new();
//!     let all = client.list_complete(&ctx, &id).await?;
//!     let mine = client
//!         .list_complete_matching_predicate(&ctx, &id, |a: &_| {
//!             matches!(&a.name, Some(n) if n.starts_with("team-"))
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   AuthorizationsClient                       │
//! │  list_complete()   list_complete_matching_predicate()        │
//! │  list_stream()     list() / list_next() / load_more()        │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────┬───────┴──────────┬─────────────────────┐
//! │   Pagination        │   Page Fetch     │   HTTP              │
//! ├─────────────────────┼──────────────────┼─────────────────────┤
//! │ Follow nextLink     │ Prepare          │ Retry + Backoff     │
//! │ Predicate filter    │ Send             │ Rate Limit          │
//! │ Lazy stream         │ Respond          │ Default Headers     │
//! └─────────────────────┴──────────────────┴─────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document error variant fields before publishing

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types
pub mod types;

/// Cancellation and deadlines
pub mod context;

/// HTTP client with retry and rate limiting
pub mod http;

/// Paginated listing
pub mod pagination;

/// Express route authorizations client
pub mod authorizations;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use context::RequestContext;
pub use error::{Error, ErrorKind, Result, Stage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
