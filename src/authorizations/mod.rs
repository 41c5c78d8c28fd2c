//! Express route authorizations module
//!
//! Lists the express route authorizations of an AVS private cloud.
//!
//! # Example
//!
//! ```rust,ignore
//! use avs_authorizations::authorizations::{AuthorizationsClient, PrivateCloudId};
//! use avs_authorizations::{ClientConfig, RequestContext};
//!
//! let client = AuthorizationsClient::from_config(&ClientConfig::default())?;
//! let id = PrivateCloudId::new("sub", "rg", "cloud1");
//! let all = client.list_complete(&RequestContext::new(), &id).await?;
//! ```

mod client;
mod id;
mod models;

pub use client::{AuthorizationsClient, DEFAULT_API_VERSION};
pub use id::PrivateCloudId;
pub use models::{ExpressRouteAuthorization, ExpressRouteAuthorizationProperties, ProvisioningState};
