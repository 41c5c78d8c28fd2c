//! Express route authorization resource model

use serde::{Deserialize, Serialize};

/// An express route authorization of a private cloud
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpressRouteAuthorization {
    /// Full resource id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Authorization name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Authorization properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ExpressRouteAuthorizationProperties>,
}

/// Properties of an express route authorization
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressRouteAuthorizationProperties {
    /// The ID of the ExpressRoute Circuit Authorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub express_route_authorization_id: Option<String>,
    /// The key of the ExpressRoute Circuit Authorization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub express_route_authorization_key: Option<String>,
    /// The state of the authorization provisioning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<ProvisioningState>,
}

/// Provisioning state of an express route authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProvisioningState {
    Failed,
    Succeeded,
    Updating,
    /// A state this client does not know about
    #[serde(other)]
    Unknown,
}
