//! Private cloud resource identifier
//!
//! The parent every authorization listing hangs off.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

const PROVIDER: &str = "Microsoft.AVS";

/// Identifies an AVS private cloud
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrivateCloudId {
    pub subscription_id: String,
    pub resource_group_name: String,
    pub private_cloud_name: String,
}

impl PrivateCloudId {
    /// Create an id from its components
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group_name: impl Into<String>,
        private_cloud_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group_name: resource_group_name.into(),
            private_cloud_name: private_cloud_name.into(),
        }
    }

    /// Parse an id, requiring the exact casing of the static segments
    pub fn parse(input: &str) -> Result<Self> {
        parse_segments(input, false)
    }

    /// Parse an id, ignoring the casing of the static segments
    pub fn parse_insensitively(input: &str) -> Result<Self> {
        parse_segments(input, true)
    }

    /// Render the id as a resource path
    pub fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/{PROVIDER}/privateClouds/{}",
            self.subscription_id, self.resource_group_name, self.private_cloud_name
        )
    }
}

impl fmt::Display for PrivateCloudId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for PrivateCloudId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_insensitively(s)
    }
}

fn parse_segments(input: &str, insensitive: bool) -> Result<PrivateCloudId> {
    let trimmed = input.trim_end_matches('/');
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Err(Error::invalid_resource_id(input, "expected a leading '/'"));
    };

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.len() != 8 {
        return Err(Error::invalid_resource_id(
            input,
            format!("expected 8 segments, got {}", segments.len()),
        ));
    }

    let expected = [
        (0, "subscriptions"),
        (2, "resourceGroups"),
        (4, "providers"),
        (5, PROVIDER),
        (6, "privateClouds"),
    ];
    for (index, keyword) in expected {
        let segment = segments[index];
        let matches = if insensitive {
            segment.eq_ignore_ascii_case(keyword)
        } else {
            segment == keyword
        };
        if !matches {
            return Err(Error::invalid_resource_id(
                input,
                format!("expected segment {index} to be {keyword:?}, got {segment:?}"),
            ));
        }
    }

    let value = |index: usize, name: &str| -> Result<String> {
        match segments[index] {
            "" => Err(Error::invalid_resource_id(input, format!("{name} is empty"))),
            segment => Ok(segment.to_string()),
        }
    };

    Ok(PrivateCloudId {
        subscription_id: value(1, "subscription id")?,
        resource_group_name: value(3, "resource group name")?,
        private_cloud_name: value(7, "private cloud name")?,
    })
}
