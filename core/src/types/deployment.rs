use serde::{Deserialize, Serialize};

use super::list::DataList;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub id: Option<String>,
    pub name: Option<String>,
    pub deployment_time: Option<String>,
    pub category: Option<String>,
    pub url: Option<String>,
    pub tenant_id: Option<String>,
}

pub type DeploymentList = DataList<Deployment>;

/// A file contained in a deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResource {
    pub id: Option<String>,
    pub url: Option<String>,
    pub content_url: Option<String>,
    pub media_type: Option<String>,
    /// `processDefinition`, `processImage` or `resource`.
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

pub type DeploymentResourceList = Vec<DeploymentResource>;

/// Filter for `repository/deployments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentQuery {
    pub name: Option<String>,
    pub name_like: Option<String>,
    pub category: Option<String>,
    pub category_not_equals: Option<String>,
    pub tenant_id: Option<String>,
    pub tenant_id_like: Option<String>,
    pub without_tenant_id: Option<bool>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub start: Option<u32>,
    pub size: Option<u32>,
}
