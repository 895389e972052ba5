use serde::{Deserialize, Serialize};

use super::list::DataList;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    pub id: Option<String>,
    pub url: Option<String>,
    pub key: Option<String>,
    pub version: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tenant_id: Option<String>,
    pub deployment_id: Option<String>,
    pub deployment_url: Option<String>,
    pub resource: Option<String>,
    pub diagram_resource: Option<String>,
    pub category: Option<String>,
    pub graphical_notation_defined: Option<bool>,
    pub suspended: Option<bool>,
    pub start_form_defined: Option<bool>,
}

pub type ProcessDefinitionList = DataList<ProcessDefinition>;

/// Filter for `repository/process-definitions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinitionQuery {
    pub version: Option<i64>,
    pub name: Option<String>,
    pub name_like: Option<String>,
    pub key: Option<String>,
    pub key_like: Option<String>,
    pub resource_name: Option<String>,
    pub resource_name_like: Option<String>,
    pub category: Option<String>,
    pub category_like: Option<String>,
    pub category_not_equals: Option<String>,
    pub deployment_id: Option<String>,
    pub startable_by_user: Option<String>,
    pub latest: Option<bool>,
    pub suspended: Option<bool>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub start: Option<u32>,
    pub size: Option<u32>,
}

/// Suspend or activate body for `PUT repository/process-definitions/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinitionAction {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_process_instances: Option<bool>,
    /// ISO-8601 instant at which the action takes effect; immediate when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ProcessDefinitionAction {
    pub fn suspend() -> Self {
        Self::named("suspend")
    }

    pub fn activate() -> Self {
        Self::named("activate")
    }

    fn named(action: &str) -> Self {
        Self {
            action: action.to_string(),
            include_process_instances: None,
            date: None,
        }
    }

    pub fn include_process_instances(mut self, include: bool) -> Self {
        self.include_process_instances = Some(include);
        self
    }

    pub fn at(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }
}
