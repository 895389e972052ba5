use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::list::DataList;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Option<String>,
    pub url: Option<String>,
    pub owner: Option<String>,
    pub assignee: Option<String>,
    pub delegation_state: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub create_time: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<i64>,
    pub suspended: Option<bool>,
    pub task_definition_key: Option<String>,
    pub tenant_id: Option<String>,
    pub category: Option<String>,
    pub form_key: Option<String>,
    pub parent_task_id: Option<String>,
    pub parent_task_url: Option<String>,
    pub execution_id: Option<String>,
    pub execution_url: Option<String>,
    pub process_instance_id: Option<String>,
    pub process_instance_url: Option<String>,
    pub process_definition_id: Option<String>,
    pub process_definition_url: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub variables: Vec<Variable>,
}

pub type TaskList = DataList<Task>;

/// A task or process variable. Doubles as request payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

pub type VariableList = Vec<Variable>;

impl Variable {
    pub fn new(name: &str, value: impl Into<Value>) -> Self {
        Self {
            name: Some(name.to_string()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, variable_type: &str) -> Self {
        self.variable_type = Some(variable_type.to_string());
        self
    }

    pub fn with_scope(mut self, scope: VariableScope) -> Self {
        self.scope = Some(scope.as_str().to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableScope {
    Local,
    Global,
}

impl VariableScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableScope::Local => "local",
            VariableScope::Global => "global",
        }
    }
}

impl fmt::Display for VariableScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Option<String>,
    pub author: Option<String>,
    pub message: Option<String>,
    pub time: Option<String>,
    pub task_id: Option<String>,
    pub task_url: Option<String>,
    pub process_instance_id: Option<String>,
    pub process_instance_url: Option<String>,
}

pub type CommentList = Vec<Comment>;

/// Filter for `runtime/tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    pub name: Option<String>,
    pub name_like: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub minimum_priority: Option<i64>,
    pub maximum_priority: Option<i64>,
    pub assignee: Option<String>,
    pub assignee_like: Option<String>,
    pub owner: Option<String>,
    pub owner_like: Option<String>,
    pub unassigned: Option<bool>,
    pub delegation_state: Option<String>,
    pub candidate_user: Option<String>,
    pub candidate_group: Option<String>,
    pub involved_user: Option<String>,
    pub process_instance_id: Option<String>,
    pub process_definition_key: Option<String>,
    pub execution_id: Option<String>,
    pub created_before: Option<String>,
    pub created_after: Option<String>,
    pub due_before: Option<String>,
    pub due_after: Option<String>,
    pub without_due_date: Option<bool>,
    pub exclude_sub_tasks: Option<bool>,
    pub active: Option<bool>,
    pub include_task_local_variables: Option<bool>,
    pub include_process_variables: Option<bool>,
    pub tenant_id: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub start: Option<u32>,
    pub size: Option<u32>,
}

/// Body for creating or updating a task. Unset fields are omitted, so an
/// update leaves them unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

pub type TaskCreate = TaskUpdate;

/// Body for `POST runtime/tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAction {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,
}

impl TaskAction {
    fn named(action: &str, assignee: Option<&str>) -> Self {
        Self {
            action: action.to_string(),
            assignee: assignee.map(str::to_string),
            variables: Vec::new(),
        }
    }

    pub fn complete(variables: Vec<Variable>) -> Self {
        Self {
            variables,
            ..Self::named("complete", None)
        }
    }

    /// Claim for `assignee`; `None` unclaims.
    pub fn claim(assignee: Option<&str>) -> Self {
        Self::named("claim", assignee)
    }

    pub fn delegate(assignee: &str) -> Self {
        Self::named("delegate", Some(assignee))
    }

    pub fn resolve() -> Self {
        Self::named("resolve", None)
    }
}

/// Query parameters for `DELETE runtime/tasks/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDeleteOptions {
    pub cascade_history: Option<bool>,
    pub delete_reason: Option<String>,
}
