//! Tasks, task variables, identity links and comments under `runtime/tasks`.

use serde_json::json;

use crate::error::{ActivitiError, Result};
use crate::http::{HttpMethod, HttpRequest};
use crate::query::query_pairs;
use crate::services::{fetch_empty, fetch_json};
use crate::transport::Transport;
use crate::types::{
    Comment, CommentList, IdentityFamily, IdentityLink, IdentityLinkList, Task, TaskAction, TaskCreate,
    TaskDeleteOptions, TaskList, TaskQuery, TaskUpdate, Variable, VariableList, VariableScope,
};

pub trait TaskApi {
    fn get_task(&self, task_id: &str) -> Result<Task>;

    fn get_tasks_list(&self, query: &TaskQuery) -> Result<TaskList>;

    /// Create a standalone task not bound to any process instance.
    fn create_task(&self, data: &TaskCreate) -> Result<Task>;

    fn update_task(&self, task_id: &str, data: &TaskUpdate) -> Result<Task>;

    /// Complete, claim, delegate or resolve a task.
    fn task_action(&self, task_id: &str, action: &TaskAction) -> Result<()>;

    fn delete_task(&self, task_id: &str, options: &TaskDeleteOptions) -> Result<()>;

    fn get_task_variables(&self, task_id: &str, scope: Option<VariableScope>) -> Result<VariableList>;

    fn get_task_variable(&self, task_id: &str, name: &str, scope: Option<VariableScope>) -> Result<Variable>;

    fn create_task_variables(&self, task_id: &str, variables: &[Variable]) -> Result<VariableList>;

    /// Replace the variable named by `variable.name`. A variable without a
    /// name fails with `InvalidRequest` before anything is sent.
    fn update_task_variable(&self, task_id: &str, variable: &Variable) -> Result<Variable>;

    fn delete_task_variable(&self, task_id: &str, name: &str, scope: Option<VariableScope>) -> Result<()>;

    fn get_task_identity_links(&self, task_id: &str) -> Result<IdentityLinkList>;

    fn create_task_identity_link(&self, task_id: &str, link: &IdentityLink) -> Result<IdentityLink>;

    fn delete_task_identity_link(
        &self,
        task_id: &str,
        family: IdentityFamily,
        identity_id: &str,
        link_type: &str,
    ) -> Result<()>;

    fn get_task_comments(&self, task_id: &str) -> Result<CommentList>;

    fn create_task_comment(&self, task_id: &str, message: &str, save_process_instance_id: bool) -> Result<Comment>;

    fn get_task_comment(&self, task_id: &str, comment_id: &str) -> Result<Comment>;

    fn delete_task_comment(&self, task_id: &str, comment_id: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct TaskService<T> {
    transport: T,
}

impl<T: Transport> TaskService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

fn scope_query(scope: Option<VariableScope>) -> Result<Vec<(String, String)>> {
    query_pairs(&json!({"scope": scope.map(|s| s.as_str())}))
}

impl<T: Transport> TaskApi for TaskService<T> {
    fn get_task(&self, task_id: &str) -> Result<Task> {
        fetch_json(&self.transport, HttpRequest::get(format!("runtime/tasks/{task_id}")))
    }

    fn get_tasks_list(&self, query: &TaskQuery) -> Result<TaskList> {
        let request = HttpRequest::get("runtime/tasks").with_query(&query_pairs(query)?);
        fetch_json(&self.transport, request)
    }

    fn create_task(&self, data: &TaskCreate) -> Result<Task> {
        fetch_json(&self.transport, HttpRequest::json(HttpMethod::Post, "runtime/tasks", data)?)
    }

    fn update_task(&self, task_id: &str, data: &TaskUpdate) -> Result<Task> {
        let request = HttpRequest::json(HttpMethod::Put, format!("runtime/tasks/{task_id}"), data)?;
        fetch_json(&self.transport, request)
    }

    fn task_action(&self, task_id: &str, action: &TaskAction) -> Result<()> {
        let request = HttpRequest::json(HttpMethod::Post, format!("runtime/tasks/{task_id}"), action)?;
        fetch_empty(&self.transport, request)
    }

    fn delete_task(&self, task_id: &str, options: &TaskDeleteOptions) -> Result<()> {
        let request = HttpRequest::delete(format!("runtime/tasks/{task_id}")).with_query(&query_pairs(options)?);
        fetch_empty(&self.transport, request)
    }

    fn get_task_variables(&self, task_id: &str, scope: Option<VariableScope>) -> Result<VariableList> {
        let request = HttpRequest::get(format!("runtime/tasks/{task_id}/variables")).with_query(&scope_query(scope)?);
        fetch_json(&self.transport, request)
    }

    fn get_task_variable(&self, task_id: &str, name: &str, scope: Option<VariableScope>) -> Result<Variable> {
        let request =
            HttpRequest::get(format!("runtime/tasks/{task_id}/variables/{name}")).with_query(&scope_query(scope)?);
        fetch_json(&self.transport, request)
    }

    fn create_task_variables(&self, task_id: &str, variables: &[Variable]) -> Result<VariableList> {
        let request = HttpRequest::json(HttpMethod::Post, format!("runtime/tasks/{task_id}/variables"), variables)?;
        fetch_json(&self.transport, request)
    }

    fn update_task_variable(&self, task_id: &str, variable: &Variable) -> Result<Variable> {
        let name = variable
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ActivitiError::InvalidRequest("variable update needs a variable name".to_string()))?;
        let request = HttpRequest::json(HttpMethod::Put, format!("runtime/tasks/{task_id}/variables/{name}"), variable)?;
        fetch_json(&self.transport, request)
    }

    fn delete_task_variable(&self, task_id: &str, name: &str, scope: Option<VariableScope>) -> Result<()> {
        let request =
            HttpRequest::delete(format!("runtime/tasks/{task_id}/variables/{name}")).with_query(&scope_query(scope)?);
        fetch_empty(&self.transport, request)
    }

    fn get_task_identity_links(&self, task_id: &str) -> Result<IdentityLinkList> {
        fetch_json(&self.transport, HttpRequest::get(format!("runtime/tasks/{task_id}/identitylinks")))
    }

    fn create_task_identity_link(&self, task_id: &str, link: &IdentityLink) -> Result<IdentityLink> {
        let request = HttpRequest::json(HttpMethod::Post, format!("runtime/tasks/{task_id}/identitylinks"), link)?;
        fetch_json(&self.transport, request)
    }

    fn delete_task_identity_link(
        &self,
        task_id: &str,
        family: IdentityFamily,
        identity_id: &str,
        link_type: &str,
    ) -> Result<()> {
        let request =
            HttpRequest::delete(format!("runtime/tasks/{task_id}/identitylinks/{family}/{identity_id}/{link_type}"));
        fetch_empty(&self.transport, request)
    }

    fn get_task_comments(&self, task_id: &str) -> Result<CommentList> {
        fetch_json(&self.transport, HttpRequest::get(format!("runtime/tasks/{task_id}/comments")))
    }

    fn create_task_comment(&self, task_id: &str, message: &str, save_process_instance_id: bool) -> Result<Comment> {
        let request = HttpRequest::json(
            HttpMethod::Post,
            format!("runtime/tasks/{task_id}/comments"),
            &json!({"message": message, "saveProcessInstanceId": save_process_instance_id}),
        )?;
        fetch_json(&self.transport, request)
    }

    fn get_task_comment(&self, task_id: &str, comment_id: &str) -> Result<Comment> {
        fetch_json(&self.transport, HttpRequest::get(format!("runtime/tasks/{task_id}/comments/{comment_id}")))
    }

    fn delete_task_comment(&self, task_id: &str, comment_id: &str) -> Result<()> {
        fetch_empty(&self.transport, HttpRequest::delete(format!("runtime/tasks/{task_id}/comments/{comment_id}")))
    }
}
