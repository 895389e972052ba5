//! Form data under `form/form-data`.

use serde_json::json;

use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::query_pairs;
use crate::services::{fetch_json, fetch_optional_json};
use crate::transport::Transport;
use crate::types::{Form, FormList, FormSubmit, FormSubmitResult};

pub trait FormApi {
    fn get_form_data_by_task_id(&self, task_id: &str) -> Result<Form>;

    fn get_form_data_by_process_definition_id(&self, process_definition_id: &str) -> Result<FormList>;

    /// Submit form properties. A task submission completes the task and the
    /// server answers without a body (`None`); a start-form submission returns
    /// the started process instance.
    fn submit_task_form_data(&self, submit: &FormSubmit) -> Result<Option<FormSubmitResult>>;
}

#[derive(Debug, Clone)]
pub struct FormService<T> {
    transport: T,
}

impl<T: Transport> FormService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> FormApi for FormService<T> {
    fn get_form_data_by_task_id(&self, task_id: &str) -> Result<Form> {
        let request = HttpRequest::get("form/form-data").with_query(&query_pairs(&json!({"taskId": task_id}))?);
        fetch_json(&self.transport, request)
    }

    fn get_form_data_by_process_definition_id(&self, process_definition_id: &str) -> Result<FormList> {
        let pairs = query_pairs(&json!({"processDefinitionId": process_definition_id}))?;
        fetch_json(&self.transport, HttpRequest::get("form/form-data").with_query(&pairs))
    }

    fn submit_task_form_data(&self, submit: &FormSubmit) -> Result<Option<FormSubmitResult>> {
        let request = HttpRequest::json(HttpMethod::Post, "form/form-data", submit)?;
        fetch_optional_json(&self.transport, request)
    }
}
