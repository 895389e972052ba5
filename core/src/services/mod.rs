//! One service per resource family.
//!
//! # Design
//! Each family is a trait declaring its operations (`UserApi`, `TaskApi`, ...)
//! paired with a concrete service struct generic over the [`Transport`] it
//! holds. Every operation is a single exchange: build the request, send it,
//! check the status, map the body. The helpers in this module implement the
//! last three steps once for JSON, bytes, empty and optional results.

pub mod deployments;
pub mod forms;
pub mod groups;
pub mod process_definitions;
pub mod tasks;
pub mod users;

pub use deployments::{DeploymentApi, DeploymentService};
pub use forms::{FormApi, FormService};
pub use groups::{GroupApi, GroupService};
pub use process_definitions::{ProcessDefinitionApi, ProcessDefinitionService};
pub use tasks::{TaskApi, TaskService};
pub use users::{UserApi, UserService};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ActivitiError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Send `request` and fail on any non-2xx status.
pub(crate) fn execute<T: Transport + ?Sized>(transport: &T, request: HttpRequest) -> Result<HttpResponse> {
    let method = request.method;
    let path = request.path.clone();
    let response = transport.send(request)?;
    debug!(%method, %path, status = response.status, "activiti exchange");
    check_status(response)
}

/// Map non-success status codes to `ActivitiError::Api`.
fn check_status(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }
    let body = response.text();
    warn!(status = response.status, "activiti request rejected");
    debug!(status = response.status, %body, "rejected response body");
    Err(ActivitiError::Api {
        status: response.status,
        body,
    })
}

/// Exchange and decode the JSON body into `M`.
pub(crate) fn fetch_json<T, M>(transport: &T, request: HttpRequest) -> Result<M>
where
    T: Transport + ?Sized,
    M: DeserializeOwned,
{
    let response = execute(transport, request)?;
    serde_json::from_slice(&response.body).map_err(ActivitiError::Deserialization)
}

/// Exchange and decode the body if there is one; 204 or an empty body yields `None`.
pub(crate) fn fetch_optional_json<T, M>(transport: &T, request: HttpRequest) -> Result<Option<M>>
where
    T: Transport + ?Sized,
    M: DeserializeOwned,
{
    let response = execute(transport, request)?;
    if response.status == 204 || response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&response.body)
        .map(Some)
        .map_err(ActivitiError::Deserialization)
}

/// Exchange and return the body bytes untouched.
pub(crate) fn fetch_bytes<T: Transport + ?Sized>(transport: &T, request: HttpRequest) -> Result<Vec<u8>> {
    Ok(execute(transport, request)?.body)
}

/// Exchange and discard whatever body a success carries.
pub(crate) fn fetch_empty<T: Transport + ?Sized>(transport: &T, request: HttpRequest) -> Result<()> {
    execute(transport, request).map(drop)
}
