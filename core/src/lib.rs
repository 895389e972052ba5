//! Synchronous client for the Activiti workflow engine REST API.
//!
//! # Overview
//! Each service method maps to exactly one REST endpoint: it builds an
//! `HttpRequest`, sends it through the injected [`Transport`], and maps the
//! `HttpResponse` into a typed model or an [`ActivitiError`]. There are no
//! retries, no pagination traversal and no state between calls.
//!
//! # Design
//! - One trait per resource family (`UserApi`, `GroupApi`, `TaskApi`,
//!   `FormApi`, `DeploymentApi`, `ProcessDefinitionApi`) with one concrete
//!   service struct generic over the transport.
//! - Models decode field by field with serde; unknown keys are ignored and
//!   every field is optional.
//! - Request payloads and query objects drop unset fields and keep declared
//!   field order, so request bodies and query strings are deterministic.
//! - The HTTP exchange itself lives behind `Transport`. `UreqTransport`
//!   (feature `ureq`, on by default) is a blocking adapter;
//!   `RecordingTransport` replays canned responses for tests.
//!
//! ```no_run
//! use activiti_client::{ActivitiClient, TransportConfig, UserApi, UserQuery};
//!
//! let config = TransportConfig::new("http://localhost:8080/activiti-rest/service")
//!     .with_credentials("kermit", "kermit");
//! let client = ActivitiClient::from_config(&config);
//! let users = client.users().get_users_list(&UserQuery::default())?;
//! for user in &users {
//!     println!("{:?}", user.id);
//! }
//! # Ok::<(), activiti_client::ActivitiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod services;
pub mod transport;
pub mod types;
#[cfg(feature = "ureq")]
pub mod ureq_transport;

pub use client::ActivitiClient;
pub use config::{Credentials, TransportConfig};
pub use error::{ActivitiError, Result, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use services::{
    DeploymentApi, DeploymentService, FormApi, FormService, GroupApi, GroupService, ProcessDefinitionApi,
    ProcessDefinitionService, TaskApi, TaskService, UserApi, UserService,
};
pub use transport::{RecordingTransport, Transport};
pub use types::*;
#[cfg(feature = "ureq")]
pub use ureq_transport::UreqTransport;
