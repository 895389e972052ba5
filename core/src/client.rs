//! Entry point bundling one transport with every resource service.
//!
//! # Design
//! `ActivitiClient` owns its transport and hands out services that borrow
//! it, so a single connection pool (or a single `RecordingTransport` in
//! tests) backs every resource family. The client holds no other state.

use crate::services::{
    DeploymentService, FormService, GroupService, ProcessDefinitionService, TaskService, UserService,
};
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct ActivitiClient<T> {
    transport: T,
}

impl<T: Transport> ActivitiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn users(&self) -> UserService<&T> {
        UserService::new(&self.transport)
    }

    pub fn groups(&self) -> GroupService<&T> {
        GroupService::new(&self.transport)
    }

    pub fn tasks(&self) -> TaskService<&T> {
        TaskService::new(&self.transport)
    }

    pub fn forms(&self) -> FormService<&T> {
        FormService::new(&self.transport)
    }

    pub fn deployments(&self) -> DeploymentService<&T> {
        DeploymentService::new(&self.transport)
    }

    pub fn process_definitions(&self) -> ProcessDefinitionService<&T> {
        ProcessDefinitionService::new(&self.transport)
    }
}

#[cfg(feature = "ureq")]
impl ActivitiClient<crate::ureq_transport::UreqTransport> {
    /// Client over the bundled blocking transport.
    pub fn from_config(config: &crate::config::TransportConfig) -> Self {
        Self::new(crate::ureq_transport::UreqTransport::new(config))
    }

    /// Client configured from `ACTIVITI_*` environment variables.
    pub fn from_env() -> crate::error::Result<Self> {
        let config = crate::config::TransportConfig::from_env()?;
        tracing::debug!(base_url = %config.base_url, "activiti client configured from environment");
        Ok(Self::from_config(&config))
    }
}
