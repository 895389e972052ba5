//! Models and payloads for the Activiti REST API.
//!
//! # Design
//! Response models are decoded field by field with serde. Every modeled field
//! is optional because the server guarantees presence of none of them, and
//! unknown keys are ignored so newer server versions decode cleanly.
//!
//! Request payloads skip unset fields when serialized, so a body carries
//! exactly the fields the caller provided, in declared order.

pub mod deployment;
pub mod form;
pub mod group;
pub mod identity;
pub mod list;
pub mod process_definition;
pub mod task;
pub mod user;

pub use deployment::{Deployment, DeploymentList, DeploymentQuery, DeploymentResource, DeploymentResourceList};
pub use form::{Form, FormEnumValue, FormList, FormProperty, FormSubmit, FormSubmitProperty, FormSubmitResult};
pub use group::{Group, GroupCreate, GroupList, GroupMember, GroupQuery, GroupUpdate};
pub use identity::{IdentityFamily, IdentityLink, IdentityLinkList};
pub use list::DataList;
pub use process_definition::{ProcessDefinition, ProcessDefinitionAction, ProcessDefinitionList, ProcessDefinitionQuery};
pub use task::{
    Comment, CommentList, Task, TaskAction, TaskCreate, TaskDeleteOptions, TaskList, TaskQuery, TaskUpdate, Variable,
    VariableList, VariableScope,
};
pub use user::{User, UserCreate, UserInfo, UserInfoList, UserList, UserQuery, UserUpdate};

use serde::{Deserialize, Deserializer};

/// Decode a collection that the server may send as `null`; null and a
/// missing key both become an empty `Vec`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
