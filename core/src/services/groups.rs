//! Groups and group membership under `identity/groups`.

use serde_json::json;

use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::query_pairs;
use crate::services::{fetch_empty, fetch_json};
use crate::transport::Transport;
use crate::types::{Group, GroupCreate, GroupList, GroupMember, GroupQuery, GroupUpdate};

pub trait GroupApi {
    fn get_group(&self, group_id: &str) -> Result<Group>;

    fn get_groups_list(&self, query: &GroupQuery) -> Result<GroupList>;

    fn create_group(&self, data: &GroupCreate) -> Result<Group>;

    fn update_group(&self, group_id: &str, data: &GroupUpdate) -> Result<Group>;

    fn delete_group(&self, group_id: &str) -> Result<()>;

    fn add_group_member(&self, group_id: &str, user_id: &str) -> Result<GroupMember>;

    fn delete_group_member(&self, group_id: &str, user_id: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct GroupService<T> {
    transport: T,
}

impl<T: Transport> GroupService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> GroupApi for GroupService<T> {
    fn get_group(&self, group_id: &str) -> Result<Group> {
        fetch_json(&self.transport, HttpRequest::get(format!("identity/groups/{group_id}")))
    }

    fn get_groups_list(&self, query: &GroupQuery) -> Result<GroupList> {
        let request = HttpRequest::get("identity/groups").with_query(&query_pairs(query)?);
        fetch_json(&self.transport, request)
    }

    fn create_group(&self, data: &GroupCreate) -> Result<Group> {
        fetch_json(&self.transport, HttpRequest::json(HttpMethod::Post, "identity/groups", data)?)
    }

    fn update_group(&self, group_id: &str, data: &GroupUpdate) -> Result<Group> {
        let request = HttpRequest::json(HttpMethod::Put, format!("identity/groups/{group_id}"), data)?;
        fetch_json(&self.transport, request)
    }

    fn delete_group(&self, group_id: &str) -> Result<()> {
        fetch_empty(&self.transport, HttpRequest::delete(format!("identity/groups/{group_id}")))
    }

    fn add_group_member(&self, group_id: &str, user_id: &str) -> Result<GroupMember> {
        let request = HttpRequest::json(
            HttpMethod::Post,
            format!("identity/groups/{group_id}/members"),
            &json!({"userId": user_id}),
        )?;
        fetch_json(&self.transport, request)
    }

    fn delete_group_member(&self, group_id: &str, user_id: &str) -> Result<()> {
        let request = HttpRequest::delete(format!("identity/groups/{group_id}/members/{user_id}"));
        fetch_empty(&self.transport, request)
    }
}
