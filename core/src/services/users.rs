//! Users under `identity/users`.

use serde_json::json;

use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, APPLICATION_OCTET_STREAM};
use crate::query::query_pairs;
use crate::services::{fetch_bytes, fetch_empty, fetch_json};
use crate::transport::Transport;
use crate::types::{User, UserCreate, UserInfo, UserInfoList, UserList, UserQuery, UserUpdate};

pub trait UserApi {
    fn get_user(&self, user_id: &str) -> Result<User>;

    fn get_users_list(&self, query: &UserQuery) -> Result<UserList>;

    fn create_user(&self, data: &UserCreate) -> Result<User>;

    fn update_user(&self, user_id: &str, data: &UserUpdate) -> Result<User>;

    fn delete_user(&self, user_id: &str) -> Result<()>;

    /// Raw picture bytes as stored on the server.
    fn get_user_picture(&self, user_id: &str) -> Result<Vec<u8>>;

    fn set_user_picture(&self, user_id: &str, picture: &[u8]) -> Result<()>;

    fn get_user_info_list(&self, user_id: &str) -> Result<UserInfoList>;

    fn get_user_info(&self, user_id: &str, key: &str) -> Result<UserInfo>;

    fn create_user_info(&self, user_id: &str, key: &str, value: &str) -> Result<UserInfo>;

    fn update_user_info(&self, user_id: &str, key: &str, value: &str) -> Result<UserInfo>;

    fn delete_user_info(&self, user_id: &str, key: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct UserService<T> {
    transport: T,
}

impl<T: Transport> UserService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> UserApi for UserService<T> {
    fn get_user(&self, user_id: &str) -> Result<User> {
        fetch_json(&self.transport, HttpRequest::get(format!("identity/users/{user_id}")))
    }

    fn get_users_list(&self, query: &UserQuery) -> Result<UserList> {
        let request = HttpRequest::get("identity/users").with_query(&query_pairs(query)?);
        fetch_json(&self.transport, request)
    }

    fn create_user(&self, data: &UserCreate) -> Result<User> {
        let request = HttpRequest::json(HttpMethod::Post, "identity/users", data)?;
        fetch_json(&self.transport, request)
    }

    fn update_user(&self, user_id: &str, data: &UserUpdate) -> Result<User> {
        let request = HttpRequest::json(HttpMethod::Put, format!("identity/users/{user_id}"), data)?;
        fetch_json(&self.transport, request)
    }

    fn delete_user(&self, user_id: &str) -> Result<()> {
        fetch_empty(&self.transport, HttpRequest::delete(format!("identity/users/{user_id}")))
    }

    fn get_user_picture(&self, user_id: &str) -> Result<Vec<u8>> {
        fetch_bytes(&self.transport, HttpRequest::get(format!("identity/users/{user_id}/picture")))
    }

    fn set_user_picture(&self, user_id: &str, picture: &[u8]) -> Result<()> {
        let request = HttpRequest::new(HttpMethod::Put, format!("identity/users/{user_id}/picture"))
            .with_body(APPLICATION_OCTET_STREAM, picture.to_vec());
        fetch_empty(&self.transport, request)
    }

    fn get_user_info_list(&self, user_id: &str) -> Result<UserInfoList> {
        fetch_json(&self.transport, HttpRequest::get(format!("identity/users/{user_id}/info")))
    }

    fn get_user_info(&self, user_id: &str, key: &str) -> Result<UserInfo> {
        fetch_json(&self.transport, HttpRequest::get(format!("identity/users/{user_id}/info/{key}")))
    }

    fn create_user_info(&self, user_id: &str, key: &str, value: &str) -> Result<UserInfo> {
        let request = HttpRequest::json(
            HttpMethod::Post,
            format!("identity/users/{user_id}/info"),
            &json!({"key": key, "value": value}),
        )?;
        fetch_json(&self.transport, request)
    }

    fn update_user_info(&self, user_id: &str, key: &str, value: &str) -> Result<UserInfo> {
        let request = HttpRequest::json(
            HttpMethod::Put,
            format!("identity/users/{user_id}/info/{key}"),
            &json!({"value": value}),
        )?;
        fetch_json(&self.transport, request)
    }

    fn delete_user_info(&self, user_id: &str, key: &str) -> Result<()> {
        fetch_empty(&self.transport, HttpRequest::delete(format!("identity/users/{user_id}/info/{key}")))
    }
}
