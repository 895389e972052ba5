use serde::{Deserialize, Serialize};

use super::list::DataList;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub picture_url: Option<String>,
}

pub type UserList = DataList<User>;

/// One key/value entry attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub key: Option<String>,
    pub value: Option<String>,
    pub url: Option<String>,
}

/// `identity/users/{id}/info` answers with a bare array of keys.
pub type UserInfoList = Vec<UserInfo>;

/// Filter for `identity/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub first_name_like: Option<String>,
    pub last_name_like: Option<String>,
    pub email_like: Option<String>,
    pub member_of_group: Option<String>,
    pub potential_starter: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub start: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserCreate {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }
}

/// Partial update; omitted fields are left unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_known_fields_and_ignores_unknown() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "testuser",
                "firstName": "Fred",
                "lastName": "McDonald",
                "url": "http://localhost:8182/identity/users/testuser",
                "email": "no-reply@activiti.org",
                "favouriteColour": "green"
            }"#,
        )
        .unwrap();
        assert_eq!(user.id.as_deref(), Some("testuser"));
        assert_eq!(user.first_name.as_deref(), Some("Fred"));
        assert_eq!(user.last_name.as_deref(), Some("McDonald"));
        assert_eq!(user.email.as_deref(), Some("no-reply@activiti.org"));
        assert_eq!(user.picture_url, None);
    }

    #[test]
    fn create_payload_keeps_declared_order() {
        let create = UserCreate {
            id: "testuser".to_string(),
            first_name: Some("Fred".to_string()),
            last_name: Some("McDonald".to_string()),
            email: Some("no-reply@activiti.org".to_string()),
            password: Some("123456".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&create).unwrap(),
            r#"{"id":"testuser","firstName":"Fred","lastName":"McDonald","email":"no-reply@activiti.org","password":"123456"}"#
        );
    }

    #[test]
    fn update_payload_omits_unset_fields() {
        let update = UserUpdate {
            email: Some("fred@example.org".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"email":"fred@example.org"}"#);
    }

    #[test]
    fn info_list_is_a_bare_array() {
        let infos: UserInfoList = serde_json::from_str(
            r#"[{"key":"key1","url":"http://localhost:8182/identity/users/testuser/info/key1"},{"key":"key2"}]"#,
        )
        .unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[1].key.as_deref(), Some("key2"));
        assert_eq!(infos[1].value, None);
    }
}
