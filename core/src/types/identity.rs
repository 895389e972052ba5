use std::fmt;

use serde::{Deserialize, Serialize};

/// A user or group linked to a task or process definition.
///
/// Used both as response model and as request payload; unset fields are
/// omitted from request bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

pub type IdentityLinkList = Vec<IdentityLink>;

impl IdentityLink {
    pub fn user(user_id: &str) -> Self {
        Self {
            user: Some(user_id.to_string()),
            ..Self::default()
        }
    }

    pub fn group(group_id: &str) -> Self {
        Self {
            group: Some(group_id.to_string()),
            ..Self::default()
        }
    }

    /// Link role such as `candidate`, `assignee` or `owner`.
    pub fn with_type(mut self, link_type: &str) -> Self {
        self.link_type = Some(link_type.to_string());
        self
    }
}

/// Path segment distinguishing user links from group links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityFamily {
    Users,
    Groups,
}

impl IdentityFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityFamily::Users => "users",
            IdentityFamily::Groups => "groups",
        }
    }
}

impl fmt::Display for IdentityFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
