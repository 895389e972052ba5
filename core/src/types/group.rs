use serde::{Deserialize, Serialize};

use super::list::DataList;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Option<String>,
    pub url: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
}

pub type GroupList = DataList<Group>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub user_id: Option<String>,
    pub group_id: Option<String>,
    pub url: Option<String>,
}

/// Filter for `identity/groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupQuery {
    pub id: Option<String>,
    pub name: Option<String>,
    pub name_like: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    pub member: Option<String>,
    pub potential_starter: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub start: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCreate {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
}

impl GroupCreate {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_maps_to_group_type() {
        let group: Group = serde_json::from_str(
            r#"{"id":"sales","url":"http://localhost:8182/identity/groups/sales","name":"Sales","type":"assignment"}"#,
        )
        .unwrap();
        assert_eq!(group.group_type.as_deref(), Some("assignment"));

        let create = GroupCreate {
            name: Some("Sales".to_string()),
            group_type: Some("assignment".to_string()),
            ..GroupCreate::new("sales")
        };
        assert_eq!(
            serde_json::to_string(&create).unwrap(),
            r#"{"id":"sales","name":"Sales","type":"assignment"}"#
        );
    }
}
