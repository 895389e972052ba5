use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::list::DataList;

/// Form data of a task or of a process definition's start form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub form_key: Option<String>,
    pub deployment_id: Option<String>,
    pub process_definition_id: Option<String>,
    pub process_definition_url: Option<String>,
    pub task_id: Option<String>,
    pub task_url: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub form_properties: Vec<FormProperty>,
}

pub type FormList = DataList<Form>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormProperty {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub value: Option<Value>,
    pub readable: Option<bool>,
    pub writable: Option<bool>,
    pub required: Option<bool>,
    pub date_pattern: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_empty")]
    pub enum_values: Vec<FormEnumValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEnumValue {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Body for `POST form/form-data`. Set `task_id` to complete a task, or
/// `process_definition_id` to start a process instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<FormSubmitProperty>,
}

impl FormSubmit {
    pub fn for_task(task_id: &str) -> Self {
        Self {
            task_id: Some(task_id.to_string()),
            ..Self::default()
        }
    }

    pub fn for_process_definition(process_definition_id: &str) -> Self {
        Self {
            process_definition_id: Some(process_definition_id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_business_key(mut self, business_key: &str) -> Self {
        self.business_key = Some(business_key.to_string());
        self
    }

    pub fn with_property(mut self, id: &str, value: &str) -> Self {
        self.properties.push(FormSubmitProperty {
            id: id.to_string(),
            value: value.to_string(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmitProperty {
    pub id: String,
    pub value: String,
}

/// Process instance started by a start-form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmitResult {
    pub id: Option<String>,
    pub url: Option<String>,
    pub business_key: Option<String>,
    pub suspended: Option<bool>,
    pub process_definition_id: Option<String>,
    pub process_definition_url: Option<String>,
    pub activity_id: Option<String>,
}
