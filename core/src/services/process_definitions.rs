//! Process definitions and their candidate starters under
//! `repository/process-definitions`.

use serde_json::json;

use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::query_pairs;
use crate::services::{fetch_bytes, fetch_empty, fetch_json};
use crate::transport::Transport;
use crate::types::{
    IdentityFamily, IdentityLink, IdentityLinkList, ProcessDefinition, ProcessDefinitionAction, ProcessDefinitionList,
    ProcessDefinitionQuery,
};

pub trait ProcessDefinitionApi {
    fn get_process_definitions_list(&self, query: &ProcessDefinitionQuery) -> Result<ProcessDefinitionList>;

    fn get_process_definition(&self, process_definition_id: &str) -> Result<ProcessDefinition>;

    fn update_process_definition_category(&self, process_definition_id: &str, category: &str)
        -> Result<ProcessDefinition>;

    /// Send a suspend action; the `action` field of `options` is forced to `suspend`.
    fn suspend_process_definition(
        &self,
        process_definition_id: &str,
        options: &ProcessDefinitionAction,
    ) -> Result<ProcessDefinition>;

    /// Send an activate action; the `action` field of `options` is forced to `activate`.
    fn activate_process_definition(
        &self,
        process_definition_id: &str,
        options: &ProcessDefinitionAction,
    ) -> Result<ProcessDefinition>;

    /// The BPMN XML the definition was deployed from.
    fn get_process_definition_resource_data(&self, process_definition_id: &str) -> Result<Vec<u8>>;

    fn get_candidate_starters(&self, process_definition_id: &str) -> Result<IdentityLinkList>;

    fn add_candidate_starter(&self, process_definition_id: &str, link: &IdentityLink) -> Result<IdentityLink>;

    fn get_candidate_starter(
        &self,
        process_definition_id: &str,
        family: IdentityFamily,
        identity_id: &str,
    ) -> Result<IdentityLink>;

    fn delete_candidate_starter(
        &self,
        process_definition_id: &str,
        family: IdentityFamily,
        identity_id: &str,
    ) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct ProcessDefinitionService<T> {
    transport: T,
}

impl<T: Transport> ProcessDefinitionService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    fn send_action(&self, process_definition_id: &str, action: ProcessDefinitionAction) -> Result<ProcessDefinition> {
        let request = HttpRequest::json(
            HttpMethod::Put,
            format!("repository/process-definitions/{process_definition_id}"),
            &action,
        )?;
        fetch_json(&self.transport, request)
    }
}

impl<T: Transport> ProcessDefinitionApi for ProcessDefinitionService<T> {
    fn get_process_definitions_list(&self, query: &ProcessDefinitionQuery) -> Result<ProcessDefinitionList> {
        let request = HttpRequest::get("repository/process-definitions").with_query(&query_pairs(query)?);
        fetch_json(&self.transport, request)
    }

    fn get_process_definition(&self, process_definition_id: &str) -> Result<ProcessDefinition> {
        let request = HttpRequest::get(format!("repository/process-definitions/{process_definition_id}"));
        fetch_json(&self.transport, request)
    }

    fn update_process_definition_category(
        &self,
        process_definition_id: &str,
        category: &str,
    ) -> Result<ProcessDefinition> {
        let request = HttpRequest::json(
            HttpMethod::Put,
            format!("repository/process-definitions/{process_definition_id}"),
            &json!({"category": category}),
        )?;
        fetch_json(&self.transport, request)
    }

    fn suspend_process_definition(
        &self,
        process_definition_id: &str,
        options: &ProcessDefinitionAction,
    ) -> Result<ProcessDefinition> {
        let action = ProcessDefinitionAction {
            action: "suspend".to_string(),
            ..options.clone()
        };
        self.send_action(process_definition_id, action)
    }

    fn activate_process_definition(
        &self,
        process_definition_id: &str,
        options: &ProcessDefinitionAction,
    ) -> Result<ProcessDefinition> {
        let action = ProcessDefinitionAction {
            action: "activate".to_string(),
            ..options.clone()
        };
        self.send_action(process_definition_id, action)
    }

    fn get_process_definition_resource_data(&self, process_definition_id: &str) -> Result<Vec<u8>> {
        let request = HttpRequest::get(format!("repository/process-definitions/{process_definition_id}/resourcedata"));
        fetch_bytes(&self.transport, request)
    }

    fn get_candidate_starters(&self, process_definition_id: &str) -> Result<IdentityLinkList> {
        let request = HttpRequest::get(format!("repository/process-definitions/{process_definition_id}/identitylinks"));
        fetch_json(&self.transport, request)
    }

    fn add_candidate_starter(&self, process_definition_id: &str, link: &IdentityLink) -> Result<IdentityLink> {
        let request = HttpRequest::json(
            HttpMethod::Post,
            format!("repository/process-definitions/{process_definition_id}/identitylinks"),
            link,
        )?;
        fetch_json(&self.transport, request)
    }

    fn get_candidate_starter(
        &self,
        process_definition_id: &str,
        family: IdentityFamily,
        identity_id: &str,
    ) -> Result<IdentityLink> {
        let request = HttpRequest::get(format!(
            "repository/process-definitions/{process_definition_id}/identitylinks/{family}/{identity_id}"
        ));
        fetch_json(&self.transport, request)
    }

    fn delete_candidate_starter(
        &self,
        process_definition_id: &str,
        family: IdentityFamily,
        identity_id: &str,
    ) -> Result<()> {
        let request = HttpRequest::delete(format!(
            "repository/process-definitions/{process_definition_id}/identitylinks/{family}/{identity_id}"
        ));
        fetch_empty(&self.transport, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use crate::transport::RecordingTransport;

    fn definition() -> serde_json::Value {
        json!({
            "id": "oneTaskProcess:1:4",
            "url": "http://localhost:8182/repository/process-definitions/oneTaskProcess%3A1%3A4",
            "version": 1,
            "key": "oneTaskProcess",
            "category": "Examples",
            "suspended": false,
            "name": "The One Task Process",
            "description": "This is a process for testing purposes",
            "deploymentId": "2",
            "deploymentUrl": "http://localhost:8081/repository/deployments/2",
            "graphicalNotationDefined": true,
            "resource": "http://localhost:8182/repository/deployments/2/resources/testProcess.xml",
            "diagramResource": "http://localhost:8182/repository/deployments/2/resources/testProcess.png",
            "startFormDefined": false
        })
    }

    #[test]
    fn list_encodes_query_in_declared_order() {
        let body = json!({"data": [definition()], "total": 1, "start": 0, "sort": "name", "order": "asc", "size": 1});
        let transport = RecordingTransport::with_responses([HttpResponse::json(200, &body)]);
        let query = ProcessDefinitionQuery {
            sort: Some("name".to_string()),
            latest: Some(true),
            key: Some("oneTaskProcess".to_string()),
            ..Default::default()
        };
        let list = ProcessDefinitionService::new(&transport)
            .get_process_definitions_list(&query)
            .unwrap();

        assert_eq!(
            transport.last_request().unwrap().path,
            "repository/process-definitions?key=oneTaskProcess&latest=true&sort=name"
        );
        assert_eq!(list.data[0].key.as_deref(), Some("oneTaskProcess"));
        assert_eq!(list.data[0].start_form_defined, Some(false));
    }

    #[test]
    fn category_update_puts_category_only() {
        let transport = RecordingTransport::with_responses([HttpResponse::json(200, &definition())]);
        ProcessDefinitionService::new(&transport)
            .update_process_definition_category("oneTaskProcess:1:4", "updatedcategory")
            .unwrap();
        let req = transport.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "repository/process-definitions/oneTaskProcess:1:4");
        assert_eq!(req.body_text().as_deref(), Some(r#"{"category":"updatedcategory"}"#));
    }

    #[test]
    fn suspend_and_activate_force_their_action() {
        let transport = RecordingTransport::with_responses([
            HttpResponse::json(200, &definition()),
            HttpResponse::json(200, &definition()),
        ]);
        let service = ProcessDefinitionService::new(&transport);
        service
            .suspend_process_definition("p:1:1", &ProcessDefinitionAction::activate().include_process_instances(false))
            .unwrap();
        service
            .activate_process_definition("p:1:1", &ProcessDefinitionAction::activate().at("2013-04-15T00:42:12Z"))
            .unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0].body_text().as_deref(),
            Some(r#"{"action":"suspend","includeProcessInstances":false}"#)
        );
        assert_eq!(
            requests[1].body_text().as_deref(),
            Some(r#"{"action":"activate","date":"2013-04-15T00:42:12Z"}"#)
        );
    }

    #[test]
    fn resource_data_is_raw() {
        let xml = b"<?xml version=\"1.0\"?><definitions/>".to_vec();
        let transport = RecordingTransport::with_responses([HttpResponse::new(200, xml.clone())]);
        let data = ProcessDefinitionService::new(&transport)
            .get_process_definition_resource_data("p:1:1")
            .unwrap();
        assert_eq!(data, xml);
        assert_eq!(
            transport.last_request().unwrap().path,
            "repository/process-definitions/p:1:1/resourcedata"
        );
    }

    #[test]
    fn candidate_starters() {
        let link = json!({
            "url": "http://localhost:8182/repository/process-definitions/p%3A1%3A1/identitylinks/groups/admin",
            "user": null,
            "group": "admin",
            "type": "candidate"
        });
        let transport = RecordingTransport::with_responses([
            HttpResponse::json(200, &json!([link.clone()])),
            HttpResponse::json(201, &link),
            HttpResponse::json(200, &link),
            HttpResponse::no_content(),
        ]);
        let service = ProcessDefinitionService::new(&transport);

        let all = service.get_candidate_starters("p:1:1").unwrap();
        let added = service.add_candidate_starter("p:1:1", &IdentityLink::group("admin")).unwrap();
        let fetched = service
            .get_candidate_starter("p:1:1", IdentityFamily::Groups, "admin")
            .unwrap();
        service
            .delete_candidate_starter("p:1:1", IdentityFamily::Groups, "admin")
            .unwrap();

        assert_eq!(all, vec![added.clone()]);
        assert_eq!(fetched.group.as_deref(), Some("admin"));
        let requests = transport.requests();
        assert_eq!(requests[0].path, "repository/process-definitions/p:1:1/identitylinks");
        assert_eq!(requests[1].body_text().as_deref(), Some(r#"{"group":"admin"}"#));
        assert_eq!(requests[2].path, "repository/process-definitions/p:1:1/identitylinks/groups/admin");
        assert_eq!(requests[3].method, HttpMethod::Delete);
        assert_eq!(requests[3].path, "repository/process-definitions/p:1:1/identitylinks/groups/admin");
    }
}
