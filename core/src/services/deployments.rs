//! Deployments and their resources under `repository/deployments`.

use serde_json::json;

use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest};
use crate::query::query_pairs;
use crate::services::{fetch_bytes, fetch_empty, fetch_json};
use crate::transport::Transport;
use crate::types::{Deployment, DeploymentList, DeploymentQuery, DeploymentResource, DeploymentResourceList};

const MULTIPART_BOUNDARY: &str = "activiti-client-deployment-boundary";

pub trait DeploymentApi {
    fn get_deployments_list(&self, query: &DeploymentQuery) -> Result<DeploymentList>;

    fn get_deployment(&self, deployment_id: &str) -> Result<Deployment>;

    /// Upload a `.bpmn20.xml`, `.bar` or `.zip` file as a new deployment.
    fn create_deployment(&self, file_name: &str, content: &[u8], tenant_id: Option<&str>) -> Result<Deployment>;

    /// Delete a deployment; `cascade` also removes its process instances and history.
    fn delete_deployment(&self, deployment_id: &str, cascade: bool) -> Result<()>;

    fn get_deployment_resources(&self, deployment_id: &str) -> Result<DeploymentResourceList>;

    fn get_deployment_resource(&self, deployment_id: &str, resource_id: &str) -> Result<DeploymentResource>;

    fn get_deployment_resource_data(&self, deployment_id: &str, resource_id: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct DeploymentService<T> {
    transport: T,
}

impl<T: Transport> DeploymentService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> DeploymentApi for DeploymentService<T> {
    fn get_deployments_list(&self, query: &DeploymentQuery) -> Result<DeploymentList> {
        let request = HttpRequest::get("repository/deployments").with_query(&query_pairs(query)?);
        fetch_json(&self.transport, request)
    }

    fn get_deployment(&self, deployment_id: &str) -> Result<Deployment> {
        fetch_json(&self.transport, HttpRequest::get(format!("repository/deployments/{deployment_id}")))
    }

    fn create_deployment(&self, file_name: &str, content: &[u8], tenant_id: Option<&str>) -> Result<Deployment> {
        let (content_type, body) = multipart_body(file_name, content, tenant_id);
        let request = HttpRequest::new(HttpMethod::Post, "repository/deployments").with_body(&content_type, body);
        fetch_json(&self.transport, request)
    }

    fn delete_deployment(&self, deployment_id: &str, cascade: bool) -> Result<()> {
        let pairs = query_pairs(&json!({"cascade": cascade.then_some(true)}))?;
        let request = HttpRequest::delete(format!("repository/deployments/{deployment_id}")).with_query(&pairs);
        fetch_empty(&self.transport, request)
    }

    fn get_deployment_resources(&self, deployment_id: &str) -> Result<DeploymentResourceList> {
        let request = HttpRequest::get(format!("repository/deployments/{deployment_id}/resources"));
        fetch_json(&self.transport, request)
    }

    fn get_deployment_resource(&self, deployment_id: &str, resource_id: &str) -> Result<DeploymentResource> {
        let request = HttpRequest::get(format!("repository/deployments/{deployment_id}/resources/{resource_id}"));
        fetch_json(&self.transport, request)
    }

    fn get_deployment_resource_data(&self, deployment_id: &str, resource_id: &str) -> Result<Vec<u8>> {
        let request = HttpRequest::get(format!("repository/deployments/{deployment_id}/resourcedata/{resource_id}"));
        fetch_bytes(&self.transport, request)
    }
}

/// Encode a `multipart/form-data` body with one `file` part and an optional
/// `tenantId` field. Returns the content-type header value and the body.
fn multipart_body(file_name: &str, content: &[u8], tenant_id: Option<&str>) -> (String, Vec<u8>) {
    let mut boundary = MULTIPART_BOUNDARY.to_string();
    let tenant = tenant_id.unwrap_or_default().as_bytes();
    while contains(content, boundary.as_bytes()) || contains(tenant, boundary.as_bytes()) {
        boundary.push('-');
    }
    let file_name = escape_filename(file_name);

    let mut body = Vec::with_capacity(content.len() + 256);
    if let Some(tenant_id) = tenant_id {
        body.extend_from_slice(
            format!("--{boundary}\r\nContent-Disposition: form-data; name=\"tenantId\"\r\n\r\n{tenant_id}\r\n").as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={boundary}"), body)
}

/// Percent-encode the characters that would end the quoted `filename`
/// parameter or the header line, as browsers do for form uploads.
fn escape_filename(file_name: &str) -> String {
    let mut escaped = String::with_capacity(file_name.len());
    for c in file_name.chars() {
        match c {
            '"' => escaped.push_str("%22"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use crate::transport::RecordingTransport;

    fn deployment() -> serde_json::Value {
        json!({
            "id": "10",
            "name": "activiti-examples.bar",
            "deploymentTime": "2010-10-13T14:54:26.750+02:00",
            "category": "examples",
            "url": "http://localhost:8081/activiti-rest/service/repository/deployments/10",
            "tenantId": null
        })
    }

    #[test]
    fn list_and_get_deployments() {
        let list = json!({"data": [deployment()], "total": 1, "start": 0, "sort": "id", "order": "asc", "size": 1});
        let transport = RecordingTransport::with_responses([
            HttpResponse::json(200, &list),
            HttpResponse::json(200, &deployment()),
        ]);
        let service = DeploymentService::new(&transport);

        let query = DeploymentQuery {
            name_like: Some("%examples%".to_string()),
            ..Default::default()
        };
        let deployments = service.get_deployments_list(&query).unwrap();
        let single = service.get_deployment("10").unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].path, "repository/deployments?nameLike=%25examples%25");
        assert_eq!(requests[1].path, "repository/deployments/10");
        assert_eq!(deployments.data[0], single);
        assert_eq!(single.tenant_id, None);
    }

    #[test]
    fn create_deployment_uploads_multipart_file() {
        let transport = RecordingTransport::with_responses([HttpResponse::json(201, &deployment())]);
        let xml = b"<definitions/>";
        DeploymentService::new(&transport)
            .create_deployment("one-task.bpmn20.xml", xml, Some("acme"))
            .unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "repository/deployments");
        assert_eq!(
            req.header("content-type"),
            Some("multipart/form-data; boundary=activiti-client-deployment-boundary")
        );
        let body = req.body_text().unwrap();
        assert!(body.starts_with("--activiti-client-deployment-boundary\r\n"));
        assert!(body.contains("name=\"tenantId\"\r\n\r\nacme\r\n"));
        assert!(body.contains("filename=\"one-task.bpmn20.xml\""));
        assert!(body.contains("\r\n\r\n<definitions/>\r\n"));
        assert!(body.ends_with("--activiti-client-deployment-boundary--\r\n"));
    }

    #[test]
    fn boundary_avoids_collision_with_content() {
        let content = format!("data {MULTIPART_BOUNDARY} data");
        let (content_type, _) = multipart_body("f.xml", content.as_bytes(), None);
        assert_eq!(content_type, format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}-"));
    }

    #[test]
    fn file_name_cannot_break_out_of_part_headers() {
        let (_, body) = multipart_body("a\"b\r\nX-Injected: 1.bpmn", b"<definitions/>", None);
        let body = String::from_utf8(body).unwrap();
        assert!(body.contains("filename=\"a%22b%0D%0AX-Injected: 1.bpmn\"\r\n"));
        assert!(!body.contains("\r\nX-Injected"));
    }

    #[test]
    fn delete_deployment_adds_cascade_only_when_requested() {
        let transport = RecordingTransport::with_responses([HttpResponse::no_content(), HttpResponse::no_content()]);
        let service = DeploymentService::new(&transport);
        service.delete_deployment("10", false).unwrap();
        service.delete_deployment("10", true).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert_eq!(requests[0].path, "repository/deployments/10");
        assert_eq!(requests[1].path, "repository/deployments/10?cascade=true");
    }

    #[test]
    fn resources_and_resource_data() {
        let resources = json!([{
            "id": "diagrams/my-process.bpmn20.xml",
            "url": "http://localhost:8081/activiti-rest/service/repository/deployments/10/resources/diagrams%2Fmy-process.bpmn20.xml",
            "dataUrl": "http://localhost:8081/activiti-rest/service/repository/deployments/10/resourcedata/diagrams%2Fmy-process.bpmn20.xml",
            "mediaType": "text/xml",
            "type": "processDefinition"
        }]);
        let transport = RecordingTransport::with_responses([
            HttpResponse::json(200, &resources),
            HttpResponse::json(200, &resources[0]),
            HttpResponse::new(200, "<definitions/>"),
        ]);
        let service = DeploymentService::new(&transport);

        let listed = service.get_deployment_resources("10").unwrap();
        let single = service.get_deployment_resource("10", "diagram.xml").unwrap();
        let data = service.get_deployment_resource_data("10", "diagram.xml").unwrap();

        assert_eq!(listed, vec![single]);
        assert_eq!(data, b"<definitions/>");
        let paths: Vec<_> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            [
                "repository/deployments/10/resources",
                "repository/deployments/10/resources/diagram.xml",
                "repository/deployments/10/resourcedata/diagram.xml",
            ]
        );
    }
}
