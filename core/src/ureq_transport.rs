//! Blocking [`Transport`] backed by `ureq`.
//!
//! HTTP error statuses are returned as data (`http_status_as_error(false)`)
//! so 4xx/5xx responses reach the service layer as `HttpResponse` values and
//! only genuine network failures become `TransportError`.

use base64::prelude::*;

use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

pub struct UreqTransport {
    agent: ureq::Agent,
    base_url: String,
    authorization: Option<String>,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.authorization.is_some())
            .finish()
    }
}

impl UreqTransport {
    pub fn new(config: &TransportConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();

        let authorization = config.credentials.as_ref().map(|c| {
            let token = BASE64_STANDARD.encode(format!("{}:{}", c.username, c.password));
            format!("Basic {token}")
        });

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn apply_headers<B>(
        &self,
        mut builder: ureq::RequestBuilder<B>,
        headers: &[(String, String)],
    ) -> ureq::RequestBuilder<B> {
        if let Some(authorization) = &self.authorization {
            builder = builder.header("authorization", authorization.as_str());
        }
        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(&request.path);
        let headers = &request.headers;

        let result = match request.method {
            HttpMethod::Get => self.apply_headers(self.agent.get(&url), headers).call(),
            HttpMethod::Delete => self.apply_headers(self.agent.delete(&url), headers).call(),
            HttpMethod::Post => {
                let builder = self.apply_headers(self.agent.post(&url), headers);
                match request.body.as_deref() {
                    Some(body) => builder.send(body),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = self.apply_headers(self.agent.put(&url), headers);
                match request.body.as_deref() {
                    Some(body) => builder.send(body),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| {
            TransportError::with_source(format!("{} {url} failed", request.method), e)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_vec().map_err(|e| {
            TransportError::with_source(format!("reading {url} response body failed"), e)
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_base_url() {
        let transport = UreqTransport::new(&TransportConfig::new("http://localhost:8080/activiti-rest/service/"));
        assert_eq!(
            transport.url_for("identity/users/kermit"),
            "http://localhost:8080/activiti-rest/service/identity/users/kermit"
        );
        assert_eq!(
            transport.url_for("/runtime/tasks?size=5"),
            "http://localhost:8080/activiti-rest/service/runtime/tasks?size=5"
        );
    }

    #[test]
    fn credentials_become_basic_authorization() {
        let config = TransportConfig::new("http://localhost").with_credentials("kermit", "kermit");
        let transport = UreqTransport::new(&config);
        assert_eq!(transport.authorization.as_deref(), Some("Basic a2VybWl0Omtlcm1pdA=="));
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = UreqTransport::new(&TransportConfig::new(&format!("http://{addr}")));
        let err = transport.send(HttpRequest::get("identity/users")).unwrap_err();
        assert!(err.message().starts_with("GET http://"));
    }
}
