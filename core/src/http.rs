//! HTTP request and response types exchanged with a [`Transport`](crate::Transport).
//!
//! # Design
//! Requests and responses are plain data. Service methods build an
//! `HttpRequest` with a path relative to the REST root (for example
//! `identity/users/kermit?size=10`); the transport resolves it against its base
//! URL, performs the exchange, and hands back an `HttpResponse`. Bodies are raw
//! bytes so binary endpoints (user pictures, resource data) pass through
//! untouched.

use std::fmt;

use serde::Serialize;

use crate::error::{ActivitiError, Result};
use crate::query;

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Path relative to the REST root, including the query string if any.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Request with a compact JSON body holding only the fields `payload` serializes.
    pub fn json<B: Serialize + ?Sized>(
        method: HttpMethod,
        path: impl Into<String>,
        payload: &B,
    ) -> Result<Self> {
        let body = serde_json::to_vec(payload).map_err(ActivitiError::Serialization)?;
        Ok(Self::new(method, path).with_body(APPLICATION_JSON, body))
    }

    pub fn with_body(mut self, content_type: &str, body: Vec<u8>) -> Self {
        self.headers
            .push((CONTENT_TYPE.to_string(), content_type.to_string()));
        self.body = Some(body);
        self
    }

    /// Append an encoded query string. Nothing is appended when `pairs` is empty.
    pub fn with_query(mut self, pairs: &[(String, String)]) -> Self {
        if !pairs.is_empty() {
            self.path.push('?');
            self.path.push_str(&query::encode_pairs(pairs));
        }
        self
    }

    /// Value of the first header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body as UTF-8 text, for logging and assertions.
    pub fn body_text(&self) -> Option<String> {
        self.body
            .as_deref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// `204 No Content` with an empty body.
    pub fn no_content() -> Self {
        Self::new(204, Vec::new())
    }

    /// `status` with a JSON body.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        let mut response = Self::new(status, value.to_string());
        response
            .headers
            .push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
        response
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
