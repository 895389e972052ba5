//! The transport seam between services and the network.
//!
//! # Design
//! Services never open connections themselves. They hand an `HttpRequest` to
//! a `Transport` and interpret the `HttpResponse` that comes back. A transport
//! returns `Ok` for every response it received, whatever the status; `Err` is
//! reserved for exchanges that produced no response at all.
//!
//! `RecordingTransport` answers from a queue of canned responses and keeps
//! every request it saw, which is how request shapes are asserted in tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Synchronous HTTP exchange. Safe for sequential reuse across calls.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

#[derive(Debug, Default)]
struct Recording {
    responses: VecDeque<Result<HttpResponse, String>>,
    history: Vec<HttpRequest>,
}

/// Fake transport replaying queued responses in order and recording requests.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    inner: Mutex<Recording>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: impl IntoIterator<Item = HttpResponse>) -> Self {
        let transport = Self::new();
        for response in responses {
            transport.push_response(response);
        }
        transport
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.lock().responses.push_back(Ok(response));
    }

    /// Queue a network-level failure for the next exchange.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.lock().responses.push_back(Err(message.into()));
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().history.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.lock().history.last().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut recording = self.lock();
        recording.history.push(request);
        match recording.responses.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::new(message)),
            None => Err(TransportError::new("no canned response queued")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_responses_in_order_and_records_requests() {
        let transport = RecordingTransport::with_responses([
            HttpResponse::new(200, "first"),
            HttpResponse::no_content(),
        ]);

        let first = transport.send(HttpRequest::get("a")).unwrap();
        let second = transport.send(HttpRequest::delete("b")).unwrap();

        assert_eq!(first.text(), "first");
        assert_eq!(second.status, 204);
        let paths: Vec<_> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, ["a", "b"]);
    }

    #[test]
    fn empty_queue_is_a_transport_error() {
        let transport = RecordingTransport::new();
        let err = transport.send(HttpRequest::get("a")).unwrap_err();
        assert_eq!(err.message(), "no canned response queued");
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn queued_failure_surfaces_as_error() {
        let transport = RecordingTransport::new();
        transport.push_failure("connection refused");
        let err = transport.send(HttpRequest::get("a")).unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn shared_handles_forward_to_inner_transport() {
        let transport = Arc::new(RecordingTransport::with_responses([HttpResponse::no_content()]));
        let by_ref = &transport;
        by_ref.send(HttpRequest::get("x")).unwrap();
        assert_eq!(transport.last_request().map(|r| r.path).as_deref(), Some("x"));
    }
}
