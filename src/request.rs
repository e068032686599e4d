//! HTTP request values
//!

use reqwest::{Client, RequestBuilder as ReqwestBuilder};
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully-formed request, ready to hand to a transport.
///
/// Built once by [`RequestBuilder`](crate::RequestBuilder) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: Method,
    url: Url,
    headers: BTreeMap<String, String>,
    body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub(crate) fn new(
        method: Method,
        url: Url,
        headers: BTreeMap<String, String>,
        body: Option<Vec<u8>>,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Look up a header by name, ignoring ASCII case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Prepare this request on a caller-owned `reqwest` client.
    ///
    /// Nothing is sent; the caller decides when to call `send()`.
    pub fn to_reqwest(&self, client: &Client) -> ReqwestBuilder {
        let mut req_builder = client.request(self.method.into(), self.url.clone());
        for (name, value) in &self.headers {
            req_builder = req_builder.header(name.as_str(), value.as_str());
        }
        if let Some(ref body) = self.body {
            req_builder = req_builder.body(body.clone());
        }
        req_builder
    }
}
