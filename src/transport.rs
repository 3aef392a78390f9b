// Transport layer: the single place where bytes go over the network.
//
// `ApiClient` only sees the `Transport` trait. The real implementation wraps
// a blocking reqwest client; tests swap in `stub::StubTransport` so no network
// is needed.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::config::AppInfo;
use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// A cookie as a plain name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `name=value`, as sent in a `Cookie` request header.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

impl Request {
    /// First header with the given name, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status: u16,
    /// Cookies set by the response (`Set-Cookie`).
    pub cookies: Vec<Cookie>,
    pub body: Vec<u8>,
}

impl Response {
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|cookie| cookie.name == name)
    }
}

pub trait Transport {
    /// Sends the request and returns whatever the server answered, whatever
    /// the status code.
    ///
    /// # Errors
    ///
    /// * If the request could not be delivered or the response not read
    fn send(&self, request: Request) -> Result<Response, TransportError>;
}

/// `Transport` backed by a blocking reqwest client. Cookies are read from
/// each response but not stored: the session owns the cookie it cares about.
pub struct ReqwestTransport(reqwest::blocking::Client);

impl ReqwestTransport {
    /// # Errors
    ///
    /// * If the TLS backend cannot be initialised
    pub fn new(app: &AppInfo) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(app.user_agent())
            .build()?;
        Ok(Self(client))
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        let mut builder = self
            .0
            .request(request.method.into(), request.url)
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let cookies = response
            .cookies()
            .map(|cookie| Cookie::new(cookie.name(), cookie.value()))
            .collect();
        let body = response.bytes()?.to_vec();

        Ok(Response {
            status,
            cookies,
            body,
        })
    }
}
