//! HTTP transport seam.
//!
//! The client builds an [`HttpRequest`] as plain data and hands it to an
//! [`HttpTransport`]. The response body stays behind [`ResponseBody`] so a
//! failure while reading it is reported apart from a failure to connect.
use reqwest::Client;
use std::error::Error;
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;

pub type TransportError = Box<dyn Error + Send + Sync>;

const USER_AGENT: &str = concat!("football-api/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, url: url.into(), headers: Vec::new() }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug)]
pub struct HttpResponse<B> {
    pub status: u16,
    pub body: B,
}

impl<B> HttpResponse<B> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A response body that can be drained once.
pub trait ResponseBody: Send {
    fn read_all(self) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

impl ResponseBody for Vec<u8> {
    async fn read_all(self) -> io::Result<Vec<u8>> {
        Ok(self)
    }
}

impl ResponseBody for reqwest::Response {
    async fn read_all(self) -> io::Result<Vec<u8>> {
        let bytes = self.bytes().await.map_err(io::Error::other)?;
        Ok(bytes.to_vec())
    }
}

pub trait HttpTransport: Send + Sync {
    type Body: ResponseBody;

    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse<Self::Body>, TransportError>> + Send;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    type Body = T::Body;

    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse<Self::Body>, TransportError>> + Send {
        (**self).execute(request)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    type Body = T::Body;

    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse<Self::Body>, TransportError>> + Send {
        (**self).execute(request)
    }
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client, keeping its timeout and pool settings.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::from_client(Client::default()))
    }
}

impl HttpTransport for ReqwestTransport {
    type Body = reqwest::Response;

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse<Self::Body>, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        Ok(HttpResponse { status: response.status().as_u16(), body: response })
    }
}
