/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::PhotoprismError;
use reqwest::Method;
use reqwest::blocking::{RequestBuilder, Response, multipart};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use url::Url;

/// Network location used when none is given
pub const DEFAULT_NETLOC: &str = "localhost:2342";

/// Scheme used when none is given
pub const DEFAULT_SCHEME: &str = "http";

const API_PATH: &str = "/api/v1/";

/// Base URL of a PhotoPrism server API, always ending in `/api/v1/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl {
    base: Url,
}

impl ApiUrl {
    /// Builds `<scheme>://<netloc>/api/v1/`.
    ///
    /// `netloc` is the host with the port if needed and defaults to `localhost:2342`.
    /// `scheme` defaults to `http` and must be either `http` or `https`.
    ///
    /// ```rust
    /// use photoprism::v1::ApiUrl;
    /// let api = ApiUrl::new(Some("photos.example.com"), Some("https")).unwrap();
    /// assert_eq!(api.as_str(), "https://photos.example.com/api/v1/");
    /// assert!(ApiUrl::new(None, Some("ftp")).is_err());
    /// ```
    pub fn new(netloc: Option<&str>, scheme: Option<&str>) -> Result<Self, PhotoprismError> {
        let netloc = netloc.unwrap_or(DEFAULT_NETLOC);
        let scheme = scheme.unwrap_or(DEFAULT_SCHEME);
        if !matches!(scheme, "http" | "https") {
            return Err(PhotoprismError::InvalidScheme(scheme.into()));
        }
        let base = Url::parse(&format!("{scheme}://{netloc}{API_PATH}"))?;
        Ok(Self { base })
    }

    /// Full URL for an endpoint relative to the API root, e.g. `albums/{uid}/like`
    pub fn join(&self, endpoint: &str) -> Result<Url, PhotoprismError> {
        Ok(self.base.join(endpoint)?)
    }

    pub fn as_url(&self) -> &Url {
        &self.base
    }

    pub fn as_str(&self) -> &str {
        self.base.as_str()
    }

    /// Host of the server without the port
    pub fn host(&self) -> Option<&str> {
        self.base.host_str()
    }

    /// Host with the port when one is set, used when building share link URLs
    pub fn netloc(&self) -> String {
        let host = self.base.host_str().unwrap_or_default();
        match self.base.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    pub fn is_https(&self) -> bool {
        self.base.scheme() == "https"
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str())
    }
}

/// Decorates an outgoing request with credentials.
pub trait Authorize {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Body sent with a request
pub enum RequestBody {
    Json(Value),
    Form(Vec<(String, String)>),
    Multipart(multipart::Form),
}

/// Optional parts of a request: extra headers, query parameters and a body.
#[derive(Default)]
pub struct RequestOptions {
    headers: HeaderMap,
    params: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing the default of the same name
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Appends a query parameter
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a query parameter only when a value is present
    pub fn param_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(fields));
        self
    }

    pub fn multipart(mut self, form: multipart::Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }
}

// Accept/Content-Type pair every request starts from
fn default_headers(body: Option<&RequestBody>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    match body {
        // The multipart encoder sets its own boundary
        Some(RequestBody::Multipart(_)) => {}
        Some(RequestBody::Form(_)) => {
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/x-www-form-urlencoded"),
            );
        }
        _ => {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
    }
    headers
}

/// Directly communicates with the API.
///
/// Every HTTP call made by this library goes through [`ApiClient::send`].
#[derive(Default, Clone)]
pub struct ApiClient {
    http_client: reqwest::blocking::Client,
}

impl ApiClient {
    /// Uses a preconfigured client, e.g. one built with a timeout
    pub fn with_http_client(http_client: reqwest::blocking::Client) -> Self {
        Self { http_client }
    }

    /// Sends a request and fails on any non-2xx status.
    ///
    /// Caller headers are merged over `Accept: application/json` and
    /// `Content-Type: application/json`. The raw response is returned for the caller
    /// to decode.
    pub fn send(
        &self,
        auth: Option<&dyn Authorize>,
        method: Method,
        mut url: Url,
        options: RequestOptions,
    ) -> Result<Response, PhotoprismError> {
        let RequestOptions {
            headers,
            params,
            body,
        } = options;

        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let mut merged = default_headers(body.as_ref());
        merged.extend(headers);

        log::debug!("{} {}", method, url.path());
        let mut req = self.http_client.request(method, url).headers(merged);
        if let Some(auth) = auth {
            req = auth.authorize(req);
        }
        req = match body {
            None => req,
            Some(RequestBody::Json(value)) => req.body(serde_json::to_vec(&value)?),
            Some(RequestBody::Form(fields)) => req.body(
                url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields)
                    .finish(),
            ),
            Some(RequestBody::Multipart(form)) => req.multipart(form),
        };

        let resp = req.send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            log::debug!("request failed with {}: {}", status, body);
            return Err(PhotoprismError::Http { status, body });
        }
        Ok(resp)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").finish()
    }
}

// Status body returned by batch and upload endpoints
#[derive(Deserialize, Debug)]
pub(crate) struct I18nResponse {
    #[serde(default)]
    pub(crate) code: u32,

    #[serde(default)]
    pub(crate) message: String,
}

impl I18nResponse {
    /// Turns a failing status body into an API error
    pub(crate) fn check(resp: Response) -> Result<(), PhotoprismError> {
        let body = resp.json::<I18nResponse>()?;
        if body.code > 200 {
            return Err(PhotoprismError::ApiResponse(body.code, body.message));
        }
        Ok(())
    }
}
