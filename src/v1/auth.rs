/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Credentials and the authenticated session every request is sent through.
//!
//! A [`Session`] moves through `Unauthenticated -> Authenticated -> Closed`. It owns
//! the identity it was created for, attaches the bearer token to every request and
//! logs itself out when dropped while still open.

use crate::v1::client::{ApiClient, ApiUrl, Authorize, RequestOptions};
use crate::v1::errors::PhotoprismError;
use reqwest::Method;
use reqwest::blocking::{RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use url::Url;

/// A PhotoPrism account that logs in with username and password.
#[derive(Clone)]
pub struct User {
    pub username: String,
    password: String,

    /// Server assigned UID, recorded at login when not already known
    pub uid: Option<String>,

    /// Download token of the current session, cleared at logout
    pub download_token: Option<String>,
}

impl User {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            uid: None,
            download_token: None,
        }
    }

    /// Logs in as this user
    pub fn login(self, api: &ApiUrl) -> Result<Session, PhotoprismError> {
        login(self, api)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"xxx")
            .field("uid", &self.uid)
            .finish()
    }
}

/// Application credentials generated with the PhotoPrism CLI (`photoprism client add`).
#[derive(Clone)]
pub struct OAuthClient {
    pub client_id: String,
    client_secret: String,
}

impl OAuthClient {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Logs in as this client
    pub fn login(self, api: &ApiUrl) -> Result<Session, PhotoprismError> {
        login(self, api)
    }
}

impl fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &"xxx")
            .finish()
    }
}

// The token and revoke endpoints take the client credentials as basic auth
impl Authorize for OAuthClient {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.client_id, Some(&self.client_secret))
    }
}

/// Who a session is opened for
#[derive(Debug, Clone)]
pub enum Identity {
    User(User),
    Client(OAuthClient),
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Identity::User(user)
    }
}

impl From<OAuthClient> for Identity {
    fn from(client: OAuthClient) -> Self {
        Identity::Client(client)
    }
}

/// Bearer credential handed out by the server at login.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    pub download_token: Option<String>,
    pub preview_token: Option<String>,
}

impl AccessToken {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.into(),
            download_token: None,
            preview_token: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl Authorize for AccessToken {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"xxx")
            .field("download_token", &self.download_token.as_ref().map(|_| "xxx"))
            .field("preview_token", &self.preview_token.as_ref().map(|_| "xxx"))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Closed,
}

/// Tokens and user of a live session as reported by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub access_token: String,
    pub user_uid: Option<String>,
    pub download_token: Option<String>,
    pub preview_token: Option<String>,
}

/// Authenticated connection to the server.
///
/// ```rust,no_run
/// use photoprism::v1::{Album, ApiUrl, PhotoprismError, User, user_session};
///
/// fn make_album() -> Result<Album, PhotoprismError> {
///     let api = ApiUrl::new(Some("localhost:2342"), Some("http"))?;
///     let user = User::new("admin", "insecure");
///     user_session(user, &api, |session| Album::create(session, "Trip", false))
/// }
/// ```
pub struct Session {
    identity: Identity,
    api: ApiUrl,
    api_client: ApiClient,
    token: Option<AccessToken>,
    state: SessionState,
}

impl Session {
    /// Creates an unauthenticated session, call [`Session::login`] before use
    pub fn new(identity: impl Into<Identity>, api: &ApiUrl) -> Self {
        Self::with_http_client(identity, api, reqwest::blocking::Client::new())
    }

    /// Same as [`Session::new`] but sends through the provided client
    pub fn with_http_client(
        identity: impl Into<Identity>,
        api: &ApiUrl,
        http_client: reqwest::blocking::Client,
    ) -> Self {
        Self {
            identity: identity.into(),
            api: api.clone(),
            api_client: ApiClient::with_http_client(http_client),
            token: None,
            state: SessionState::Unauthenticated,
        }
    }

    /// Exchanges the identity's credentials for a bearer token.
    ///
    /// Logging in again on an authenticated session replaces its token. A rejected
    /// login leaves the session unauthenticated and returns
    /// [`PhotoprismError::Auth`].
    pub fn login(&mut self) -> Result<(), PhotoprismError> {
        match self.state {
            SessionState::Closed => return Err(PhotoprismError::SessionClosed),
            SessionState::Authenticated => {
                log::debug!("Session already authenticated, replacing its token")
            }
            SessionState::Unauthenticated => {}
        }

        let token = match &mut self.identity {
            Identity::User(user) => login_user(&self.api_client, &self.api, user)?,
            Identity::Client(client) => login_client(&self.api_client, &self.api, client)?,
        };
        self.token = Some(token);
        self.state = SessionState::Authenticated;
        log::info!("Logged in to {}", self.api);
        Ok(())
    }

    /// Closes the session on the server.
    ///
    /// The session is closed even when the server call fails and can never be used
    /// again. Logging out twice is an error.
    pub fn logout(&mut self) -> Result<(), PhotoprismError> {
        match self.state {
            SessionState::Unauthenticated => return Err(PhotoprismError::NotAuthenticated),
            SessionState::Closed => return Err(PhotoprismError::SessionClosed),
            SessionState::Authenticated => {}
        }
        self.state = SessionState::Closed;
        let token = self.token.take().ok_or(PhotoprismError::NotAuthenticated)?;

        match &mut self.identity {
            Identity::User(user) => {
                user.download_token = None;
                let url = self.api.join("session")?;
                self.api_client
                    .send(Some(&token), Method::DELETE, url, RequestOptions::new())?;
            }
            Identity::Client(client) => {
                let url = self.api.join("oauth/revoke")?;
                let options =
                    RequestOptions::new().form(vec![("token".into(), token.as_str().into())]);
                self.api_client
                    .send(Some(&*client), Method::POST, url, options)?;
            }
        }
        log::info!("Logged out of {}", self.api);
        Ok(())
    }

    /// Sends a request with the session's token attached.
    ///
    /// Fails without touching the network when the session is not authenticated.
    pub fn request(
        &self,
        method: Method,
        url: Url,
        options: RequestOptions,
    ) -> Result<Response, PhotoprismError> {
        let token = self.authenticated_token()?;
        self.api_client.send(Some(token), method, url, options)
    }

    /// Same as [`Session::request`] with an endpoint relative to the API root
    pub fn endpoint(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response, PhotoprismError> {
        self.request(method, self.api.join(endpoint)?, options)
    }

    /// Asks the server for the tokens and user of this session
    pub fn info(&self) -> Result<SessionInfo, PhotoprismError> {
        let body = self
            .endpoint(Method::GET, "session", RequestOptions::new())?
            .json::<SessionResponse>()?;
        let user_uid = body.user.as_ref().and_then(|u| u.uid.clone());
        match body.into_token() {
            Ok(token) => Ok(SessionInfo {
                access_token: token.token,
                user_uid,
                download_token: token.download_token,
                preview_token: token.preview_token,
            }),
            Err(err) => {
                log::error!("Session response has no token. Is the session already closed?");
                Err(err)
            }
        }
    }

    /// Logs in, runs `f` and logs out again whatever `f` returned.
    ///
    /// An error from `f` takes precedence over an error while logging out.
    pub fn scoped<T, E, F>(identity: impl Into<Identity>, api: &ApiUrl, f: F) -> Result<T, E>
    where
        F: FnOnce(&Session) -> Result<T, E>,
        E: From<PhotoprismError>,
    {
        let mut session = login(identity, api)?;
        let result = f(&session);
        let closed = session.logout();
        match (result, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(err.into()),
            (Err(err), closed) => {
                if let Err(logout_err) = closed {
                    log::warn!("Failed to log out after error: {}", logout_err);
                }
                Err(err)
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// UID of the logged in user, None for OAuth clients
    pub fn user_uid(&self) -> Option<&str> {
        match &self.identity {
            Identity::User(user) => user.uid.as_deref(),
            Identity::Client(_) => None,
        }
    }

    fn authenticated_token(&self) -> Result<&AccessToken, PhotoprismError> {
        match self.state {
            SessionState::Authenticated => {
                self.token.as_ref().ok_or(PhotoprismError::NotAuthenticated)
            }
            SessionState::Unauthenticated => Err(PhotoprismError::NotAuthenticated),
            SessionState::Closed => Err(PhotoprismError::SessionClosed),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.state == SessionState::Authenticated {
            log::debug!("Session dropped while authenticated, logging out");
            if let Err(err) = self.logout() {
                log::warn!("Failed to log out of dropped session: {}", err);
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("api", &self.api.as_str())
            .field("state", &self.state)
            .finish()
    }
}

/// Opens an authenticated session for the identity
pub fn login(identity: impl Into<Identity>, api: &ApiUrl) -> Result<Session, PhotoprismError> {
    let mut session = Session::new(identity, api);
    session.login()?;
    Ok(session)
}

/// Runs `f` inside a session for `user`, see [`Session::scoped`]
pub fn user_session<T, E, F>(user: User, api: &ApiUrl, f: F) -> Result<T, E>
where
    F: FnOnce(&Session) -> Result<T, E>,
    E: From<PhotoprismError>,
{
    Session::scoped(user, api, f)
}

/// Runs `f` inside a session for `client`, see [`Session::scoped`]
pub fn client_session<T, E, F>(client: OAuthClient, api: &ApiUrl, f: F) -> Result<T, E>
where
    F: FnOnce(&Session) -> Result<T, E>,
    E: From<PhotoprismError>,
{
    Session::scoped(client, api, f)
}

fn login_user(
    api_client: &ApiClient,
    api: &ApiUrl,
    user: &mut User,
) -> Result<AccessToken, PhotoprismError> {
    let options = RequestOptions::new().json(json!({
        "username": user.username,
        "password": user.password,
    }));
    let body = api_client
        .send(None, Method::POST, api.join("session")?, options)
        .map_err(auth_error)?
        .json::<SessionResponse>()?;

    if user.uid.is_none() {
        user.uid = body.user.as_ref().and_then(|u| u.uid.clone());
    }
    let token = body.into_token()?;
    user.download_token = token.download_token.clone();
    Ok(token)
}

fn login_client(
    api_client: &ApiClient,
    api: &ApiUrl,
    client: &OAuthClient,
) -> Result<AccessToken, PhotoprismError> {
    let options = RequestOptions::new().form(vec![(
        "grant_type".into(),
        "client_credentials".into(),
    )]);
    let body = api_client
        .send(Some(client), Method::POST, api.join("oauth/token")?, options)
        .map_err(auth_error)?
        .json::<OAuthTokenResponse>()?;
    Ok(AccessToken::new(&body.access_token))
}

// A rejected login is an authentication failure, not a plain HTTP error
fn auth_error(err: PhotoprismError) -> PhotoprismError {
    match err {
        PhotoprismError::Http { status, body } => PhotoprismError::Auth { status, body },
        other => other,
    }
}

// Expected response from the session endpoint
#[derive(Deserialize, Debug)]
struct SessionResponse {
    id: Option<String>,

    access_token: Option<String>,

    user: Option<SessionUser>,

    config: Option<SessionConfig>,
}

impl SessionResponse {
    fn into_token(self) -> Result<AccessToken, PhotoprismError> {
        let token = self
            .id
            .or(self.access_token)
            .filter(|t| !t.is_empty())
            .ok_or(PhotoprismError::ResponseMissing("session id"))?;
        let (download_token, preview_token) = match self.config {
            Some(config) => (config.download_token, config.preview_token),
            None => (None, None),
        };
        Ok(AccessToken {
            token,
            download_token,
            preview_token,
        })
    }
}

#[derive(Deserialize, Debug)]
struct SessionUser {
    #[serde(rename = "UID")]
    uid: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SessionConfig {
    #[serde(rename = "downloadToken")]
    download_token: Option<String>,

    #[serde(rename = "previewToken")]
    preview_token: Option<String>,
}

// Expected response from the OAuth token endpoint
#[derive(Deserialize, Debug)]
struct OAuthTokenResponse {
    access_token: String,
}
