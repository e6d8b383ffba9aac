/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use mockito::{Mock, Server, ServerGuard};
use photoprism::v1::{ApiUrl, Session, User};
use serde_json::{Value, json};

pub(crate) const SESSION_ID: &str = "example_id";
pub(crate) const USER_UID: &str = "example_uid";
pub(crate) const DOWNLOAD_TOKEN: &str = "example_dl_token";
pub(crate) const PREVIEW_TOKEN: &str = "example_pv_token";
pub(crate) const BEARER: &str = "Bearer example_id";

/// A mock server with a logged in user session.
///
/// Fields drop in order, so the session logs out while its mocks still exist.
#[allow(dead_code)]
pub(crate) struct Harness {
    pub(crate) session: Session,
    pub(crate) logout: Mock,
    pub(crate) login: Mock,
    pub(crate) server: ServerGuard,
}

#[allow(dead_code)]
impl Harness {
    pub(crate) fn new() -> Self {
        let mut server = Server::new();
        let (login, logout) = mock_user_session(&mut server);
        let session = User::new("admin", "password")
            .login(&api_url(&server))
            .unwrap();
        Self {
            session,
            logout,
            login,
            server,
        }
    }

    /// Starts a mock for an endpoint relative to the API root
    pub(crate) fn mock(&mut self, method: &str, endpoint: &str) -> Mock {
        self.server.mock(method, format!("/api/v1/{}", endpoint).as_str())
    }
}

#[allow(dead_code)]
pub(crate) fn api_url(server: &ServerGuard) -> ApiUrl {
    ApiUrl::new(Some(&server.host_with_port()), Some("http")).unwrap()
}

/// Body the server answers a successful user login with
#[allow(dead_code)]
pub(crate) fn session_body() -> Value {
    json!({
        "access_token": SESSION_ID,
        "config": {
            "mode": "user",
            "name": "PhotoPrism",
            "edition": "ce",
            "downloadToken": DOWNLOAD_TOKEN,
            "previewToken": PREVIEW_TOKEN
        },
        "expires_in": 1209599,
        "id": SESSION_ID,
        "provider": "local",
        "status": "success",
        "token_type": "Bearer",
        "user": {
            "ID": 1,
            "UID": USER_UID,
            "Name": "admin",
            "Role": "admin",
            "SuperAdmin": true,
            "CanLogin": true
        }
    })
}

/// Mocks `POST /session` and `DELETE /session`, each expected exactly once
#[allow(dead_code)]
pub(crate) fn mock_user_session(server: &mut ServerGuard) -> (Mock, Mock) {
    let login = server
        .mock("POST", "/api/v1/session")
        .match_body(mockito::Matcher::Json(
            json!({"username": "admin", "password": "password"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(session_body().to_string())
        .expect(1)
        .create();
    let logout = server
        .mock("DELETE", "/api/v1/session")
        .match_header("authorization", BEARER)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"session_id": SESSION_ID, "status": "deleted"}).to_string())
        .expect(1)
        .create();
    (login, logout)
}

#[allow(dead_code)]
pub(crate) fn album_json(uid: &str, title: &str) -> Value {
    json!({
        "ID": 42,
        "UID": uid,
        "Slug": title.to_lowercase(),
        "Type": "album",
        "Title": title,
        "Description": "",
        "Favorite": false,
        "Private": false,
        "CreatedAt": "2025-06-01T10:15:51Z",
        "UpdatedAt": "2025-06-02T08:00:00Z"
    })
}

#[allow(dead_code)]
pub(crate) fn photo_json(uid: &str) -> Value {
    json!({
        "ID": 7,
        "UID": uid,
        "Type": "image",
        "Title": "Beach",
        "Path": "2025/06",
        "Name": "20250601_101551_ABCDEF12",
        "TakenAt": "2025-06-01T10:15:51Z",
        "Favorite": false,
        "Private": false,
        "Lat": 52.52,
        "Lng": 13.405,
        "Files": [{
            "UID": "fsa7wgk15n3dm1x7",
            "PhotoUID": uid,
            "Name": "2025/06/beach.jpg",
            "Root": "/",
            "Hash": "5a75328649a4df2eb64f0e10f6912f612094e8f4",
            "Size": 17,
            "Primary": true,
            "Mime": "image/jpeg",
            "Width": 4032,
            "Height": 3024
        }]
    })
}

#[allow(dead_code)]
pub(crate) fn share_link_json(album_uid: &str) -> Value {
    json!({
        "UID": "ssa7wgn1vfqw2lbe",
        "ShareUID": album_uid,
        "Slug": "trip",
        "Token": "7jxf3jfn2k",
        "Expires": 0,
        "Views": 0,
        "MaxViews": 0,
        "CanComment": false,
        "CanEdit": false,
        "CreatedBy": USER_UID,
        "CreatedAt": "2025-06-01T10:15:51Z",
        "ModifiedAt": "2025-06-01T10:15:51Z"
    })
}

/// Status body of batch and upload endpoints
#[allow(dead_code)]
pub(crate) fn i18n_json(code: u32, message: &str) -> Value {
    json!({"code": code, "message": message})
}

/// Live server and account from the `PHOTOPRISM_*` environment variables
#[allow(dead_code)]
pub(crate) fn get_live_user() -> anyhow::Result<(ApiUrl, User)> {
    let netloc = std::env::var("PHOTOPRISM_NETLOC").ok();
    let scheme = std::env::var("PHOTOPRISM_SCHEME").ok();
    let username = std::env::var("PHOTOPRISM_USERNAME")?;
    let password = std::env::var("PHOTOPRISM_PASSWORD")?;
    let api = ApiUrl::new(netloc.as_deref(), scheme.as_deref())?;
    Ok((api, User::new(&username, &password)))
}
