/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, BEARER, DOWNLOAD_TOKEN, Harness, PREVIEW_TOKEN, SESSION_ID, USER_UID};
    use mockito::{Matcher, Server};
    use reqwest::header::{ACCEPT, HeaderValue};
    use photoprism::v1::{
        Album, AlbumQuery, ApiUrl, Identity, OAuthClient, PhotoprismError, RequestOptions, Session,
        SessionState, User, client_session, login, user_session,
    };
    use serde_json::json;

    #[test]
    fn api_url_defaults_and_scheme_check() {
        let api = ApiUrl::new(None, None).unwrap();
        assert_eq!(api.as_str(), "http://localhost:2342/api/v1/");

        let api = ApiUrl::new(Some("photos.example.com:8443"), Some("https")).unwrap();
        assert_eq!(api.as_str(), "https://photos.example.com:8443/api/v1/");
        assert!(api.is_https());
        assert_eq!(
            api.join("albums/abc123").unwrap().as_str(),
            "https://photos.example.com:8443/api/v1/albums/abc123"
        );

        assert!(matches!(
            ApiUrl::new(None, Some("ftp")),
            Err(PhotoprismError::InvalidScheme(s)) if s == "ftp"
        ));
    }

    #[test]
    fn login_then_logout_leaves_no_open_session() {
        let mut server = Server::new();
        let (login_mock, logout_mock) = helpers::mock_user_session(&mut server);

        let mut session = login(User::new("admin", "password"), &helpers::api_url(&server)).unwrap();
        assert_eq!(session.state(), SessionState::Authenticated);
        session.logout().unwrap();
        assert_eq!(session.state(), SessionState::Closed);
        assert!(session.token().is_none());
        drop(session);

        login_mock.assert();
        logout_mock.assert();
    }

    #[test]
    fn login_records_user_and_tokens() {
        let h = Harness::new();
        let token = h.session.token().unwrap();
        assert_eq!(token.as_str(), SESSION_ID);
        assert_eq!(token.download_token.as_deref(), Some(DOWNLOAD_TOKEN));
        assert_eq!(token.preview_token.as_deref(), Some(PREVIEW_TOKEN));
        assert_eq!(h.session.user_uid(), Some(USER_UID));

        match h.session.identity() {
            Identity::User(user) => {
                assert_eq!(user.uid.as_deref(), Some(USER_UID));
                assert_eq!(user.download_token.as_deref(), Some(DOWNLOAD_TOKEN));
            }
            Identity::Client(_) => panic!("expected a user identity"),
        }
    }

    #[test]
    fn login_keeps_a_known_user_uid() {
        let mut server = Server::new();
        let (_login, _logout) = helpers::mock_user_session(&mut server);

        let mut user = User::new("admin", "password");
        user.uid = Some("known_uid".into());
        let session = user.login(&helpers::api_url(&server)).unwrap();
        assert_eq!(session.user_uid(), Some("known_uid"));
    }

    #[test]
    fn rejected_login_is_an_auth_error_and_sends_nothing_else() {
        let mut server = Server::new();
        let login_mock = server
            .mock("POST", "/api/v1/session")
            .with_status(403)
            .with_body(r#"{"error":"Invalid credentials"}"#)
            .expect(1)
            .create();
        let albums_mock = server
            .mock("GET", "/api/v1/albums")
            .match_query(Matcher::Any)
            .expect(0)
            .create();

        let mut session = Session::new(User::new("admin", "wrong"), &helpers::api_url(&server));
        let err = session.login().unwrap_err();
        assert!(matches!(&err, PhotoprismError::Auth { body, .. } if body.contains("Invalid credentials")));
        assert_eq!(err.status().map(|s| s.as_u16()), Some(403));

        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert!(session.token().is_none());
        assert!(matches!(
            Album::search(&session, &AlbumQuery::default()),
            Err(PhotoprismError::NotAuthenticated)
        ));
        assert!(matches!(session.logout(), Err(PhotoprismError::NotAuthenticated)));

        login_mock.assert();
        albums_mock.assert();
    }

    #[test]
    fn logout_twice_is_an_error_and_closed_sessions_stay_closed() {
        let mut server = Server::new();
        let (_login, logout_mock) = helpers::mock_user_session(&mut server);

        let mut session = login(User::new("admin", "password"), &helpers::api_url(&server)).unwrap();
        session.logout().unwrap();
        assert!(matches!(session.logout(), Err(PhotoprismError::SessionClosed)));
        assert!(matches!(session.login(), Err(PhotoprismError::SessionClosed)));
        assert!(matches!(
            session.endpoint(reqwest::Method::GET, "albums", Default::default()),
            Err(PhotoprismError::SessionClosed)
        ));
        logout_mock.assert();
    }

    #[test]
    fn dropped_session_logs_out() {
        let mut server = Server::new();
        let (_login, logout_mock) = helpers::mock_user_session(&mut server);

        {
            let _session =
                login(User::new("admin", "password"), &helpers::api_url(&server)).unwrap();
        }
        logout_mock.assert();
    }

    #[test]
    fn scoped_session_logs_out_when_the_body_fails() {
        let mut server = Server::new();
        let (_login, logout_mock) = helpers::mock_user_session(&mut server);
        let create_mock = server
            .mock("POST", "/api/v1/albums")
            .with_status(500)
            .with_body("boom")
            .create();

        let result = user_session(
            User::new("admin", "password"),
            &helpers::api_url(&server),
            |session| Album::create(session, "Trip", false),
        );
        match result {
            Err(PhotoprismError::Http { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected result {:?}", other),
        }
        create_mock.assert();
        logout_mock.assert();
    }

    #[test]
    fn every_request_carries_the_bearer_token() {
        let mut h = Harness::new();
        let albums_mock = h
            .mock("GET", "albums")
            .match_query(Matcher::Any)
            .match_header("authorization", BEARER)
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .expect(1)
            .create();

        let albums = Album::search(&h.session, &AlbumQuery::default()).unwrap();
        assert!(albums.is_empty());
        albums_mock.assert();
    }

    #[test]
    fn caller_headers_replace_the_defaults() {
        let mut h = Harness::new();
        let thumb = h
            .mock("GET", "photos/p1/dl")
            .match_header("accept", "image/jpeg")
            .match_header("authorization", BEARER)
            .with_status(200)
            .with_header("content-type", "image/jpeg")
            .with_body("jpeg")
            .expect(1)
            .create();

        let options =
            RequestOptions::new().header(ACCEPT, HeaderValue::from_static("image/jpeg"));
        let resp = h
            .session
            .endpoint(reqwest::Method::GET, "photos/p1/dl", options)
            .unwrap();
        assert_eq!(resp.text().unwrap(), "jpeg");
        thumb.assert();
    }

    #[test]
    fn session_info_reports_tokens() {
        let mut h = Harness::new();
        let info_mock = h
            .mock("GET", "session")
            .match_header("authorization", BEARER)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(helpers::session_body().to_string())
            .create();

        let info = h.session.info().unwrap();
        assert_eq!(info.access_token, SESSION_ID);
        assert_eq!(info.user_uid.as_deref(), Some(USER_UID));
        assert_eq!(info.download_token.as_deref(), Some(DOWNLOAD_TOKEN));
        assert_eq!(info.preview_token.as_deref(), Some(PREVIEW_TOKEN));
        info_mock.assert();
    }

    #[test]
    fn session_info_without_token_is_missing_response() {
        let mut h = Harness::new();
        let _info_mock = h
            .mock("GET", "session")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": "closed"}).to_string())
            .create();

        assert!(matches!(
            h.session.info(),
            Err(PhotoprismError::ResponseMissing(_))
        ));
    }

    #[test]
    fn oauth_client_session_uses_basic_auth_and_revokes() {
        let mut server = Server::new();
        let basic = "Basic ZXhhbXBsZV9pZDpleGFtcGxlX3NlY3JldA==";
        let token_mock = server
            .mock("POST", "/api/v1/oauth/token")
            .match_header("authorization", basic)
            .match_body(Matcher::UrlEncoded(
                "grant_type".into(),
                "client_credentials".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"access_token": "client_token", "token_type": "Bearer"}).to_string())
            .expect(1)
            .create();
        let revoke_mock = server
            .mock("POST", "/api/v1/oauth/revoke")
            .match_header("authorization", basic)
            .match_body(Matcher::UrlEncoded("token".into(), "client_token".into()))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create();
        let albums_mock = server
            .mock("GET", "/api/v1/albums")
            .match_query(Matcher::Any)
            .match_header("authorization", "Bearer client_token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([helpers::album_json("abc123", "Trip")]).to_string())
            .create();

        let client = OAuthClient::new("example_id", "example_secret");
        let albums = client_session(client, &helpers::api_url(&server), |session| {
            assert_eq!(session.user_uid(), None);
            Album::search(session, &AlbumQuery::default())
        })
        .unwrap();
        assert_eq!(albums[0].uid, "abc123");

        token_mock.assert();
        albums_mock.assert();
        revoke_mock.assert();
    }

    #[test]
    fn rejected_client_credentials_are_an_auth_error() {
        let mut server = Server::new();
        let _token_mock = server
            .mock("POST", "/api/v1/oauth/token")
            .with_status(401)
            .with_body(r#"{"error":"invalid client"}"#)
            .create();

        let result = OAuthClient::new("example_id", "bad").login(&helpers::api_url(&server));
        assert!(matches!(result, Err(PhotoprismError::Auth { .. })));
    }

    #[test]
    fn credentials_are_not_printed() {
        let user = User::new("admin", "hunter2");
        assert!(!format!("{:?}", user).contains("hunter2"));
        let client = OAuthClient::new("example_id", "s3cret");
        assert!(!format!("{:?}", client).contains("s3cret"));

        let h = Harness::new();
        let printed = format!("{:?}", h.session);
        assert!(printed.contains("admin"));
        assert!(!printed.contains(SESSION_ID));
        assert!(!printed.contains("\"password\""));
        assert!(!format!("{:?}", h.session.token().unwrap()).contains(SESSION_ID));
    }
}
