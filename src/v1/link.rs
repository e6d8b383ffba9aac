/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::PhotoprismError;
use crate::v1::macros::{impl_reference, obj_from_endpoint, objs_from_endpoint};
use crate::v1::{Reference, RequestOptions, Session, WireModel};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use url::Url;

/// A link that grants visitors access to an album without an account.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ShareLink {
    /// UID of the link itself
    #[serde(rename = "UID")]
    pub uid: String,

    /// UID of the album the link points to
    #[serde(rename = "ShareUID")]
    pub share_uid: String,

    /// URL slug of the album
    #[serde(rename = "Slug")]
    pub slug: String,

    /// Secret part of the share URL
    #[serde(rename = "Token")]
    pub token: String,

    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(rename = "Perm", skip_serializing_if = "Option::is_none")]
    pub perm: Option<i64>,

    #[serde(rename = "CanComment", skip_serializing_if = "Option::is_none")]
    pub can_comment: Option<bool>,

    #[serde(rename = "CanEdit", skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,

    #[serde(rename = "VerifyPassword", skip_serializing_if = "Option::is_none")]
    pub verify_password: Option<bool>,

    /// Seconds until the link expires, 0 for never
    #[serde(rename = "Expires", skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,

    #[serde(rename = "Views", skip_serializing_if = "Option::is_none")]
    pub views: Option<i64>,

    /// Views until the link is disabled, 0 for no limit
    #[serde(rename = "MaxViews", skip_serializing_if = "Option::is_none")]
    pub max_views: Option<i64>,

    #[serde(rename = "CreatedBy", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(rename = "CreatedAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "ModifiedAt", skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl WireModel for ShareLink {
    const NAME: &'static str = "ShareLink";
    const REQUIRED: &'static [&'static str] = &["token", "share_uid", "slug", "uid"];
}

impl_reference!(ShareLink);

impl ShareLink {
    // albums/{uid}/links
    fn links_uri(album: Reference<'_>) -> Result<String, PhotoprismError> {
        Ok(format!("albums/{}/links", album.path_segment()?))
    }

    // albums/{share_uid}/links/{uid}
    fn uri(&self) -> Result<String, PhotoprismError> {
        let album = Reference::Uid(&self.share_uid);
        Ok(format!(
            "{}/{}",
            Self::links_uri(album)?,
            Reference::from(self).path_segment()?
        ))
    }

    /// Public URL of the link, `<scheme>://<host>/s/<token>/<slug>`.
    ///
    /// `host` defaults to `localhost`.
    pub fn url(&self, host: Option<&str>, https: bool) -> Result<Url, PhotoprismError> {
        let scheme = if https { "https" } else { "http" };
        let base = Url::parse(&format!("{}://{}/s/", scheme, host.unwrap_or("localhost")))?;
        Ok(base
            .join(&format!("{}/", urlencoding::encode(&self.token)))?
            .join(&urlencoding::encode(&self.slug))?)
    }

    /// Returns every share link of the album
    pub fn list<'a>(
        session: &Session,
        album: impl Into<Reference<'a>>,
    ) -> Result<Vec<Self>, PhotoprismError> {
        let endpoint = Self::links_uri(album.into())?;
        objs_from_endpoint!(session, Method::GET, endpoint, RequestOptions::new(), ShareLink)
    }

    /// Adds a share link to the album
    pub fn create<'a>(
        session: &Session,
        album: impl Into<Reference<'a>>,
        properties: &ShareLinkProperties,
    ) -> Result<Self, PhotoprismError> {
        let endpoint = Self::links_uri(album.into())?;
        let options = RequestOptions::new().json(properties.to_json()?);
        obj_from_endpoint!(session, Method::POST, endpoint, options, ShareLink)
    }

    /// Sends only the properties that are set and returns the updated link
    pub fn update(
        session: &Session,
        link: &ShareLink,
        properties: &ShareLinkProperties,
    ) -> Result<Self, PhotoprismError> {
        let options = RequestOptions::new().json(properties.to_json()?);
        obj_from_endpoint!(session, Method::PUT, link.uri()?, options, ShareLink)
    }

    /// Updates the link behind a public share URL. Not supported yet.
    pub fn update_from_url(
        _session: &Session,
        _url: &str,
        _properties: &ShareLinkProperties,
    ) -> Result<Self, PhotoprismError> {
        Err(PhotoprismError::NotImplemented("ShareLink::update_from_url"))
    }

    pub fn delete(session: &Session, link: &ShareLink) -> Result<(), PhotoprismError> {
        session.endpoint(Method::DELETE, &link.uri()?, RequestOptions::new())?;
        Ok(())
    }
}

/// Properties used to create or update a [`ShareLink`].
///
/// `expires` and `max_views` default to 0, which disables both limits.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShareLinkProperties {
    #[serde(rename = "CanComment", skip_serializing_if = "Option::is_none")]
    pub can_comment: Option<bool>,

    #[serde(rename = "CanEdit", skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,

    #[serde(rename = "Expires", skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,

    #[serde(rename = "MaxViews", skip_serializing_if = "Option::is_none")]
    pub max_views: Option<i64>,

    #[serde(rename = "Slug", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(rename = "Token", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for ShareLinkProperties {
    fn default() -> Self {
        Self {
            can_comment: None,
            can_edit: None,
            expires: Some(0),
            max_views: Some(0),
            slug: None,
            token: None,
            password: None,
        }
    }
}

impl WireModel for ShareLinkProperties {
    const NAME: &'static str = "ShareLinkProperties";
}
