/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::PhotoprismError;
use crate::v1::macros::{impl_reference, obj_from_endpoint, objs_from_endpoint};
use crate::v1::model::resolve_all;
use crate::v1::parsers::from_album_type;
use crate::v1::{AlbumOrder, AlbumType, Reference, RequestOptions, Session, WireModel};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Holds information returned from the Albums API.
///
/// Only `uid` is guaranteed, every other field is whatever the server sent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Album {
    #[serde(rename = "UID")]
    pub uid: String,

    #[serde(rename = "Slug", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(
        default,
        rename = "Type",
        deserialize_with = "from_album_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub album_type: Option<AlbumType>,

    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Caption", skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "Thumb", skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,

    #[serde(rename = "Favorite", skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,

    #[serde(rename = "Private", skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    #[serde(rename = "CreatedAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(rename = "UpdatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl WireModel for Album {
    const NAME: &'static str = "Album";
    const REQUIRED: &'static [&'static str] = &["uid"];
}

impl_reference!(Album);

impl Album {
    const BASE_URI: &'static str = "albums";

    // albums/{uid}
    fn uri(album: Reference<'_>) -> Result<String, PhotoprismError> {
        Ok(format!("{}/{}", Self::BASE_URI, album.path_segment()?))
    }

    /// Returns the albums matching the query
    pub fn search(session: &Session, query: &AlbumQuery) -> Result<Vec<Self>, PhotoprismError> {
        objs_from_endpoint!(session, Method::GET, Self::BASE_URI, query.to_options(), Album)
    }

    /// Creates a new album
    pub fn create(session: &Session, title: &str, favorite: bool) -> Result<Self, PhotoprismError> {
        let options = RequestOptions::new().json(json!({"Title": title, "Favorite": favorite}));
        obj_from_endpoint!(session, Method::POST, Self::BASE_URI, options, Album)
    }

    /// Returns the album with the given UID
    pub fn from_uid<'a>(
        session: &Session,
        album: impl Into<Reference<'a>>,
    ) -> Result<Self, PhotoprismError> {
        let endpoint = Self::uri(album.into())?;
        obj_from_endpoint!(session, Method::GET, endpoint, RequestOptions::new(), Album)
    }

    /// Sends only the properties that are set and returns the updated album
    pub fn update<'a>(
        session: &Session,
        album: impl Into<Reference<'a>>,
        properties: &AlbumProperties,
    ) -> Result<Self, PhotoprismError> {
        let endpoint = Self::uri(album.into())?;
        let options = RequestOptions::new().json(properties.to_json()?);
        obj_from_endpoint!(session, Method::PUT, endpoint, options, Album)
    }

    pub fn delete<'a>(
        session: &Session,
        album: impl Into<Reference<'a>>,
    ) -> Result<(), PhotoprismError> {
        let endpoint = Self::uri(album.into())?;
        session.endpoint(Method::DELETE, &endpoint, RequestOptions::new())?;
        Ok(())
    }

    /// Deletes several albums with one request
    pub fn batch_delete<'a, I, R>(session: &Session, albums: I) -> Result<(), PhotoprismError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference<'a>>,
    {
        let uids = resolve_all(albums)?;
        if uids.is_empty() {
            return Ok(());
        }
        let options = RequestOptions::new().json(json!({ "albums": uids }));
        session.endpoint(Method::DELETE, "batch/albums/delete", options)?;
        Ok(())
    }

    /// Copies the photos of every source album into `album`
    pub fn clone_photos<'a, 'b, I, R>(
        session: &Session,
        album: impl Into<Reference<'a>>,
        sources: I,
    ) -> Result<(), PhotoprismError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference<'b>>,
    {
        let endpoint = format!("{}/clone", Self::uri(album.into())?);
        let options = RequestOptions::new().json(json!({ "albums": resolve_all(sources)? }));
        session.endpoint(Method::POST, &endpoint, options)?;
        Ok(())
    }

    /// Sets the favorite flag
    pub fn like<'a>(session: &Session, album: impl Into<Reference<'a>>) -> Result<(), PhotoprismError> {
        let endpoint = format!("{}/like", Self::uri(album.into())?);
        session.endpoint(Method::POST, &endpoint, RequestOptions::new())?;
        Ok(())
    }

    /// Removes the favorite flag
    pub fn unlike<'a>(
        session: &Session,
        album: impl Into<Reference<'a>>,
    ) -> Result<(), PhotoprismError> {
        let endpoint = format!("{}/like", Self::uri(album.into())?);
        session.endpoint(Method::DELETE, &endpoint, RequestOptions::new())?;
        Ok(())
    }

    /// Album cover image. Requires a download token and is not supported yet.
    pub fn cover_image<'a>(
        _session: &Session,
        _album: impl Into<Reference<'a>>,
    ) -> Result<Vec<u8>, PhotoprismError> {
        Err(PhotoprismError::NotImplemented("Album::cover_image"))
    }
}

/// Properties that can be changed on an existing Album
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AlbumProperties {
    #[serde(rename = "Caption", skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Favorite", skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,

    #[serde(rename = "Filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "Order", skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    #[serde(rename = "Private", skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    #[serde(rename = "Template", skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(rename = "Thumb", skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,

    #[serde(rename = "ThumbSrc", skip_serializing_if = "Option::is_none")]
    pub thumb_src: Option<String>,

    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(
        default,
        rename = "Type",
        deserialize_with = "from_album_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub album_type: Option<AlbumType>,
}

impl WireModel for AlbumProperties {
    const NAME: &'static str = "AlbumProperties";
}

/// Search parameters for [`Album::search`]
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumQuery {
    /// Maximum number of results
    pub count: u32,
    pub query: Option<String>,
    pub offset: Option<u32>,
    pub order: Option<AlbumOrder>,
}

impl Default for AlbumQuery {
    fn default() -> Self {
        Self {
            count: 1,
            query: None,
            offset: None,
            order: None,
        }
    }
}

impl AlbumQuery {
    pub fn new(query: &str, count: u32) -> Self {
        Self {
            count,
            query: Some(query.into()),
            ..Default::default()
        }
    }

    fn to_options(&self) -> RequestOptions {
        RequestOptions::new()
            .param("count", self.count)
            .param_opt("q", self.query.as_deref())
            .param_opt("offset", self.offset)
            .param_opt("order", self.order.map(<&'static str>::from))
    }
}
