/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::client::I18nResponse;
use crate::v1::errors::PhotoprismError;
use crate::v1::macros::{impl_reference, obj_from_endpoint, objs_from_endpoint};
use crate::v1::model::{check_required, resolve_all};
use crate::v1::{PhotoOrder, Reference, RequestOptions, Session, WireModel};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::Method;
use reqwest::blocking::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

/// Holds information returned from the Photos API.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Photo {
    #[serde(rename = "UID")]
    pub uid: String,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub photo_type: Option<String>,

    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "OriginalName", skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,

    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "FileUID", skip_serializing_if = "Option::is_none")]
    pub file_uid: Option<String>,

    #[serde(rename = "FileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(rename = "FileHash", skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,

    #[serde(rename = "Width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(rename = "Height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(rename = "Favorite", skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,

    #[serde(rename = "Private", skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    #[serde(rename = "Lat", skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(rename = "Lng", skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(rename = "TakenAt", skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<DateTime<Utc>>,

    #[serde(rename = "Files", skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PhotoFile>>,
}

impl WireModel for Photo {
    const NAME: &'static str = "Photo";
    const REQUIRED: &'static [&'static str] = &["uid"];

    fn validate(value: &Value) -> Result<(), PhotoprismError> {
        check_required::<Self>(value)?;
        if let Some(Value::Array(files)) = value.get("Files") {
            for file in files {
                PhotoFile::validate(file)?;
            }
        }
        Ok(())
    }
}

/// A single file (original, sidecar, live video) belonging to a Photo
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PhotoFile {
    #[serde(rename = "UID")]
    pub uid: String,

    #[serde(rename = "PhotoUID")]
    pub photo_uid: String,

    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Root", skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    #[serde(rename = "Hash", skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(rename = "Primary", skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,

    #[serde(rename = "MediaID", skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,

    #[serde(rename = "MediaUTC", skip_serializing_if = "Option::is_none")]
    pub media_utc: Option<i64>,

    #[serde(rename = "InstanceID", skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    #[serde(rename = "Codec", skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,

    #[serde(rename = "FileType", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,

    #[serde(rename = "MediaType", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    #[serde(rename = "Mime", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,

    #[serde(rename = "Width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(rename = "Height", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(rename = "Orientation", skip_serializing_if = "Option::is_none")]
    pub orientation: Option<u8>,

    #[serde(rename = "OrientationSrc", skip_serializing_if = "Option::is_none")]
    pub orientation_src: Option<String>,

    #[serde(rename = "AspectRatio", skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,

    #[serde(rename = "ColorProfile", skip_serializing_if = "Option::is_none")]
    pub color_profile: Option<String>,

    #[serde(rename = "MainColor", skip_serializing_if = "Option::is_none")]
    pub main_color: Option<String>,

    #[serde(rename = "Colors", skip_serializing_if = "Option::is_none")]
    pub colors: Option<String>,

    #[serde(rename = "Luminance", skip_serializing_if = "Option::is_none")]
    pub luminance: Option<String>,

    #[serde(rename = "Diff", skip_serializing_if = "Option::is_none")]
    pub diff: Option<i64>,

    #[serde(rename = "Chroma", skip_serializing_if = "Option::is_none")]
    pub chroma: Option<i64>,

    #[serde(rename = "Software", skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,

    #[serde(rename = "ModTime", skip_serializing_if = "Option::is_none")]
    pub mod_time: Option<i64>,

    #[serde(rename = "CreatedAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    // Milliseconds spent indexing the file
    #[serde(rename = "CreatedIn", skip_serializing_if = "Option::is_none")]
    pub created_in: Option<i64>,

    #[serde(rename = "UpdatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(rename = "Markers", skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<Value>>,
}

impl WireModel for PhotoFile {
    const NAME: &'static str = "PhotoFile";
    const REQUIRED: &'static [&'static str] = &["uid", "photo_uid"];
}

impl_reference!(Photo, PhotoFile);

/// Descriptive details that are part of [`PhotoProperties`]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PhotoDetails {
    #[serde(rename = "Artist", skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    #[serde(rename = "ArtistSrc", skip_serializing_if = "Option::is_none")]
    pub artist_src: Option<String>,

    #[serde(rename = "Copyright", skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(rename = "CopyrightSrc", skip_serializing_if = "Option::is_none")]
    pub copyright_src: Option<String>,

    #[serde(rename = "Keywords", skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(rename = "KeywordsSrc", skip_serializing_if = "Option::is_none")]
    pub keywords_src: Option<String>,

    #[serde(rename = "License", skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(rename = "LicenseSrc", skip_serializing_if = "Option::is_none")]
    pub license_src: Option<String>,

    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "NotesSrc", skip_serializing_if = "Option::is_none")]
    pub notes_src: Option<String>,

    #[serde(rename = "PhotoID", skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<i64>,

    #[serde(rename = "Subject", skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(rename = "SubjectSrc", skip_serializing_if = "Option::is_none")]
    pub subject_src: Option<String>,
}

impl WireModel for PhotoDetails {
    const NAME: &'static str = "PhotoDetails";
}

/// Properties that can be changed on an existing Photo
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PhotoProperties {
    #[serde(rename = "Altitude", skip_serializing_if = "Option::is_none")]
    pub altitude: Option<i64>,

    #[serde(rename = "CameraID", skip_serializing_if = "Option::is_none")]
    pub camera_id: Option<i64>,

    #[serde(rename = "CameraSrc", skip_serializing_if = "Option::is_none")]
    pub camera_src: Option<String>,

    #[serde(rename = "CellAccuracy", skip_serializing_if = "Option::is_none")]
    pub cell_accuracy: Option<i64>,

    #[serde(rename = "CellID", skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,

    #[serde(rename = "Country", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "Day", skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "DescriptionSrc", skip_serializing_if = "Option::is_none")]
    pub description_src: Option<String>,

    #[serde(rename = "Details", skip_serializing_if = "Option::is_none")]
    pub details: Option<PhotoDetails>,

    #[serde(rename = "Exposure", skip_serializing_if = "Option::is_none")]
    pub exposure: Option<String>,

    #[serde(rename = "FNumber", skip_serializing_if = "Option::is_none")]
    pub f_number: Option<f64>,

    #[serde(rename = "Favorite", skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,

    #[serde(rename = "FocalLength", skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<i64>,

    #[serde(rename = "Iso", skip_serializing_if = "Option::is_none")]
    pub iso: Option<i64>,

    #[serde(rename = "Lat", skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(rename = "LensID", skip_serializing_if = "Option::is_none")]
    pub lens_id: Option<i64>,

    #[serde(rename = "Lng", skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(rename = "Month", skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,

    #[serde(rename = "OriginalName", skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,

    #[serde(rename = "Panorama", skip_serializing_if = "Option::is_none")]
    pub panorama: Option<bool>,

    #[serde(rename = "PlaceID", skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,

    #[serde(rename = "PlaceSrc", skip_serializing_if = "Option::is_none")]
    pub place_src: Option<String>,

    #[serde(rename = "Private", skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,

    #[serde(rename = "Scan", skip_serializing_if = "Option::is_none")]
    pub scan: Option<bool>,

    #[serde(rename = "Stack", skip_serializing_if = "Option::is_none")]
    pub stack: Option<i32>,

    #[serde(rename = "TakenAt", skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<String>,

    #[serde(rename = "TakenAtLocal", skip_serializing_if = "Option::is_none")]
    pub taken_at_local: Option<String>,

    #[serde(rename = "TakenSrc", skip_serializing_if = "Option::is_none")]
    pub taken_src: Option<String>,

    #[serde(rename = "TimeZone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "TitleSrc", skip_serializing_if = "Option::is_none")]
    pub title_src: Option<String>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub photo_type: Option<String>,

    #[serde(rename = "TypeSrc", skip_serializing_if = "Option::is_none")]
    pub type_src: Option<String>,

    #[serde(rename = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl WireModel for PhotoProperties {
    const NAME: &'static str = "PhotoProperties";
}

/// Search parameters for [`Photo::search`]
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoQuery {
    /// Number of matches to return
    pub count: u32,

    /// Minimum quality score, 0 disables the limit
    pub quality: u8,

    /// Merge consecutive files of the same photo into one result
    pub merged: Option<bool>,

    /// Search filter, see the PhotoPrism search filter docs
    pub query: Option<String>,

    pub offset: Option<u32>,

    pub order: Option<PhotoOrder>,

    /// Only photos with public access
    pub public: Option<bool>,

    /// UID of the album to search in
    pub album: Option<String>,

    pub path: Option<String>,

    pub video: Option<bool>,
}

impl Default for PhotoQuery {
    fn default() -> Self {
        Self {
            count: 1,
            quality: 0,
            merged: None,
            query: None,
            offset: None,
            order: None,
            public: None,
            album: None,
            path: None,
            video: None,
        }
    }
}

impl PhotoQuery {
    pub const MAX_QUALITY: u8 = 7;

    /// Limits the search to the given album
    pub fn in_album<'a>(mut self, album: impl Into<Reference<'a>>) -> Result<Self, PhotoprismError> {
        self.album = Some(album.into().resolve()?.to_owned());
        Ok(self)
    }

    fn to_options(&self) -> Result<RequestOptions, PhotoprismError> {
        if self.quality > Self::MAX_QUALITY {
            return Err(PhotoprismError::InvalidArgument(format!(
                "quality {} is out of range, it must be between 0 and {}",
                self.quality,
                Self::MAX_QUALITY
            )));
        }
        Ok(RequestOptions::new()
            .param("count", self.count)
            .param("quality", self.quality)
            .param_opt("merged", self.merged)
            .param_opt("q", self.query.as_deref())
            .param_opt("offset", self.offset)
            .param_opt("order", self.order.map(<&'static str>::from))
            .param_opt("public", self.public)
            .param_opt("s", self.album.as_deref())
            .param_opt("path", self.path.as_deref())
            .param_opt("video", self.video))
    }
}

/// A file to be uploaded with [`Photo::upload`]
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: &str, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }

    /// Reads the whole file into memory
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PhotoprismError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            file_name,
            data: std::fs::read(path)?,
        })
    }
}

/// SHA-1 hex digest, the hash PhotoPrism indexes files by
pub fn file_hash(data: &[u8]) -> String {
    format!("{:x}", Sha1::digest(data))
}

impl Photo {
    const BASE_URI: &'static str = "photos";

    // photos/{uid}
    fn uri(photo: Reference<'_>) -> Result<String, PhotoprismError> {
        Ok(format!("{}/{}", Self::BASE_URI, photo.path_segment()?))
    }

    // POST batch/photos/{action} with the selected UIDs
    fn batch(session: &Session, action: &str, uids: &[String]) -> Result<(), PhotoprismError> {
        if uids.is_empty() {
            return Ok(());
        }
        let endpoint = format!("batch/photos/{}", action);
        let options = RequestOptions::new().json(json!({ "photos": uids }));
        session.endpoint(Method::POST, &endpoint, options)?;
        Ok(())
    }

    /// Returns the photos matching the query
    pub fn search(session: &Session, query: &PhotoQuery) -> Result<Vec<Self>, PhotoprismError> {
        let options = query.to_options()?;
        objs_from_endpoint!(session, Method::GET, Self::BASE_URI, options, Photo)
    }

    /// Returns the photo with the given UID
    pub fn from_uid<'a>(
        session: &Session,
        photo: impl Into<Reference<'a>>,
    ) -> Result<Self, PhotoprismError> {
        let endpoint = Self::uri(photo.into())?;
        obj_from_endpoint!(session, Method::GET, endpoint, RequestOptions::new(), Photo)
    }

    /// Returns the photo a file with this SHA-1 hash belongs to, if any
    pub fn from_file_hash(session: &Session, hash: &str) -> Result<Option<Self>, PhotoprismError> {
        let endpoint = format!("files/{}", urlencoding::encode(hash));
        let file = session
            .endpoint(Method::GET, &endpoint, RequestOptions::new())?
            .json::<Value>()?;
        match file.get("PhotoUID").and_then(Value::as_str) {
            Some(uid) if !uid.is_empty() => Self::from_uid(session, uid).map(Some),
            _ => {
                log::error!("No file found matching hash {}", hash);
                Ok(None)
            }
        }
    }

    /// Returns the photo the given file contents belong to, if any
    pub fn from_bytes(session: &Session, data: &[u8]) -> Result<Option<Self>, PhotoprismError> {
        Self::from_file_hash(session, &file_hash(data))
    }

    /// Moves photos to the archive
    pub fn archive<'a, I, R>(session: &Session, photos: I) -> Result<(), PhotoprismError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference<'a>>,
    {
        Self::batch(session, "archive", &resolve_all(photos)?)
    }

    /// Restores archived photos
    pub fn restore<'a, I, R>(session: &Session, photos: I) -> Result<(), PhotoprismError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference<'a>>,
    {
        Self::batch(session, "restore", &resolve_all(photos)?)
    }

    /// Permanently deletes photos that are already archived
    pub fn clear_from_archive<'a, I, R>(session: &Session, photos: I) -> Result<(), PhotoprismError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference<'a>>,
    {
        Self::batch(session, "delete", &resolve_all(photos)?)
    }

    /// Archives then permanently deletes photos
    pub fn delete<'a, I, R>(session: &Session, photos: I) -> Result<(), PhotoprismError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference<'a>>,
    {
        let uids = resolve_all(photos)?;
        Self::batch(session, "archive", &uids)?;
        Self::batch(session, "delete", &uids)
    }

    /// Flags photos as private
    pub fn set_private<'a, I, R>(session: &Session, photos: I) -> Result<(), PhotoprismError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference<'a>>,
    {
        Self::batch(session, "private", &resolve_all(photos)?)
    }

    /// Sends only the properties that are set and returns the updated photo
    pub fn update<'a>(
        session: &Session,
        photo: impl Into<Reference<'a>>,
        properties: &PhotoProperties,
    ) -> Result<Self, PhotoprismError> {
        let endpoint = Self::uri(photo.into())?;
        let options = RequestOptions::new().json(properties.to_json()?);
        obj_from_endpoint!(session, Method::PUT, endpoint, options, Photo)
    }

    /// Marks a photo in review as approved
    pub fn approve<'a>(
        session: &Session,
        photo: impl Into<Reference<'a>>,
    ) -> Result<Self, PhotoprismError> {
        let endpoint = format!("{}/approve", Self::uri(photo.into())?);
        let mut body = session
            .endpoint(Method::POST, &endpoint, RequestOptions::new())?
            .json::<Value>()?;
        let photo = body
            .get_mut("photo")
            .map(Value::take)
            .ok_or(PhotoprismError::ResponseMissing("photo"))?;
        Self::from_wire(photo)
    }

    /// Marks a photo as favorite
    pub fn like<'a>(session: &Session, photo: impl Into<Reference<'a>>) -> Result<(), PhotoprismError> {
        let endpoint = format!("{}/like", Self::uri(photo.into())?);
        session.endpoint(Method::POST, &endpoint, RequestOptions::new())?;
        Ok(())
    }

    /// Removes the favorite mark
    pub fn unlike<'a>(
        session: &Session,
        photo: impl Into<Reference<'a>>,
    ) -> Result<(), PhotoprismError> {
        let endpoint = format!("{}/like", Self::uri(photo.into())?);
        session.endpoint(Method::DELETE, &endpoint, RequestOptions::new())?;
        Ok(())
    }

    /// Selects which of the photo's files is primary. Not supported yet.
    pub fn set_primary_file<'a, 'b>(
        _session: &Session,
        _photo: impl Into<Reference<'a>>,
        _file: impl Into<Reference<'b>>,
    ) -> Result<Self, PhotoprismError> {
        Err(PhotoprismError::NotImplemented("Photo::set_primary_file"))
    }

    /// Unstacks a file from the photo. Not supported yet.
    pub fn pop_file<'a, 'b>(
        _session: &Session,
        _photo: impl Into<Reference<'a>>,
        _file: impl Into<Reference<'b>>,
    ) -> Result<PhotoFile, PhotoprismError> {
        Err(PhotoprismError::NotImplemented("Photo::pop_file"))
    }

    /// Uploads files for the logged in user and adds them to the albums.
    ///
    /// Returns the indexed photo of every file, in order, or None for files the server
    /// did not index.
    pub fn upload<'a, I, R>(
        session: &Session,
        files: &[UploadFile],
        albums: I,
    ) -> Result<Vec<Option<Self>>, PhotoprismError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Reference<'a>>,
    {
        let albums = resolve_all(albums)?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let info = session.info()?;
        let (Some(user_uid), Some(token)) = (info.user_uid, info.download_token) else {
            log::error!("Session has no user or download token, cannot upload");
            return Err(PhotoprismError::ResponseMissing("session user and download token"));
        };
        let endpoint = format!(
            "users/{}/upload/{}",
            urlencoding::encode(&user_uid),
            urlencoding::encode(&token)
        );

        let form = files.iter().fold(Form::new(), |form, file| {
            form.part(
                "files",
                Part::bytes(file.data.clone()).file_name(file.file_name.clone()),
            )
        });
        I18nResponse::check(session.endpoint(
            Method::POST,
            &endpoint,
            RequestOptions::new().multipart(form),
        )?)?;

        // Processing the upload imports the files into the library
        I18nResponse::check(session.endpoint(
            Method::PUT,
            &endpoint,
            RequestOptions::new().json(json!({ "albums": albums })),
        )?)?;

        files
            .iter()
            .map(|file| Self::from_bytes(session, &file.data))
            .collect()
    }

    /// Downloads the original file of the photo
    pub fn download<'a>(
        session: &Session,
        photo: impl Into<Reference<'a>>,
    ) -> Result<Bytes, PhotoprismError> {
        let endpoint = format!("{}/dl", Self::uri(photo.into())?);
        let download_token = match session.token().and_then(|t| t.download_token.clone()) {
            Some(token) => token,
            None => session.info()?.download_token.ok_or_else(|| {
                log::error!("Download token could not be received");
                PhotoprismError::ResponseMissing("download token")
            })?,
        };
        let options = RequestOptions::new().param("t", download_token);
        Ok(session.endpoint(Method::GET, &endpoint, options)?.bytes()?)
    }

    /// Downloads the original file of the photo into `writer`
    pub fn download_to<'a, W: Write>(
        session: &Session,
        photo: impl Into<Reference<'a>>,
        writer: &mut W,
    ) -> Result<(), PhotoprismError> {
        let content = Self::download(session, photo)?;
        writer.write_all(&content)?;
        writer.flush()?;
        Ok(())
    }
}
