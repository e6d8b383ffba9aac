/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # PhotoPrism
//!
//! This library was created for working with the [PhotoPrism](https://www.photoprism.app)
//! REST API v1.
//!
//! ## Features
//!
//! - User (username/password) and OAuth client sessions
//!     - Sessions log out when dropped or when a scoped session ends
//! - Albums
//!     - Search, create, update, delete, like and clone
//!     - Share links
//! - Photos
//!     - Search, update, approve, like
//!     - Archive, restore, delete and set private in batches
//!     - Upload and download files
//! - Start import and index jobs
//! - Lower level interface for sending requests through an authenticated [`v1::Session`]
//!
//! Requests are blocking. Every wrapper takes the [`v1::Session`] to send through and
//! accepts either a bare UID or a model as the resource to act on.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! photoprism = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use photoprism::v1::{
//!     Album, AlbumProperties, ApiUrl, PhotoprismError, ShareLink, ShareLinkProperties,
//!     User, user_session,
//! };
//!
//! fn share_new_album(password: &str) -> Result<String, PhotoprismError> {
//!     let api = ApiUrl::new(Some("localhost:2342"), Some("http"))?;
//!     let user = User::new("admin", password);
//!
//!     // The session is logged out when the closure returns, even on error
//!     user_session(user, &api, |session| {
//!         let album = Album::create(session, "Trip", false)?;
//!
//!         // Only the properties that are set are sent
//!         let props = AlbumProperties {
//!             description: Some("Summer 2025".into()),
//!             ..Default::default()
//!         };
//!         let album = Album::update(session, &album, &props)?;
//!
//!         let link = ShareLink::create(session, &album, &ShareLinkProperties::default())?;
//!         Ok(link.url(Some(&api.netloc()), api.is_https())?.to_string())
//!     })
//! }
//! ```
//!
pub mod v1;
