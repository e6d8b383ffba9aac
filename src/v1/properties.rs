/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use strum_macros::{EnumString, IntoStaticStr};

/// Sort orders accepted by the album search
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum AlbumOrder {
    Favorites,
    Name,
    Title,
    Added,
    Edited,
}

/// Sort orders accepted by the photo search
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum PhotoOrder {
    Relevance,
    Newest,
    Oldest,
    Added,
    Edited,
    Name,
    Title,
    Similar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlbumType {
    Unknown,
    Album,
    Moment,
    Folder,
    Month,
    State,
}
