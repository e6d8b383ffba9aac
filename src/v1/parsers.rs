/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::AlbumType;
use serde::Deserialize;
use std::str::FromStr;

// Parses album type, unrecognised types become Unknown
pub fn from_album_type<'de, D>(deserializer: D) -> Result<Option<AlbumType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.map(|s| AlbumType::from_str(&s).unwrap_or(AlbumType::Unknown)))
}
