/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Server side library jobs: importing and indexing.

use crate::v1::errors::PhotoprismError;
use crate::v1::model::resolve_all;
use crate::v1::{Reference, RequestOptions, Session};
use reqwest::Method;
use serde_json::json;

/// Starts importing files from the import folder.
///
/// `path` is relative to the import folder, None imports everything. With
/// `move_files` the files are removed from the import folder once imported. Imported
/// files are added to every album given.
pub fn start_import<'a, I, R>(
    session: &Session,
    path: Option<&str>,
    move_files: Option<bool>,
    albums: I,
) -> Result<(), PhotoprismError>
where
    I: IntoIterator<Item = R>,
    R: Into<Reference<'a>>,
{
    let options = RequestOptions::new().json(json!({
        "albums": resolve_all(albums)?,
        "move": move_files.unwrap_or(false),
        "path": path.unwrap_or_default(),
    }));
    session.endpoint(Method::POST, "import", options)?;
    Ok(())
}

/// Starts indexing the originals folder.
///
/// `path` is relative to the originals folder, None indexes everything. `cleanup`
/// and `rescan` both default to true.
pub fn start_index(
    session: &Session,
    path: Option<&str>,
    cleanup: Option<bool>,
    rescan: Option<bool>,
) -> Result<(), PhotoprismError> {
    let options = RequestOptions::new().json(json!({
        "cleanup": cleanup.unwrap_or(true),
        "path": path.unwrap_or_default(),
        "rescan": rescan.unwrap_or(true),
    }));
    session.endpoint(Method::POST, "index", options)?;
    Ok(())
}
