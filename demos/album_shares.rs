/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate photoprism;

use anyhow::Result;
use chrono::{Duration, Utc};
use dotenvy::dotenv;
use photoprism::v1::{Album, AlbumOrder, AlbumQuery, ApiUrl, Session, ShareLink, User, user_session};

// Runs `album_op` on every album the user can see, stopping early when it returns false
fn iterate_albums(session: &Session, album_op: impl Fn(&Session, Album) -> Result<bool>) -> Result<()> {
    const PAGE_SIZE: u32 = 100;
    let mut offset = 0;
    loop {
        let query = AlbumQuery {
            count: PAGE_SIZE,
            offset: Some(offset),
            order: Some(AlbumOrder::Added),
            ..Default::default()
        };
        let albums = Album::search(session, &query)?;
        let fetched = albums.len() as u32;
        for album in albums {
            if !album_op(session, album)? {
                return Ok(());
            }
        }
        if fetched < PAGE_SIZE {
            return Ok(());
        }
        offset += fetched;
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let netloc = std::env::var("PHOTOPRISM_NETLOC").ok();
    let scheme = std::env::var("PHOTOPRISM_SCHEME").ok();
    let username = std::env::var("PHOTOPRISM_USERNAME")?;
    let password = std::env::var("PHOTOPRISM_PASSWORD")?;
    // Only list what would be removed unless PHOTOPRISM_REMOVE_LINKS is set
    let remove = std::env::var("PHOTOPRISM_REMOVE_LINKS").is_ok();

    let api = ApiUrl::new(netloc.as_deref(), scheme.as_deref())?;

    // Links that never expire are removed once they are this old
    let cutoff_dt = Utc::now() - Duration::days(60);

    let cleaner = |session: &Session, album: Album| -> Result<bool> {
        for link in ShareLink::list(session, &album)? {
            let never_expires = link.expires.unwrap_or(0) == 0;
            let stale = link.created_at.is_some_and(|created| created < cutoff_dt);
            println!(
                "Album: {} Link: {} Views: {}",
                album.title.as_deref().unwrap_or(&album.uid),
                link.url(Some(&api.netloc()), api.is_https())?,
                link.views.unwrap_or(0),
            );
            if never_expires && stale {
                if remove {
                    ShareLink::delete(session, &link)?;
                    println!("Removed stale share link {}", link.uid);
                } else {
                    println!("Would remove stale share link {}", link.uid);
                }
            }
        }
        Ok(true)
    };

    user_session(User::new(&username, &password), &api, |session| {
        iterate_albums(session, cleaner)
    })?;
    Ok(())
}
