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
    use crate::helpers;
    use dotenvy::dotenv;
    use photoprism::v1::{
        Album, AlbumProperties, AlbumQuery, Photo, PhotoQuery, ShareLink, ShareLinkProperties,
        user_session,
    };

    // Needs a running server, see PHOTOPRISM_* in .env
    #[ignore]
    #[test]
    fn album_lifecycle() {
        dotenv().ok();
        let (api, user) = helpers::get_live_user().unwrap();
        user_session(user, &api, |session| -> anyhow::Result<()> {
            let album = Album::create(session, "photoprism-rs test", false)?;
            println!("Album info: {:?}", album);

            let props = AlbumProperties {
                description: Some("Created by the live tests".into()),
                ..Default::default()
            };
            let album = Album::update(session, &album, &props)?;
            assert_eq!(album.description, props.description);

            let link = ShareLink::create(session, &album, &ShareLinkProperties::default())?;
            println!("Share url: {}", link.url(Some(&api.netloc()), api.is_https())?);
            assert_eq!(ShareLink::list(session, &album)?.len(), 1);
            ShareLink::delete(session, &link)?;

            Album::delete(session, &album)?;
            Ok(())
        })
        .unwrap();
    }

    #[ignore]
    #[test]
    fn list_recent() {
        dotenv().ok();
        let (api, user) = helpers::get_live_user().unwrap();
        user_session(user, &api, |session| -> anyhow::Result<()> {
            let albums = Album::search(session, &AlbumQuery::new("", 5))?;
            println!("Albums: {:?}", albums);
            let query = PhotoQuery {
                count: 5,
                ..Default::default()
            };
            for photo in Photo::search(session, &query)? {
                println!("Photo {} {:?}", photo.uid, photo.title);
            }
            Ok(())
        })
        .unwrap();
    }
}
