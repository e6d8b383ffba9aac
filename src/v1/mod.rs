/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

mod macros;
mod parsers;
pub mod album;
pub mod auth;
pub mod client;
pub mod errors;
pub mod library;
pub mod link;
pub mod model;
pub mod photo;
pub mod properties;

pub use album::*;
pub use auth::*;
pub use client::*;
pub use errors::*;
pub use library::*;
pub use link::*;
pub use model::*;
pub use photo::*;
pub use properties::*;
