/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum PhotoprismError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Authentication failed with status {status}: {body}")]
    Auth { status: StatusCode, body: String },

    #[error("HTTP error {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Scheme must be either 'http' or 'https', got '{0}'")]
    InvalidScheme(String),

    #[error("JSON response for {model} is missing required field '{field}'")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    #[error("Reference does not resolve to a UID: {0}")]
    InvalidReference(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Session is not authenticated")]
    NotAuthenticated,

    #[error("Session has been closed")]
    SessionClosed,

    #[error("{0} has not been implemented")]
    NotImplemented(&'static str),

    #[error("Expected response missing: {0}")]
    ResponseMissing(&'static str),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u32, String),
}

impl PhotoprismError {
    /// Status code of the failed response, when the error came from the server
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth { status, .. } | Self::Http { status, .. } => Some(*status),
            Self::Request(err) => err.status(),
            _ => None,
        }
    }
}
