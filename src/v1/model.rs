/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Conversion between the server's PascalCase JSON and the snake_case models.

use crate::v1::errors::PhotoprismError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt::Debug;

// Words that are sent fully upper-cased on the wire ("share_uid" -> "ShareUID")
const ACRONYMS: &[&str] = &["uid", "id", "json", "http", "url", "utc"];

/// Converts a snake_case field name into the PascalCase key the server uses.
///
/// ```rust
/// use photoprism::v1::pascal_case;
/// assert_eq!(pascal_case("uid"), "UID");
/// assert_eq!(pascal_case("share_uid"), "ShareUID");
/// assert_eq!(pascal_case("thumb_src"), "ThumbSrc");
/// ```
pub fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            if ACRONYMS.contains(&word) {
                return word.to_ascii_uppercase();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut capitalized: String = first.to_uppercase().collect();
                    capitalized.push_str(&chars.as_str().to_lowercase());
                    capitalized
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Converts a PascalCase wire key into its snake_case field name.
///
/// A run of capitals is kept together as one word ("ShareUID" -> "share_uid"), and
/// the last capital of a run starts a new word when followed by a lower case letter
/// ("FNumber" -> "f_number").
pub fn snake_case(pascal: &str) -> String {
    let chars: Vec<char> = pascal.chars().collect();
    let mut out = String::with_capacity(pascal.len() + 4);
    for (idx, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && idx > 0 {
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Base behaviour shared by every resource model.
///
/// Models declare their wire keys with serde renames. `to_wire` drops every unset
/// field so that only what was set is sent to the server, and `from_wire` refuses
/// server JSON that lacks one of the `REQUIRED` fields.
pub trait WireModel: Serialize + DeserializeOwned {
    /// Name used in validation errors
    const NAME: &'static str;

    /// snake_case names of the fields that must be present and non-empty
    const REQUIRED: &'static [&'static str] = &[];

    /// Serializes into a JSON object holding only the fields that are set
    fn to_wire(&self) -> Result<Map<String, Value>, PhotoprismError> {
        match serde_json::to_value(self)? {
            Value::Object(mut map) => {
                map.retain(|_, v| !v.is_null());
                Ok(map)
            }
            _ => Err(PhotoprismError::InvalidArgument(format!(
                "{} does not serialize to a JSON object",
                Self::NAME
            ))),
        }
    }

    /// Same as [`WireModel::to_wire`] wrapped as a JSON value for request bodies
    fn to_json(&self) -> Result<Value, PhotoprismError> {
        self.to_wire().map(Value::Object)
    }

    /// Checks the server JSON before it is decoded.
    ///
    /// Models holding nested models override this to check those too.
    fn validate(value: &Value) -> Result<(), PhotoprismError> {
        check_required::<Self>(value)
    }

    /// Builds the model from a JSON object returned by the server
    fn from_wire(value: Value) -> Result<Self, PhotoprismError> {
        Self::validate(&value)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Fails unless every `REQUIRED` field of `M` is present, non-null and non-empty
pub fn check_required<M: WireModel>(value: &Value) -> Result<(), PhotoprismError> {
    let Value::Object(map) = value else {
        return Err(<serde_json::Error as serde::de::Error>::custom(format!(
            "expected a JSON object for {}",
            M::NAME
        ))
        .into());
    };
    for &field in M::REQUIRED {
        let present = match map.get(&pascal_case(field)) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(PhotoprismError::MissingField {
                model: M::NAME,
                field,
            });
        }
    }
    Ok(())
}

/// Anything that carries a server assigned UID.
pub trait HasUid: Debug {
    fn uid(&self) -> &str;
}

/// A resource argument given either as a bare UID or as a model holding one.
///
/// Every wrapper accepts `impl Into<Reference>` so `"pqbcf5j446s0futy"` and
/// `&photo` produce the same request.
#[derive(Debug, Clone, Copy)]
pub enum Reference<'a> {
    Uid(&'a str),
    Handle(&'a dyn HasUid),
}

impl<'a> Reference<'a> {
    /// Returns the UID this reference points at
    pub fn resolve(&self) -> Result<&'a str, PhotoprismError> {
        let uid = match *self {
            Reference::Uid(uid) => uid,
            Reference::Handle(handle) => handle.uid(),
        };
        if uid.trim().is_empty() {
            return Err(PhotoprismError::InvalidReference(format!("{:?}", self)));
        }
        Ok(uid)
    }

    /// The UID percent-encoded for use as a path segment
    pub(crate) fn path_segment(&self) -> Result<String, PhotoprismError> {
        self.resolve()
            .map(|uid| urlencoding::encode(uid).into_owned())
    }
}

impl<'a> From<&'a str> for Reference<'a> {
    fn from(uid: &'a str) -> Self {
        Reference::Uid(uid)
    }
}

impl<'a> From<&'a String> for Reference<'a> {
    fn from(uid: &'a String) -> Self {
        Reference::Uid(uid.as_str())
    }
}

/// Resolves every reference, failing on the first one without a UID
pub fn resolve_all<'a, I, R>(refs: I) -> Result<Vec<String>, PhotoprismError>
where
    I: IntoIterator<Item = R>,
    R: Into<Reference<'a>>,
{
    refs.into_iter()
        .map(|r| r.into().resolve().map(str::to_owned))
        .collect()
}
