use std::borrow::Cow;

use pct_str::{PctString, URIReserved, InvalidPctString, PctStr};

pub fn url_encode(s: &str) -> String {
    let p = PctString::encode(s.chars(), URIReserved);
    p.to_string()
}

// Don't want to return InvalidPctString as error value because then:
// 1. dependency on pct_str,
// 2. worse, InvalidPctString would contain &str and that would be
//    embedded in anyhow::Result down the line.
// Thus make our own that owns the string.

#[derive(Debug, thiserror::Error)]
#[error("url decoding error: {0}")]
pub struct UrlDecodingError(Box<String>);

impl From<InvalidPctString<&str>> for UrlDecodingError {
    fn from(e: InvalidPctString<&str>) -> Self {
        Self(Box::new(format!("{}", e)))
    }
}

pub fn url_decode(s: &str) -> Result<String, UrlDecodingError> {
    let p = PctStr::new(s)?;
    Ok(p.decode())
}

/// Decode one name or value of an `application/x-www-form-urlencoded`
/// body: `+` stands for a space, the rest is percent encoding.
pub fn form_decode(s: &str) -> Result<String, UrlDecodingError> {
    let s: Cow<str> = if s.contains('+') {
        Cow::Owned(s.replace('+', " "))
    } else {
        Cow::Borrowed(s)
    };
    url_decode(&s)
}

/// Like `form_decode` but never fails: malformed percent sequences
/// leave the text as it was submitted (with `+` still turned into
/// spaces).
pub fn form_decode_lenient(s: &str) -> String {
    match form_decode(s) {
        Ok(v) => v,
        Err(e) => {
            crate::warn!("{e}, using value undecoded: {s:?}");
            s.replace('+', " ")
        }
    }
}
