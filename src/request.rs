//! Decoding of the submitted form data.

use kstring::KString;

use crate::url_encoding::form_decode_lenient;

/// Combine query string and body: the query if there is no body, the
/// body if there is no query, both joined with `&` (query first)
/// otherwise.
pub fn combine_input(query: Option<&str>, body: Option<&str>) -> String {
    let query = query.unwrap_or("");
    let body = body.unwrap_or("");
    match (query.is_empty(), body.is_empty()) {
        (true, _) => body.to_string(),
        (false, true) => query.to_string(),
        (false, false) => format!("{query}&{body}"),
    }
}

/// The `name=value` tokens of one request, in submission order and
/// still encoded; they are only split and decoded on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    tokens: Vec<KString>,
    has_input: bool,
}

impl RawRequest {
    /// A request without any input, i.e. the first render of a page.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn decode(input: &str) -> Self {
        let tokens = input.split('&')
            .filter(|t| !t.is_empty())
            .map(KString::from_ref)
            .collect();
        RawRequest {
            tokens,
            has_input: !input.is_empty(),
        }
    }

    pub fn from_parts(query: Option<&str>, body: Option<&str>) -> Self {
        Self::decode(&combine_input(query, body))
    }

    /// False on the first render of a page, true if the browser sent
    /// anything (even if none of it is usable).
    pub fn has_input(&self) -> bool {
        self.has_input
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    /// The still encoded value of the first token named `name`.
    /// Tokens without `=` never match.
    pub fn raw_value(&self, name: &str) -> Option<&str> {
        self.tokens().find_map(|token| {
            let (n, v) = token.split_once('=')?;
            if n == name { Some(v) } else { None }
        })
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.raw_value(name).is_some()
    }

    /// The decoded value of the first token named `name`.
    pub fn value(&self, name: &str) -> Option<String> {
        self.raw_value(name).map(form_decode_lenient)
    }
}
