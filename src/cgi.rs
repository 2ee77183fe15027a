//! The CGI side: where the submitted form data comes from and how the
//! finished document goes out.

use std::io::{BufRead, IsTerminal, Read, Write};

use anyhow::{Result, Context, anyhow};

use crate::{http_request_method::HttpRequestMethod,
            request::RawRequest,
            util::{getenv, getenv_nonempty},
            warn};

/// A provider of the raw, still encoded form data.
pub trait InputSource {
    /// The `foo` part of `?foo`.
    fn query(&mut self) -> Result<Option<String>>;
    /// The request body, for POST submissions.
    fn body(&mut self) -> Result<Option<String>>;
    fn user_agent(&self) -> Option<&str> {
        None
    }
}

/// Read and decode a request from `source`, query before body.
pub fn read_request(source: &mut impl InputSource) -> Result<RawRequest> {
    let query = source.query()?;
    let body = source.body()?;
    Ok(RawRequest::from_parts(query.as_deref(), body.as_deref()))
}

/// Input from the CGI environment: `QUERY_STRING`, and the body on
/// stdin if `REQUEST_METHOD` says there is one. Without
/// `REQUEST_METHOD` (run from a shell), a line piped to stdin is taken
/// as the body.
#[derive(Debug, Default)]
pub struct CgiInput {
    user_agent: Option<String>,
}

impl CgiInput {
    pub fn from_env() -> Result<Self> {
        Ok(CgiInput {
            user_agent: getenv("HTTP_USER_AGENT")?,
        })
    }

    fn method(&self) -> Result<Option<HttpRequestMethod>> {
        match getenv_nonempty("REQUEST_METHOD")? {
            Some(m) => Ok(Some(HttpRequestMethod::from_str(&m)?)),
            None => Ok(None),
        }
    }
}

impl InputSource for CgiInput {
    fn query(&mut self) -> Result<Option<String>> {
        getenv_nonempty("QUERY_STRING")
    }

    fn body(&mut self) -> Result<Option<String>> {
        let method = self.method()?;
        let stdin = std::io::stdin();
        if method.is_none() && stdin.is_terminal() {
            return Ok(None)
        }
        let content_length = getenv_nonempty("CONTENT_LENGTH")?;
        read_body(&mut stdin.lock(), method, content_length.as_deref())
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

/// Read a request body from `input`. GET, HEAD and DELETE requests
/// have none. Otherwise `content_length` bytes are read, or, when it
/// is missing, one line.
pub fn read_body(
    input: &mut impl BufRead,
    method: Option<HttpRequestMethod>,
    content_length: Option<&str>,
) -> Result<Option<String>> {
    if let Some(method) = method {
        if !method.has_body() {
            return Ok(None)
        }
    }
    let mut body = String::new();
    match content_length {
        Some(len) => {
            let len: u64 = len.trim().parse().with_context(
                || anyhow!("invalid CONTENT_LENGTH {len:?}"))?;
            input.take(len).read_to_string(&mut body).with_context(
                || anyhow!("reading request body of {len} bytes"))?;
        }
        None => {
            if method.is_some() {
                warn!("no CONTENT_LENGTH given, reading body up to end of line");
            }
            input.read_line(&mut body).with_context(
                || anyhow!("reading request body"))?;
        }
    }
    let body = body.trim_end_matches(&['\r', '\n'][..]);
    Ok(if body.is_empty() { None } else { Some(body.to_string()) })
}

/// Fixed input, for tests and for running a page from the command
/// line.
#[derive(Debug, Default, Clone)]
pub struct StaticInput {
    pub query: Option<String>,
    pub body: Option<String>,
    pub user_agent: Option<String>,
}

impl StaticInput {
    pub fn with_query(query: impl Into<String>) -> Self {
        StaticInput { query: Some(query.into()), ..Default::default() }
    }

    pub fn with_body(body: impl Into<String>) -> Self {
        StaticInput { body: Some(body.into()), ..Default::default() }
    }
}

impl InputSource for StaticInput {
    fn query(&mut self) -> Result<Option<String>> {
        Ok(self.query.clone())
    }

    fn body(&mut self) -> Result<Option<String>> {
        Ok(self.body.clone())
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

/// Whether the client looks like a mobile device.
pub fn is_mobile(user_agent: &str) -> bool {
    user_agent.to_lowercase().contains("mobile")
}

/// The response header lines, terminated by the empty line.
pub fn write_preamble(out: &mut impl Write) -> Result<()> {
    write!(out,
           "cache-control: no-cache, no-store, must-revalidate\r\n\
            pragma: no-cache\r\n\
            vary: *\r\n\
            content-type: text/html; charset=utf-8\r\n\
            \r\n")?;
    Ok(())
}

/// Send a complete response.
pub fn respond(document: &str, out: &mut impl Write) -> Result<()> {
    write_preamble(out)?;
    out.write_all(document.as_bytes())?;
    out.flush().with_context(|| anyhow!("flushing response"))?;
    Ok(())
}
