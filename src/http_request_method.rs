//! HTTP request methods, as far as a form page cares about them.

// https://developer.mozilla.org/en-US/docs/Web/HTTP/Methods

use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpRequestMethod {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
}

/// The methods a `<form>` element can submit with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

impl HttpRequestMethod {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Self::GET),
            "HEAD" => Ok(Self::HEAD),
            "POST" => Ok(Self::POST),
            "PUT" => Ok(Self::PUT),
            "DELETE" => Ok(Self::DELETE),
            _ => bail!("invalid http request method {s:?}")
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::HEAD => "HEAD",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::DELETE => "DELETE",
        }
    }

    /// Whether a request with this method can carry a form body.
    pub fn has_body(self) -> bool {
        match self {
            Self::POST | Self::PUT => true,
            Self::GET | Self::HEAD | Self::DELETE => false
        }
    }
}

impl FormMethod {
    /// Value of the `method` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
        }
    }

    /// Parse a method name as used in configuration, ignoring case.
    pub fn from_str(s: &str) -> Result<Self> {
        HttpRequestMethod::from_str(&s.to_ascii_uppercase())?.try_into()
    }
}

impl TryFrom<HttpRequestMethod> for FormMethod {
    type Error = anyhow::Error;

    fn try_from(m: HttpRequestMethod) -> Result<Self> {
        match m {
            HttpRequestMethod::GET => Ok(FormMethod::Get),
            HttpRequestMethod::POST => Ok(FormMethod::Post),
            _ => bail!("forms can't be submitted with method {}", m.as_str())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_from_str() {
        assert_eq!(HttpRequestMethod::from_str("POST").unwrap(), HttpRequestMethod::POST);
        assert!(HttpRequestMethod::from_str("post").is_err());
        assert!(HttpRequestMethod::POST.has_body());
        assert!(!HttpRequestMethod::GET.has_body());
    }

    #[test]
    fn t_form_method() {
        assert_eq!(FormMethod::from_str("get").unwrap(), FormMethod::Get);
        assert_eq!(FormMethod::from_str("Post").unwrap().as_attr(), "post");
        assert!(FormMethod::from_str("delete").is_err());
        assert!(FormMethod::from_str("bogus").is_err());
        assert_eq!(FormMethod::default(), FormMethod::Post);
    }
}
