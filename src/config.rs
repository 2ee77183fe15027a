//! What the page shell needs to know to open and close a page.

use std::path::Path;

use anyhow::{Result, Context, anyhow};

use crate::{http_request_method::FormMethod,
            util::{file_stem_and_extension, getenv_nonempty}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub method: FormMethod,
    /// Where the form submits to; normally the script itself.
    pub action: String,
    /// Stylesheets linked from the document head.
    pub css_files: Vec<String>,
    /// Scripts loaded from the document head.
    pub js_files: Vec<String>,
    /// Stylesheets linked at the end of the body.
    pub footer_css_files: Vec<String>,
    /// Scripts loaded at the end of the body.
    pub footer_js_files: Vec<String>,
}

impl PageConfig {
    pub fn new(title: impl Into<String>, action: impl Into<String>) -> Self {
        PageConfig {
            title: title.into(),
            method: FormMethod::default(),
            action: action.into(),
            css_files: Vec::new(),
            js_files: Vec::new(),
            footer_css_files: Vec::new(),
            footer_js_files: Vec::new(),
        }
    }

    /// Configuration for a CGI script at `exe`: the form submits to
    /// the script's file name, the title is its stem, and
    /// `<stem>.css` / `<stem>.js` are loaded if they exist in the
    /// current directory.
    pub fn for_executable(exe: &Path) -> Result<Self> {
        let (stem, extension) = file_stem_and_extension(exe).with_context(
            || anyhow!("deriving page configuration from {exe:?}"))?;
        let action = match extension {
            Some(ext) => format!("{stem}.{ext}"),
            None => stem.clone(),
        };
        let mut config = PageConfig::new(stem.clone(), action);
        let css = format!("{stem}.css");
        if Path::new(&css).exists() {
            config.css_files.push(css);
        }
        let js = format!("{stem}.js");
        if Path::new(&js).exists() {
            config.js_files.push(js);
        }
        Ok(config)
    }

    /// Apply `SIMPLEWEB_TITLE` and `SIMPLEWEB_METHOD` if set.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(title) = getenv_nonempty("SIMPLEWEB_TITLE")? {
            self.title = title;
        }
        if let Some(method) = getenv_nonempty("SIMPLEWEB_METHOD")? {
            self.method = FormMethod::from_str(&method).with_context(
                || anyhow!("invalid SIMPLEWEB_METHOD env var"))?;
        }
        Ok(self)
    }

    pub fn method(mut self, method: FormMethod) -> Self {
        self.method = method;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn css(mut self, url: impl Into<String>) -> Self {
        self.css_files.push(url.into());
        self
    }

    pub fn js(mut self, url: impl Into<String>) -> Self {
        self.js_files.push(url.into());
        self
    }

    pub fn footer_css(mut self, url: impl Into<String>) -> Self {
        self.footer_css_files.push(url.into());
        self
    }

    pub fn footer_js(mut self, url: impl Into<String>) -> Self {
        self.footer_js_files.push(url.into());
        self
    }
}
