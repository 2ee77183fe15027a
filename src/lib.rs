//! Self-submitting HTML forms for CGI scripts.
//!
//! A page is written as one linear program: every `read_*` call
//! renders a control and returns what the user submitted for it the
//! last time the form was sent (or the given default on the first
//! visit). Controls carry no caller-chosen names; the n-th read of a
//! page binds to the n-th control of the submitted form, so the reads
//! of a page must happen in the same order on every render.
//!
//! ```no_run
//! use simpleweb::{cgi::{self, CgiInput}, config::PageConfig, page::{Page, Layout}};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = PageConfig::for_executable(&simpleweb::util::program_path()?)?;
//!     let request = cgi::read_request(&mut CgiInput::from_env()?)?;
//!     let mut page = Page::open(config, request);
//!     page.write("Name: ");
//!     let name = page.read_string("", Layout::Line);
//!     if page.has_input() {
//!         page.writeln(format!("Hello, {name}!"));
//!     }
//!     let closed = page.close();
//!     cgi::respond(&closed.document, &mut std::io::stdout().lock())
//! }
//! ```

pub mod warn;
pub mod time_guard;
pub mod util;
pub mod url_encoding;
pub mod http_request_method;
pub mod html;
pub mod request;
pub mod choice;
pub mod ordinal;
pub mod config;
pub mod page;
pub mod render;
pub mod read;
pub mod output;
pub mod cgi;
pub mod submission;
