//! The page shell: document head, form element, submit button and
//! footer around the controls, plus the state a page carries from
//! `open` to `close`.

use std::time::Duration;

use crate::{config::PageConfig,
            html::HtmlBuf,
            ordinal::OrdinalAllocator,
            request::RawRequest,
            time_guard::{PageTimer, format_millis},
            warn};

/// Name of the hidden variable carrying the control sequence digest.
pub const SEQUENCE_VAR: &str = "simpleweb_sequence";

/// Whether a control (or written text) ends its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Inline,
    Line,
}

impl Layout {
    pub(crate) fn line_end(self) -> &'static str {
        match self {
            Layout::Inline => "\n",
            Layout::Line => "<br>\n",
        }
    }
}

/// Alignment of labels written in front of controls, so that the
/// controls of consecutive lines start at the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    None,
    /// Width comes from the `span.input` stylesheet rule.
    Css,
    /// Fixed width in pixels.
    Px(u32),
}

impl Align {
    /// From a single width number: 0 for none,
    /// negative for css, positive for pixels.
    pub fn from_width(width: i32) -> Self {
        if width == 0 {
            Align::None
        } else if width < 0 {
            Align::Css
        } else {
            Align::Px(width.unsigned_abs())
        }
    }

    pub(crate) fn open_span(self, out: &mut HtmlBuf) -> bool {
        match self {
            Align::None => false,
            Align::Css => {
                out.raw("<span class=\"input\">");
                true
            }
            Align::Px(px) => {
                out.raw("<span class=\"input\"");
                out.att("style", format!("width:{px}px"));
                out.raw(">");
                true
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub(crate) fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// Presentation state that lasts across calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Set by the last aligned write, reset by `writeln`.
    pub align: Align,
    /// The list opened by `open_list`, if any.
    pub list: Option<ListKind>,
}

/// How the submitted control sequence compared to the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceCheck {
    /// Nothing was submitted.
    FirstRender,
    /// The form was rendered with the same control kinds in the same
    /// order; values were bound to the right controls.
    Matched,
    /// Input came without a digest, e.g. from a hand-written link.
    Missing,
    /// The controls differ from those that produced the submission,
    /// some values were likely bound to the wrong controls.
    Mismatch { expected: String, submitted: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSummary {
    /// Number of ordinal controls rendered.
    pub controls: u32,
    pub elapsed: Duration,
    pub sequence: SequenceCheck,
}

/// A finished document.
#[derive(Debug, Clone)]
pub struct ClosedPage {
    pub document: String,
    pub summary: PageSummary,
}

/// An open page. `Page::open` writes everything up to and including
/// the opening form tag, then the page's read and write methods
/// append controls and text, and `close` (which consumes the page)
/// finishes the document.
#[derive(Debug)]
pub struct Page {
    pub(crate) config: PageConfig,
    pub(crate) request: RawRequest,
    pub(crate) ordinals: OrdinalAllocator,
    pub(crate) ctx: RenderContext,
    pub(crate) named_vars: u32,
    pub(crate) timer: PageTimer,
    pub(crate) out: HtmlBuf,
}

impl Page {
    pub fn open(config: PageConfig, request: RawRequest) -> Page {
        let timer = PageTimer::start();
        let mut out = HtmlBuf::new();
        out.raw("<!DOCTYPE html>\n\
                 <html lang=\"en\">\n  \
                 <head>\n    \
                 <meta charset=\"utf-8\">\n    \
                 <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n    \
                 <style>span.input { display:inline-block; vertical-align:top; }</style>\n");
        for css in &config.css_files {
            out.raw("    ");
            link_css(&mut out, css);
        }
        for js in &config.js_files {
            out.raw("    ");
            script_js(&mut out, js);
        }
        out.raw("    <title>");
        out.text(&config.title);
        out.raw(" - SimpleWeb</title>\n  </head>\n  <body>\n  <form");
        out.att("method", config.method.as_attr());
        out.att("action", &config.action);
        out.raw(">\n");
        Page {
            config,
            request,
            ordinals: OrdinalAllocator::new(),
            ctx: RenderContext::default(),
            named_vars: 0,
            timer,
            out,
        }
    }

    /// True if the browser submitted anything, i.e. read methods
    /// return submitted values instead of their defaults.
    pub fn has_input(&self) -> bool {
        self.request.has_input()
    }

    pub fn request(&self) -> &RawRequest {
        &self.request
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Number of ordinal controls rendered so far.
    pub fn control_count(&self) -> u32 {
        self.ordinals.count()
    }

    /// The markup written so far.
    pub fn html(&self) -> &str {
        self.out.as_str()
    }

    // ---- named variables ----

    pub fn has_var(&self, name: &str) -> bool {
        self.request.has_var(name)
    }

    /// The submitted value of the hidden variable `name`.
    pub fn read_var(&self, name: &str) -> Option<String> {
        self.request.value(name)
    }

    /// Write a hidden variable; it is submitted under `name` with the
    /// form and does not take part in ordinal binding.
    pub fn write_var(&mut self, name: &str, value: impl std::fmt::Display) {
        self.named_vars += 1;
        hidden(&mut self.out, name, value);
    }

    fn sequence_check(&self) -> SequenceCheck {
        if !self.request.has_input() {
            return SequenceCheck::FirstRender
        }
        match self.request.value(SEQUENCE_VAR) {
            None => SequenceCheck::Missing,
            Some(submitted) => {
                let expected = self.ordinals.checksum();
                if submitted == expected {
                    SequenceCheck::Matched
                } else {
                    SequenceCheck::Mismatch { expected, submitted }
                }
            }
        }
    }

    pub fn close(self) -> ClosedPage {
        let sequence = self.sequence_check();
        if let SequenceCheck::Mismatch { expected, submitted } = &sequence {
            warn!("form controls changed since the submitted render \
                   (sequence {submitted} now {expected}), \
                   values may be bound to the wrong controls");
        }
        let Page { config, ordinals, named_vars, timer, mut out, .. } = self;
        let controls = ordinals.count();
        out.raw("  <hr>\n");
        if controls > 0 {
            out.raw("  ");
            hidden(&mut out, SEQUENCE_VAR, ordinals.checksum());
        }
        if controls > 0 || named_vars > 0 {
            out.raw("  <input type=\"submit\" value=\" SUBMIT \"/>\n");
        }
        out.raw("  </form>\n");
        let elapsed = timer.elapsed();
        out.raw("  <p align=\"right\"><small><i>This page is served in ");
        out.raw(&format_millis(elapsed));
        out.raw(" ms.</i></small></p>\n");
        for css in &config.footer_css_files {
            out.raw("  ");
            link_css(&mut out, css);
        }
        for js in &config.footer_js_files {
            out.raw("  ");
            script_js(&mut out, js);
        }
        out.raw("  </body>\n</html>\n");
        ClosedPage {
            document: out.into_string(),
            summary: PageSummary { controls, elapsed, sequence },
        }
    }
}

fn link_css(out: &mut HtmlBuf, href: &str) {
    out.raw("<link rel=\"stylesheet\"");
    out.att("href", href);
    out.raw(">\n");
}

fn script_js(out: &mut HtmlBuf, src: &str) {
    out.raw("<script type=\"text/javascript\"");
    out.att("src", src);
    out.raw("></script>\n");
}

pub(crate) fn hidden(out: &mut HtmlBuf, name: &str, value: impl std::fmt::Display) {
    out.raw("<input type=\"hidden\"");
    out.att("name", name);
    out.att("value", value);
    out.raw("/>\n");
}
