//! Minimal HTML serialization: an append-only buffer that escapes
//! text and attribute values, and a marker type for markup that was
//! serialized already.

use std::fmt::{self, Display};

fn escape_into(buf: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&#39;"),
            _ => buf.push(c)
        }
    }
}

pub fn html_escape(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    escape_into(&mut buf, s);
    buf
}

/// Preserialized HTML, written out unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(pub String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can be put into the body of an element.
pub trait ToHtml {
    fn write_html(&self, buf: &mut HtmlBuf);
}

impl ToHtml for str {
    fn write_html(&self, buf: &mut HtmlBuf) {
        buf.text(self)
    }
}

impl ToHtml for String {
    fn write_html(&self, buf: &mut HtmlBuf) {
        buf.text(self)
    }
}

impl ToHtml for Markup {
    fn write_html(&self, buf: &mut HtmlBuf) {
        buf.raw(&self.0)
    }
}

impl<T: ToHtml + ?Sized> ToHtml for &T {
    fn write_html(&self, buf: &mut HtmlBuf) {
        (**self).write_html(buf)
    }
}


#[derive(Debug, Default, Clone)]
pub struct HtmlBuf {
    buf: String,
}

impl HtmlBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append escaped text.
    pub fn text(&mut self, s: &str) {
        escape_into(&mut self.buf, s);
    }

    /// Append `s` unchanged; it must be valid markup.
    pub fn raw(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn html(&mut self, v: impl ToHtml) {
        v.write_html(self);
    }

    /// Append ` key="val"` with val escaped.
    pub fn att(&mut self, key: &str, val: impl Display) {
        self.buf.push(' ');
        self.buf.push_str(key); // keys are always literals
        self.buf.push_str("=\"");
        escape_into(&mut self.buf, &val.to_string());
        self.buf.push('"');
    }

    /// Append ` key` (a boolean attribute) if `on`.
    pub fn flag(&mut self, key: &str, on: bool) {
        if on {
            self.buf.push(' ');
            self.buf.push_str(key);
        }
    }

    /// An element with just text or markup as its body.
    pub fn element(&mut self, tag: &str, body: impl ToHtml) {
        self.raw("<");
        self.raw(tag);
        self.raw(">");
        self.html(body);
        self.raw("</");
        self.raw(tag);
        self.raw(">");
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_html_escape() {
        assert_eq!(html_escape("<a href='x'>&\"</a>"),
                   "&lt;a href=&#39;x&#39;&gt;&amp;&quot;&lt;/a&gt;");
        assert_eq!(html_escape("grün"), "grün");
    }

    #[test]
    fn t_buf() {
        let mut b = HtmlBuf::new();
        b.raw("<input");
        b.att("value", "<invalid input>");
        b.att("size", 3);
        b.flag("checked", true);
        b.flag("disabled", false);
        b.raw("/>");
        b.element("b", "x<y");
        b.element("i", Markup("<u>u</u>".into()));
        assert_eq!(b.as_str(),
                   "<input value=\"&lt;invalid input&gt;\" size=\"3\" checked/>\
                    <b>x&lt;y</b><i><u>u</u></i>");
    }
}
