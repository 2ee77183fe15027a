//! Text and plain HTML elements around the controls.

use crate::{html::{HtmlBuf, Markup, ToHtml},
            page::{Align, ListKind, Page},
            warn};

/// `<a href=url>caption</a>`, the url itself as caption if `caption`
/// is empty, opening in a new tab if `new_tab`.
pub fn link(url: &str, caption: &str, new_tab: bool) -> Markup {
    let mut out = HtmlBuf::new();
    out.raw("<a");
    out.att("href", url);
    if new_tab {
        out.att("target", "_blank");
    }
    out.raw(">");
    out.text(if caption.is_empty() { url } else { caption });
    out.raw("</a>");
    Markup(out.into_string())
}

impl Page {
    /// Write `value` with the alignment currently in effect.
    pub fn write(&mut self, value: impl ToHtml) {
        let align = self.ctx.align;
        self.write_aligned(value, align);
    }

    /// Write `value` into a span of the given alignment and keep that
    /// alignment for the following writes (and for the indentation of
    /// radio groups) until `writeln`.
    pub fn write_aligned(&mut self, value: impl ToHtml, align: Align) {
        if align.open_span(&mut self.out) {
            self.out.html(value);
            self.out.raw("</span>");
        } else {
            self.out.html(value);
        }
        self.ctx.align = align;
    }

    /// Write `value` and end the line; resets the alignment.
    pub fn writeln(&mut self, value: impl ToHtml) {
        self.out.html(value);
        self.out.raw("<br>\n");
        self.ctx.align = Align::None;
    }

    pub fn paragraph(&mut self) {
        self.out.raw("<p>");
    }

    pub fn header(&mut self, text: impl ToHtml, level: u8) {
        let level = level.clamp(1, 6);
        self.out.raw(&format!("<h{level}>"));
        self.out.html(text);
        self.out.raw(&format!("</h{level}>\n"));
    }

    pub fn block(&mut self, text: impl ToHtml) {
        self.out.element("blockquote", text);
        self.out.raw("\n");
    }

    /// Open a table, with a header row unless `headers` is empty.
    pub fn open_table<T: ToHtml>(
        &mut self, headers: impl IntoIterator<Item = T>, class: Option<&str>, id: Option<&str>
    ) {
        self.out.raw("<table");
        if let Some(class) = class {
            self.out.att("class", class);
        }
        if let Some(id) = id {
            self.out.att("id", id);
        }
        self.out.raw(">\n");
        let mut headers = headers.into_iter().peekable();
        if headers.peek().is_some() {
            self.out.raw("<tr>");
            for h in headers {
                self.out.element("th", h);
            }
            self.out.raw("</tr>\n");
        }
    }

    pub fn table_row<T: ToHtml>(&mut self, cells: impl IntoIterator<Item = T>) {
        self.out.raw("<tr>");
        for c in cells {
            self.out.element("td", c);
        }
        self.out.raw("</tr>\n");
    }

    pub fn close_table(&mut self) {
        self.out.raw("</table>\n");
    }

    pub fn open_list(&mut self, kind: ListKind, class: Option<&str>, id: Option<&str>) {
        if let Some(open) = self.ctx.list {
            warn!("opening a {} list inside an open {} list", kind.tag(), open.tag());
        }
        self.out.raw("<");
        self.out.raw(kind.tag());
        if let Some(class) = class {
            self.out.att("class", class);
        }
        if let Some(id) = id {
            self.out.att("id", id);
        }
        self.out.raw(">\n");
        self.ctx.list = Some(kind);
    }

    pub fn list_item(&mut self, item: impl ToHtml) {
        self.out.element("li", item);
        self.out.raw("\n");
    }

    /// Close the list opened by `open_list`.
    pub fn close_list(&mut self) {
        match self.ctx.list.take() {
            Some(kind) => {
                self.out.raw("</");
                self.out.raw(kind.tag());
                self.out.raw(">\n");
            }
            None => warn!("close_list without open list, ignored"),
        }
    }

    /// Embed a stylesheet. `css` is written as is.
    pub fn write_css(&mut self, css: &str) {
        self.out.raw("\n<style>");
        self.out.raw(css);
        self.out.raw("</style>\n");
    }

    /// Embed a script. `js` is written as is.
    pub fn write_js(&mut self, js: &str) {
        self.out.raw("\n<script>");
        self.out.raw(js);
        self.out.raw("</script>\n");
    }
}


#[cfg(test)]
mod tests {
    use crate::{config::PageConfig, request::RawRequest, page::Layout};
    use super::*;

    fn rendered(f: impl FnOnce(&mut Page)) -> String {
        let mut p = Page::open(PageConfig::new("t", "t.cgi"), RawRequest::empty());
        let start = p.html().len();
        f(&mut p);
        p.html()[start..].to_string()
    }

    #[test]
    fn t_link() {
        assert_eq!(link("a.cgi?x=1&y=2", "", false).as_str(),
                   "<a href=\"a.cgi?x=1&amp;y=2\">a.cgi?x=1&amp;y=2</a>");
        assert_eq!(link("/", "home", true).as_str(),
                   "<a href=\"/\" target=\"_blank\">home</a>");
    }

    #[test]
    fn t_alignment() {
        let mut p = Page::open(PageConfig::new("t", "t.cgi"), RawRequest::empty());
        p.write_aligned("Name: ", Align::Css);
        assert_eq!(p.context().align, Align::Css);
        p.write("Age: ");
        assert!(p.html().ends_with("<span class=\"input\">Age: </span>"));
        p.writeln("");
        assert_eq!(p.context().align, Align::None);
        p.write("plain");
        assert!(p.html().ends_with("<br>\nplain"));
        p.write_aligned("x", Align::from_width(120));
        assert!(p.html().ends_with("<span class=\"input\" style=\"width:120px\">x</span>"));
    }

    #[test]
    fn t_table() {
        assert_eq!(
            rendered(|p| {
                p.open_table(["Type", "Value"], None, Some("t1"));
                p.table_row(["a<b", "1"]);
                p.table_row([Markup("<i>x</i>".into())]);
                p.close_table();
            }),
            "<table id=\"t1\">\n<tr><th>Type</th><th>Value</th></tr>\n\
             <tr><td>a&lt;b</td><td>1</td></tr>\n\
             <tr><td><i>x</i></td></tr>\n</table>\n");
        let no_headers: [&str; 0] = [];
        assert_eq!(rendered(|p| p.open_table(no_headers, Some("c"), None)),
                   "<table class=\"c\">\n");
    }

    #[test]
    fn t_list() {
        let mut p = Page::open(PageConfig::new("t", "t.cgi"), RawRequest::empty());
        let start = p.html().len();
        p.open_list(ListKind::Unordered, None, None);
        assert_eq!(p.context().list, Some(ListKind::Unordered));
        p.list_item("one");
        p.close_list();
        assert_eq!(p.context().list, None);
        p.close_list();
        assert_eq!(&p.html()[start..], "<ul>\n<li>one</li>\n</ul>\n");
    }

    #[test]
    fn t_headers_and_blocks() {
        assert_eq!(rendered(|p| {
            p.header("Hi & bye", 2);
            p.block("q");
            p.paragraph();
        }), "<h2>Hi &amp; bye</h2>\n<blockquote>q</blockquote>\n<p>");
        assert_eq!(rendered(|p| p.header("x", 9)), "<h6>x</h6>\n");
    }

    #[test]
    fn t_output_does_not_bind() {
        let mut p = Page::open(PageConfig::new("t", "t.cgi"), RawRequest::decode("input_0=v"));
        p.write("Label: ");
        p.header("h", 3);
        p.write_css("p {}");
        assert_eq!(p.read_string("", Layout::Line), "v");
    }
}
