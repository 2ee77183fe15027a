//! Markup of the individual form controls. Each routine writes the
//! control under the page's current ordinal id, then advances the
//! allocator, so that the lookup done before rendering and the id in
//! the markup agree.

use crate::{choice::ChoiceScheme,
            ordinal::{ControlId, ControlKind},
            page::{Layout, Page, Align}};

impl Page {
    fn control_attrs(&mut self, id: ControlId) {
        self.out.att("id", id);
        self.out.att("name", id);
    }

    fn end_control(&mut self, kind: ControlKind, layout: Layout) {
        self.out.raw(layout.line_end());
        self.ordinals.advance(kind);
    }

    pub(crate) fn render_bool(&mut self, checked: bool, label: &str, layout: Layout) {
        let id = self.ordinals.current();
        self.out.raw("<label><input type=\"checkbox\"");
        self.control_attrs(id);
        self.out.raw(" value=\"true\"");
        self.out.flag("checked", checked);
        self.out.raw("/> ");
        self.out.text(label);
        self.out.raw("</label>");
        self.end_control(ControlKind::Boolean, layout);
    }

    /// With `as_placeholder`, `value` is shown greyed out as a hint
    /// and the field itself is left empty.
    pub(crate) fn render_text(&mut self, value: &str, as_placeholder: bool, layout: Layout) {
        let id = self.ordinals.current();
        self.out.raw("<input type=\"text\"");
        self.control_attrs(id);
        if as_placeholder {
            self.out.att("value", "");
            self.out.att("placeholder", value);
        } else {
            self.out.att("value", value);
        }
        self.out.raw("/>");
        self.end_control(ControlKind::Text, layout);
    }

    pub(crate) fn render_memo(&mut self, value: &str, layout: Layout) {
        let id = self.ordinals.current();
        self.out.raw("<textarea");
        self.control_attrs(id);
        // a newline right after the start tag is dropped by browsers
        self.out.raw(">\n");
        self.out.text(value);
        self.out.raw("</textarea>");
        self.end_control(ControlKind::Memo, layout);
    }

    /// Radio buttons, one per label, all submitting under the same
    /// name. Only the first one carries the `id`.
    pub(crate) fn render_option<S: AsRef<str>>(
        &mut self, selected: Option<usize>, labels: &[S], layout: Layout
    ) {
        let id = self.ordinals.current();
        let align = self.ctx.align;
        let n = labels.len();
        for (i, label) in labels.iter().enumerate() {
            if layout == Layout::Line && i > 0 {
                // indent below the first option
                match align {
                    Align::None | Align::Css =>
                        self.out.raw("<span class=\"input\"> </span>"),
                    Align::Px(_) => {
                        align.open_span(&mut self.out);
                        self.out.raw(" </span>");
                    }
                }
            }
            self.out.raw("<label><input type=\"radio\"");
            if i == 0 {
                self.out.att("id", id);
            }
            self.out.att("name", id);
            self.out.att("value", ChoiceScheme::Option.encode(i));
            self.out.flag("checked", selected == Some(i));
            self.out.raw("/> ");
            self.out.text(label.as_ref());
            self.out.raw("</label>");
            match layout {
                Layout::Line => self.out.raw("<br>\n"),
                Layout::Inline => if i + 1 < n {
                    self.out.raw(" │ \n")
                } else {
                    self.out.raw("\n")
                }
            }
        }
        self.ordinals.advance(ControlKind::OptionGroup);
    }

    /// A drop-down; with no selection an empty first entry is
    /// offered (and submits the empty string).
    pub(crate) fn render_select<S: AsRef<str>>(
        &mut self, selected: Option<usize>, items: &[S], layout: Layout
    ) {
        let id = self.ordinals.current();
        self.out.raw("<select");
        self.control_attrs(id);
        self.out.raw(">\n");
        if selected.is_none() {
            self.out.raw("<option value=\"\"></option>\n");
        }
        for (i, item) in items.iter().enumerate() {
            self.out.raw("<option");
            self.out.att("value", ChoiceScheme::Item.encode(i));
            self.out.flag("selected", selected == Some(i));
            self.out.raw(">");
            self.out.text(item.as_ref());
            self.out.raw("</option>\n");
        }
        self.out.raw("</select>");
        self.end_control(ControlKind::Select, layout);
    }

    pub(crate) fn render_button(&mut self, caption: &str, layout: Layout) {
        let id = self.ordinals.current();
        self.out.raw("<button type=\"submit\"");
        self.control_attrs(id);
        self.out.att("value", BUTTON_CLICKED);
        self.out.raw(">");
        self.out.text(caption);
        self.out.raw("</button>");
        self.end_control(ControlKind::Button, layout);
    }
}

/// What a button submits when it was used to submit the form.
pub const BUTTON_CLICKED: &str = "clicked";

/// What a checked checkbox submits.
pub const CHECKBOX_CHECKED: &str = "true";


#[cfg(test)]
mod tests {
    use crate::{config::PageConfig, request::RawRequest};
    use super::*;

    fn page() -> Page {
        Page::open(PageConfig::new("t", "t.cgi"), RawRequest::empty())
    }

    /// The markup written by `f`, without the page head.
    fn rendered(f: impl FnOnce(&mut Page)) -> String {
        let mut p = page();
        let start = p.html().len();
        f(&mut p);
        p.html()[start..].to_string()
    }

    #[test]
    fn t_bool() {
        assert_eq!(
            rendered(|p| p.render_bool(true, "on", Layout::Line)),
            "<label><input type=\"checkbox\" id=\"input_0\" name=\"input_0\" \
             value=\"true\" checked/> on</label><br>\n");
        assert_eq!(
            rendered(|p| p.render_bool(false, "x", Layout::Inline)),
            "<label><input type=\"checkbox\" id=\"input_0\" name=\"input_0\" \
             value=\"true\"/> x</label>\n");
    }

    #[test]
    fn t_text() {
        assert_eq!(
            rendered(|p| {
                p.render_text("a\"b", false, Layout::Inline);
                p.render_text("<invalid input>", true, Layout::Line);
            }),
            "<input type=\"text\" id=\"input_0\" name=\"input_0\" value=\"a&quot;b\"/>\n\
             <input type=\"text\" id=\"input_1\" name=\"input_1\" value=\"\" \
             placeholder=\"&lt;invalid input&gt;\"/><br>\n");
    }

    #[test]
    fn t_memo() {
        assert_eq!(
            rendered(|p| p.render_memo("x < y", Layout::Line)),
            "<textarea id=\"input_0\" name=\"input_0\">\nx &lt; y</textarea><br>\n");
    }

    #[test]
    fn t_option() {
        assert_eq!(
            rendered(|p| p.render_option(Some(1), &["a", "b"], Layout::Inline)),
            "<label><input type=\"radio\" id=\"input_0\" name=\"input_0\" \
             value=\"option_0\"/> a</label> │ \n\
             <label><input type=\"radio\" name=\"input_0\" \
             value=\"option_1\" checked/> b</label>\n");
        let s = rendered(|p| {
            p.ctx.align = Align::Px(80);
            p.render_option(None, &["a", "b"], Layout::Line)
        });
        assert!(s.contains("<br>\n<span class=\"input\" style=\"width:80px\"> </span>\
                            <label><input type=\"radio\" name=\"input_0\""));
        assert!(!s.contains("checked"));
    }

    #[test]
    fn t_select() {
        assert_eq!(
            rendered(|p| p.render_select(None, &["x"], Layout::Inline)),
            "<select id=\"input_0\" name=\"input_0\">\n\
             <option value=\"\"></option>\n\
             <option value=\"item_0\">x</option>\n\
             </select>\n");
        let s = rendered(|p| p.render_select(Some(0), &["x", "y"], Layout::Line));
        assert!(s.contains("<option value=\"item_0\" selected>x</option>"));
        assert!(!s.contains("<option value=\"\">"));
    }

    #[test]
    fn t_button() {
        assert_eq!(
            rendered(|p| p.render_button("Go", Layout::Inline)),
            "<button type=\"submit\" id=\"input_0\" name=\"input_0\" \
             value=\"clicked\">Go</button>\n");
    }

    #[test]
    fn t_each_control_advances_once() {
        let mut p = page();
        p.render_text("", false, Layout::Inline);
        p.render_option(None, &["a", "b", "c"], Layout::Line);
        p.render_select(None, &["a", "b"], Layout::Line);
        p.render_bool(false, "", Layout::Inline);
        p.render_memo("", Layout::Line);
        p.render_button("", Layout::Line);
        assert_eq!(p.control_count(), 6);
        assert!(p.html().contains("id=\"input_5\""));
        assert!(!p.html().contains("input_6"));
    }
}
