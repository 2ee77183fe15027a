//! Typed reads: render a control and get back what was submitted for
//! it, or the default on the first render.

//! A page must call these in the same order on every render (see
//! `ordinal`). Each call takes exactly one ordinal id, whatever the
//! outcome.

use std::{fmt::Display, str::FromStr};

use crate::{choice::ChoiceScheme,
            ordinal::ControlKind,
            page::{Layout, Page},
            render::{BUTTON_CLICKED, CHECKBOX_CHECKED},
            trace_binding};

/// Shown instead of a number that could not be parsed.
pub const INVALID_INPUT: &str = "<invalid input>";

/// Types that can be read from a text field as numbers.
pub trait NumberInput: FromStr + Display + Default + PartialEq + Copy {}

macro_rules! impl_number_input {
    ($($t:ty),*) => {
        $( impl NumberInput for $t {} )*
    }
}

impl_number_input!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Page {
    /// The decoded value submitted for the control about to be
    /// rendered. `None` on the first render, too.
    fn submitted(&self, kind: ControlKind) -> Option<String> {
        if !self.request.has_input() {
            return None
        }
        let id = self.ordinals.current();
        let value = self.ordinals.lookup(&self.request, id);
        trace_binding!(kind.as_str(), id, value);
        value
    }

    pub fn read_string(&mut self, default: &str, layout: Layout) -> String {
        let value = if self.request.has_input() {
            self.submitted(ControlKind::Text).unwrap_or_else(|| default.to_string())
        } else {
            default.to_string()
        };
        self.render_text(&value, false, layout);
        value
    }

    /// Numbers equal to zero are shown as an empty field on the first
    /// render. On re-render, an empty field shows the default as a
    /// placeholder and yields the default; text that doesn't parse
    /// shows `INVALID_INPUT` as placeholder and yields the default,
    /// too.
    pub fn read_number<N: NumberInput>(&mut self, default: N, layout: Layout) -> N {
        if !self.request.has_input() {
            let shown = if default == N::default() {
                String::new()
            } else {
                default.to_string()
            };
            self.render_text(&shown, false, layout);
            return default
        }
        let raw = self.submitted(ControlKind::Text).unwrap_or_default();
        if raw.is_empty() {
            self.render_text(&default.to_string(), true, layout);
            return default
        }
        match raw.parse::<N>() {
            Ok(n) => {
                self.render_text(&raw, false, layout);
                n
            }
            Err(_) => {
                self.render_text(INVALID_INPUT, true, layout);
                default
            }
        }
    }

    pub fn read_integer(&mut self, default: i64, layout: Layout) -> i64 {
        self.read_number(default, layout)
    }

    pub fn read_float(&mut self, default: f64, layout: Layout) -> f64 {
        self.read_number(default, layout)
    }

    /// A checkbox. Browsers leave unchecked boxes out of the
    /// submission, thus on re-render anything but `"true"` is false.
    pub fn read_bool(&mut self, default: bool, label: &str, layout: Layout) -> bool {
        let value = if self.request.has_input() {
            self.submitted(ControlKind::Boolean).as_deref() == Some(CHECKBOX_CHECKED)
        } else {
            default
        };
        self.render_bool(value, label, layout);
        value
    }

    /// A radio button group; returns the index of the chosen label.
    pub fn read_option<S: AsRef<str>>(
        &mut self, default: Option<usize>, labels: &[S], layout: Layout
    ) -> Option<usize> {
        let value = if self.request.has_input() {
            self.submitted(ControlKind::OptionGroup).and_then(
                |token| ChoiceScheme::Option.decode(&token))
        } else {
            default
        };
        self.render_option(value, labels, layout);
        value
    }

    /// A drop-down; returns the index of the selected item.
    pub fn read_select<S: AsRef<str>>(
        &mut self, default: Option<usize>, items: &[S], layout: Layout
    ) -> Option<usize> {
        let value = if self.request.has_input() {
            self.submitted(ControlKind::Select).and_then(
                |token| ChoiceScheme::Item.decode(&token))
        } else {
            default
        };
        self.render_select(value, items, layout);
        value
    }

    /// A multi-line text area.
    pub fn read_memo(&mut self, default: &str, layout: Layout) -> String {
        let value = if self.request.has_input() {
            self.submitted(ControlKind::Memo).unwrap_or_else(|| default.to_string())
        } else {
            default.to_string()
        };
        self.render_memo(&value, layout);
        value
    }

    /// A submit button; true iff this button submitted the form.
    pub fn read_button(&mut self, caption: &str, layout: Layout) -> bool {
        let clicked = self.submitted(ControlKind::Button).as_deref() == Some(BUTTON_CLICKED);
        self.render_button(caption, layout);
        clicked
    }
}
