//! Building the payload a browser would send for a page, without a
//! browser: for tests, and for clients driving a page, e.g. through
//! the `--query` option of the demo.

use itertools::Itertools;
use kstring::KString;

use crate::{choice::ChoiceScheme,
            ordinal::{ControlKind, OrdinalAllocator},
            page::SEQUENCE_VAR,
            render::{BUTTON_CLICKED, CHECKBOX_CHECKED},
            url_encoding::url_encode};

/// Values for the controls of a page, given in the page's read
/// order. Controls the browser would omit (unchecked boxes, radio
/// groups without choice, buttons not clicked) still take their
/// position.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    ordinals: OrdinalAllocator,
    pairs: Vec<(KString, KString)>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, kind: ControlKind, value: Option<String>) -> Self {
        let id = self.ordinals.advance(kind);
        if let Some(value) = value {
            self.pairs.push((KString::from_string(id.to_string()), KString::from_string(value)));
        }
        self
    }

    /// A text field (string or number).
    pub fn text(self, value: impl ToString) -> Self {
        self.push(ControlKind::Text, Some(value.to_string()))
    }

    pub fn checkbox(self, checked: bool) -> Self {
        self.push(ControlKind::Boolean,
                  if checked { Some(CHECKBOX_CHECKED.into()) } else { None })
    }

    pub fn option(self, chosen: Option<usize>) -> Self {
        self.push(ControlKind::OptionGroup,
                  chosen.map(|i| ChoiceScheme::Option.encode(i)))
    }

    /// A select always submits, the empty entry as empty string.
    pub fn select(self, selected: Option<usize>) -> Self {
        self.push(ControlKind::Select,
                  Some(selected.map(|i| ChoiceScheme::Item.encode(i)).unwrap_or_default()))
    }

    pub fn memo(self, value: impl ToString) -> Self {
        self.push(ControlKind::Memo, Some(value.to_string()))
    }

    pub fn button(self, clicked: bool) -> Self {
        self.push(ControlKind::Button,
                  if clicked { Some(BUTTON_CLICKED.into()) } else { None })
    }

    /// A named hidden variable.
    pub fn var(mut self, name: &str, value: impl ToString) -> Self {
        self.pairs.push((KString::from_ref(name), KString::from_string(value.to_string())));
        self
    }

    /// The encoded payload, including the sequence digest that the
    /// page writes into its form.
    pub fn to_query_string(&self) -> String {
        let digest = self.ordinals.checksum();
        let sequence = (KString::from_static(SEQUENCE_VAR), KString::from_string(digest));
        self.pairs.iter()
            .chain(std::iter::once(&sequence))
            .map(|(k, v)| format!("{}={}", url_encode(k), url_encode(v)))
            .join("&")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_to_query_string() {
        let q = Submission::new()
            .text("a b")
            .checkbox(false)
            .option(Some(2))
            .select(None)
            .button(true)
            .to_query_string();
        let mut parts = q.split('&');
        assert_eq!(parts.next(), Some("input_0=a%20b"));
        assert_eq!(parts.next(), Some("input_2=option_2"));
        assert_eq!(parts.next(), Some("input_3="));
        assert_eq!(parts.next(), Some("input_4=clicked"));
        assert!(parts.next().unwrap().starts_with("simpleweb_sequence="));
        assert_eq!(parts.next(), None);
    }
}
