//! Encoding of the chosen entry of radio groups and selects as
//! submitted values (`option_<i>`, `item_<i>`).

/// Which prefix a choice control uses for its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceScheme {
    /// Radio buttons.
    Option,
    /// Entries of a select element.
    Item,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceDecodeError {
    #[error("choice token {0:?} has no `_` separator")]
    MissingSeparator(String),
    #[error("choice token {token:?} does not start with {expected:?}")]
    WrongPrefix { token: String, expected: &'static str },
    #[error("choice token {0:?} has no valid index")]
    InvalidIndex(String),
}

impl ChoiceScheme {
    pub fn prefix(self) -> &'static str {
        match self {
            ChoiceScheme::Option => "option",
            ChoiceScheme::Item => "item",
        }
    }

    pub fn encode(self, index: usize) -> String {
        format!("{}_{index}", self.prefix())
    }

    pub fn try_decode(self, token: &str) -> Result<usize, ChoiceDecodeError> {
        let (prefix, index) = token.split_once('_').ok_or_else(
            || ChoiceDecodeError::MissingSeparator(token.into()))?;
        if prefix != self.prefix() {
            return Err(ChoiceDecodeError::WrongPrefix {
                token: token.into(),
                expected: self.prefix(),
            })
        }
        index.parse().map_err(|_| ChoiceDecodeError::InvalidIndex(token.into()))
    }

    /// `None` means nothing is selected. Malformed tokens are
    /// reported on stderr and treated as no selection; an empty token
    /// (the blank entry of a select) silently so.
    pub fn decode(self, token: &str) -> Option<usize> {
        if token.is_empty() {
            return None
        }
        match self.try_decode(token) {
            Ok(i) => Some(i),
            Err(e) => {
                crate::warn!("{e}, treating as no selection");
                None
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_encode() {
        assert_eq!(ChoiceScheme::Option.encode(0), "option_0");
        assert_eq!(ChoiceScheme::Item.encode(12), "item_12");
    }

    #[test]
    fn t_decode() {
        assert_eq!(ChoiceScheme::Option.decode("option_2"), Some(2));
        assert_eq!(ChoiceScheme::Item.decode("item_0"), Some(0));
        assert_eq!(ChoiceScheme::Option.decode(""), None);
        assert_eq!(ChoiceScheme::Option.decode("2"), None);
        assert_eq!(ChoiceScheme::Option.decode("option_"), None);
        assert_eq!(ChoiceScheme::Option.decode("option_-1"), None);
        assert_eq!(ChoiceScheme::Option.decode("option_x"), None);
        assert_eq!(ChoiceScheme::Item.decode("option_1"), None);
    }

    #[test]
    fn t_try_decode_errors() {
        assert_eq!(ChoiceScheme::Item.try_decode("item1"),
                   Err(ChoiceDecodeError::MissingSeparator("item1".into())));
        assert_eq!(ChoiceScheme::Item.try_decode("option_1"),
                   Err(ChoiceDecodeError::WrongPrefix {
                       token: "option_1".into(), expected: "item" }));
        assert_eq!(ChoiceScheme::Item.try_decode("item_1_2"),
                   Err(ChoiceDecodeError::InvalidIndex("item_1_2".into())));
    }
}
