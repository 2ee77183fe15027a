//! Positional identities of form controls.

//! A control has no name given by the caller; it is identified by how
//! many controls were rendered before it. The value submitted for the
//! 3rd control of a page is thus found under `input_2` when the page
//! is rendered again. This only works if the page calls its read
//! functions in the same sequence on every render: a read that is
//! skipped on one render but not on the next shifts all later
//! controls onto their neighbours' values. `OrdinalAllocator` keeps a
//! running hash of the control kinds so that `Page::close` can tell
//! when that happened.

use std::fmt::{self, Display};

use crate::request::RawRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ControlKind {
    Text,
    Boolean,
    OptionGroup,
    Select,
    Memo,
    Button,
}

impl ControlKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// The position of a control on its page; displays as the
/// `input_<n>` name shared by its `id` and `name` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ControlId(pub u32);

impl Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input_{}", self.0)
    }
}

/// Length of the hex digest written into the form.
const CHECKSUM_LEN: usize = 16;

#[derive(Debug, Clone)]
pub struct OrdinalAllocator {
    next: u32,
    sequence: blake3::Hasher,
}

impl Default for OrdinalAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrdinalAllocator {
    pub fn new() -> Self {
        OrdinalAllocator {
            next: 0,
            sequence: blake3::Hasher::new(),
        }
    }

    /// The id the next control will get. Does not allocate it.
    pub fn current(&self) -> ControlId {
        ControlId(self.next)
    }

    /// Allocate the current id for a control of `kind`, returning it.
    pub fn advance(&mut self, kind: ControlKind) -> ControlId {
        let id = self.current();
        self.sequence.update(kind.as_str().as_bytes());
        self.sequence.update(b"\0");
        self.next += 1;
        id
    }

    /// How many controls have been allocated.
    pub fn count(&self) -> u32 {
        self.next
    }

    /// Digest of the kinds of all controls allocated so far, in order.
    pub fn checksum(&self) -> String {
        let hash = self.sequence.finalize();
        hash.to_hex().as_str()[..CHECKSUM_LEN].to_string()
    }

    /// The decoded value the browser submitted for `id`.
    pub fn lookup(&self, request: &RawRequest, id: ControlId) -> Option<String> {
        request.value(&id.to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_advance() {
        let mut a = OrdinalAllocator::new();
        assert_eq!(a.current(), ControlId(0));
        assert_eq!(a.current(), ControlId(0));
        assert_eq!(a.advance(ControlKind::Text), ControlId(0));
        assert_eq!(a.advance(ControlKind::Button), ControlId(1));
        assert_eq!(a.current().to_string(), "input_2");
        assert_eq!(a.count(), 2);
    }

    #[test]
    fn t_checksum() {
        let kinds = [ControlKind::Text, ControlKind::Boolean, ControlKind::Select];
        let mut a = OrdinalAllocator::new();
        let mut b = OrdinalAllocator::new();
        for k in kinds {
            a.advance(k);
            b.advance(k);
        }
        assert_eq!(a.checksum(), b.checksum());
        assert_eq!(a.checksum().len(), CHECKSUM_LEN);

        let mut c = OrdinalAllocator::new();
        for k in [ControlKind::Text, ControlKind::Select, ControlKind::Boolean] {
            c.advance(k);
        }
        assert_ne!(a.checksum(), c.checksum());
        assert_ne!(OrdinalAllocator::new().checksum(), a.checksum());
    }

    #[test]
    fn t_lookup() {
        let a = OrdinalAllocator::new();
        let r = RawRequest::decode("input_0=x+y&input_1=z");
        assert_eq!(a.lookup(&r, ControlId(0)).as_deref(), Some("x y"));
        assert_eq!(a.lookup(&r, ControlId(1)).as_deref(), Some("z"));
        assert_eq!(a.lookup(&r, ControlId(2)), None);
    }

    #[test]
    fn t_kind_names() {
        assert_eq!(ControlKind::OptionGroup.as_str(), "option_group");
        assert_eq!(ControlKind::Memo.as_str(), "memo");
    }
}
