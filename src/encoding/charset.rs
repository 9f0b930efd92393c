//! Sets of ASCII characters that may appear unescaped in a URL component.
//!
//! The constants in this module mirror the ABNF rules of RFC 3986 Appendix A.

use std::fmt;

/// An immutable set of ASCII characters that a [`PercentEncoder`] passes through as-is.
///
/// Stored as a 128-bit mask, one bit per ASCII code point, so sets can be built in
/// `const` context and shared as plain static data.
///
/// It is guaranteed that every member is ASCII and that `%` is never a member.
///
/// [`PercentEncoder`]: crate::encoding::PercentEncoder
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SafeCharSet {
    mask: u128,
}

impl SafeCharSet {
    /// The set with no members: every character gets escaped.
    pub const fn empty() -> SafeCharSet {
        SafeCharSet { mask: 0 }
    }

    /// Returns a copy of this set with `byte` added.
    ///
    /// # Panics
    ///
    /// Panics if `byte` is not ASCII or is `%`.
    pub const fn with(self, byte: u8) -> SafeCharSet {
        assert!(byte.is_ascii(), "safe characters must be ASCII");
        assert!(byte != b'%', "'%' can never be a safe character");
        SafeCharSet {
            mask: self.mask | (1u128 << byte),
        }
    }

    /// Returns a copy of this set with every byte in `first..=last` added.
    pub const fn with_range(self, first: u8, last: u8) -> SafeCharSet {
        let mut set = self;
        let mut b = first;
        while b <= last {
            set = set.with(b);
            if b == u8::MAX {
                break;
            }
            b += 1;
        }
        set
    }

    /// Returns a copy of this set with all of `bytes` added.
    pub const fn with_all(self, mut bytes: &[u8]) -> SafeCharSet {
        let mut set = self;
        while let [cur, rest @ ..] = bytes {
            set = set.with(*cur);
            bytes = rest;
        }
        set
    }

    /// Returns a copy of this set with `byte` removed. Removing a non-member is a no-op.
    pub const fn without(self, byte: u8) -> SafeCharSet {
        if !byte.is_ascii() {
            return self;
        }
        SafeCharSet {
            mask: self.mask & !(1u128 << byte),
        }
    }

    /// Returns the union of both sets.
    pub const fn union(self, other: SafeCharSet) -> SafeCharSet {
        SafeCharSet {
            mask: self.mask | other.mask,
        }
    }

    #[inline]
    pub const fn contains_byte(&self, byte: u8) -> bool {
        byte.is_ascii() && self.mask & (1u128 << byte) != 0
    }

    /// Whether `c` may be emitted unescaped. Always `false` outside ASCII.
    #[inline]
    pub const fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.contains_byte(c as u8)
    }

    pub const fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Members in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .filter(move |&b| self.contains_byte(b))
            .map(char::from)
    }
}

impl fmt::Debug for SafeCharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: SafeCharSet = SafeCharSet::empty()
    .with_range(b'A', b'Z')
    .with_range(b'a', b'z');

/// `DIGIT = %x30-39`
pub const DIGIT: SafeCharSet = SafeCharSet::empty().with_range(b'0', b'9');

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: SafeCharSet = ALPHA.union(DIGIT).with_all(b"-._~");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: SafeCharSet = SafeCharSet::empty().with_all(b"!$&'()*+,;=");

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
///
/// `pct-encoded` is left out: a literal `%` in the input is always escaped.
pub const PCHAR: SafeCharSet = UNRESERVED.union(SUB_DELIMS).with_all(b":@");

/// `query = *( pchar / "/" / "?" )`
pub const QUERY: SafeCharSet = PCHAR.with_all(b"/?");

/// `fragment = *( pchar / "/" / "?" )`
pub const FRAGMENT: SafeCharSet = PCHAR.with_all(b"/?");
