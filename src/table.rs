//! Byte pattern tables for the loose validators.
//!
//! The predefined table constants in this module are documented with
//! the ABNF notation of [RFC 2234].
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/

/// A table determining the bytes allowed in a string.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Table {
    arr: [u8; 256],
}

impl Table {
    /// Generates a table that only allows the given bytes.
    pub(crate) const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [0; 256];
        while let [cur, rem @ ..] = bytes {
            arr[*cur as usize] = 1;
            bytes = rem;
        }
        Table { arr }
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// either by `self` or by `other`.
    pub(crate) const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self
    }

    /// Returns `true` if the given byte is allowed by the table.
    #[inline]
    pub(crate) const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize] != 0
    }

    /// Validates the given byte sequence with the table.
    pub(crate) const fn validate(&self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            if !self.allows(s[i]) {
                return false;
            }
            i += 1;
        }
        true
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// ALPHA = A-Z / a-z
pub(crate) const ALPHA: &Table = &gen(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// DIGIT = 0-9
pub(crate) const DIGIT: &Table = &gen(b"0123456789");

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub(crate) const SCHEME: &Table = &ALPHA.or(DIGIT).or(&gen(b"+-."));

/// Bytes that may not occur in a userinfo or host segment:
/// "/" / "?" / "#" / "[" / "]" / "@"
pub(crate) const AUTH_DELIMS: &Table = &gen(b"/?#[]@");

/// The coarse set of bytes allowed anywhere in a URI:
/// ALPHA / DIGIT / "!" / "#" / "$" / "%" / "&" / "'" / "(" / ")" / "*"
/// / "+" / "," / "-" / "." / "/" / ":" / ";" / "=" / "?" / "@" / "["
/// / "]" / "_" / "~"
pub(crate) const URI: &Table = &ALPHA.or(DIGIT).or(&gen(b"!#$%&'()*+,-./:;=?@[]_~"));
