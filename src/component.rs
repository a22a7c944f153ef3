//! URI components and the loose validators.

use crate::table;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// The result of splitting a URI into its components.
///
/// A split is recomputed from the source text on demand and never
/// stored; every field is a view into the buffer the split was taken
/// from. Splitting is driven by delimiter search alone, so it accepts
/// any input and reconstruction is not guaranteed byte-exact for
/// malformed text.
///
/// # Examples
///
/// ```
/// use lax_uri::component::Split;
///
/// let split = Split::of("http://example.com/over/there?name=ferret");
/// assert_eq!(split.scheme, "http");
/// assert_eq!(split.authority.as_str(), "example.com");
/// assert_eq!(split.path.as_str(), "over/there");
/// assert_eq!(split.query, "name=ferret");
/// ```
#[derive(Clone, Copy)]
pub struct Split<'a> {
    /// The scheme component, without the trailing `:`.
    pub scheme: &'a str,
    /// The authority component, without the leading `//`.
    pub authority: &'a Authority,
    /// The path component.
    ///
    /// When an authority is present, the delimiter that terminated it
    /// is not part of the path: `file:///a/c` has path `a/c`.
    pub path: &'a Path,
    /// The query component, without the `?` or `#` that started it.
    ///
    /// A `#` fragment is not distinguished from a `?` query; both end
    /// up here.
    pub query: &'a str,
}

impl<'a> Split<'a> {
    /// Splits a string into its URI components in a single pass.
    ///
    /// Each delimiter search starts where the previous one ended:
    /// the first `:` ends the scheme; a following `//` marks an
    /// authority, which runs to the first of `/`, `?`, `#`; the path
    /// runs from there to the first of `?`, `#`; the rest is the
    /// query. Text without a `:` is a schemeless reference whose path
    /// is the whole string.
    #[must_use]
    pub fn of(s: &'a str) -> Split<'a> {
        let len = s.len();
        let colon = s.find(':');
        let (scheme_end, mut cursor) = match colon {
            Some(i) => (i, i + 1),
            None => (0, 0),
        };
        let has_authority = colon.is_some() && s[cursor..].starts_with("//");
        if has_authority {
            cursor += 2;
        }

        let c2 = find_any(s, cursor, b"/?#");
        let (auth_end, path_from) = match c2 {
            Some(i) => (i, i + 1),
            None => (len, len),
        };
        let c3 = find_any(s, path_from, b"?#");
        let (path_end, query_from) = match c3 {
            Some(i) => (i, i + 1),
            None => (len, len),
        };

        let (authority, path) = if has_authority {
            (&s[cursor..auth_end], &s[path_from..path_end])
        } else {
            (&s[cursor..cursor], &s[cursor..path_end])
        };

        Split {
            scheme: &s[..scheme_end],
            authority: Authority::new(authority),
            path: Path::new(path),
            query: &s[query_from..],
        }
    }
}

/// Returns the position of the first byte at or after `from` that
/// occurs in `set`.
fn find_any(s: &str, from: usize, set: &[u8]) -> Option<usize> {
    s.as_bytes()[from..]
        .iter()
        .position(|x| set.contains(x))
        .map(|i| from + i)
}

/// Returns the byte offset where the authority span of `s` begins:
/// one past a `://` marker, one past a lone `:`, or 0.
///
/// This is the immutable prefix bound used by normalization.
pub(crate) fn authority_start(s: &str) -> usize {
    match s.find(':') {
        Some(i) if s[i + 1..].starts_with("//") => i + 3,
        Some(i) => i + 1,
        None => 0,
    }
}

/// An authority component.
///
/// This is a lenient wrapper: any string can be viewed as an
/// authority, and the accessors carve host and port out of whatever
/// text is present. Use [`is_valid_authority`] to check the text
/// against the restricted character set.
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Authority {
    inner: str,
}

impl Authority {
    /// Converts a string slice to `&Authority` without validation.
    #[ref_cast_custom]
    #[inline]
    pub const fn new(authority: &str) -> &Authority;

    /// Returns the authority component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the authority is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the host subcomponent.
    ///
    /// The host lies between a possible `@` and the `:` that follows
    /// it, defaulting to the whole authority when neither is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use lax_uri::component::Authority;
    ///
    /// assert_eq!(Authority::new("user@example.com:8080").host(), "example.com");
    /// assert_eq!(Authority::new("example.com").host(), "example.com");
    /// assert_eq!(Authority::new("").host(), "");
    /// ```
    #[must_use]
    pub fn host(&self) -> &str {
        let s = &self.inner;
        let start = match s.find('@') {
            Some(i) => i + 1,
            None => 0,
        };
        let end = match s[start..].find(':') {
            Some(i) => start + i,
            None => s.len(),
        };
        &s[start..end]
    }

    /// Returns the port subcomponent.
    ///
    /// The port is the text after the first `:` that follows any `@`.
    /// It is returned only if every byte is an ASCII digit; otherwise
    /// the result is empty, which doubles as a soft validity check.
    ///
    /// # Examples
    ///
    /// ```
    /// use lax_uri::component::Authority;
    ///
    /// assert_eq!(Authority::new("example.com:8080").port(), "8080");
    /// assert_eq!(Authority::new("example.com:abc").port(), "");
    /// assert_eq!(Authority::new("example.com").port(), "");
    /// ```
    #[must_use]
    pub fn port(&self) -> &str {
        let s = &self.inner;
        let from = match s.find('@') {
            Some(i) => i + 1,
            None => 0,
        };
        match s[from..].find(':') {
            Some(i) => {
                let port = &s[from + i + 1..];
                if port.bytes().all(|x| x.is_ascii_digit()) {
                    port
                } else {
                    ""
                }
            }
            None => "",
        }
    }
}

impl PartialEq for Authority {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Authority {}

impl PartialEq<str> for Authority {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<Authority> for str {
    #[inline]
    fn eq(&self, other: &Authority) -> bool {
        self == &other.inner
    }
}

/// A path component.
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Converts a string slice to `&Path`.
    #[ref_cast_custom]
    #[inline]
    pub const fn new(path: &str) -> &Path;

    /// Returns the path component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the path is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the text after the last `/`, or the whole path if there
    /// is no slash.
    ///
    /// # Examples
    ///
    /// ```
    /// use lax_uri::component::Path;
    ///
    /// assert_eq!(Path::new("docs/report.txt").name(), "report.txt");
    /// assert_eq!(Path::new("report.txt").name(), "report.txt");
    /// ```
    #[must_use]
    pub fn name(&self) -> &str {
        match self.inner.rfind('/') {
            Some(i) => &self.inner[i + 1..],
            None => &self.inner,
        }
    }

    /// Returns the text after the last `.`, or the empty string if the
    /// path contains no dot.
    ///
    /// The dot may lie anywhere in the path, including in a directory
    /// segment: the extension of `a.b/c` is `b/c`. Callers that need a
    /// filename-scoped extension should split [`name`](Self::name)
    /// themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use lax_uri::component::Path;
    ///
    /// assert_eq!(Path::new("docs/report.txt").ext(), "txt");
    /// assert_eq!(Path::new("docs/report").ext(), "");
    /// assert_eq!(Path::new("a.b/c").ext(), "b/c");
    /// ```
    #[must_use]
    pub fn ext(&self) -> &str {
        match self.inner.rfind('.') {
            Some(i) => &self.inner[i + 1..],
            None => "",
        }
    }
}

impl PartialEq for Path {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Path {}

impl PartialEq<str> for Path {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<Path> for str {
    #[inline]
    fn eq(&self, other: &Path) -> bool {
        self == &other.inner
    }
}

/// Checks a scheme against the restricted scheme character set.
///
/// The empty string is valid, since a reference has no scheme.
/// Otherwise the first byte must be an ASCII letter and every byte an
/// ASCII letter, digit, or one of `+`, `-`, `.`.
///
/// # Examples
///
/// ```
/// use lax_uri::component::is_valid_scheme;
///
/// assert!(is_valid_scheme(""));
/// assert!(is_valid_scheme("http"));
/// assert!(!is_valid_scheme("1http"));
/// assert!(!is_valid_scheme("ht tp"));
/// ```
#[must_use]
pub fn is_valid_scheme(scheme: &str) -> bool {
    match scheme.as_bytes() {
        [] => true,
        [first, rem @ ..] => first.is_ascii_alphabetic() && table::SCHEME.validate(rem),
    }
}

/// Checks an authority against the restricted authority character set.
///
/// The userinfo segment before an `@` and the host segment must not
/// contain any of `/`, `?`, `#`, `[`, `]`, `@`, and the port segment
/// after the host's `:` must be all ASCII digits. The empty string is
/// valid.
///
/// # Examples
///
/// ```
/// use lax_uri::component::is_valid_authority;
///
/// assert!(is_valid_authority(""));
/// assert!(is_valid_authority("user@example.com:8080"));
/// assert!(!is_valid_authority("example.com:8a"));
/// assert!(!is_valid_authority("user@[::1]"));
/// ```
#[must_use]
pub fn is_valid_authority(authority: &str) -> bool {
    let user = authority.find('@');
    let host_start = user.map_or(0, |i| i + 1);
    let port = authority[host_start..].find(':').map(|i| host_start + i);

    if let Some(user) = user {
        if authority[..user]
            .bytes()
            .any(|x| table::AUTH_DELIMS.allows(x))
        {
            return false;
        }
    }

    let host_end = match port {
        Some(i) => {
            if !authority[i + 1..].bytes().all(|x| x.is_ascii_digit()) {
                return false;
            }
            i
        }
        None => authority.len(),
    };

    !authority[host_start..host_end]
        .bytes()
        .any(|x| table::AUTH_DELIMS.allows(x))
}
