//! In-place rewriting for file-style URI buffers.
//!
//! Everything here operates on a `(buf, start)` pair where `start` is
//! the first byte a rewrite may touch, so callers can pin the scheme
//! and authority while the remainder is canonicalized.

use alloc::string::String;

/// Rewrites the buffer into canonical file-path form.
///
/// Steps, in order: `\` becomes `/` across the whole buffer, runs of
/// `/` collapse, each `/..` pops the path component before it, a
/// buffer reduced to a lone `/` empties, and runs of `/` introduced
/// by popping collapse again. Every step except the first leaves
/// `buf[..start]` untouched.
pub(crate) fn rewrite(buf: &mut String, start: usize) {
    if buf.contains('\\') {
        *buf = buf.replace('\\', "/");
    }
    replace_all_from(buf, start, "//", "/");
    pop_parents(buf, start);
    if buf.as_str() == "/" {
        buf.clear();
    }
    replace_all_from(buf, start, "//", "/");
}

/// Replaces every occurrence of `from` at or after `start` with `to`.
///
/// The scan resumes at each replacement site, so runs of any length
/// are fully rewritten. Requires `to` to be shorter than `from` and
/// free of it, or the loop would not terminate.
fn replace_all_from(buf: &mut String, start: usize, from: &str, to: &str) {
    let mut pos = start;
    while let Some(i) = buf[pos..].find(from) {
        pos += i;
        buf.replace_range(pos..pos + from.len(), to);
    }
}

/// Pops one path component for each `/..`, rightmost first.
///
/// The backward search for the preceding slash never crosses `start`;
/// a `/..` with nothing before it collapses against `start` itself,
/// which keeps a parent segment at the root from escaping it.
fn pop_parents(buf: &mut String, start: usize) {
    while let Some(i) = buf[start..].rfind("/..") {
        let pos = start + i;
        let slash = match buf[start..pos].rfind('/') {
            Some(j) => start + j,
            None => start,
        };
        buf.replace_range(slash..pos + 3, "/");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_replace_resumes_at_site() {
        let mut buf = "a////b".to_string();
        replace_all_from(&mut buf, 0, "//", "/");
        assert_eq!(buf, "a/b");
    }

    #[test]
    fn test_replace_ignores_prefix() {
        let mut buf = "//a//b".to_string();
        replace_all_from(&mut buf, 2, "//", "/");
        assert_eq!(buf, "//a/b");
    }

    #[test]
    fn test_pop_takes_component_before_parent() {
        let mut buf = "/a/b/../c".to_string();
        pop_parents(&mut buf, 0);
        // The popped span leaves adjacent slashes for `rewrite` to
        // collapse afterwards.
        assert_eq!(buf, "/a//c");
    }

    #[test]
    fn test_pop_stops_at_bound() {
        let mut buf = "file:///../a".to_string();
        pop_parents(&mut buf, 7);
        assert_eq!(buf, "file:////a");
    }

    #[test]
    fn test_rewrite_pipeline() {
        let mut buf = "file:///a\\b//c/../d".to_string();
        rewrite(&mut buf, 7);
        assert_eq!(buf, "file:///a/b/d");
    }

    #[test]
    fn test_rewrite_root_parent_empties() {
        let mut buf = "/a/..".to_string();
        rewrite(&mut buf, 0);
        assert_eq!(buf, "");
    }

    #[test]
    fn test_rewrite_lone_slash_empties() {
        let mut buf = "/".to_string();
        rewrite(&mut buf, 0);
        assert_eq!(buf, "");
    }
}
