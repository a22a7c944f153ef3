use lax_uri::{
    component::{is_valid_authority, is_valid_scheme},
    Uri,
};

#[test]
fn valid_scheme() {
    // A reference has no scheme, so the empty string passes.
    assert!(is_valid_scheme(""));
    assert!(is_valid_scheme("http"));
    assert!(is_valid_scheme("ssh+git"));
    assert!(is_valid_scheme("a-b.c"));

    // The first byte must be a letter.
    assert!(!is_valid_scheme("1http"));
    assert!(!is_valid_scheme("+http"));

    assert!(!is_valid_scheme("ht tp"));
    assert!(!is_valid_scheme("ht_tp"));
}

#[test]
fn valid_authority() {
    assert!(is_valid_authority(""));
    assert!(is_valid_authority("example.com"));
    assert!(is_valid_authority("user:pass@example.com:8080"));

    // Only the delimiter bytes are rejected; a space in the userinfo
    // slips through.
    assert!(is_valid_authority("user name@host"));

    // The port must be all digits.
    assert!(!is_valid_authority("example.com:80a"));

    // A second `@` lands in the host, where it is a delimiter.
    assert!(!is_valid_authority("a@b@c"));

    // IP literals use brackets, which the restricted set rejects.
    assert!(!is_valid_authority("[::1]"));

    assert!(!is_valid_authority("a/b@host"));
}

#[test]
fn valid_uri() {
    let u = Uri::new("http://example.com/a/b?k=v#frag");
    assert!(u.is_valid());

    // The empty URI is a valid reference.
    assert!(Uri::new("").is_valid());

    // Percent signs pass; encoding triplets are not decoded or checked.
    assert!(Uri::new("a%2fb").is_valid());

    assert!(Uri::new("file:///a_b").is_valid());

    assert!(!Uri::new("http://e\tx").is_valid());
    assert!(!Uri::new("1http://a").is_valid());
    assert!(!Uri::new("http://example.com:80a").is_valid());
    assert!(!Uri::new("ldap://[2001:db8::7]/c=GB").is_valid());

    // Validity is advisory: invalid text still splits.
    let u = Uri::new("http://example.com/a b");
    assert!(!u.is_valid());
    assert_eq!(u.path(), "a b");
}
