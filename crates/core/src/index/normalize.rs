/// Separators checked in this order; each cut keeps the text strictly before it.
const QUALIFIER_SEPARATORS: [char; 4] = ['>', '<', ':', '='];

/// Strip version, relation and sub-library qualifiers from a reference,
/// leaving the bare lookup name (`"foo>=1.2"` -> `"foo"`).
///
/// The cuts run in a fixed order, each on the output of the previous one,
/// so `"foo>1.0<2.0"` is cut at `>` and the `<` never matters.
pub fn normalize_ref(raw: &str) -> &str {
    QUALIFIER_SEPARATORS.iter().fold(raw, |key, &sep| match key.find(sep) {
        Some(pos) => &key[..pos],
        None => key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(normalize_ref("foo"), "foo");
        assert_eq!(normalize_ref(""), "");
    }

    #[test]
    fn test_strips_each_qualifier() {
        assert_eq!(normalize_ref("foo>=1.2"), "foo");
        assert_eq!(normalize_ref("foo<1.2"), "foo");
        assert_eq!(normalize_ref("foo:lib"), "foo");
        assert_eq!(normalize_ref("foo=1.0"), "foo");
        assert_eq!(normalize_ref("foo<=2"), "foo");
    }

    #[test]
    fn test_first_separator_wins() {
        assert_eq!(normalize_ref("foo>1.0<2.0"), "foo");
        assert_eq!(normalize_ref("python-foo: optional support"), "python-foo");
        assert_eq!(normalize_ref("lib32-bar=1:2.0"), "lib32-bar");
    }

    #[test]
    fn test_leading_separator_yields_empty_key() {
        assert_eq!(normalize_ref(">=1.0"), "");
    }
}
