/// Split a config line into `(key, raw_value)` at the first `=`.
///
/// The line is trimmed first; anything without a `=` is not an assignment
/// and yields `None`. The key is taken verbatim, so a commented-out line
/// like `#CONFIG_PRJ_TARGET=...` never matches a real key.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let (key, raw) = line.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key, raw))
}

/// Strip exactly one pair of surrounding double quotes, if both are present.
/// Values are not otherwise unescaped.
pub fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw)
}

/// Scan `content` for assignments to `key` in a single pass.
///
/// Exact key match only; when the key appears more than once, the last
/// occurrence wins. `Some(String::new())` means the key was assigned an
/// empty value, which is distinct from the key being absent.
pub fn scan_for_key(content: &str, key: &str) -> Option<String> {
    let mut found = None;
    for line in content.lines() {
        if let Some((k, raw)) = split_assignment(line)
            && k == key
        {
            found = Some(unquote(raw).to_string());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_takes_first_equals_only() {
        assert_eq!(
            split_assignment("CONFIG_PRJ_APP=a=b"),
            Some(("CONFIG_PRJ_APP", "a=b"))
        );
    }

    #[test]
    fn split_skips_lines_without_equals() {
        assert_eq!(split_assignment("just some text"), None);
        assert_eq!(split_assignment(""), None);
        assert_eq!(split_assignment("   "), None);
        assert_eq!(split_assignment("=value"), None);
    }

    #[test]
    fn split_trims_surrounding_whitespace() {
        assert_eq!(
            split_assignment("  CONFIG_PRJ_TARGET=\"x\"  "),
            Some(("CONFIG_PRJ_TARGET", "\"x\""))
        );
    }

    #[test]
    fn unquote_strips_one_pair() {
        assert_eq!(unquote("\"desktop_linux\""), "desktop_linux");
        assert_eq!(unquote("\"\"x\"\""), "\"x\"");
        assert_eq!(unquote("\"\""), "");
    }

    #[test]
    fn unquote_leaves_unbalanced_and_bare_values() {
        assert_eq!(unquote("unquoted"), "unquoted");
        assert_eq!(unquote("\"open"), "\"open");
        assert_eq!(unquote("close\""), "close\"");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn scan_last_occurrence_wins() {
        let content = "CONFIG_PRJ_TARGET=\"first\"\nCONFIG_PRJ_TARGET=\"second\"\n";
        assert_eq!(
            scan_for_key(content, "CONFIG_PRJ_TARGET"),
            Some("second".to_string())
        );
    }

    #[test]
    fn scan_requires_exact_key() {
        let content = "CONFIG_PRJ_TARGET_EXTRA=\"x\"\n#CONFIG_PRJ_TARGET=\"y\"\n";
        assert_eq!(scan_for_key(content, "CONFIG_PRJ_TARGET"), None);
    }

    #[test]
    fn scan_distinguishes_empty_value_from_absent() {
        let content = "CONFIG_PRJ_APP=\"\"\n";
        assert_eq!(scan_for_key(content, "CONFIG_PRJ_APP"), Some(String::new()));
        assert_eq!(scan_for_key(content, "CONFIG_PRJ_TARGET"), None);
    }
}
