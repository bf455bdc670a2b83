//! Route template helpers
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

/// Joins two route template fragments with exactly one `/`
///
/// An empty fragment counts as absent: the other fragment is returned
/// verbatim, and two empty fragments give an empty template.
///
/// # Examples
///
/// ```
/// use page_routes::combine_templates;
///
/// assert_eq!(combine_templates("", ""), "");
/// assert_eq!(combine_templates("/a", ""), "/a");
/// assert_eq!(combine_templates("", "/b"), "/b");
/// assert_eq!(combine_templates("/a", "/b"), "/a/b");
/// assert_eq!(combine_templates("/Users", "{id:int}"), "/Users/{id:int}");
/// ```
pub fn combine_templates(prefix: &str, template: &str) -> String {
    match (prefix.is_empty(), template.is_empty()) {
        (true, true) => String::new(),
        (false, true) => prefix.to_string(),
        (true, false) => template.to_string(),
        (false, false) => {
            let prefix = prefix.trim_end_matches('/');
            let template = template.trim_start_matches('/');
            let mut combined = String::with_capacity(prefix.len() + template.len() + 1);
            combined.push_str(prefix);
            combined.push('/');
            combined.push_str(template);
            combined
        }
    }
}

/// Whether a template replaces, rather than extends, the prefix it is combined with
///
/// Templates starting with `~/` or `/` are override patterns.
///
/// # Examples
///
/// ```
/// use page_routes::is_override_pattern;
///
/// assert!(is_override_pattern("~/products"));
/// assert!(is_override_pattern("/products"));
/// assert!(!is_override_pattern("{id?}"));
/// assert!(!is_override_pattern(""));
/// ```
pub fn is_override_pattern(template: &str) -> bool {
    template.starts_with("~/") || template.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "")]
    #[case("/a", "", "/a")]
    #[case("", "/b", "/b")]
    #[case("/a", "/b", "/a/b")]
    #[case("/a/", "b", "/a/b")]
    #[case("/a//", "//b", "/a/b")]
    #[case("/", "{id}", "/{id}")]
    #[case("/Manage/Home", "{handler?}", "/Manage/Home/{handler?}")]
    fn test_combine_templates(#[case] prefix: &str, #[case] template: &str, #[case] expected: &str) {
        assert_eq!(combine_templates(prefix, template), expected);
    }

    #[test]
    fn test_tilde_without_slash_is_not_override() {
        assert!(!is_override_pattern("~products"));
    }
}
