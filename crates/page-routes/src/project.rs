//! Project items and page directive extraction
//!
//! Discovery never touches the file system itself. A [`PageProject`]
//! enumerates items below a base path and extracts each item's `@page`
//! directive; [`InMemoryProject`] is the in-process implementation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::path::{file_name, relative_to, strip_extension};

/// Matches `@page` optionally followed by a quoted route template
static PAGE_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^@page(?:\s+"([^"]*)")?\s*$"#).expect("valid page directive regex"));

/// A file discovered below a base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    /// Directory enumeration started from, e.g. `/Pages`
    pub base_path: String,
    /// Path relative to `base_path`, starting with `/`, e.g. `/Users/Edit.cshtml`
    pub file_path: String,
}

impl ProjectItem {
    pub fn new(base_path: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            file_path: file_path.into(),
        }
    }

    /// Application-relative path: `base_path` joined with `file_path`
    ///
    /// # Examples
    ///
    /// ```
    /// use page_routes::ProjectItem;
    ///
    /// let item = ProjectItem::new("/Pages/", "/Users/Edit.cshtml");
    /// assert_eq!(item.combined_path(), "/Pages/Users/Edit.cshtml");
    /// assert_eq!(item.file_name(), "Edit.cshtml");
    /// assert_eq!(item.file_path_without_extension(), "/Users/Edit");
    /// ```
    pub fn combined_path(&self) -> String {
        let base = self.base_path.trim_end_matches('/');
        format!("{base}{}", self.file_path)
    }

    pub fn file_name(&self) -> &str {
        file_name(&self.file_path)
    }

    pub fn file_path_without_extension(&self) -> &str {
        strip_extension(&self.file_path)
    }

    /// Partial templates such as `_ViewImports` or `_Layout` are never routable
    pub fn is_partial(&self) -> bool {
        self.file_name().starts_with('_')
    }
}

/// Source of page files for discovery
pub trait PageProject {
    /// Items below `base_path`, in discovery order
    fn enumerate_items(&self, base_path: &str) -> Vec<ProjectItem>;

    /// Route template declared by the item's `@page` directive
    ///
    /// `None` means the item is not a page. `Some("")` is a page whose file
    /// path is its whole route.
    fn page_directive(&self, item: &ProjectItem) -> Option<String>;
}

/// Extracts the route template from a page's `@page` directive
///
/// The directive must be the first non-blank line of the source.
///
/// # Examples
///
/// ```
/// use page_routes::parse_page_directive;
///
/// assert_eq!(parse_page_directive("@page\n<h1>Hi</h1>"), Some(String::new()));
/// assert_eq!(parse_page_directive("@page \"{id:int}\""), Some("{id:int}".to_string()));
/// assert_eq!(parse_page_directive("<h1>@page</h1>"), None);
/// ```
pub fn parse_page_directive(source: &str) -> Option<String> {
    let first_line = source.lines().map(str::trim).find(|line| !line.is_empty())?;
    let captures = PAGE_DIRECTIVE.captures(first_line)?;

    Some(
        captures
            .get(1)
            .map(|template| template.as_str().to_string())
            .unwrap_or_default(),
    )
}

/// Project backed by `(application-relative path, source)` pairs
///
/// Items are enumerated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProject {
    files: Vec<(String, String)>,
}

impl InMemoryProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file such as `/Pages/Index.cshtml` with its source text
    pub fn with_file(mut self, path: impl Into<String>, source: impl Into<String>) -> Self {
        self.add_file(path, source);
        self
    }

    pub fn add_file(&mut self, path: impl Into<String>, source: impl Into<String>) {
        self.files.push((path.into(), source.into()));
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl PageProject for InMemoryProject {
    fn enumerate_items(&self, base_path: &str) -> Vec<ProjectItem> {
        let base = base_path.trim_end_matches('/');

        self.files
            .iter()
            .filter_map(|(path, _)| {
                relative_to(path, base).map(|file_path| ProjectItem::new(base, file_path))
            })
            .collect()
    }

    fn page_directive(&self, item: &ProjectItem) -> Option<String> {
        let combined = item.combined_path();
        self.files
            .iter()
            .find(|(path, _)| *path == combined)
            .and_then(|(_, source)| parse_page_directive(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("@page", Some(""))]
    #[case("  @page  \n<p>body</p>", Some(""))]
    #[case("\n\n@page \"{id?}\"", Some("{id?}"))]
    #[case("@page \"\"", Some(""))]
    #[case("@page\t\"List/{handler?}\"", Some("List/{handler?}"))]
    #[case("@model IndexModel\n@page", None)]
    #[case("@pages", None)]
    #[case("@page {id}", None)]
    #[case("", None)]
    fn test_parse_page_directive(#[case] source: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_page_directive(source).as_deref(), expected);
    }

    #[test]
    fn test_enumerate_items_filters_by_base_path() {
        let project = InMemoryProject::new()
            .with_file("/Pages/Index.cshtml", "@page")
            .with_file("/PagesOld/Index.cshtml", "@page")
            .with_file("/Areas/Admin/Pages/Index.cshtml", "@page")
            .with_file("/Pages/Users/Edit.cshtml", "@page");

        let items = project.enumerate_items("/Pages");
        let paths: Vec<&str> = items.iter().map(|item| item.file_path.as_str()).collect();
        assert_eq!(paths, vec!["/Index.cshtml", "/Users/Edit.cshtml"]);
        assert_eq!(items[1].combined_path(), "/Pages/Users/Edit.cshtml");

        let items = project.enumerate_items("/Areas/");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].file_path, "/Admin/Pages/Index.cshtml");
    }

    #[test]
    fn test_page_directive_reads_item_source() {
        let project = InMemoryProject::new()
            .with_file("/Pages/About.cshtml", "<p>no directive</p>")
            .with_file("/Pages/Edit.cshtml", "@page \"{id}\"");

        let items = project.enumerate_items("/Pages");
        assert_eq!(project.page_directive(&items[0]), None);
        assert_eq!(project.page_directive(&items[1]), Some("{id}".to_string()));
    }

    #[test]
    fn test_partial_detection() {
        assert!(ProjectItem::new("/Pages", "/Shared/_Layout.cshtml").is_partial());
        assert!(!ProjectItem::new("/Pages", "/_Shared/Layout.cshtml").is_partial());
    }
}
