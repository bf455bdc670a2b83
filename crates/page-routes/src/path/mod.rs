//! Path decomposition for page files
//!
//! All functions are **pure**: given same input, always produce same output.
//! The only side effect is a diagnostic `tracing` event when an area path
//! is rejected.
//!
//! Two area parsers exist and are kept apart on purpose, because their
//! callers need different output shapes:
//!
//! | Parser                    | Root segment                     | `view_engine_path` for `/Products/Pages/Manage/Home.cshtml` |
//! |---------------------------|----------------------------------|-------------------------------------------------------------|
//! | [`parse_area_path`]        | configured (`root_directory`)    | `/Manage/Home`                                              |
//! | [`parse_area_path_strict`] | literal `Pages`                  | `/Products/Manage/Home`                                     |

use tracing::{debug, warn};

use crate::PagesOptions;

mod area;

pub use area::{AreaPath, StrictAreaPath};

const STRICT_PAGES_SEGMENT: &str = "Pages";

/// Decomposes an areas-relative page path using the configured pages root
///
/// `path` is relative to the areas root, e.g. `/Products/Pages/Manage/Home.cshtml`.
/// The segment after the area name must match
/// [`PagesOptions::pages_root_segment`] case-insensitively.
///
/// Returns `None` (and logs at debug level) for unsupported shapes: no area
/// segment, a missing or mismatched root segment, or an empty page name.
///
/// # Panics
///
/// Panics if `path` does not start with `/`.
///
/// # Examples
///
/// ```
/// use page_routes::{parse_area_path, PagesOptions};
///
/// let options = PagesOptions::default();
/// let area = parse_area_path(&options, "/Products/Pages/Manage/Home.cshtml").unwrap();
/// assert_eq!(area.area_name, "Products");
/// assert_eq!(area.view_engine_path, "/Manage/Home");
/// assert_eq!(area.page_route, "/Products/Manage/Home");
///
/// assert!(parse_area_path(&options, "/Products/NotPages/Home.cshtml").is_none());
/// ```
pub fn parse_area_path(options: &PagesOptions, path: &str) -> Option<AreaPath> {
    assert!(path.starts_with('/'), "area path must start with '/': {path}");

    let reject = || {
        debug!(
            path,
            root_directory = options.root_directory(),
            "unsupported area path; expected [AreaName]/[RootDirectory]/[Path]"
        );
        None
    };

    let area_end = match path[1..].find('/') {
        Some(index) if index > 0 => index + 1,
        _ => return reject(),
    };

    let mut root_segment = options.pages_root_segment().to_string();
    root_segment.push('/');

    let after_area = &path[area_end + 1..];
    let root_matches = after_area
        .get(..root_segment.len())
        .is_some_and(|candidate| candidate.eq_ignore_ascii_case(&root_segment));
    if !root_matches {
        return reject();
    }

    let page_start = area_end + 1 + root_segment.len();
    let page_name = page_name(path, page_start);
    if page_name.is_empty() {
        return reject();
    }

    let area_name = &path[1..area_end];
    Some(AreaPath {
        area_name: area_name.to_string(),
        view_engine_path: format!("/{page_name}"),
        page_route: format!("/{area_name}/{page_name}"),
    })
}

/// Decomposes an areas-relative page path against the literal `Pages` segment
///
/// Used by project discovery. Unlike [`parse_area_path`], the produced
/// `view_engine_path` keeps the area prefix and doubles as the page route.
///
/// # Panics
///
/// Panics if `path` does not start with `/`.
///
/// # Examples
///
/// ```
/// use page_routes::parse_area_path_strict;
///
/// let area = parse_area_path_strict("/Products/Pages/Manage/Home.cshtml").unwrap();
/// assert_eq!(area.area_name, "Products");
/// assert_eq!(area.view_engine_path, "/Products/Manage/Home");
/// ```
pub fn parse_area_path_strict(path: &str) -> Option<StrictAreaPath> {
    assert!(path.starts_with('/'), "area path must start with '/': {path}");

    let mut segments = path[1..].split('/');

    let area_name = match segments.next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => {
            debug!(path, "area page ignored: missing area name");
            return None;
        }
    };

    match segments.next() {
        Some(segment) if segment.eq_ignore_ascii_case(STRICT_PAGES_SEGMENT) => {}
        Some(segment) if !segment.is_empty() => {
            warn!(
                path,
                "page is being ignored because it does not follow the pattern [AreaName]/Pages/[Path]"
            );
            return None;
        }
        _ => {
            debug!(path, "area page ignored: missing Pages directory");
            return None;
        }
    }

    if !segments.next().is_some_and(|segment| !segment.is_empty()) {
        debug!(path, "area page ignored: missing page path");
        return None;
    }

    let page_start = 1 + area_name.len() + 1 + STRICT_PAGES_SEGMENT.len() + 1;
    let page_name = page_name(path, page_start);
    if page_name.is_empty() {
        debug!(path, "area page ignored: empty page name");
        return None;
    }

    Some(StrictAreaPath {
        area_name: area_name.to_string(),
        view_engine_path: format!("/{area_name}/{page_name}"),
    })
}

/// Page name starting at `page_start`, without the file extension
///
/// The extension is cut at the last `.` only when that dot lies inside the
/// page name; a dot in an earlier directory is not an extension.
fn page_name(path: &str, page_start: usize) -> &str {
    let end = path
        .rfind('.')
        .filter(|&dot| dot >= page_start)
        .unwrap_or(path.len());
    path.get(page_start..end).unwrap_or("")
}

/// File name component of a `/`-separated path
///
/// # Examples
///
/// ```
/// use page_routes::path::file_name;
///
/// assert_eq!(file_name("/Pages/Users/Index.cshtml"), "Index.cshtml");
/// assert_eq!(file_name("Index.cshtml"), "Index.cshtml");
/// ```
pub fn file_name(path: &str) -> &str {
    path.rfind('/').map_or(path, |slash| &path[slash + 1..])
}

/// Strips the extension from the file name component of `path`
///
/// # Examples
///
/// ```
/// use page_routes::path::strip_extension;
///
/// assert_eq!(strip_extension("/Users/Edit.cshtml"), "/Users/Edit");
/// assert_eq!(strip_extension("/v1.2/Readme"), "/v1.2/Readme");
/// ```
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |slash| slash + 1);
    match path.rfind('.') {
        Some(dot) if dot >= name_start => &path[..dot],
        _ => path,
    }
}

/// Path of `path` relative to the directory `base`, keeping the leading `/`
///
/// Returns `None` when `path` is not below `base`.
///
/// # Examples
///
/// ```
/// use page_routes::path::relative_to;
///
/// assert_eq!(relative_to("/Pages/Users/Edit.cshtml", "/Pages"), Some("/Users/Edit.cshtml"));
/// assert_eq!(relative_to("/Pages/Index.cshtml", "/Pages/"), Some("/Index.cshtml"));
/// assert_eq!(relative_to("/PagesOld/Index.cshtml", "/Pages"), None);
/// ```
pub fn relative_to<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    path.strip_prefix(base.trim_end_matches('/'))
        .filter(|rest| rest.starts_with('/'))
}

/// Route of the parent directory: everything from the last `/` onward removed
///
/// # Examples
///
/// ```
/// use page_routes::path::parent_route;
///
/// assert_eq!(parent_route("/Users/Index"), "/Users");
/// assert_eq!(parent_route("/Index"), "");
/// assert_eq!(parent_route("Index"), "");
/// ```
pub fn parent_route(route: &str) -> &str {
    route.rfind('/').map_or("", |slash| &route[..slash])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_area_path_nested_page() {
        let area = parse_area_path(&PagesOptions::default(), "/Products/Pages/Manage/Home.cshtml")
            .unwrap();
        assert_eq!(area.area_name, "Products");
        assert_eq!(area.view_engine_path, "/Manage/Home");
        assert_eq!(area.page_route, "/Products/Manage/Home");
    }

    #[test]
    fn test_parse_area_path_root_segment_is_case_insensitive() {
        let area = parse_area_path(&PagesOptions::default(), "/Products/pages/Home.cshtml").unwrap();
        assert_eq!(area.view_engine_path, "/Home");
        assert_eq!(area.page_route, "/Products/Home");
    }

    #[test]
    fn test_parse_area_path_uses_configured_root() {
        let options = PagesOptions::default()
            .with_root_directory("/Content")
            .unwrap();
        let area = parse_area_path(&options, "/Shop/Content/Cart.cshtml").unwrap();
        assert_eq!(area.area_name, "Shop");
        assert_eq!(area.page_route, "/Shop/Cart");

        assert!(parse_area_path(&options, "/Shop/Pages/Cart.cshtml").is_none());
    }

    #[test]
    fn test_parse_area_path_dot_in_directory_is_not_extension() {
        let area = parse_area_path(&PagesOptions::default(), "/Docs.Old/Pages/Readme").unwrap();
        assert_eq!(area.area_name, "Docs.Old");
        assert_eq!(area.view_engine_path, "/Readme");
    }

    #[rstest]
    #[case("/Products")]
    #[case("/Products/")]
    #[case("//Pages/Home.cshtml")]
    #[case("/Products/NotPages/Home.cshtml")]
    #[case("/Products/Pages")]
    #[case("/Products/PagesHome.cshtml")]
    #[case("/Products/Pages/")]
    #[case("/Products/Pages/.cshtml")]
    fn test_parse_area_path_rejects(#[case] path: &str) {
        assert!(parse_area_path(&PagesOptions::default(), path).is_none());
    }

    #[test]
    #[should_panic(expected = "area path must start with '/'")]
    fn test_parse_area_path_requires_leading_slash() {
        parse_area_path(&PagesOptions::default(), "Products/Pages/Home.cshtml");
    }

    #[test]
    fn test_parse_area_path_strict_keeps_area_prefix() {
        let area = parse_area_path_strict("/Products/Pages/Manage/Home.cshtml").unwrap();
        assert_eq!(area.area_name, "Products");
        assert_eq!(area.view_engine_path, "/Products/Manage/Home");
    }

    #[test]
    fn test_parsers_agree_on_area_and_page_name() {
        let path = "/Products/PAGES/Manage/v2.0/Home.cshtml";
        let area = parse_area_path(&PagesOptions::default(), path).unwrap();
        let strict = parse_area_path_strict(path).unwrap();
        assert_eq!(area.area_name, strict.area_name);
        assert_eq!(area.page_route, strict.view_engine_path);
    }

    #[test]
    fn test_parse_area_path_strict_ignores_configured_root() {
        assert!(parse_area_path_strict("/Shop/Content/Cart.cshtml").is_none());
    }

    #[rstest]
    #[case("/")]
    #[case("/Products")]
    #[case("//Pages/Home.cshtml")]
    #[case("/Products/NotPages/Home.cshtml")]
    #[case("/Products/Pages")]
    #[case("/Products/Pages/")]
    #[case("/Products/Pages/.cshtml")]
    fn test_parse_area_path_strict_rejects(#[case] path: &str) {
        assert!(parse_area_path_strict(path).is_none());
    }

    #[test]
    #[should_panic(expected = "area path must start with '/'")]
    fn test_parse_area_path_strict_requires_leading_slash() {
        parse_area_path_strict("Products/Pages/Home.cshtml");
    }

    #[rstest]
    #[case("/Users/Edit.cshtml", "/Users/Edit")]
    #[case("/Index", "/Index")]
    #[case("/a.b/c", "/a.b/c")]
    #[case("/a.b/c.d.cshtml", "/a.b/c.d")]
    fn test_strip_extension(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(strip_extension(path), expected);
    }

    #[test]
    fn test_parent_route() {
        assert_eq!(parent_route("/Manage"), "");
        assert_eq!(parent_route("/Products/Manage/Index"), "/Products/Manage");
        assert_eq!(parent_route(""), "");
    }
}
