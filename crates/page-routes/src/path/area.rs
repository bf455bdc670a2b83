use serde::Serialize;

/// Result of [`parse_area_path`](super::parse_area_path)
///
/// For `/Products/Pages/Manage/Home.cshtml`:
/// `("Products", "/Manage/Home", "/Products/Manage/Home")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaPath {
    pub area_name: String,
    /// Page path without the area and root segments
    pub view_engine_path: String,
    /// `/{area}/{page}` route prefix
    pub page_route: String,
}

/// Result of [`parse_area_path_strict`](super::parse_area_path_strict)
///
/// For `/Products/Pages/Manage/Home.cshtml`: `("Products", "/Products/Manage/Home")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrictAreaPath {
    pub area_name: String,
    /// Page path with the area prefix retained, also used as the page route
    pub view_engine_path: String,
}
