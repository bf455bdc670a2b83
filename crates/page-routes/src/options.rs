use serde::{Deserialize, Serialize};

use crate::RouteError;

const DEFAULT_ROOT_DIRECTORY: &str = "/Pages";
const DEFAULT_AREA_ROOT_DIRECTORY: &str = "/Areas";

/// Page discovery configuration
///
/// Directory options are application-relative and must start with `/`.
/// Setters validate eagerly, so an invalid value never reaches discovery.
///
/// # Examples
///
/// ```
/// use page_routes::PagesOptions;
///
/// let mut options = PagesOptions::default();
/// assert_eq!(options.root_directory(), "/Pages");
///
/// options.set_root_directory("/Content").unwrap();
/// assert!(options.set_area_root_directory("Areas").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPagesOptions")]
pub struct PagesOptions {
    root_directory: String,
    area_root_directory: String,
    pub disable_areas: bool,
}

/// Unvalidated mirror of [`PagesOptions`] used when deserializing
#[derive(Deserialize)]
struct RawPagesOptions {
    #[serde(default = "default_root_directory")]
    root_directory: String,
    #[serde(default = "default_area_root_directory")]
    area_root_directory: String,
    #[serde(default)]
    disable_areas: bool,
}

fn default_root_directory() -> String {
    DEFAULT_ROOT_DIRECTORY.to_string()
}

fn default_area_root_directory() -> String {
    DEFAULT_AREA_ROOT_DIRECTORY.to_string()
}

impl Default for PagesOptions {
    fn default() -> Self {
        Self {
            root_directory: default_root_directory(),
            area_root_directory: default_area_root_directory(),
            disable_areas: false,
        }
    }
}

impl TryFrom<RawPagesOptions> for PagesOptions {
    type Error = RouteError;

    fn try_from(raw: RawPagesOptions) -> Result<Self, Self::Error> {
        let mut options = PagesOptions {
            disable_areas: raw.disable_areas,
            ..PagesOptions::default()
        };
        options.set_root_directory(raw.root_directory)?;
        options.set_area_root_directory(raw.area_root_directory)?;
        Ok(options)
    }
}

impl PagesOptions {
    /// Root of discovery for non-area pages (default `/Pages`)
    pub fn root_directory(&self) -> &str {
        &self.root_directory
    }

    /// Root of discovery for area pages (default `/Areas`)
    pub fn area_root_directory(&self) -> &str {
        &self.area_root_directory
    }

    pub fn set_root_directory(&mut self, value: impl Into<String>) -> Result<(), RouteError> {
        self.root_directory = validate_directory("root_directory", value.into())?;
        Ok(())
    }

    pub fn set_area_root_directory(&mut self, value: impl Into<String>) -> Result<(), RouteError> {
        self.area_root_directory = validate_directory("area_root_directory", value.into())?;
        Ok(())
    }

    /// Builder form of [`PagesOptions::set_root_directory`]
    pub fn with_root_directory(mut self, value: impl Into<String>) -> Result<Self, RouteError> {
        self.set_root_directory(value)?;
        Ok(self)
    }

    /// Builder form of [`PagesOptions::set_area_root_directory`]
    pub fn with_area_root_directory(mut self, value: impl Into<String>) -> Result<Self, RouteError> {
        self.set_area_root_directory(value)?;
        Ok(self)
    }

    pub fn with_disable_areas(mut self, disable: bool) -> Self {
        self.disable_areas = disable;
        self
    }

    /// Root directory segment expected inside each area, e.g. `Pages`
    ///
    /// Leading and trailing `/` are trimmed from [`PagesOptions::root_directory`].
    pub fn pages_root_segment(&self) -> &str {
        self.root_directory.trim_matches('/')
    }
}

fn validate_directory(option: &'static str, value: String) -> Result<String, RouteError> {
    if value.is_empty() {
        return Err(RouteError::EmptyDirectory { option });
    }
    if !value.starts_with('/') {
        return Err(RouteError::NotRootRelative { option, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PagesOptions::default();
        assert_eq!(options.root_directory(), "/Pages");
        assert_eq!(options.area_root_directory(), "/Areas");
        assert!(!options.disable_areas);
        assert_eq!(options.pages_root_segment(), "Pages");
    }

    #[test]
    fn test_rejects_empty_directory() {
        let mut options = PagesOptions::default();
        let err = options.set_root_directory("").unwrap_err();
        assert!(matches!(err, RouteError::EmptyDirectory { option: "root_directory" }));
        assert_eq!(options.root_directory(), "/Pages");
    }

    #[test]
    fn test_rejects_relative_directory() {
        let mut options = PagesOptions::default();
        let err = options.set_area_root_directory("Areas").unwrap_err();
        assert!(matches!(err, RouteError::NotRootRelative { .. }));
        assert_eq!(options.area_root_directory(), "/Areas");
    }

    #[test]
    fn test_pages_root_segment_trims_slashes() {
        let options = PagesOptions::default()
            .with_root_directory("/Content/Pages/")
            .unwrap();
        assert_eq!(options.pages_root_segment(), "Content/Pages");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let options: PagesOptions = serde_json::from_str(r#"{ "disable_areas": true }"#).unwrap();
        assert_eq!(options.root_directory(), "/Pages");
        assert!(options.disable_areas);
    }

    #[test]
    fn test_deserialize_validates_directories() {
        let result = serde_json::from_str::<PagesOptions>(r#"{ "root_directory": "Pages" }"#);
        assert!(result.is_err());
    }
}
