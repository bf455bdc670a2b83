use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{PageRouteModelProvider, PageRouteModelProviderContext};
use crate::path::{file_name, parse_area_path, relative_to, strip_extension};
use crate::{populate_selectors, PageRouteModel, PagesOptions, RouteError};

/// A page recorded in a precompiled page manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledPage {
    /// Application-relative path, e.g. `/Pages/Users/Edit.cshtml`
    pub relative_path: String,
    /// `@page` route template; `None` for compiled views that are not pages
    #[serde(default)]
    pub route_template: Option<String>,
}

impl CompiledPage {
    pub fn new(relative_path: impl Into<String>, route_template: Option<&str>) -> Self {
        Self {
            relative_path: relative_path.into(),
            route_template: route_template.map(str::to_string),
        }
    }
}

/// Registers pages from a precompiled manifest
///
/// Runs before project discovery so precompiled pages win over live files
/// with the same identity. Area pages are decomposed with
/// [`parse_area_path`], which honors the configured root directory.
///
/// # Examples
///
/// ```
/// use page_routes::{CompiledPageRouteModelProvider, PageRouteModelPipeline, PagesOptions};
///
/// let manifest = r#"[
///     { "relative_path": "/Pages/Index.cshtml", "route_template": "" },
///     { "relative_path": "/Areas/Shop/Pages/Cart.cshtml", "route_template": "{id?}" }
/// ]"#;
///
/// let provider = CompiledPageRouteModelProvider::from_json(manifest, PagesOptions::default()).unwrap();
/// let models = PageRouteModelPipeline::new().with_provider(provider).discover().unwrap();
///
/// assert_eq!(models[0].selectors[1].template, "");
/// assert_eq!(models[1].view_engine_path(), "/Cart");
/// assert_eq!(models[1].selectors[0].template, "/Shop/Cart/{id?}");
/// ```
pub struct CompiledPageRouteModelProvider {
    pages: Vec<CompiledPage>,
    options: PagesOptions,
}

impl CompiledPageRouteModelProvider {
    pub const ORDER: i32 = -1000;

    pub fn new(pages: Vec<CompiledPage>, options: PagesOptions) -> Self {
        Self { pages, options }
    }

    /// Builds the provider from a JSON array of [`CompiledPage`] entries
    pub fn from_json(manifest: &str, options: PagesOptions) -> Result<Self, RouteError> {
        let pages: Vec<CompiledPage> = serde_json::from_str(manifest)?;
        Ok(Self::new(pages, options))
    }

    /// Model and page route for a manifest entry, or `None` to skip it
    fn route_model(&self, page: &CompiledPage) -> Option<(PageRouteModel, String)> {
        let relative_path = page.relative_path.as_str();

        if let Some(file_path) = relative_to(relative_path, self.options.root_directory()) {
            let view_engine_path = strip_extension(file_path);
            let model = PageRouteModel::new(relative_path, view_engine_path);
            return Some((model, view_engine_path.to_string()));
        }

        if self.options.disable_areas {
            return None;
        }

        let file_path = relative_to(relative_path, self.options.area_root_directory())?;
        let area = parse_area_path(&self.options, file_path)?;

        let mut model = PageRouteModel::new(relative_path, area.view_engine_path);
        model.route_values.insert("area", area.area_name);
        Some((model, area.page_route))
    }
}

impl PageRouteModelProvider for CompiledPageRouteModelProvider {
    fn order(&self) -> i32 {
        Self::ORDER
    }

    fn name(&self) -> &'static str {
        "compiled"
    }

    fn on_providers_executing(
        &self,
        context: &mut PageRouteModelProviderContext,
    ) -> Result<(), RouteError> {
        for page in &self.pages {
            let Some(route_template) = page.route_template.as_deref() else {
                continue;
            };

            if file_name(&page.relative_path).starts_with('_') {
                continue;
            }

            let Some((mut model, page_route)) = self.route_model(page) else {
                trace!(path = %page.relative_path, "compiled page outside the page roots");
                continue;
            };

            if context.is_registered(model.view_engine_path(), model.relative_path()) {
                continue;
            }

            populate_selectors(&mut model, &page_route, route_template)?;
            context.add(model);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Selector;
    use pretty_assertions::assert_eq;

    fn run(pages: Vec<CompiledPage>, options: PagesOptions) -> Vec<PageRouteModel> {
        let provider = CompiledPageRouteModelProvider::new(pages, options);
        let mut context = PageRouteModelProviderContext::new();
        provider.on_providers_executing(&mut context).unwrap();
        context.into_route_models()
    }

    #[test]
    fn test_registers_root_and_area_pages() {
        let models = run(
            vec![
                CompiledPage::new("/Pages/Users/Index.cshtml", Some("")),
                CompiledPage::new("/Areas/Products/Pages/Manage/Home.cshtml", Some("{id}")),
            ],
            PagesOptions::default(),
        );

        assert_eq!(models[0].view_engine_path(), "/Users/Index");
        assert_eq!(
            models[0].selectors,
            vec![
                Selector::new("/Users/Index").with_suppress_link_generation(true),
                Selector::new("/Users"),
            ]
        );

        assert_eq!(models[1].view_engine_path(), "/Manage/Home");
        assert_eq!(models[1].area(), Some("Products"));
        assert_eq!(models[1].route_values.get("page"), Some("/Manage/Home"));
        assert_eq!(models[1].selectors, vec![Selector::new("/Products/Manage/Home/{id}")]);
    }

    #[test]
    fn test_skips_views_partials_and_unknown_roots() {
        let models = run(
            vec![
                CompiledPage::new("/Pages/Shared/Card.cshtml", None),
                CompiledPage::new("/Pages/_Layout.cshtml", Some("")),
                CompiledPage::new("/Views/Home/Index.cshtml", Some("")),
                CompiledPage::new("/Areas/Products/Views/Home.cshtml", Some("")),
            ],
            PagesOptions::default(),
        );

        assert!(models.is_empty());
    }

    #[test]
    fn test_area_pages_follow_configured_root() {
        let options = PagesOptions::default()
            .with_root_directory("/Content")
            .unwrap();
        let models = run(
            vec![
                CompiledPage::new("/Areas/Shop/Content/Cart.cshtml", Some("")),
                CompiledPage::new("/Areas/Shop/Pages/Cart.cshtml", Some("")),
            ],
            options,
        );

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].relative_path(), "/Areas/Shop/Content/Cart.cshtml");
        assert_eq!(models[0].selectors[0].template, "/Shop/Cart");
    }

    #[test]
    fn test_duplicate_manifest_entries_register_once() {
        let models = run(
            vec![
                CompiledPage::new("/Pages/About.cshtml", Some("")),
                CompiledPage::new("/Pages/About.cshtml", Some("{id?}")),
            ],
            PagesOptions::default(),
        );

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].selectors, vec![Selector::new("/About")]);
    }

    #[test]
    fn test_from_json_rejects_malformed_manifest() {
        let result = CompiledPageRouteModelProvider::from_json("{", PagesOptions::default());
        assert!(matches!(result, Err(RouteError::Manifest(_))));
    }
}
