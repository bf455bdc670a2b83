use std::sync::Arc;

use tracing::trace;

use super::{PageRouteModelProvider, PageRouteModelProviderContext};
use crate::path::parse_area_path_strict;
use crate::project::{PageProject, ProjectItem};
use crate::{populate_selectors, PageRouteModel, PagesOptions, RouteError};

/// Discovers pages from a live project
///
/// Runs two passes: pages under [`PagesOptions::root_directory`], then (unless
/// areas are disabled) area pages under [`PagesOptions::area_root_directory`].
/// Partials, files without an `@page` directive and pages an earlier provider
/// already registered are skipped.
pub struct ProjectPageRouteModelProvider {
    project: Arc<dyn PageProject>,
    options: PagesOptions,
}

impl ProjectPageRouteModelProvider {
    /// Runs after [`CompiledPageRouteModelProvider`](super::CompiledPageRouteModelProvider)
    pub const ORDER: i32 = -1000 + 10;

    pub fn new(project: Arc<dyn PageProject>, options: PagesOptions) -> Self {
        Self { project, options }
    }

    /// Route template for a routable item, or `None` to skip it
    fn route_template(&self, item: &ProjectItem) -> Option<String> {
        if item.is_partial() {
            trace!(path = %item.combined_path(), "skipping partial");
            return None;
        }

        let template = self.project.page_directive(item);
        if template.is_none() {
            trace!(path = %item.combined_path(), "skipping file without @page directive");
        }
        template
    }

    fn register(
        context: &mut PageRouteModelProviderContext,
        mut model: PageRouteModel,
        page_route: &str,
        route_template: &str,
    ) -> Result<(), RouteError> {
        if context.is_registered(model.view_engine_path(), model.relative_path()) {
            trace!(
                path = model.relative_path(),
                "page already registered by an earlier provider"
            );
            return Ok(());
        }

        populate_selectors(&mut model, page_route, route_template)?;
        context.add(model);
        Ok(())
    }

    fn discover_pages(&self, context: &mut PageRouteModelProviderContext) -> Result<(), RouteError> {
        for item in self.project.enumerate_items(self.options.root_directory()) {
            let Some(route_template) = self.route_template(&item) else {
                continue;
            };

            let view_engine_path = item.file_path_without_extension().to_string();
            let model = PageRouteModel::new(item.combined_path(), view_engine_path.as_str());
            Self::register(context, model, &view_engine_path, &route_template)?;
        }

        Ok(())
    }

    fn discover_areas(&self, context: &mut PageRouteModelProviderContext) -> Result<(), RouteError> {
        for item in self.project.enumerate_items(self.options.area_root_directory()) {
            let Some(route_template) = self.route_template(&item) else {
                continue;
            };

            let Some(area) = parse_area_path_strict(&item.file_path) else {
                continue;
            };

            let mut model = PageRouteModel::new(item.combined_path(), area.view_engine_path.as_str());
            model.route_values.insert("area", area.area_name);
            Self::register(context, model, &area.view_engine_path, &route_template)?;
        }

        Ok(())
    }
}

impl PageRouteModelProvider for ProjectPageRouteModelProvider {
    fn order(&self) -> i32 {
        Self::ORDER
    }

    fn name(&self) -> &'static str {
        "project"
    }

    fn on_providers_executing(
        &self,
        context: &mut PageRouteModelProviderContext,
    ) -> Result<(), RouteError> {
        self.discover_pages(context)?;

        if !self.options.disable_areas {
            self.discover_areas(context)?;
        }

        Ok(())
    }
}
