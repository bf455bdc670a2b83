//! Selector synthesis for page route models

use crate::path::{file_name, parent_route};
use crate::template::{combine_templates, is_override_pattern};
use crate::{PageRouteModel, RouteError, Selector};

const INDEX_FILE_NAME: &str = "Index.cshtml";

/// Populates a model's `page` route value and selectors
///
/// `page_route` is the file-based route of the page and `route_template` the
/// fragment declared by its `@page` directive (empty when none).
///
/// The primary selector is `page_route` combined with `route_template`. For
/// `Index.cshtml` pages the primary selector stops generating links and a
/// second selector built from the parent directory's route takes over
/// outgoing link generation.
///
/// # Errors
///
/// Returns [`RouteError::OverrideTemplate`] when `route_template` is an
/// override pattern. The model is left untouched in that case.
///
/// # Examples
///
/// ```
/// use page_routes::{populate_selectors, PageRouteModel};
///
/// let mut model = PageRouteModel::new("/Pages/Users/Index.cshtml", "/Users/Index");
/// populate_selectors(&mut model, "/Users/Index", "").unwrap();
///
/// assert_eq!(model.selectors.len(), 2);
/// assert_eq!(model.selectors[0].template, "/Users/Index");
/// assert!(model.selectors[0].suppress_link_generation);
/// assert_eq!(model.selectors[1].template, "/Users");
/// assert_eq!(model.route_values.get("page"), Some("/Users/Index"));
/// ```
pub fn populate_selectors(
    model: &mut PageRouteModel,
    page_route: &str,
    route_template: &str,
) -> Result<(), RouteError> {
    if is_override_pattern(route_template) {
        return Err(RouteError::OverrideTemplate {
            relative_path: model.relative_path().to_string(),
        });
    }

    let page = model.view_engine_path().to_string();
    model.route_values.insert("page", page);

    let is_index = file_name(model.relative_path()).eq_ignore_ascii_case(INDEX_FILE_NAME);

    // Index pages accept /Foo/Index but links are generated for /Foo
    model.selectors.push(
        Selector::new(combine_templates(page_route, route_template))
            .with_suppress_link_generation(is_index),
    );

    if is_index {
        model.selectors.push(Selector::new(combine_templates(
            parent_route(page_route),
            route_template,
        )));
    }

    Ok(())
}
