use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::RouteValues;

/// One candidate URL template for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    /// Combined route template, e.g. "/Users/Edit/{id:int}"
    pub template: String,
    /// When true the selector matches incoming requests only and is never
    /// chosen for outgoing link generation
    pub suppress_link_generation: bool,
}

impl Selector {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            suppress_link_generation: false,
        }
    }

    pub fn with_suppress_link_generation(mut self, suppress: bool) -> Self {
        self.suppress_link_generation = suppress;
        self
    }
}

/// Extension metadata attached to a page route model
///
/// Tags are plain strings and values are opaque JSON, so conventions can
/// stash data without this crate knowing its shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    entries: BTreeMap<String, Value>,
}

impl Properties {
    pub fn insert(&mut self, tag: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(tag.into(), value.into())
    }

    pub fn get(&self, tag: &str) -> Option<&Value> {
        self.entries.get(tag)
    }

    pub fn remove(&mut self, tag: &str) -> Option<Value> {
        self.entries.remove(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Routing metadata for one discoverable page
///
/// `relative_path` and `view_engine_path` are fixed at construction. The
/// first entry in `selectors` is the primary route; any further selectors
/// are incoming-only alternatives or link-generation targets.
///
/// Cloning produces fully independent selector, route value and property
/// collections.
///
/// # Examples
///
/// ```
/// use page_routes::{PageRouteModel, Selector};
///
/// let original = PageRouteModel::new("/Pages/About.cshtml", "/About");
/// let mut copy = original.clone();
/// copy.selectors.push(Selector::new("/About"));
///
/// assert!(original.selectors.is_empty());
/// assert_eq!(copy.selectors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRouteModel {
    relative_path: String,
    view_engine_path: String,
    pub route_values: RouteValues,
    pub selectors: Vec<Selector>,
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl PageRouteModel {
    /// Creates a model for the page at `relative_path` (application-root
    /// relative, including extension) identified by `view_engine_path`
    ///
    /// # Panics
    ///
    /// Panics if either path is empty.
    pub fn new(relative_path: impl Into<String>, view_engine_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        let view_engine_path = view_engine_path.into();
        assert!(!relative_path.is_empty(), "relative_path must not be empty");
        assert!(!view_engine_path.is_empty(), "view_engine_path must not be empty");

        Self {
            relative_path,
            view_engine_path,
            route_values: RouteValues::new(),
            selectors: Vec::new(),
            properties: Properties::default(),
        }
    }

    /// Full path to the source file from the application root
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Path used to locate the page's compiled template, without extension
    pub fn view_engine_path(&self) -> &str {
        &self.view_engine_path
    }

    /// The area this page belongs to, if any
    pub fn area(&self) -> Option<&str> {
        self.route_values.get("area")
    }

    /// Case-insensitive identity check used for duplicate suppression
    pub fn is_same_page(&self, view_engine_path: &str, relative_path: &str) -> bool {
        self.view_engine_path.eq_ignore_ascii_case(view_engine_path)
            && self.relative_path.eq_ignore_ascii_case(relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_does_not_alias_selectors_or_route_values() {
        let mut original = PageRouteModel::new("/Pages/Index.cshtml", "/Index");
        original.selectors.push(Selector::new("/Index").with_suppress_link_generation(true));
        original.route_values.insert("page", "/Index");

        let mut copy = original.clone();
        copy.selectors[0].template = "/Changed".to_string();
        copy.selectors.push(Selector::new(""));
        copy.route_values.insert("area", "Admin");
        copy.properties.insert("title", "Home");

        assert_eq!(original.selectors.len(), 1);
        assert_eq!(original.selectors[0].template, "/Index");
        assert!(original.selectors[0].suppress_link_generation);
        assert_eq!(original.route_values.len(), 1);
        assert_eq!(original.area(), None);
        assert!(original.properties.is_empty());
    }

    #[test]
    fn test_is_same_page_ignores_case() {
        let model = PageRouteModel::new("/Pages/Users/Edit.cshtml", "/Users/Edit");
        assert!(model.is_same_page("/users/edit", "/pages/users/edit.CSHTML"));
        assert!(!model.is_same_page("/Users/Edit", "/Pages/Users/Edit2.cshtml"));
        assert!(!model.is_same_page("/Users", "/Pages/Users/Edit.cshtml"));
    }

    #[test]
    #[should_panic(expected = "view_engine_path must not be empty")]
    fn test_empty_view_engine_path_panics() {
        PageRouteModel::new("/Pages/Index.cshtml", "");
    }

    #[test]
    fn test_properties_hold_opaque_values() {
        let mut model = PageRouteModel::new("/Pages/About.cshtml", "/About");
        model.properties.insert("order", 3);
        model.properties.insert("title", "About us");
        assert_eq!(model.properties.get("order"), Some(&Value::from(3)));
        assert_eq!(model.properties.len(), 2);
        assert_eq!(model.properties.remove("order"), Some(Value::from(3)));
    }
}
