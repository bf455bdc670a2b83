//! # Page Routes
//!
//! Derives routable URL templates from a tree of page template files.
//!
//! Given the files found under a pages root (default `/Pages`) and an areas
//! root (default `/Areas`), discovery produces one [`PageRouteModel`] per
//! page with:
//! - One or two [`Selector`]s (route template + link-generation flag)
//! - Route values (`page`, and `area` for area pages)
//!
//! ## Index Pages
//!
//! `Index.cshtml` pages answer on both `/Foo/Index` and `/Foo`, but outgoing
//! links are only generated for `/Foo`.
//!
//! ## Areas
//!
//! Area pages live under `/Areas/{area}/Pages/...` and are routed as
//! `/{area}/...` with an `area` route value.
//!
//! ## Example
//!
//! ```
//! use page_routes::{
//!     InMemoryProject, PageRouteModelPipeline, PagesOptions, ProjectPageRouteModelProvider,
//! };
//! use std::sync::Arc;
//!
//! let project = InMemoryProject::new()
//!     .with_file("/Pages/Index.cshtml", "@page")
//!     .with_file("/Pages/Users/Edit.cshtml", "@page \"{id:int}\"")
//!     .with_file("/Areas/Admin/Pages/Dashboard.cshtml", "@page");
//!
//! let pipeline = PageRouteModelPipeline::new().with_provider(ProjectPageRouteModelProvider::new(
//!     Arc::new(project),
//!     PagesOptions::default(),
//! ));
//!
//! let models = pipeline.discover().unwrap();
//! assert_eq!(models.len(), 3);
//! assert_eq!(models[1].selectors[0].template, "/Users/Edit/{id:int}");
//! assert_eq!(models[2].route_values.get("area"), Some("Admin"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod model;
mod options;
pub mod path;
pub mod project;
pub mod provider;
mod route_values;
pub mod selector;
pub mod template;

pub use error::RouteError;
pub use model::{PageRouteModel, Properties, Selector};
pub use options::PagesOptions;
pub use path::{parse_area_path, parse_area_path_strict, AreaPath, StrictAreaPath};
pub use project::{parse_page_directive, InMemoryProject, PageProject, ProjectItem};
pub use provider::{
    CompiledPage, CompiledPageRouteModelProvider, PageRouteModelPipeline,
    PageRouteModelProvider, PageRouteModelProviderContext, ProjectPageRouteModelProvider,
};
pub use route_values::RouteValues;
pub use selector::populate_selectors;
pub use template::{combine_templates, is_override_pattern};
