//! Ordered route model provider pipeline
//!
//! Providers run in ascending [`PageRouteModelProvider::order`] against one
//! shared [`PageRouteModelProviderContext`]. Each provider sees everything
//! earlier providers registered and is expected to skip pages already
//! present, so the first registrant of a page wins.

use tracing::debug;

use crate::{PageRouteModel, RouteError};

mod compiled;
mod project;

pub use compiled::{CompiledPage, CompiledPageRouteModelProvider};
pub use project::ProjectPageRouteModelProvider;

/// Shared accumulator passed to every provider
#[derive(Debug, Default)]
pub struct PageRouteModelProviderContext {
    route_models: Vec<PageRouteModel>,
}

impl PageRouteModelProviderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Models registered so far, in registration order
    pub fn route_models(&self) -> &[PageRouteModel] {
        &self.route_models
    }

    /// Mutable access for conventions run in `on_providers_executed`
    pub fn route_models_mut(&mut self) -> &mut [PageRouteModel] {
        &mut self.route_models
    }

    /// Whether a page with the same view engine path and relative path
    /// (compared case-insensitively) is already registered
    pub fn is_registered(&self, view_engine_path: &str, relative_path: &str) -> bool {
        self.route_models
            .iter()
            .any(|model| model.is_same_page(view_engine_path, relative_path))
    }

    /// Appends a model unless the same page is already registered
    ///
    /// Returns `false` when the model was dropped as a duplicate.
    pub fn add(&mut self, model: PageRouteModel) -> bool {
        if self.is_registered(model.view_engine_path(), model.relative_path()) {
            return false;
        }
        self.route_models.push(model);
        true
    }

    pub fn len(&self) -> usize {
        self.route_models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route_models.is_empty()
    }

    pub fn into_route_models(self) -> Vec<PageRouteModel> {
        self.route_models
    }
}

/// A stage of route model discovery
pub trait PageRouteModelProvider {
    /// Lower orders run first
    fn order(&self) -> i32;

    /// Short name used in diagnostics
    fn name(&self) -> &'static str;

    /// Registers route models into the context
    fn on_providers_executing(
        &self,
        context: &mut PageRouteModelProviderContext,
    ) -> Result<(), RouteError>;

    /// Runs after every provider has executed, in descending order
    fn on_providers_executed(
        &self,
        _context: &mut PageRouteModelProviderContext,
    ) -> Result<(), RouteError> {
        Ok(())
    }
}

/// Runs providers in order and collects their route models
///
/// # Examples
///
/// ```
/// use page_routes::{InMemoryProject, PageRouteModelPipeline, PagesOptions, ProjectPageRouteModelProvider};
/// use std::sync::Arc;
///
/// let project = Arc::new(InMemoryProject::new().with_file("/Pages/About.cshtml", "@page"));
/// let pipeline = PageRouteModelPipeline::new()
///     .with_provider(ProjectPageRouteModelProvider::new(project, PagesOptions::default()));
///
/// let models = pipeline.discover().unwrap();
/// assert_eq!(models[0].selectors[0].template, "/About");
/// ```
#[derive(Default)]
pub struct PageRouteModelPipeline {
    providers: Vec<Box<dyn PageRouteModelProvider>>,
}

impl PageRouteModelPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: impl PageRouteModelProvider + 'static) -> Self {
        self.add_provider(Box::new(provider));
        self
    }

    /// Adds a provider, keeping providers sorted by order
    ///
    /// Providers with equal order keep their insertion order.
    pub fn add_provider(&mut self, provider: Box<dyn PageRouteModelProvider>) {
        self.providers.push(provider);
        self.providers.sort_by_key(|provider| provider.order());
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Runs every provider against a fresh context
    ///
    /// # Errors
    ///
    /// The first provider error aborts discovery and is returned.
    pub fn discover(&self) -> Result<Vec<PageRouteModel>, RouteError> {
        let mut context = PageRouteModelProviderContext::new();
        self.discover_into(&mut context)?;
        Ok(context.into_route_models())
    }

    /// Runs every provider against an existing context
    pub fn discover_into(&self, context: &mut PageRouteModelProviderContext) -> Result<(), RouteError> {
        for provider in &self.providers {
            let before = context.len();
            provider.on_providers_executing(context)?;
            debug!(
                provider = provider.name(),
                order = provider.order(),
                added = context.len() - before,
                "route model provider executed"
            );
        }

        for provider in self.providers.iter().rev() {
            provider.on_providers_executed(context)?;
        }

        Ok(())
    }
}
