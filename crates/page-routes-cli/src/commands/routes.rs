use anyhow::{Context, Result};
use colored::Colorize;
use page_routes::{
    CompiledPageRouteModelProvider, PageRouteModel, PageRouteModelPipeline,
    ProjectPageRouteModelProvider,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::fs_project::FileSystemProject;

/// Flags of the `routes` command
pub struct RoutesOptions {
    pub root: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub disable_areas: bool,
    pub json: bool,
}

pub fn execute(mut config: Config, options: RoutesOptions) -> Result<()> {
    if let Some(root) = options.root {
        config.project.root = root;
    }
    if options.disable_areas {
        config.pages.disable_areas = true;
    }

    let models = discover(&config, options.manifest.as_deref())?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    print_table(&models);
    Ok(())
}

/// Runs the compiled manifest (if any) and project providers
pub fn discover(config: &Config, manifest: Option<&Path>) -> Result<Vec<PageRouteModel>> {
    let project = FileSystemProject::new(&config.project.root, &config.project.extension);
    let mut pipeline = PageRouteModelPipeline::new().with_provider(
        ProjectPageRouteModelProvider::new(Arc::new(project), config.pages.clone()),
    );

    if let Some(path) = manifest {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page manifest: {:?}", path))?;
        let provider = CompiledPageRouteModelProvider::from_json(&content, config.pages.clone())
            .with_context(|| format!("Failed to load page manifest: {:?}", path))?;
        pipeline.add_provider(Box::new(provider));
    }

    let models = pipeline
        .discover()
        .context("Failed to discover page routes")?;
    Ok(models)
}

fn print_table(models: &[PageRouteModel]) {
    if models.is_empty() {
        println!("{}", "No pages found".yellow());
        return;
    }

    println!("{}", format!("Discovered {} pages", models.len()).green().bold());
    println!();

    for model in models {
        let area = model
            .area()
            .map(|area| format!(" [area: {}]", area))
            .unwrap_or_default();
        println!("{}{}", model.view_engine_path().cyan(), area.magenta());
        println!("  {}", model.relative_path().dimmed());

        for selector in &model.selectors {
            let template = if selector.template.is_empty() {
                "/".to_string()
            } else {
                selector.template.clone()
            };

            if selector.suppress_link_generation {
                println!("  {} {}", template, "(incoming only)".dimmed());
            } else {
                println!("  {}", template.bold());
            }
        }
    }
}
