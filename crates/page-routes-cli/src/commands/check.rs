use anyhow::{ensure, Result};
use colored::Colorize;
use page_routes::{parse_area_path, parse_area_path_strict};

use crate::config::Config;

/// Shows how both area parsers decompose `path`
pub fn execute(config: &Config, path: &str) -> Result<()> {
    ensure!(
        path.starts_with('/'),
        "area paths must start with '/', e.g. /Products/Pages/Home.cshtml (got {:?})",
        path
    );

    println!("{} {}", "Path:".bold(), path);
    println!();

    println!(
        "{}",
        format!("Configured root ({}):", config.pages.root_directory()).cyan()
    );
    match parse_area_path(&config.pages, path) {
        Some(area) => {
            println!("  area:             {}", area.area_name);
            println!("  view engine path: {}", area.view_engine_path);
            println!("  page route:       {}", area.page_route);
        }
        None => println!("  {}", "unsupported area path".yellow()),
    }

    println!();
    println!("{}", "Project discovery (Pages):".cyan());
    match parse_area_path_strict(path) {
        Some(area) => {
            println!("  area:             {}", area.area_name);
            println!("  view engine path: {}", area.view_engine_path);
        }
        None => println!("  {}", "unsupported area path".yellow()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_path() {
        let err = execute(&Config::default(), "Products/Pages/Home.cshtml").unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_accepts_unsupported_layout() {
        assert!(execute(&Config::default(), "/Products/Views/Home.cshtml").is_ok());
    }
}
