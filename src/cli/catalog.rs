//! Catalog command: lists bead types and color tokens.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{BeadCatalog, BeadType, GeometryClass};
use clap::Args;
use serde::Serialize;

/// List bead types and colors of the active catalog
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TypeInfo {
    name: BeadType,
    width: f32,
    geometry: GeometryClass,
}

#[derive(Debug, Serialize)]
struct ColorInfo {
    token: String,
    hex: String,
    luminous: bool,
}

#[derive(Debug, Serialize)]
struct CatalogResponse {
    types: Vec<TypeInfo>,
    colors: Vec<ColorInfo>,
    fallback_color: String,
}

impl CatalogResponse {
    fn from_catalog(catalog: &BeadCatalog) -> Self {
        let types = BeadType::ALL
            .into_iter()
            .map(|kind| TypeInfo {
                name: kind,
                width: catalog.width_of(kind),
                geometry: catalog.geometry_of(kind),
            })
            .collect();

        let colors = catalog
            .colors
            .iter()
            .map(|(token, entry)| ColorInfo {
                token: token.clone(),
                hex: entry.hex.to_hex(),
                luminous: entry.luminous,
            })
            .collect();

        Self {
            types,
            colors,
            fallback_color: catalog.fallback_color.to_hex(),
        }
    }
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Config::load()
            .and_then(|config| config.catalog())
            .map_err(|e| CliError::io(format!("Failed to load bead catalog: {e:#}")))?;

        let response = CatalogResponse::from_catalog(&catalog);

        if self.json {
            print_json(&response)?;
        } else {
            println!("Bead types:");
            for info in &response.types {
                println!(
                    "  {:<8} width {:.2}  ({:?})",
                    info.name.name(),
                    info.width,
                    info.geometry
                );
            }

            println!("\nColors:");
            for info in &response.colors {
                let glow = if info.luminous { "  glow" } else { "" };
                println!("  {:<12} {}{}", info.token, info.hex, glow);
            }
            println!("\nUnknown colors render as {}", response.fallback_color);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_lists_every_type() {
        let catalog = BeadCatalog::load().unwrap();
        let response = CatalogResponse::from_catalog(&catalog);
        assert_eq!(response.types.len(), BeadType::ALL.len());
        assert!(response.colors.iter().any(|c| c.token == "white"));
        assert!(response
            .colors
            .iter()
            .any(|c| c.token == "neon-green" && c.luminous));
        assert_eq!(response.fallback_color, "#808080");
    }
}
