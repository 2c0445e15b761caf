//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use robo_commerce::catalog::{CatalogueSource, StaticCatalogue};
use robo_commerce::Storefront;
use robo_data::HttpCatalogue;

use crate::commands::SourceArgs;
use crate::config::{ShopConfig, SourceKind, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Output handler.
    pub output: Output,
    /// Config file the configuration was read from, if any.
    pub config_file: Option<PathBuf>,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_file) = match config_path {
            Some(path) => (ShopConfig::load(path)?, Some(PathBuf::from(path))),
            None => match discover_config(&cwd, &output) {
                Some((path, config)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            output,
            config_file,
            cwd,
        })
    }

    /// Build the catalogue source from config, with command line overrides.
    pub fn catalogue_source(&self, overrides: &SourceArgs) -> Box<dyn CatalogueSource> {
        let kind = overrides.source.unwrap_or(self.config.catalogue.source);
        let currency = self.config.currency();

        match kind {
            SourceKind::Static => Box::new(StaticCatalogue::robotics_in(currency)),
            SourceKind::Http => {
                let endpoint = overrides
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| self.config.catalogue.endpoint.clone());
                Box::new(HttpCatalogue::new(endpoint).with_currency(currency))
            }
        }
    }

    /// Create a storefront session and load its catalogue.
    ///
    /// A failed load leaves the catalogue empty; a warning is printed and the
    /// session is still returned.
    pub async fn open_storefront(&self, overrides: &SourceArgs) -> Storefront {
        let source = self.catalogue_source(overrides);
        let mut store = Storefront::new(self.config.currency());

        let spinner = self
            .output
            .spinner(&format!("Loading catalogue from {}", source.describe()));
        let loaded = store.load_catalogue(source.as_ref()).await;
        spinner.finish_and_clear();

        if loaded {
            self.output.debug(&format!(
                "Loaded {} products from {}",
                store.catalogue.products().len(),
                source.describe()
            ));
        } else {
            self.output
                .warn(&format!("Could not load catalogue from {}", source.describe()));
        }

        store
    }

    /// Path of the config file `config init` writes.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_FILE_NAMES[0])
    }
}

/// Config files visible from `start`, nearest first.
pub fn config_candidates(start: &Path) -> Vec<PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .filter(|path| path.is_file())
        .collect()
}

/// Load the nearest config file that parses.
///
/// Files that fail to load are reported and skipped.
pub fn discover_config(start: &Path, output: &Output) -> Option<(PathBuf, ShopConfig)> {
    config_candidates(start)
        .into_iter()
        .find_map(|path| match ShopConfig::load(&path) {
            Ok(config) => Some((path, config)),
            Err(err) => {
                output.warn(&format!("Ignoring config file: {:#}", err));
                None
            }
        })
}
