use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{PcError, Result};
use crate::navbar::NavLink;
use crate::theme::ThemePreference;

/// Site chrome settings from site.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub default_theme: ThemePreference,
    #[serde(default)]
    pub links: Vec<NavLink>,
    #[serde(default)]
    pub generated_footer: bool,
}

impl SiteConfig {
    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PcError::Config("title must not be empty".into()));
        }
        let mut seen = HashSet::new();
        for link in &self.links {
            if !seen.insert(link.href.as_str()) {
                return Err(PcError::Config(format!("duplicate link href: {}", link.href)));
            }
        }
        Ok(())
    }
}

/// Load site settings from a site.toml file.
pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PcError::Io(format!("failed to read {}: {e}", path.display())))?;
    let config = parse_site_config(&content)?;
    debug!(path = %path.display(), links = config.links.len(), "loaded site config");
    Ok(config)
}

/// Parse and validate site settings from a TOML string.
pub fn parse_site_config(toml_str: &str) -> Result<SiteConfig> {
    let config: SiteConfig =
        toml::from_str(toml_str).map_err(|e| PcError::Config(format!("bad site.toml: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// The site.toml shipped in data/.
pub fn load_bundled_site_config() -> Result<SiteConfig> {
    let toml_str = include_str!("../../../data/site.toml");
    parse_site_config(toml_str)
}
