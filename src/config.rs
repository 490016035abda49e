use anyhow::{Context, Result};
use serde::Deserialize;

use crate::game::{CheckOrder, RestartScope, RuleSet, Variant};

/// Optional config file read from the working directory (`word-scramble.toml`)
pub const CONFIG_FILE: &str = "word-scramble";
/// Prefix for environment overrides, e.g. `WORD_SCRAMBLE_VARIANT=rescramble`
pub const ENV_PREFIX: &str = "WORD_SCRAMBLE";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The `start` word list: one candidate root word per line
    pub word_list_path: String,
    pub dictionary_path: String,
    pub variant: Variant,
    pub min_word_length: Option<usize>,
    pub check_order: Option<CheckOrder>,
    pub restart_scope: Option<RestartScope>,
}

impl Config {
    /// Layer defaults, the optional config file and `WORD_SCRAMBLE_*`
    /// environment variables (later sources win).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Self::defaults()?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(config::Config::builder()
            .set_default("word_list_path", "./start.txt")?
            .set_default("dictionary_path", "/usr/share/dict/words")?
            .set_default("variant", "shared")?)
    }

    /// Rule set of the chosen variant with any individual overrides applied
    pub fn rules(&self) -> RuleSet {
        let mut rules = RuleSet::for_variant(self.variant);

        if let Some(min_word_length) = self.min_word_length {
            rules = rules.with_min_word_length(min_word_length);
        }
        if let Some(check_order) = self.check_order {
            rules = rules.with_check_order(check_order);
        }
        if let Some(restart_scope) = self.restart_scope {
            rules = rules.with_restart_scope(restart_scope);
        }

        rules
    }
}
