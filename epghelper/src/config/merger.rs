//! Configuration merging and precedence handling.

use crate::config::schema::{Config, ConnectionConfig};

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use epghelper::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let mut result = Config { base_dir: Some(PathBuf::from("/low")), ..Default::default() };
/// let high = Config { base_dir: Some(PathBuf::from("/high")), ..Default::default() };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.base_dir, Some(PathBuf::from("/high")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge(layers: &[Config]) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Reserved names: accumulated (union, first occurrence wins the order)
    /// - Connection: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.base_dir.is_some() {
            target.base_dir.clone_from(&source.base_dir);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref names) = source.reserved_names {
            let merged = target.reserved_names.get_or_insert_with(Vec::new);
            for name in names {
                if !merged.contains(name) {
                    merged.push(name.clone());
                }
            }
        }

        if let Some(ref connection) = source.connection {
            let merged = target
                .connection
                .get_or_insert_with(ConnectionConfig::default);
            Self::merge_connection(merged, connection);
        }
    }

    fn merge_connection(target: &mut ConnectionConfig, source: &ConnectionConfig) {
        if source.host.is_some() {
            target.host.clone_from(&source.host);
        }
        if source.username.is_some() {
            target.username.clone_from(&source.username);
        }
        if source.password.is_some() {
            target.password.clone_from(&source.password);
        }
        if source.database.is_some() {
            target.database.clone_from(&source.database);
        }
        if source.client.is_some() {
            target.client.clone_from(&source.client);
        }
    }
}
