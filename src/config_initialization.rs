//! Configuration initialization and hierarchy management

use anyhow::{Context, Result};

use crate::adapters::{ProbeSettings, TomlConfigAdapter};
use crate::cli::Cli;

/// Resolve settings following precedence: CLI > Env > File > Defaults.
///
/// Clap already folds environment variables into the CLI values, so the
/// command line layer here covers both. An explicit `--config` that cannot
/// be read is an error; a missing default config file is not.
pub fn initialize_configuration_hierarchy(cli: &Cli) -> Result<ProbeSettings> {
    let adapter = TomlConfigAdapter::new();

    let file_settings = match &cli.config {
        Some(path) => adapter
            .load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => adapter
            .load_default()
            .context("Failed to load default configuration file")?
            .unwrap_or_default(),
    };

    let mut overrides = cli.probe_flags().to_settings();
    overrides.log_level = cli.log_level.clone();

    Ok(file_settings.overlay(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[mediaprobe]\nffprobe_path = \"/opt/ffprobe\"\nprobe_size = 64\nunit = true\nlog_level = \"info\""
        )
        .unwrap();
        let config = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "mediaprobe",
            "args",
            "--input",
            "a.mkv",
            "--probe-size",
            "128",
            "--config",
            config.as_str(),
            "--log-level",
            "trace",
        ])
        .unwrap();
        let settings = initialize_configuration_hierarchy(&cli).unwrap();

        assert_eq!(settings.ffprobe_path.as_deref(), Some("/opt/ffprobe"));
        assert_eq!(settings.probe_size, Some(128));
        assert_eq!(settings.unit, Some(true));
        assert_eq!(settings.log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_unreadable_explicit_config_fails() {
        let cli = Cli::try_parse_from([
            "mediaprobe",
            "args",
            "--input",
            "a.mkv",
            "--config",
            "/no/such/dir/mediaprobe.toml",
        ])
        .unwrap();
        assert!(initialize_configuration_hierarchy(&cli).is_err());
    }
}
