use crate::Config;
use anyhow::{bail, Context, Result};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const CONFIG_NAME: &str = "config.toml";

const COMMENT_HEADER: &str = "\
# tiletools configuration
#
# log_level           tracing filter directive, e.g. \"info\" or \"tiletools_core=debug\"
# flavor              \"i3\" or \"sway\"
# messenger           program used to talk to the window manager (default: i3-msg / swaymsg)
# socket              socket path (default: $I3SOCK / $SWAYSOCK)
# slots_per_output    workspace numbers owned by each output, left to right

";

/// # Errors
///
/// Errors if the XDG base directories cannot be determined or created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tiletools")?.place_config_file(CONFIG_NAME)?;
    Ok(path)
}

/// Loads `path`, or the default config file. A missing default file is created with the
/// default values.
///
/// # Errors
///
/// Errors if the file cannot be read or parsed, if an explicit `path` does not exist, or if
/// the default file cannot be written.
pub fn load_config_file(path: Option<&Path>) -> Result<Config> {
    tracing::debug!("Loading config file");

    let config_file = match path {
        Some(path) if !path.exists() => bail!("Config file {} not found", path.display()),
        Some(path) => path.to_owned(),
        None => get_default_path()?,
    };

    if config_file.exists() {
        tracing::debug!("Config file '{}' found.", config_file.display());
        let contents = fs::read_to_string(&config_file)
            .with_context(|| format!("Couldn't read {}", config_file.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Couldn't parse {}", config_file.display()))?;
        Ok(config)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(&config_file, &config)?;
        Ok(config)
    }
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(path: &Path, config: &Config) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;
    let mut file = File::create(path)?;
    file.write_all(COMMENT_HEADER.as_bytes())?;
    file.write_all(toml.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiletools_core::Flavor;

    #[test]
    fn written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_NAME);
        let config = Config {
            flavor: Flavor::Sway,
            socket: Some("$XDG_RUNTIME_DIR/sway.sock".to_owned()),
            slots_per_output: 5,
            ..Config::default()
        };
        write_to_file(&path, &config).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# tiletools configuration"));
        assert_eq!(load_config_file(Some(&path)).unwrap(), config);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_NAME);
        fs::write(&path, "flavor = \"sway\"\nevent_timeout_secs = 3\n").unwrap();

        let config = load_config_file(Some(&path)).unwrap();
        assert_eq!(config.flavor, Flavor::Sway);
        assert_eq!(config.event_timeout_secs, 3);
        assert_eq!(config.slots_per_output, 10);
        assert!(config.auto_back_and_forth);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_file(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_NAME);
        fs::write(&path, "slots_per_output = \"ten\"\n").unwrap();
        assert!(load_config_file(Some(&path)).is_err());
    }
}
