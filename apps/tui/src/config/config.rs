use crate::domain::CountryCityTable;
use dotenv::dotenv;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read countries file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse countries file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("countries file {} defines no countries", path.display())]
    Empty { path: PathBuf },
}

/// Initializes the application configuration.
///
/// Loads `.env`, then resolves the country/city table: the
/// `REGFORM_COUNTRIES` environment variable may point at a JSON file of the
/// shape `{"Country": ["City", ...]}`; without it the built-in table is
/// used. A set-but-broken override is a startup error, not a fallback.
pub fn init_app_config() -> Result<CountryCityTable, ConfigError> {
    // Load environment variables from .env file
    dotenv().ok();

    match env::var("REGFORM_COUNTRIES") {
        Ok(path) => load_country_table(Path::new(&path)),
        Err(_) => Ok(CountryCityTable::builtin()),
    }
}

/// Reads a country/city table from a JSON file.
pub fn load_country_table(path: &Path) -> Result<CountryCityTable, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let map: BTreeMap<String, Vec<String>> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if map.is_empty() {
        return Err(ConfigError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(CountryCityTable::from_map(map))
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| value != "0")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("reg-form-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("scratch file should be writable");
        path
    }

    #[test]
    fn loads_a_custom_table_from_json() {
        let path = scratch_file(
            "countries.json",
            r#"{"Japan": ["Tokyo", "Osaka"], "Brazil": ["Rio de Janeiro"]}"#,
        );

        let table = load_country_table(&path).expect("table should load");
        assert_eq!(table.countries(), vec!["Brazil", "Japan"]);
        assert_eq!(table.cities("Japan"), ["Tokyo", "Osaka"]);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let path = scratch_file("broken.json", "{not json");
        let err = load_country_table(&path).expect_err("parse should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn empty_table_is_rejected() {
        let path = scratch_file("empty.json", "{}");
        let err = load_country_table(&path).expect_err("empty table should fail");
        assert!(matches!(err, ConfigError::Empty { .. }));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = env::temp_dir().join("reg-form-does-not-exist.json");
        let err = load_country_table(&path).expect_err("read should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
