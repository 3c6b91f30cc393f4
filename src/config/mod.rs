//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::Result;
use std::path::Path;

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<PetrichorConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: PetrichorConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_minimal_config() {
        let yaml = r#"
weather:
  api_key: test123
  location: "Austin,TX,US"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.weather.api_key, "test123");
        assert_eq!(config.weather.location, "Austin,TX,US");
        assert_eq!(config.weather.interval_secs, 300);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let yaml = r#"
weather:
  location: "Austin,TX,US"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config(Path::new("/nonexistent/petrichor.yaml")).is_err());
    }
}
