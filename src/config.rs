//! Structured config loading (YAML, TOML or JSON) into a [`ConfigBox`].

use camino::Utf8Path;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fsops::read_text;
use crate::mapping::ConfigBox;

/// Text formats understood by [`read_config`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Anything unrecognised is YAML.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("toml") => ConfigFormat::Toml,
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }
}

/// Load a configuration file into a [`ConfigBox`].
///
/// Fails with [`Error::NotFound`] when the file is missing and with
/// [`Error::Format`] when it is empty, not valid UTF-8, unparsable, or not a
/// mapping at the top level. Keys keep their document order.
pub fn read_config(path: impl AsRef<Utf8Path>) -> Result<ConfigBox> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    let raw = read_text(path)?;
    debug!("parsing {} as {}", path, format.as_str());

    let config = parse_config(path, &raw, format)?;
    info!("{} file: {} loaded successfully", format.as_str(), path);
    Ok(config)
}

fn parse_config(path: &Utf8Path, raw: &str, format: ConfigFormat) -> Result<ConfigBox> {
    if raw.trim().is_empty() {
        return Err(Error::format(path, "file is empty"));
    }

    let value: Value = match format {
        ConfigFormat::Yaml => {
            serde_yaml::from_str(raw).map_err(|err| Error::format(path, err.to_string()))?
        }
        ConfigFormat::Toml => {
            toml::from_str(raw).map_err(|err| Error::format(path, err.to_string()))?
        }
        ConfigFormat::Json => {
            serde_json::from_str(raw).map_err(|err| Error::format(path, err.to_string()))?
        }
    };

    into_box(path, value)
}

pub(crate) fn into_box(path: &Utf8Path, value: Value) -> Result<ConfigBox> {
    match value {
        Value::Null => Err(Error::format(path, "file is empty")),
        Value::Object(entries) => Ok(ConfigBox::from(entries)),
        other => Err(Error::format(
            path,
            format!("expected a mapping at the top level, found {}", kind(&other)),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_yaml() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.yaml",
            r#"
artifacts_root: artifacts
data_ingestion:
  root_dir: artifacts/data_ingestion
  source_url: https://example.com/data.zip
  unzip: true
image_size: [224, 224, 3]
"#,
        );

        let cfg = read_config(&path).unwrap();
        assert_eq!(
            cfg.clone().into_value(),
            json!({
                "artifacts_root": "artifacts",
                "data_ingestion": {
                    "root_dir": "artifacts/data_ingestion",
                    "source_url": "https://example.com/data.zip",
                    "unzip": true
                },
                "image_size": [224, 224, 3]
            })
        );
        assert_eq!(cfg.get_str("data_ingestion.root_dir"), Some("artifacts/data_ingestion"));
        assert_eq!(cfg.get_i64("image_size.2"), Some(3));
    }

    #[test]
    fn reads_toml_and_json_by_extension() {
        let dir = TempDir::new().unwrap();
        let toml_path = write(&dir, "params.toml", "epochs = 5\n\n[optimizer]\nname = \"sgd\"\n");
        let json_path = write(
            &dir,
            "params.json",
            r#"{"epochs": 5, "optimizer": {"name": "sgd"}}"#,
        );

        let from_toml = read_config(&toml_path).unwrap();
        let from_json = read_config(&json_path).unwrap();
        assert_eq!(from_toml, from_json);
        assert_eq!(from_toml.get_str("optimizer.name"), Some("sgd"));
    }

    #[test]
    fn empty_files_are_format_errors() {
        let dir = TempDir::new().unwrap();
        for (name, contents) in [
            ("blank.yaml", ""),
            ("spaces.yaml", "  \n\n"),
            ("comments.yaml", "# nothing here\n"),
            ("null.yaml", "~\n"),
            ("blank.toml", ""),
        ] {
            let path = write(&dir, name, contents);
            let err = read_config(&path).unwrap_err();
            assert!(err.is_format(), "{name}: {err:?}");
        }
    }

    #[test]
    fn malformed_files_are_format_errors() {
        let dir = TempDir::new().unwrap();
        for (name, contents) in [
            ("broken.yaml", "key: [unclosed\n"),
            ("list.yaml", "- a\n- b\n"),
            ("scalar.yaml", "just text\n"),
            ("broken.toml", "key = \n"),
            ("broken.json", "{\"a\": }"),
        ] {
            let path = write(&dir, name, contents);
            let err = read_config(&path).unwrap_err();
            assert!(err.is_format(), "{name}: {err:?}");
        }
    }

    #[test]
    fn non_utf8_file_is_a_format_error() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("latin1.yaml")).unwrap();
        fs::write(&path, b"name: caf\xe9\n").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.is_format(), "{err:?}");
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn keeps_document_key_order() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "params.yaml", "zeta: 1\nalpha: 2\nmid:\n  kappa: 1\n  beta: 2\n");
        let out = Utf8PathBuf::from_path_buf(dir.path().join("params.json")).unwrap();

        let cfg = read_config(&path).unwrap();
        assert_eq!(cfg.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);

        crate::save_json(&out, &cfg).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            concat!(
                "{\n    \"zeta\": 1,\n    \"alpha\": 2,\n    \"mid\": {\n",
                "        \"kappa\": 1,\n        \"beta\": 2\n    }\n}"
            )
        );
        assert_eq!(
            crate::load_json(&out).unwrap().keys().collect::<Vec<_>>(),
            vec!["zeta", "alpha", "mid"]
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("params.yaml")).unwrap();
        assert!(read_config(&path).unwrap_err().is_not_found());
    }

    #[test]
    fn format_detection() {
        assert_eq!(ConfigFormat::from_path(Utf8Path::new("a/config.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Utf8Path::new("a/Config.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Utf8Path::new("scores.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Utf8Path::new("params")), ConfigFormat::Yaml);
    }
}
