//! Configuration file (`deno.json`) loading and import map construction.

use crate::error::LaunchError;
use import_map::{ImportMap, ImportMapOptions};
use serde::Deserialize;
use serde_json::{Map, Value};
use slog::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Config file read when `--config` is not given, relative to the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "deno.json";

/// The parts of a config document the launcher cares about. Everything else
/// (`tasks`, `compilerOptions`, ...) is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    imports: Option<Value>,
    scopes: Option<Value>,
    import_map: Option<String>,
}

impl ConfigDocument {
    fn has_inline_map(&self) -> bool {
        self.imports.is_some() || self.scopes.is_some()
    }

    fn into_import_map_value(self) -> Value {
        let mut map = Map::new();
        if let Some(imports) = self.imports {
            map.insert("imports".to_string(), imports);
        }
        if let Some(scopes) = self.scopes {
            map.insert("scopes".to_string(), scopes);
        }
        Value::Object(map)
    }
}

/// A parsed import map together with the URL it was read from.
///
/// `base_url` is both the base for relative targets in the map and the
/// referrer used when resolving the script specifier.
pub struct LoadedImportMap {
    pub import_map: ImportMap,
    pub base_url: Url,
}

/// Load the import map described by the config file at `path`.
///
/// Relative paths are taken against the current directory. When the document
/// has no inline `imports`/`scopes` but names an `importMap` file, that file
/// is loaded instead and becomes the base URL.
///
/// # Errors
///
/// [`LaunchError::ConfigRead`] if a file is missing or unreadable,
/// [`LaunchError::ConfigParse`] if it is not valid JSON or not a valid import map.
pub fn load_import_map(path: &Path) -> Result<LoadedImportMap, LaunchError> {
    let config_path = std::path::absolute(path).map_err(LaunchError::CurrentDir)?;
    let document = read_document(&config_path)?;

    if !document.has_inline_map()
        && let Some(location) = document.import_map.as_deref()
    {
        let map_path = import_map_path(&config_path, location)?;
        debug!(slog_scope::logger(), "Following importMap";
            "from" => %config_path.display(), "to" => %map_path.display());
        let map_document = read_document(&map_path)?;
        return build(&map_path, map_document);
    }

    build(&config_path, document)
}

fn read_document(path: &Path) -> Result<ConfigDocument, LaunchError> {
    let content = fs::read_to_string(path).map_err(|source| LaunchError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |message: String| LaunchError::ConfigParse {
        path: path.to_path_buf(),
        message,
    };

    // Repeated keys keep the last value
    let object = match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(object)) => object,
        Ok(_) => return Err(parse_error("config must be a JSON object".to_string())),
        Err(e) => return Err(parse_error(e.to_string())),
    };

    serde_json::from_value(Value::Object(object)).map_err(|e| parse_error(e.to_string()))
}

/// Locate the file named by an `importMap` entry: a `file:` URL, or a path
/// relative to the directory of the config file.
fn import_map_path(config_path: &Path, location: &str) -> Result<PathBuf, LaunchError> {
    let invalid = || LaunchError::InvalidImportMapPath {
        config: config_path.to_path_buf(),
        value: location.to_string(),
    };

    match Url::parse(location) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().map_err(|()| invalid()),
        // Remote import maps are not fetched
        Ok(_) => Err(invalid()),
        Err(_) => {
            let dir = config_path.parent().ok_or_else(invalid)?;
            Ok(dir.join(location))
        }
    }
}

fn build(path: &Path, document: ConfigDocument) -> Result<LoadedImportMap, LaunchError> {
    let base_url = Url::from_file_path(path).map_err(|()| LaunchError::ConfigParse {
        path: path.to_path_buf(),
        message: "path cannot be expressed as a file URL".to_string(),
    })?;

    let options = ImportMapOptions {
        expand_imports: true,
        ..Default::default()
    };
    let parsed = import_map::parse_from_value_with_options(
        base_url.clone(),
        document.into_import_map_value(),
        options,
    )
    .map_err(|e| LaunchError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let log = slog_scope::logger();
    for diagnostic in &parsed.diagnostics {
        warn!(log, "{}", diagnostic; "file" => %path.display());
    }

    Ok(LoadedImportMap {
        import_map: parsed.import_map,
        base_url,
    })
}
