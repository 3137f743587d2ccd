use std::fs;
use std::path::{Path, PathBuf};
use yaml_rust2::{Yaml, YamlLoader};

#[derive(Debug, thiserror::Error)]
pub enum YamlIncludeError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Scan {
        path: PathBuf,
        source: yaml_rust2::ScanError,
    },
    #[error("include cycle through {0:?}")]
    Cycle(PathBuf),
}

/// Loads a YAML file, resolving `!include <relative path>` lines first.
///
/// Included documents are merged in order, then the including file's own
/// keys are merged on top, so the including file always wins.
pub fn load_yaml_with_includes(path: &Path) -> Result<Yaml, YamlIncludeError> {
    let mut stack = Vec::new();
    process_includes_recursive(path, &mut stack)
}

fn process_includes_recursive(
    path: &Path,
    stack: &mut Vec<PathBuf>,
) -> Result<Yaml, YamlIncludeError> {
    let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if stack.contains(&key) {
        return Err(YamlIncludeError::Cycle(path.to_path_buf()));
    }
    stack.push(key);

    let contents = fs::read_to_string(path).map_err(|source| YamlIncludeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_path = path.parent().unwrap_or(Path::new(""));

    let (includes, rest): (Vec<&str>, Vec<&str>) = contents
        .lines()
        .partition(|&line| line.trim().starts_with("!include"));

    let mut merged_includes: Option<Yaml> = None;
    for line in includes {
        let include_path = line.trim().trim_start_matches("!include").trim();
        tracing::debug!(from = %path.display(), include = include_path, "Resolving YAML include");
        let included = process_includes_recursive(&base_path.join(include_path), stack)?;
        merged_includes = Some(match merged_includes {
            Some(acc) => merge_yaml(&acc, &included),
            None => included,
        });
    }

    let rest_yamls =
        YamlLoader::load_from_str(&rest.join("\n")).map_err(|source| YamlIncludeError::Scan {
            path: path.to_path_buf(),
            source,
        })?;
    let merged_rest = rest_yamls
        .into_iter()
        .reduce(|acc, doc| merge_yaml(&acc, &doc))
        .unwrap_or(Yaml::Null);

    stack.pop();

    Ok(match merged_includes {
        Some(includes) if merged_rest.is_null() => includes,
        Some(includes) => merge_yaml(&includes, &merged_rest),
        None => merged_rest,
    })
}

pub fn merge_yaml(base: &Yaml, override_yaml: &Yaml) -> Yaml {
    match (base, override_yaml) {
        (Yaml::Hash(base_hash), Yaml::Hash(override_hash)) => {
            let mut result = base_hash.clone();
            for (key, value) in override_hash {
                let merged = match base_hash.get(key) {
                    Some(base_value) => merge_yaml(base_value, value),
                    None => value.clone(),
                };
                result.insert(key.clone(), merged);
            }
            Yaml::Hash(result)
        }
        (_, override_value) => override_value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::File::create(&path)
            .unwrap()
            .write_all(body.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn including_file_overrides_included_keys() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "base.yaml",
            "webui:\n  server_address: 127.0.0.1:8501\n  log_level: info\n",
        );
        let dev = write(
            dir.path(),
            "dev.yaml",
            "!include base.yaml\nwebui:\n  log_level: debug\n",
        );

        let yaml = load_yaml_with_includes(&dev).unwrap();
        assert_eq!(yaml["webui"]["log_level"].as_str(), Some("debug"));
        assert_eq!(yaml["webui"]["server_address"].as_str(), Some("127.0.0.1:8501"));
    }

    #[test]
    fn include_only_file_yields_included_document() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "base.yaml", "common:\n  project_name: phones\n");
        let top = write(dir.path(), "top.yaml", "!include base.yaml\n");

        let yaml = load_yaml_with_includes(&top).unwrap();
        assert_eq!(yaml["common"]["project_name"].as_str(), Some("phones"));
    }

    #[test]
    fn detects_include_cycles() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.yaml", "!include b.yaml\n");
        let b = write(dir.path(), "b.yaml", "!include a.yaml\n");

        assert!(matches!(
            load_yaml_with_includes(&b),
            Err(YamlIncludeError::Cycle(_))
        ));
    }

    #[test]
    fn missing_include_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let top = write(dir.path(), "top.yaml", "!include nope.yaml\n");

        assert!(matches!(
            load_yaml_with_includes(&top),
            Err(YamlIncludeError::Io { .. })
        ));
    }
}
