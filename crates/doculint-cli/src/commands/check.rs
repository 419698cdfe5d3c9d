//! Check command implementation.

use anyhow::{bail, Context, Result};
use doculint_core::{Analyzer, CompilationUnit, Config};
use doculint_rules::all_rules;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// Config file names looked up beside the inputs, in order.
const CONFIG_NAMES: &[&str] = &["doculint.toml", ".doculint.toml"];

/// Runs the check command.
pub fn run(
    inputs: &[PathBuf],
    format: OutputFormat,
    sequential: bool,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = find_config(
        explicit_config,
        inputs,
        &cwd,
        global_config_dir().as_deref(),
    );
    let config = load_config(config_path.as_deref())?;

    let files = collect_inputs(inputs)?;
    if files.is_empty() {
        bail!("No compilation unit files found in the given inputs");
    }

    let units = files
        .iter()
        .map(|path| load_unit(path))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = Analyzer::builder().config(config).parallel(!sequential);
    for rule in all_rules() {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.build();

    tracing::info!(
        "Checking {} unit(s) with {} rule set(s)",
        units.len(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze(&units);

    super::output::print(&result, format)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Finds the config file that governs a run.
///
/// An explicit path is taken as is. Otherwise the directory of the first
/// input and its ancestors are searched, since front-ends usually export
/// units into the source tree they describe. The working directory comes
/// next and the global `config.toml` last.
fn find_config(
    explicit: Option<&Path>,
    inputs: &[PathBuf],
    cwd: &Path,
    global_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let input_dir = inputs.first().and_then(|input| {
        if input.is_dir() {
            Some(input.as_path())
        } else {
            input.parent()
        }
    });
    let beside_inputs = input_dir.into_iter().flat_map(Path::ancestors);

    for dir in beside_inputs.chain(std::iter::once(cwd)) {
        for name in CONFIG_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    global_dir
        .map(|dir| dir.join("config.toml"))
        .filter(|candidate| candidate.is_file())
}

/// `$DOCULINT_CONFIG_DIR`, or `~/.doculint`.
fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("DOCULINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|home| home.join(".doculint"))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config file found, using default conventions");
        return Ok(Config::default());
    };

    tracing::info!("Using config: {}", path.display());
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

/// Expands directories into the `*.json` files directly inside them.
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }

        let pattern = format!("{}/*.json", glob::Pattern::escape(&input.to_string_lossy()));
        let mut found: Vec<PathBuf> = glob::glob(&pattern)
            .with_context(|| format!("Invalid input directory: {}", input.display()))?
            .collect::<Result<_, _>>()
            .with_context(|| format!("Failed to list {}", input.display()))?;
        found.sort();

        tracing::debug!("Found {} unit file(s) in {}", found.len(), input.display());
        files.extend(found);
    }

    Ok(files)
}

fn load_unit(path: &Path) -> Result<CompilationUnit> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid compilation unit in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const UNIT: &str = r#"{"package": "mypkg", "files": [{"path": "mypkg.go"}]}"#;

    #[test]
    fn collects_json_files_from_directories() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.json"), UNIT).unwrap();
        fs::write(tmp.path().join("a.json"), UNIT).unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();

        let files = collect_inputs(&[tmp.path().to_path_buf()]).unwrap();
        assert_eq!(
            files,
            vec![tmp.path().join("a.json"), tmp.path().join("b.json")]
        );
    }

    #[test]
    fn keeps_explicit_files() {
        let path = PathBuf::from("units/mypkg.json");
        let files = collect_inputs(std::slice::from_ref(&path)).unwrap();
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn loads_unit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mypkg.json");
        fs::write(&path, UNIT).unwrap();

        let unit = load_unit(&path).unwrap();
        assert_eq!(unit.package, "mypkg");
        assert_eq!(unit.files.len(), 1);
    }

    #[test]
    fn rejects_malformed_unit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, r#"{"files": []}"#).unwrap();

        let err = load_unit(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid compilation unit"));
    }

    // --- config lookup ---

    #[test]
    fn explicit_config_wins_without_existence_check() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("doculint.toml"), "").unwrap();

        let explicit = Path::new("/nonexistent/doculint.toml");
        let found = find_config(Some(explicit), &[], tmp.path(), None);
        assert_eq!(found, Some(explicit.to_path_buf()));
    }

    #[test]
    fn config_found_in_ancestor_of_input() {
        let tmp = TempDir::new().unwrap();
        let units = tmp.path().join("units").join("api");
        fs::create_dir_all(&units).unwrap();
        fs::write(tmp.path().join("units").join(".doculint.toml"), "").unwrap();
        let cwd = TempDir::new().unwrap();
        fs::write(cwd.path().join("doculint.toml"), "").unwrap();

        let inputs = vec![units.join("api.json")];
        let found = find_config(None, &inputs, cwd.path(), None);
        assert_eq!(found, Some(tmp.path().join("units").join(".doculint.toml")));
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("doculint.toml"), "").unwrap();
        fs::write(tmp.path().join(".doculint.toml"), "").unwrap();

        let inputs = vec![tmp.path().to_path_buf()];
        let found = find_config(None, &inputs, Path::new("/nonexistent"), None);
        assert_eq!(found, Some(tmp.path().join("doculint.toml")));
    }

    #[test]
    fn working_directory_then_global_fallback() {
        let inputs = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();
        let unit_dirs = vec![inputs.path().to_path_buf()];

        let found = find_config(None, &unit_dirs, cwd.path(), Some(global.path()));
        assert_eq!(found, Some(global.path().join("config.toml")));

        fs::write(cwd.path().join("doculint.toml"), "").unwrap();
        let found = find_config(None, &unit_dirs, cwd.path(), Some(global.path()));
        assert_eq!(found, Some(cwd.path().join("doculint.toml")));
    }

    #[test]
    fn nothing_found_gives_default_config() {
        let inputs = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        let unit_dirs = vec![inputs.path().to_path_buf()];

        let found = find_config(None, &unit_dirs, cwd.path(), Some(global.path()));
        assert_eq!(found, None);

        let config = load_config(found.as_deref()).unwrap();
        assert_eq!(config.conventions.entry_package, "main");
    }

    #[test]
    fn conventions_read_from_found_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("doculint.toml"),
            "[conventions]\ninitializer_function = \"setup\"\n",
        )
        .unwrap();

        let inputs = vec![tmp.path().join("mypkg.json")];
        let found = find_config(None, &inputs, Path::new("/nonexistent"), None);
        let config = load_config(found.as_deref()).unwrap();
        assert_eq!(config.conventions.initializer_function, "setup");
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/doculint.toml"))).is_err());
    }
}
