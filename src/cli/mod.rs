//! Command-line host: config merging and the single run.

mod args;

pub use args::Cli;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use url_version::config::CONFIG_FILE;
use url_version::{UrlVersioner, VersionConfig, log, transform_css};

/// Merge defaults, config file and command-line flags (in that order).
pub fn load_config(cli: &Cli) -> Result<VersionConfig> {
    let mut config = match &cli.config {
        Some(path) => VersionConfig::from_path(path)?,
        None if Path::new(CONFIG_FILE).is_file() => {
            VersionConfig::from_path(Path::new(CONFIG_FILE))?
        }
        None => VersionConfig::default(),
    };

    if let Some(variable) = &cli.variable {
        config.variable = variable.clone();
    }
    if let Some(skip_external) = cli.skip_external {
        config.skip_external = skip_external;
    }
    config.from = cli
        .from
        .clone()
        .or(config.from)
        .or_else(|| Some(cli.input.clone()));

    Ok(config)
}

/// Version every url() in the input stylesheet and write the result.
pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let versioner = UrlVersioner::new(config)?;

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let filename = cli.input.display().to_string();
    let result = transform_css(&source, &filename, &versioner)?;

    match &cli.output {
        Some(output) => {
            if let Some(parent) = output.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(output, &result.code)
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(result.code.as_bytes())?;
            stdout.flush()?;
        }
    }

    log!("css"; "versioned {} url{} in {}",
        result.rewritten, if result.rewritten == 1 { "" } else { "s" }, filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults_from_to_input() {
        let cli = Cli::try_parse_from(["url-version", "styles/app.css"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.from, Some(PathBuf::from("styles/app.css")));
        assert_eq!(config.variable, "v");
        assert!(config.skip_external);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("cfg.toml");
        fs::write(
            &file,
            "variable = \"rev\"\nskip_external = false\nfrom = \"a.css\"",
        )
        .unwrap();
        let file = file.to_string_lossy().to_string();
        let file = file.as_str();

        let cli = Cli::try_parse_from(["url-version", "-C", file, "b.css"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.variable, "rev");
        assert!(!config.skip_external);
        assert_eq!(config.from, Some(PathBuf::from("a.css")));

        let cli = Cli::try_parse_from([
            "url-version",
            "-C",
            file,
            "--variable",
            "h",
            "--from",
            "c.css",
            "b.css",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.variable, "h");
        assert_eq!(config.from, Some(PathBuf::from("c.css")));
    }

    #[test]
    fn test_run_writes_output() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        fs::write(dir.path().join("images/bullet.jpg"), "hello").unwrap();
        let input = dir.path().join("styles/app.css");
        fs::write(&input, "body { list-style-image: url('../images/bullet.jpg'); }").unwrap();
        let output = dir.path().join("dist/app.css");
        let (input_arg, output_arg) = (
            input.to_string_lossy().to_string(),
            output.to_string_lossy().to_string(),
        );

        let cli =
            Cli::try_parse_from(["url-version", input_arg.as_str(), "-o", output_arg.as_str()])
                .unwrap();
        run(&cli).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("../images/bullet.jpg?v=5d4140"));
    }

    #[test]
    fn test_run_rejects_bad_variable() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("app.css");
        fs::write(&input, "a { color: red; }").unwrap();
        let input_arg = input.to_string_lossy().to_string();

        let cli =
            Cli::try_parse_from(["url-version", input_arg.as_str(), "--variable", "a=b"]).unwrap();
        assert!(run(&cli).is_err());
    }
}
