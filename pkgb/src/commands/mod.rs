mod build;
mod completions;
mod scan;

use std::path::{Path, PathBuf};

use build::BuildCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use packagebuilder_config::{Config, ConfigFile, extension_problem};
use scan::ScanCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for packagebuilder_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pkgb")]
#[command(version)]
#[command(about = "Generate package.php classmap manifests for PHP source trees")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::Scan(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a package manifest for every namespace directory
    Build(BuildCommand),

    /// List discovered namespaces and types without writing anything
    Scan(ScanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Settings shared by commands that walk a source tree.
#[derive(clap::Args)]
pub(crate) struct ScanArgs {
    /// Directory to scan (overrides [scan].root)
    pub root: Option<PathBuf>,

    /// Path to packagebuilder.toml (defaults to ./packagebuilder.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Source file extension, without the dot (overrides [scan].extension)
    #[arg(short, long, value_parser = parse_extension)]
    pub extension: Option<String>,
}

fn parse_extension(value: &str) -> std::result::Result<String, String> {
    match extension_problem(value) {
        Some(problem) => Err(problem.to_string()),
        None => Ok(value.to_string()),
    }
}

/// Config loaded for a command, with the directory relative paths resolve against.
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

impl ScanArgs {
    pub fn load_config(&self) -> LoadedConfig {
        let file = match &self.config {
            Some(path) => Some(ConfigFile::open(path).unwrap_or_exit()),
            None => ConfigFile::discover(".").unwrap_or_exit(),
        };

        match file {
            Some(file) => LoadedConfig {
                base_dir: file
                    .path()
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default(),
                config: file.into_config(),
            },
            None => LoadedConfig {
                config: Config::default(),
                base_dir: PathBuf::new(),
            },
        }
    }

    /// Root from the command line, else `[scan].root` relative to the config file.
    pub fn root(&self, loaded: &LoadedConfig) -> PathBuf {
        match &self.root {
            Some(root) => root.clone(),
            None => loaded.base_dir.join(&loaded.config.scan.root),
        }
    }

    pub fn recursive(&self, config: &Config) -> bool {
        self.recursive || config.scan.recursive
    }

    pub fn extension<'a>(&'a self, config: &'a Config) -> &'a str {
        self.extension.as_deref().unwrap_or(&config.scan.extension)
    }
}

#[cfg(test)]
fn parse_command(args: &[&str]) -> std::result::Result<Commands, clap::Error> {
    let argv = std::iter::once("pkgb").chain(args.iter().copied());
    Cli::try_parse_from(argv).map(|cli| cli.command)
}
