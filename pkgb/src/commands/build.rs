use clap::Args;
use eyre::Result;
use packagebuilder_config::Config;
use packagebuilder_writer::WriterOptions;

use super::ScanArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Preview manifests without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Keep package files that already exist
    #[arg(long)]
    pub no_overwrite: bool,

    /// Add an "Autogenerated at" comment to each manifest
    #[arg(long)]
    pub timestamp: bool,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        let loaded = self.scan.load_config();
        let config = &loaded.config;
        let root = self.scan.root(&loaded);

        let report = ops::build(ops::build::BuildOptions {
            root: &root,
            recursive: self.scan.recursive(config),
            writer: self.writer_options(config),
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Writer settings from the config file with the command-line flags applied.
    pub fn writer_options(&self, config: &Config) -> WriterOptions {
        // flags can only switch a setting on, `--no-overwrite` only off
        WriterOptions::new(
            self.dry_run || config.writer.dry_run,
            config.writer.overwrite && !self.no_overwrite,
        )
        .with_autogenerated_timestamp(self.timestamp || config.writer.timestamp)
        .with_extension(self.scan.extension(config))
    }
}
