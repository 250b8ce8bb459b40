use clap::Args;
use eyre::Result;

use super::ScanArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub scan: ScanArgs,
}

impl ScanCommand {
    pub fn run(&self) -> Result<()> {
        let loaded = self.scan.load_config();
        let config = &loaded.config;
        let root = self.scan.root(&loaded);

        let report = ops::scan(ops::scan::ScanOptions {
            root: &root,
            recursive: self.scan.recursive(config),
            extension: self.scan.extension(config),
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
