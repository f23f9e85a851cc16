use anyhow::Context;

use crate::base;
use crate::cli;

/// Print transactions as JSON rows for report generators
#[derive(clap::Parser)]
pub struct Export {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl Export {
    pub fn run(&self, ledger: &base::Ledger<base::FileSlot>) -> anyhow::Result<cli::Output> {
        let rows = ledger
            .view(&self.period, &self.categories_opts.categories)
            .export_rows();
        let json = serde_json::to_string_pretty(&rows).context("failed to serialize rows")?;
        Ok(cli::Output::Str(json))
    }
}
