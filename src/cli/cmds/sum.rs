use crate::base;
use crate::cli;

/// View transaction totals
#[derive(clap::Parser)]
pub struct Sum {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl Sum {
    pub fn run(
        &self,
        ledger: &base::Ledger<base::FileSlot>,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let view = ledger.view(&self.period, &self.categories_opts.categories);
        Ok(cli::Output::Totals(cli::render::totals::Config {
            charset: cli::util::charset_from_config(config),
            summary: view.summary,
        }))
    }
}
