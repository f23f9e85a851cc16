use crate::base;
use crate::cli;

/// List transactions and their totals
#[derive(clap::Parser)]
pub struct View {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::PERIOD_HELP,
        long_help = cli::sharedopts::PERIOD_HELP_LONG,
    )]
    period: base::Period,

    /// List only transactions of this kind; totals still cover every kind
    #[arg(short, long)]
    kind: Option<base::Kind>,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl View {
    pub fn run(
        &self,
        ledger: &base::Ledger<base::FileSlot>,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let view = ledger.view(&self.period, &self.categories_opts.categories);
        let transactions = match self.kind {
            Some(kind) => view.of_kind(kind),
            None => view.transactions,
        };
        Ok(cli::Output::Listing(cli::render::listing::Config {
            charset: cli::util::charset_from_config(config),
            transactions: transactions.into_iter().cloned().collect(),
            summary: Some(view.summary),
        }))
    }
}
