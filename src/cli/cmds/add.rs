use crate::base;
use crate::cli;

/// Record a transaction
#[derive(clap::Parser)]
pub struct Add {
    /// What the transaction was for
    description: String,

    /// Unsigned amount, with up to two decimal places, e.g. 3.50 or 1,200
    #[arg(allow_negative_numbers = true)]
    amount: String,

    /// Whether money came in or went out
    ///
    /// Must be one of: income, expense (a variable expense), fixed (a fixed
    /// expense)
    #[arg(short, long, default_value = "expense")]
    kind: base::Kind,

    /// Transaction date
    ///
    /// Must be in 'yyyy-mm-dd' format, or 'dn' for the date n days from
    /// today, e.g. 'd' is today and 'd-1' is yesterday
    #[arg(short, long, default_value = "d", allow_hyphen_values = true)]
    date: String,

    /// Category, defaulting to the one set in the ledger's config
    #[arg(short, long)]
    category: Option<String>,
}

impl Add {
    pub fn run(
        self,
        mut ledger: base::Ledger<base::FileSlot>,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let draft = base::Draft {
            description: self.description,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            category: self.category,
        };
        let t = cli::util::store_context(ledger.add_transaction(draft), fs)?;
        Ok(cli::Output::Listing(cli::render::listing::Config {
            charset: cli::util::charset_from_config(config),
            transactions: vec![t],
            summary: None,
        }))
    }
}
