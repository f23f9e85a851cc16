use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize a ledger in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing ledger's config to defaults. Transactions are kept.
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

fn transactions(n: usize) -> String {
    match n {
        1 => "1 transaction".to_string(),
        n => format!("{} transactions", n),
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let path = fs.path::<base::Config>();
        let existing = fs.is_repo();
        let config = if existing && !self.reset_config {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        } else {
            initial_config()
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        if !existing {
            return Ok(cli::Output::Str(format!(
                "Ledger initialized in '{}'",
                fs.dir().display()
            )));
        }

        let count = base::Store::load(fs.slot::<base::Journal>())
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Journal>().display()))?
            .len();
        Ok(cli::Output::Str(if self.reset_config {
            format!("Ledger configuration reset to defaults, {} kept.", transactions(count))
        } else {
            format!("Ledger reinitialized with {}.", transactions(count))
        }))
    }
}
