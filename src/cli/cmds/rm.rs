use crate::base;
use crate::cli;

/// Remove a transaction
#[derive(clap::Parser)]
pub struct Rm {
    /// Id of the transaction, as shown by 'view'
    id: base::TransactionId,
}

impl Rm {
    pub fn run(
        self,
        mut ledger: base::Ledger<base::FileSlot>,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let removed = cli::util::store_context(ledger.delete_transaction(self.id), fs)?;
        Ok(cli::Output::Str(match removed {
            Some(t) => format!("Removed {} '{}' of {} on {}", self.id, t.description(), t.amount(), t.date()),
            None => format!("No transaction with id {}", self.id),
        }))
    }
}
