use crate::base;

/// Owns the session's transactions and keeps them mirrored in a storage slot.
///
/// Every successful mutation is written through to the slot before the call
/// returns. If that write fails, the mutation is undone, so memory and slot
/// agree whenever no call is in progress.
#[derive(Debug)]
pub struct Store<S> {
    journal: base::Journal,
    slot: S,
    last_id: Option<base::TransactionId>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] base::ValidationError),
    #[error("failed to persist ledger")]
    Persist(#[source] std::io::Error),
    #[error("no transaction ids left")]
    IdsExhausted,
}

impl<S> Store<S>
where
    S: base::Slot,
{
    /// Hydrates a store from `slot`.
    ///
    /// An absent, blank or malformed slot yields an empty store; corruption
    /// is logged, never returned. Only a failure to read the slot at all is
    /// an error.
    pub fn load(slot: S) -> std::io::Result<Self> {
        let journal = match slot.read()? {
            None => base::Journal::new(),
            Some(s) => s.parse::<base::Journal>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "persisted ledger is unreadable, starting empty");
                base::Journal::new()
            }),
        };
        tracing::debug!(count = journal.len(), "ledger loaded");
        let last_id = journal.max_id();
        Ok(Self {
            journal,
            slot,
            last_id,
        })
    }

    /// Read-only view of every transaction, in insertion order.
    pub fn all(&self) -> &base::Journal {
        &self.journal
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn is_empty(&self) -> bool {
        self.journal.is_empty()
    }

    pub fn len(&self) -> usize {
        self.journal.len()
    }

    /// Validates `draft`, appends it under a fresh id, and persists.
    pub fn add(&mut self, draft: &base::Draft) -> Result<base::Transaction, Error> {
        let id = self.next_id()?;
        let t = draft.build(id)?;
        self.last_id = Some(id);
        self.journal.push(t.clone());
        if let Err(e) = self.persist() {
            self.journal.pop();
            return Err(e);
        }
        tracing::debug!(%id, amount = t.amount().0, kind = %t.kind(), "transaction added");
        Ok(t)
    }

    /// Removes the transaction with the given id and persists. Removing an
    /// unknown id is a no-op and returns `Ok(None)`.
    pub fn remove(&mut self, id: base::TransactionId) -> Result<Option<base::Transaction>, Error> {
        let Some((i, t)) = self.journal.remove(id) else {
            tracing::debug!(%id, "no transaction to remove");
            return Ok(None);
        };
        if let Err(e) = self.persist() {
            self.journal.insert(i, t);
            return Err(e);
        }
        tracing::debug!(%id, "transaction removed");
        Ok(Some(t))
    }

    /// Writes every transaction to the slot.
    pub fn persist(&mut self) -> Result<(), Error> {
        self.slot
            .write(&self.journal.to_string())
            .map_err(Error::Persist)?;
        tracing::debug!(count = self.journal.len(), "ledger persisted");
        Ok(())
    }

    /// Millisecond timestamps keep ids increasing across sessions; bumping
    /// past the last id keeps them distinct within one millisecond.
    fn next_id(&self) -> Result<base::TransactionId, Error> {
        let now = now_millis();
        let id = match self.last_id {
            None => now,
            Some(base::TransactionId(last)) => {
                now.max(last.checked_add(1).ok_or(Error::IdsExhausted)?)
            }
        };
        Ok(base::TransactionId(id))
    }
}

#[cfg(not(test))]
fn now_millis() -> u64 {
    let ms = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    u64::try_from(ms).unwrap_or_default()
}

/// 2015-03-30T00:00:00Z
#[cfg(test)]
fn now_millis() -> u64 {
    1_427_673_600_000
}
