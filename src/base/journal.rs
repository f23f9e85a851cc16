use crate::base;

/// Transactions in insertion order. This is the value persisted to a
/// ledger's storage slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal(Vec<base::Transaction>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, base::Transaction> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[base::Transaction] {
        &self.0
    }

    /// Largest identifier in the journal.
    pub fn max_id(&self) -> Option<base::TransactionId> {
        self.0.iter().map(base::Transaction::id).max()
    }

    pub(crate) fn push(&mut self, t: base::Transaction) {
        self.0.push(t)
    }

    pub(crate) fn pop(&mut self) -> Option<base::Transaction> {
        self.0.pop()
    }

    pub(crate) fn insert(&mut self, index: usize, t: base::Transaction) {
        self.0.insert(index, t)
    }

    /// Removes the transaction with the given id, returning it along with the
    /// position it occupied. Returns `None` and leaves the journal unmodified
    /// if no such transaction exists.
    pub(crate) fn remove(
        &mut self,
        id: base::TransactionId,
    ) -> Option<(usize, base::Transaction)> {
        let i = self.0.iter().position(|t| t.id() == id)?;
        Some((i, self.0.remove(i)))
    }
}

impl<'a> IntoIterator for &'a Journal {
    type Item = &'a base::Transaction;
    type IntoIter = std::slice::Iter<'a, base::Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Journal {
    /// Writes a JSON array with one transaction per line. Writes a
    /// terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return writeln!(f, "[]");
        }
        writeln!(f, "[")?;
        for (i, t) in self.iter().enumerate() {
            let sep = if i + 1 < self.len() { "," } else { "" };
            writeln!(f, "  {}{}", t, sep)?;
        }
        writeln!(f, "]")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed ledger")]
    Json(#[from] serde_json::Error),
    #[error("invalid transaction at index {index}")]
    Invalid {
        index: usize,
        #[source]
        source: base::ValidationError,
    },
    #[error("duplicate transaction id {0}")]
    DuplicateId(base::TransactionId),
}

impl std::str::FromStr for Journal {
    type Err = ParseError;

    /// Parses a JSON array of transactions. Blank input is an empty journal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }
        let inner = serde_json::from_str::<Vec<base::Transaction>>(s)?;
        let mut seen = std::collections::HashSet::with_capacity(inner.len());
        for (index, t) in inner.iter().enumerate() {
            t.check()
                .map_err(|source| ParseError::Invalid { index, source })?;
            if !seen.insert(t.id()) {
                return Err(ParseError::DuplicateId(t.id()));
            }
        }
        Ok(Self(inner))
    }
}

impl TryFrom<&str> for Journal {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
