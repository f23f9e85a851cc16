use crate::base;

/// Opaque identifier of a transaction, unique within a ledger.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    id: TransactionId,
    description: String,
    amount: base::Cents,
    kind: base::Kind,
    date: base::Date,
    #[serde(default)]
    category: base::Category,
}

impl Transaction {
    /// Largest amount a single transaction may carry, 10,000,000,000.00.
    /// Millions of transactions at this size still total within `i64`.
    pub const MAX_AMOUNT: base::Cents = base::Cents(1_000_000_000_000);

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unsigned magnitude. See [`Transaction::signed_amount`].
    pub fn amount(&self) -> base::Cents {
        self.amount
    }

    /// Amount as it affects the balance: positive for income, negative for
    /// expenses.
    pub fn signed_amount(&self) -> base::Cents {
        if self.kind.is_expense() {
            -self.amount
        } else {
            self.amount
        }
    }

    pub fn kind(&self) -> base::Kind {
        self.kind
    }

    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn category(&self) -> &base::Category {
        &self.category
    }

    /// Checks invariants that deserialization alone cannot enforce.
    pub(crate) fn check(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if self.amount.is_negative() {
            return Err(ValidationError::NegativeAmount);
        }
        if self.amount > Self::MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge);
        }
        Ok(())
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Unvalidated input for a new transaction, as typed by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub description: String,
    pub amount: String,
    pub kind: base::Kind,
    pub date: String,
    pub category: Option<String>,
}

impl Draft {
    pub fn new(description: impl Into<String>, amount: impl Into<String>, kind: base::Kind) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind,
            date: "d".to_string(),
            category: None,
        }
    }

    pub fn with_date(self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self
        }
    }

    pub fn with_category(self, category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..self
        }
    }

    /// Validates every field and builds the transaction. A blank or missing
    /// category falls back to [`base::Category::default`].
    pub(crate) fn build(&self, id: TransactionId) -> Result<Transaction, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let amount = self
            .amount
            .parse::<base::Cents>()
            .map_err(ValidationError::InvalidAmount)?;
        if amount.is_negative() {
            return Err(ValidationError::NegativeAmount);
        }
        if amount > Transaction::MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge);
        }
        let date = self
            .date
            .parse::<base::Date>()
            .map_err(ValidationError::InvalidDate)?;
        let category = self
            .category
            .as_deref()
            .and_then(|s| s.parse::<base::Category>().ok())
            .unwrap_or_default();
        Ok(Transaction {
            id,
            description: description.to_string(),
            amount,
            kind: self.kind,
            date,
            category,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("description is empty")]
    EmptyDescription,
    #[error("invalid amount")]
    InvalidAmount(#[source] base::cents::ParseError),
    #[error("amount is negative")]
    NegativeAmount,
    #[error("amount is larger than {max}", max = Transaction::MAX_AMOUNT)]
    AmountTooLarge,
    #[error("invalid date")]
    InvalidDate(#[source] base::date::ParseError),
}
