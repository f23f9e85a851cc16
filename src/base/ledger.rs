use crate::base;

/// Order in which a view lists its transactions.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Order {
    /// Ascending by date. Transactions sharing a date keep insertion order.
    Date,
    /// Most recently added first.
    #[default]
    Newest,
}

/// Entry point for callers: owns the store and answers every query a
/// presentation layer makes.
#[derive(Debug)]
pub struct Ledger<S> {
    store: base::Store<S>,
    order: Order,
    default_category: base::Category,
}

/// Transactions selected for a period, with their totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub transactions: Vec<&'a base::Transaction>,
    pub summary: base::Summary,
}

impl<'a> View<'a> {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn of_kind(&self, kind: base::Kind) -> Vec<&'a base::Transaction> {
        self.transactions
            .iter()
            .copied()
            .filter(|t| t.kind() == kind)
            .collect()
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.transactions.iter().copied().map(ExportRow::from).collect()
    }
}

/// Flat record handed to report generators.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExportRow {
    /// ISO 8601, `yyyy-mm-dd`.
    pub date: String,
    pub description: String,
    pub kind: base::Kind,
    /// Minor units.
    pub amount: base::Cents,
    pub category: String,
}

impl From<&base::Transaction> for ExportRow {
    fn from(t: &base::Transaction) -> Self {
        Self {
            date: t.date().to_string(),
            description: t.description().to_string(),
            kind: t.kind(),
            amount: t.amount(),
            category: t.category().to_string(),
        }
    }
}

impl<S> Ledger<S>
where
    S: base::Slot,
{
    pub fn new(store: base::Store<S>) -> Self {
        Self {
            store,
            order: Order::default(),
            default_category: base::Category::default(),
        }
    }

    pub fn from_config(store: base::Store<S>, config: &base::Config) -> Self {
        Self::new(store)
            .with_order(config.view_order)
            .with_default_category(config.default_category.clone())
    }

    pub fn with_order(self, order: Order) -> Self {
        Self { order, ..self }
    }

    pub fn with_default_category(self, default_category: base::Category) -> Self {
        Self {
            default_category,
            ..self
        }
    }

    pub fn store(&self) -> &base::Store<S> {
        &self.store
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Records a new transaction. Nothing changes if validation or
    /// persistence fails.
    pub fn add_transaction(&mut self, mut draft: base::Draft) -> Result<base::Transaction, base::store::Error> {
        if draft.category.as_deref().is_none_or(|c| c.trim().is_empty()) {
            draft.category = Some(self.default_category.to_string());
        }
        let was_empty = self.is_empty();
        let t = self.store.add(&draft)?;
        if was_empty {
            tracing::debug!("ledger populated");
        }
        Ok(t)
    }

    /// Deletes a transaction by id. Unknown ids are ignored.
    pub fn delete_transaction(
        &mut self,
        id: base::TransactionId,
    ) -> Result<Option<base::Transaction>, base::store::Error> {
        let removed = self.store.remove(id)?;
        if removed.is_some() && self.is_empty() {
            tracing::debug!("ledger emptied");
        }
        Ok(removed)
    }

    pub fn view_for_period(&self, period: &base::Period) -> View<'_> {
        self.view::<&str>(period, &[])
    }

    /// Like [`Ledger::view_for_period`], additionally keeping only categories
    /// matching any of the wildcard `categories`.
    pub fn view<T>(&self, period: &base::Period, categories: &[T]) -> View<'_>
    where
        T: AsRef<str>,
    {
        let in_period = base::filter::filter_by_period(self.store.all(), period);
        let mut transactions = base::filter::filter_by_categories(in_period, categories);
        match self.order {
            Order::Date => transactions.sort_by_key(|t| t.date()),
            Order::Newest => transactions.reverse(),
        }
        let summary = base::summarize(transactions.iter().copied());
        View {
            transactions,
            summary,
        }
    }

    pub fn export_rows(&self, period: &base::Period) -> Vec<ExportRow> {
        self.view_for_period(period).export_rows()
    }
}
