use crate::base;

/// Totals of a set of transactions, per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: base::Cents,
    pub total_variable: base::Cents,
    pub total_fixed: base::Cents,
}

impl Summary {
    pub fn total(self, kind: base::Kind) -> base::Cents {
        match kind {
            base::Kind::Income => self.total_income,
            base::Kind::VariableExpense => self.total_variable,
            base::Kind::FixedExpense => self.total_fixed,
        }
    }

    /// Variable plus fixed expenses.
    pub fn total_expenses(self) -> base::Cents {
        self.total_variable.saturating_add(self.total_fixed)
    }

    pub fn balance(self) -> base::Cents {
        self.total_income.saturating_sub(self.total_expenses())
    }

    /// One slice per kind, in [`base::Kind::ALL`] order.
    pub fn breakdown(self) -> [(base::Kind, base::Cents); 3] {
        base::Kind::ALL.map(|k| (k, self.total(k)))
    }

    fn add(&mut self, t: &base::Transaction) {
        let total = match t.kind() {
            base::Kind::Income => &mut self.total_income,
            base::Kind::VariableExpense => &mut self.total_variable,
            base::Kind::FixedExpense => &mut self.total_fixed,
        };
        *total = total.saturating_add(t.amount());
    }
}

impl<'a> FromIterator<&'a base::Transaction> for Summary {
    fn from_iter<T: IntoIterator<Item = &'a base::Transaction>>(iter: T) -> Self {
        let mut summary = Self::default();
        for t in iter {
            summary.add(t);
        }
        summary
    }
}

/// Totals `transactions` per kind.
pub fn summarize<'a, I>(transactions: I) -> Summary
where
    I: IntoIterator<Item = &'a base::Transaction>,
{
    transactions.into_iter().collect()
}
