use crate::base;
use crate::cli::render::totals;

const COLUMN_GAP: &str = "  ";

/// One line per transaction, columns aligned, optionally followed by the
/// totals of the listed transactions.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub transactions: Vec<base::Transaction>,
    pub summary: Option<base::Summary>,
}

impl Config {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Character count of the widest cell in a column.
fn width<F>(transactions: &[base::Transaction], cell: F) -> usize
where
    F: Fn(&base::Transaction) -> String,
{
    transactions
        .iter()
        .map(|t| cell(t).chars().count())
        .max()
        .unwrap_or_default()
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ts = &self.transactions;
        let id_width = width(ts, |t| t.id().to_string());
        let kind_width = base::Kind::ALL.iter().map(|k| k.label().len()).max().unwrap_or_default();
        let category_width = width(ts, |t| t.category().to_string());
        let description_width = width(ts, |t| t.description().to_string());
        let amount_width = width(ts, |t| totals::amount_cell(t.signed_amount()));

        for t in &self.transactions {
            let amount = format!(
                "{:>w$}",
                totals::amount_cell(t.signed_amount()),
                w = amount_width
            );
            writeln!(
                f,
                "{:>id_width$}{gap}{}{gap}{:<kind_width$}{gap}{:<category_width$}{gap}{:<description_width$}{gap}{}",
                t.id(),
                t.date(),
                t.kind().label(),
                t.category(),
                t.description(),
                self.charset.paint(&amount, t.kind()),
                gap = COLUMN_GAP,
            )?;
        }

        if let Some(summary) = self.summary {
            writeln!(f)?;
            let totals = totals::Config {
                charset: self.charset.clone(),
                summary,
            };
            write!(f, "{}", totals)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::fixture;
    use rstest::rstest;

    use super::*;

    #[fixture]
    fn transactions() -> Vec<base::Transaction> {
        r#"[
            {"id":1,"description":"Salary","amount":500000,"kind":"income","date":"2024-01-05"},
            {"id":2,"description":"Rent","amount":150000,"kind":"fixed","date":"2024-01-01","category":"Home"}
        ]"#
        .parse::<base::Journal>()
        .unwrap()
        .iter()
        .cloned()
        .collect()
    }

    #[rstest]
    fn test_display(transactions: Vec<base::Transaction>) {
        let config = Config {
            charset: base::Charset::default(),
            transactions,
            summary: None,
        };
        assert_eq!(
            config.to_string(),
            indoc!(
                "
                1  2024-01-05  Income    Other  Salary   5,000.00 
                2  2024-01-01  Fixed     Home   Rent    (1,500.00)
                "
            )
        );
    }

    #[rstest]
    fn test_display_with_summary(transactions: Vec<base::Transaction>) {
        let summary = base::summarize(&transactions);
        let config = Config {
            charset: base::Charset::default(),
            transactions,
            summary: Some(summary),
        };
        assert_eq!(
            config.to_string(),
            indoc!(
                "
                1  2024-01-05  Income    Other  Salary   5,000.00 
                2  2024-01-01  Fixed     Home   Rent    (1,500.00)

                Income ----  5,000.00 
                Variable --      0.00 
                Fixed ----- (1,500.00)
                Expenses -- (1,500.00)
                Balance ===  3,500.00 
                "
            )
        );
    }

    #[test]
    fn test_is_empty() {
        let config = Config {
            charset: base::Charset::default(),
            transactions: Vec::new(),
            summary: None,
        };
        assert!(config.is_empty());
        assert_eq!(config.to_string(), "");
    }
}
