use crate::base;

/// Minimum number of fill characters between a label and its amount.
const MIN_FILL: usize = 2;

/// Formats `amount` so that right-aligned cells line up on the decimal point
/// whether or not the amount is wrapped in parentheses.
pub fn amount_cell(amount: base::Cents) -> String {
    let mut s = amount.to_string();
    if !amount.is_negative() {
        s.push(' ');
    }
    s
}

/// Table of per-kind totals and the resulting balance.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub summary: base::Summary,
}

struct Line {
    label: &'static str,
    amount: base::Cents,
    fill: char,
    kind: base::Kind,
}

impl Config {
    fn lines(&self) -> [Line; 5] {
        let s = self.summary;
        let dash = self.charset.dash;
        let balance_kind = if s.balance().is_negative() {
            base::Kind::VariableExpense
        } else {
            base::Kind::Income
        };
        [
            Line {
                label: base::Kind::Income.label(),
                amount: s.total_income,
                fill: dash,
                kind: base::Kind::Income,
            },
            Line {
                label: base::Kind::VariableExpense.label(),
                amount: -s.total_variable,
                fill: dash,
                kind: base::Kind::VariableExpense,
            },
            Line {
                label: base::Kind::FixedExpense.label(),
                amount: -s.total_fixed,
                fill: dash,
                kind: base::Kind::FixedExpense,
            },
            Line {
                label: "Expenses",
                amount: -s.total_expenses(),
                fill: dash,
                kind: base::Kind::VariableExpense,
            },
            Line {
                label: "Balance",
                amount: s.balance(),
                fill: self.charset.rule,
                kind: balance_kind,
            },
        ]
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self.lines();
        let label_width = lines.iter().map(|l| l.label.len()).max().unwrap_or_default();
        let amount_width = lines
            .iter()
            .map(|l| amount_cell(l.amount).len())
            .max()
            .unwrap_or_default();
        for l in lines {
            let fill = l
                .fill
                .to_string()
                .repeat(label_width - l.label.len() + MIN_FILL);
            let amount = format!("{:>w$}", amount_cell(l.amount), w = amount_width);
            writeln!(
                f,
                "{} {} {}",
                l.label,
                fill,
                self.charset.paint(&amount, l.kind)
            )?;
        }
        Ok(())
    }
}
