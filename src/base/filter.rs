//! Selection of transactions. Every function here preserves the order of its
//! input and leaves the input untouched.

use crate::base;

/// Keeps transactions whose month is in `months`, in any year. An empty set
/// keeps everything.
pub fn filter_by_months<'a, I>(transactions: I, months: base::MonthSet) -> Vec<&'a base::Transaction>
where
    I: IntoIterator<Item = &'a base::Transaction>,
{
    filter_by_period(transactions, &base::Period::Months(months))
}

/// Keeps transactions dated in the given month of the given year.
pub fn filter_by_month_year<'a, I>(
    transactions: I,
    month: time::Month,
    year: i32,
) -> Vec<&'a base::Transaction>
where
    I: IntoIterator<Item = &'a base::Transaction>,
{
    filter_by_period(transactions, &base::Period::MonthYear { month, year })
}

pub fn filter_by_period<'a, I>(transactions: I, period: &base::Period) -> Vec<&'a base::Transaction>
where
    I: IntoIterator<Item = &'a base::Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| period.contains(t.date()))
        .collect()
}

/// Keeps transactions whose category matches any of the wildcard `patterns`.
/// No patterns keeps everything.
pub fn filter_by_categories<'a, I, T>(transactions: I, patterns: &[T]) -> Vec<&'a base::Transaction>
where
    I: IntoIterator<Item = &'a base::Transaction>,
    T: AsRef<str>,
{
    let patterns = patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    transactions
        .into_iter()
        .filter(|t| patterns.is_empty() || patterns.iter().any(|p| p.matches(t.category().as_str())))
        .collect()
}
