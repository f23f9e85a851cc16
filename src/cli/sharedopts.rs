pub const PERIOD_HELP: &str = "Period of interest";
pub const PERIOD_HELP_LONG: &str = "Period of interest

Must be one of:
all: every transaction
mn: the month n months from the current one ('n' is optional and defaults to 0)
yyyy-mm: one month of one year, e.g. 2024-01 or 2024-jan
a comma-separated list of months in any year, by number or name, e.g. 1,2 or jan,feb";

#[derive(clap::Args)]
pub struct CategoriesOpts {
    /// Wildcard patterns to match categories of interest
    ///
    /// Use commas to separate multiple patterns. A transaction is included if
    /// its category matches any pattern. Matching is case-sensitive.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub categories: Vec<String>,
}
