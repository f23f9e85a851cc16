pub mod barchart;
pub mod listing;
pub mod totals;
