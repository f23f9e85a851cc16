pub mod category;
pub mod cents;
pub mod charset;
pub mod config;
pub mod date;
pub mod filter;
pub mod fs;
pub mod journal;
pub mod kind;
pub mod ledger;
pub mod period;
pub mod slot;
pub mod store;
pub mod summary;
pub mod transaction;

pub use category::Category;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use fs::Fs;
pub use journal::Journal;
pub use kind::Kind;
pub use ledger::ExportRow;
pub use ledger::Ledger;
pub use ledger::Order;
pub use ledger::View;
pub use period::MonthSet;
pub use period::Period;
pub use slot::FileSlot;
pub use slot::MemorySlot;
pub use slot::Slot;
pub use store::Store;
pub use summary::Summary;
pub use summary::summarize;
pub use transaction::Draft;
pub use transaction::Transaction;
pub use transaction::TransactionId;
pub use transaction::ValidationError;
