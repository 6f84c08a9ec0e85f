pub mod table;
pub mod format;

pub use table::Table;
pub use format::format_currency;
