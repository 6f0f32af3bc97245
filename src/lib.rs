pub mod catalog;
pub mod cli;
pub mod report;
pub mod select;
pub mod trace;

pub use select::diff::{diff_options, unchanged, OptionListDiff, Relabelled};
pub use select::index::build;
pub use select::option_model::{to_stored_value, SelectIndex, SelectOption, TOKEN_DELIMITER};
