// Application layer - the counting ledger and its errors.
// Any front end (CLI, TUI, mobile binding) drives counts through `Ledger`.

pub mod error;
pub mod ledger;

pub use error::*;
pub use ledger::*;
