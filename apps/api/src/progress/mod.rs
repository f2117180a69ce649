pub mod aggregate;
pub mod handlers;
pub mod key;
pub mod ledger;

pub use aggregate::{PhaseProgress, Progress, ProgressStats};
pub use ledger::ProgressLedger;
