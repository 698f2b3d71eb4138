//! Whist scoring: the per-cell rule, the pass over the whole sheet, and the
//! sheet state a front end edits between passes.

pub mod aggregate;
pub mod rule;
pub mod sheet;

pub use aggregate::{recompute, Recomputation};
pub use rule::{classify, score, ContractOutcome};
pub use sheet::Scoresheet;
