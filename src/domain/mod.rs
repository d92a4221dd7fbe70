// ============================================================================
// Domain Module
// Core value objects consumed and produced by the formatters
// ============================================================================

mod amount;

pub use amount::{Amount, AmountValue};
