// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod unit_format;

pub use unit_format::{SymbolUnits, UnitFormat};
