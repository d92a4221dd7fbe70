// ============================================================================
// Amount Format Library
// Significant-digit text codec for numbers and measured quantities
// ============================================================================

//! # Amount Format
//!
//! Parsing and formatting of booleans, radix integers, decimals and
//! measured quantities with explicit uncertainty.
//!
//! ## Features
//!
//! - **Cursor-based incremental parsing** for composing value parsers over
//!   one input string, with recorded failure offsets
//! - **Significant-digit formatting** driven by a power-of-ten table, with
//!   fixed and scientific notation and natural round-trip precision
//! - **Pluggable uncertainty notations** (plus-minus, bracket, exact
//!   digits only)
//! - **Opaque units** delegated to a host-provided unit service
//!
//! ## Example
//!
//! ```rust
//! use amount_format::prelude::*;
//!
//! let style = AmountStyle::plus_minus(2);
//! let units = SymbolUnits;
//!
//! // Format a measured quantity
//! let measured = Amount::measured(1.34, 0.01, "m".to_string());
//! let text = style.format(&measured, &units).unwrap();
//! assert_eq!(text, "(1.34 ± 0.01) m");
//!
//! // And read it back
//! let parsed = style.parse_str(&text, &units).unwrap().unwrap();
//! assert_eq!(parsed, measured);
//!
//! // Exact quantities carry no uncertainty text
//! let exact = Amount::exact(5, "kg".to_string());
//! assert_eq!(style.format(&exact, &units).unwrap(), "5 kg");
//! ```

pub mod codec;
pub mod domain;
pub mod interfaces;
pub mod style;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        format_bool, format_f64, format_i64, format_integer, format_value, parse_bool,
        parse_bool_at, parse_f64, parse_f64_at, parse_i64, parse_i64_at, Cursor, FormatError,
        ParseError, ParseErrorKind,
    };
    pub use crate::domain::{Amount, AmountValue};
    pub use crate::interfaces::{SymbolUnits, UnitFormat};
    pub use crate::style::AmountStyle;
}
