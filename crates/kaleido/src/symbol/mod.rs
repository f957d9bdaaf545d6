//! Wythoff symbol text: tokenizer, validation, and the uniform table.
//!
//! Grammar
//! - `#<int>` replaces the text with tabulated entry `<int>` (1..=80).
//! - Otherwise three fractions and one bar in any order, e.g. `p q|r`,
//!   `|p q r`. A fraction is `<int>` or `<int>/<int>` and must exceed 1.
//! - The one bar-free entry, `#80`, is accepted literally as well.
//!
//! The parsed form always has four slots; the bar occupies one of them as `0`.

mod parse;
pub mod table;

pub use parse::{SymbolShape, WythoffSymbol};
pub use table::{entries, lookup, UniformEntry, DIRHOMBIC_INDEX, UNIFORM_COUNT};
