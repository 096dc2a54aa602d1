pub mod calculations;
pub mod currency;
pub mod display;
pub mod models;
pub mod parse;

pub use calculations::{calculate, calculate_tip};
pub use currency::{CurrencyFormat, CurrencyParseError, Locale, SymbolPosition};
pub use display::{TipLabels, tip_amount_label, total_label};
pub use models::*;
pub use parse::{ParseCostError, parse_cost, parse_optional_cost};
