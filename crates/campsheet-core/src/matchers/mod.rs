//! Text matchers: free-text cell → structured value.
//!
//! Each matcher is a [`crate::rules`] cascade with a defined value for absent
//! cells and for text no rule recognises, so none of them can fail.

pub mod ages;
pub mod prices;
pub mod registration;

pub use ages::{parse_ages, parse_ages_traced, AgeRange};
pub use prices::{parse_prices, parse_prices_traced, PriceRange};
pub use registration::{parse_opens_date, parse_status, parse_status_traced};
