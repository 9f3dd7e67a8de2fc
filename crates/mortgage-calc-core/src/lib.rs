pub mod amortization;
pub mod error;
pub mod types;

#[cfg(feature = "purchase")]
pub mod purchase;

#[cfg(feature = "refinance")]
pub mod refinance;

#[cfg(feature = "rent_vs_buy")]
pub mod rent_vs_buy;

#[cfg(feature = "cash_out")]
pub mod cash_out;

#[cfg(feature = "buydown")]
pub mod buydown;

#[cfg(feature = "reverse")]
pub mod reverse;

pub use error::MortgageCalcError;
pub use types::*;

/// Standard result type for all mortgage-calc operations
pub type MortgageCalcResult<T> = Result<T, MortgageCalcError>;
