pub mod buydown;
pub mod cash_out;
pub mod payment;
pub mod purchase;
pub mod refinance;
pub mod rent_vs_buy;
pub mod reverse;
