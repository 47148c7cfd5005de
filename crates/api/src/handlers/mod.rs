pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod import;
pub mod marketplace;
pub mod printed_mrp;
pub mod product;
