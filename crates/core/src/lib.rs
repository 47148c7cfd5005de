//! Pure domain logic for the retail back-office service.
//!
//! Nothing in this crate talks to PostgreSQL or HTTP directly. Store access
//! for the import pipeline goes through the [`import::ImportStore`] trait,
//! implemented by `backoffice-db`.

pub mod barcode;
pub mod error;
pub mod import;
pub mod marketplace;
pub mod types;
