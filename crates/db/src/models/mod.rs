//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts where the table takes writes

pub mod dashboard;
pub mod dispatch;
pub mod printed_mrp;
pub mod product;
pub mod session;
pub mod user;
