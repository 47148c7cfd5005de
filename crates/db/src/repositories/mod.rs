//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod dispatch_repo;
pub mod marketplace_repo;
pub mod printed_mrp_repo;
pub mod product_repo;
pub mod session_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use dispatch_repo::DispatchRepo;
pub use marketplace_repo::MarketplaceRepo;
pub use printed_mrp_repo::PrintedMrpRepo;
pub use product_repo::ProductRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
