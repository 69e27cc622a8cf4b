//! # devicehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository and health port traits defined in `devicehub-app::ports`
//! - Manage `SQLite` connection pool lifecycle (bounded size, acquire timeout)
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between database rows (`snake_case` columns) and domain types
//!
//! ## Dependency rule
//! Depends on `devicehub-app` (for port traits) and `devicehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_group_repo;
mod device_repo;
mod error;
mod health_probe;
mod pool;

pub use device_group_repo::SqliteDeviceGroupRepository;
pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use health_probe::SqliteHealthProbe;
pub use pool::{Config, Database};
