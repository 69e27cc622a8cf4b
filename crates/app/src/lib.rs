//! # devicehub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceGroupRepository`: create and page through device groups
//!   - `DeviceRepository`: page through the devices of one group
//!   - `HealthProbe`: single-shot liveness query against the store
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceGroupService`: list (paged), create
//!   - `DeviceService`: list a group's devices (paged)
//!   - `HealthService`: check store connectivity
//! - Bound every port call with a deadline
//!
//! ## Dependency rule
//! Depends on `devicehub-domain` only (plus `tokio::time` for deadlines).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
