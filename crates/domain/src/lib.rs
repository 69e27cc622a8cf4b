//! # devicehub-domain
//!
//! Pure domain model for the devicehub backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Device groups** (named, city-bound collections owned by a user)
//! - Define **Devices** (serial-numbered hardware belonging to one group)
//! - Define **Pages** (the page request arithmetic and the page result envelope)
//! - Define the **Health** status reported by the liveness probe
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod device_group;
pub mod health;
pub mod page;
