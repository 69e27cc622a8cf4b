//! Wire representations of domain types.
//!
//! Storage uses `snake_case` names and the API uses `camelCase`; every
//! renaming between domain structs and JSON happens in this module, one
//! submodule per entity.

pub mod device;
pub mod device_group;
pub mod health;
pub mod page;
