//! Wire data model of the EduBridge portal, shared between the backend
//! service and its clients. Entity types live in each family's module root,
//! request descriptors in the `handle` submodules.

pub mod account;
pub mod admin;
pub mod forum;
pub mod material;
pub mod support;
