//! Members Module
//!
//! Member lifecycle management.
//!
//! ## Overview
//! Members are registered with caller-chosen ids and enumerated in
//! registration order. Registration enforces the policy age floor;
//! removal is refused while the member still has a book out, which keeps
//! the lending ledger free of dangling active borrows.
//!
//! ## Submodules
//! - **`service`**: register, look up, list, patch, and remove members.
//! - **`types`**: the member record and its partial-update shape.

pub mod service;
pub mod types;
