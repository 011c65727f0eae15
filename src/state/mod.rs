//! Application state: the route table, the section registry, and the
//! navigation-menu and contact-form state machines.
//!
//! Everything in this module is plain Rust with no DOM dependency, so the
//! transition tables can be tested natively. Components wrap these types in
//! signals and perform the emitted actions.

pub mod contact;
pub mod menu;
pub mod route;
pub mod sections;
