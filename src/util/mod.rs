//! Browser glue shared by the controller and the entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps web-sys calls out of the controller so its behavior can be tested
//! against an in-memory page.

pub mod page;
