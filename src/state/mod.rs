//! Pure view models derived from server data.
//!
//! DESIGN
//! ======
//! Nothing in here touches the DOM, so every rule about what the page shows
//! is testable natively.

pub mod nav;
pub mod team;
