//! Leptos components mounted into regions of the host page.

pub mod team_display;
