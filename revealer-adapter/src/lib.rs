//! Adapter utilities for the `revealer` crate.
//!
//! The `revealer` crate is UI-agnostic and focuses on the core timing and
//! state decisions. This crate provides small, framework-neutral helpers
//! commonly needed by adapters:
//!
//! - The pure render projection `(machine state, props) -> (style, class
//!   name, children)`, including cascade explosion of child content
//! - A lifecycle controller wrapping mount / prop-change / unmount
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![forbid(unsafe_code)]

mod lifecycle;
mod render;

#[cfg(test)]
mod tests;

pub use lifecycle::Lifecycle;
pub use render::{CascadeChild, Children, Frame, RenderedChildren, render};
