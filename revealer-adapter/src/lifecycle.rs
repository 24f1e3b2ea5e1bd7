use revealer::{RevealOptions, Revealer, ViewportEvent};

use crate::{Children, Frame, render};

/// A framework-neutral controller that wraps a [`Revealer`] and its bound
/// children through the host's component lifecycle.
///
/// Adapters drive it by calling:
/// - `mount(now_ms)` once the element reference is bound
/// - `set_options` / `update_options` when props change (trigger/spy
///   diffing and re-arming is handled by the machine)
/// - `handle_event` / `tick` for viewport events and timer deadlines
/// - `render()` whenever state changed, painting the returned [`Frame`]
///
/// Dropping the controller unmounts the machine, so listener teardown
/// cannot be forgotten.
#[derive(Clone, Debug)]
pub struct Lifecycle {
    revealer: Revealer,
    children: Children,
}

impl Lifecycle {
    pub fn new(options: RevealOptions, children: Children) -> Self {
        Self {
            revealer: Revealer::new(options),
            children,
        }
    }

    pub fn revealer(&self) -> &Revealer {
        &self.revealer
    }

    pub fn revealer_mut(&mut self) -> &mut Revealer {
        &mut self.revealer
    }

    pub fn children(&self) -> &Children {
        &self.children
    }

    pub fn set_children(&mut self, children: Children) {
        self.children = children;
    }

    pub fn mount(&mut self, now_ms: u64) {
        self.revealer.mount(now_ms);
    }

    pub fn set_options(&mut self, options: RevealOptions, now_ms: u64) {
        self.revealer.set_options(options, now_ms);
    }

    pub fn update_options(&mut self, now_ms: u64, f: impl FnOnce(&mut RevealOptions)) {
        self.revealer.update_options(now_ms, f);
    }

    pub fn handle_event(&mut self, event: ViewportEvent, now_ms: u64) {
        self.revealer.handle_event(event, now_ms);
    }

    pub fn tick(&mut self, now_ms: u64) {
        self.revealer.tick(now_ms);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.revealer.next_deadline()
    }

    /// Projects the current state into what to paint.
    pub fn render(&self) -> Frame {
        render(&self.revealer, &self.children)
    }

    pub fn unmount(&mut self) {
        self.revealer.unmount();
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.revealer.unmount();
    }
}
