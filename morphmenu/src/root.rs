//! The single owner of the open/closed intent.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::animation::Animate;
use crate::config::MenuConfig;
use crate::controller::{IntentObserver, MenuController, OverlayController, nav_items};
use crate::node::{NodeKind, Position, VisualNode};

pub const SCREEN_ID: &str = "screen";

/// Holds the authoritative intent and the controllers that observe it.
///
/// Controllers never write the intent. The menu's toggle callback only
/// records a request; [`flush`](Self::flush) folds pending requests into one
/// new value and notifies every observer in the same cycle.
#[derive(Debug)]
pub struct MenuRoot {
    config: MenuConfig,
    open: bool,
    menu: MenuController,
    overlay: Option<OverlayController>,
    requests: Rc<Cell<usize>>,
}

impl MenuRoot {
    pub fn new<I, S>(config: MenuConfig, labels: I, open: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let requests = Rc::new(Cell::new(0));
        let sink = Rc::clone(&requests);
        let items = nav_items(labels, config.primary_count);
        let menu = MenuController::new(config.clone(), items, open, move || {
            sink.set(sink.get() + 1);
        });
        let overlay = open.then(|| OverlayController::new(&config));

        Self {
            config,
            open,
            menu,
            overlay,
            requests,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn overlay(&self) -> Option<&OverlayController> {
        self.overlay.as_ref()
    }

    /// Toggle requests recorded but not yet applied.
    pub fn pending_requests(&self) -> usize {
        self.requests.get()
    }

    /// Deliver a tap to the menu and apply whatever it requested.
    pub fn tap(&mut self, node_id: &str) -> bool {
        let handled = self.request_tap(node_id);
        self.flush();
        handled
    }

    /// Deliver a tap to the menu without applying it. Requests collect until
    /// the next [`flush`](Self::flush).
    pub fn request_tap(&mut self, node_id: &str) -> bool {
        self.menu.tap(node_id)
    }

    pub fn toggle(&mut self) {
        self.request_toggle();
        self.flush();
    }

    /// Record a toggle request without applying it.
    pub fn request_toggle(&mut self) {
        self.requests.set(self.requests.get() + 1);
    }

    pub fn set_open(&mut self, open: bool) {
        if open != self.open {
            self.toggle();
        }
    }

    /// Apply pending toggle requests. Only the net result is delivered, so
    /// two requests in one cycle cancel out instead of queueing.
    pub fn flush(&mut self) {
        let pending = self.requests.replace(0);
        if pending == 0 {
            return;
        }
        let next = if pending % 2 == 1 { !self.open } else { self.open };
        if next == self.open {
            log::trace!("{pending} toggle requests cancelled out");
            return;
        }

        log::debug!("intent: open = {next}");
        self.open = next;
        self.menu.on_intent_changed(next);
        self.overlay = next.then(|| OverlayController::new(&self.config));
    }

    pub fn render(&self) -> VisualNode {
        let screen = VisualNode::new(NodeKind::Screen, SCREEN_ID)
            .position(Position::Fill)
            .child(self.menu.render());

        match &self.overlay {
            Some(overlay) => screen.child(overlay.render()),
            None => screen,
        }
    }
}

impl Animate for MenuRoot {
    fn tick(&mut self, dt: Duration) -> bool {
        let mut moving = self.menu.tick(dt);
        if let Some(overlay) = &mut self.overlay {
            moving |= overlay.tick(dt);
        }
        moving
    }

    fn is_animating(&self) -> bool {
        self.menu.is_animating() || self.overlay.as_ref().is_some_and(|o| o.is_animating())
    }
}
