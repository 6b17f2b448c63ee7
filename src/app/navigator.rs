// SPDX-License-Identifier: MPL-2.0
//! Navigation state machine.
//!
//! A route stack over the three screens, plus an orthogonal overlay flag
//! layered on top. Transitions are pure: [`Navigator::apply`] maps the
//! current state and an event to the next state without side effects, so the
//! whole reachable state space is unit-testable.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    List,
    Dialog,
}

/// Visibility of the standalone full-screen overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible,
}

/// Navigation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Push the dialog route (home button or any list row).
    OpenDialog,
    /// Pop one navigation frame.
    Back,
    ShowOverlay,
    DismissOverlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
    overlay: OverlayState,
}

impl Navigator {
    /// Starts with a single frame; the stack is never empty afterwards.
    #[must_use]
    pub fn new(start: Route) -> Self {
        Self {
            stack: vec![start],
            overlay: OverlayState::Hidden,
        }
    }

    /// The route currently on screen.
    #[must_use]
    pub fn current(&self) -> Route {
        *self.stack.last().expect("route stack is never empty")
    }

    /// Number of frames on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Pure transition to the next state.
    ///
    /// `Back` at the start route and `OpenDialog` while the dialog is already
    /// current are no-ops; neither is reachable through the UI, but the
    /// machine stays total either way.
    #[must_use]
    pub fn apply(&self, event: NavEvent) -> Self {
        let mut next = self.clone();
        match event {
            NavEvent::OpenDialog => {
                if next.current() != Route::Dialog {
                    next.stack.push(Route::Dialog);
                }
            }
            NavEvent::Back => {
                if next.stack.len() > 1 {
                    next.stack.pop();
                }
            }
            NavEvent::ShowOverlay => next.overlay = OverlayState::Visible,
            NavEvent::DismissOverlay => next.overlay = OverlayState::Hidden,
        }
        next
    }
}
