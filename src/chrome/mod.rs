// SPDX-License-Identifier: MPL-2.0
//! Process-wide system bar appearance and its scoped override.
//!
//! A desktop window has no OS status or navigation bars, so the application
//! paints its own inset strips (see `ui::insets`) using the appearance stored
//! here. The appearance is the only process-wide mutable UI value and is only
//! touched from the UI thread.
//!
//! Screens that need to recolor the bars acquire a [`ChromeOverride`]: the
//! override records the appearance that was current at acquisition and
//! restores it when dropped. Drop runs exactly once on every exit path, so
//! the restore contract holds whether the screen is left by a tap, a keyboard
//! back, a programmatic pop, or application teardown.

use iced::Color;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Colors and icon tint applied to the simulated system bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemBarAppearance {
    pub background: Color,
    pub dark_icons: bool,
}

impl SystemBarAppearance {
    /// Transparent bars; the window background shows through.
    #[must_use]
    pub fn transparent(dark_icons: bool) -> Self {
        Self {
            background: Color::TRANSPARENT,
            dark_icons,
        }
    }

    /// Opaque black bars with dark status icons, used by the dialog screen.
    #[must_use]
    pub fn opaque_dark() -> Self {
        Self {
            background: Color::BLACK,
            dark_icons: true,
        }
    }
}

impl Default for SystemBarAppearance {
    fn default() -> Self {
        Self::transparent(true)
    }
}

/// Shared handle to the current bar appearance.
#[derive(Debug, Clone, Default)]
pub struct ChromeController {
    shared: Arc<Mutex<SystemBarAppearance>>,
}

impl ChromeController {
    #[must_use]
    pub fn new(initial: SystemBarAppearance) -> Self {
        Self {
            shared: Arc::new(Mutex::new(initial)),
        }
    }

    /// Returns the appearance currently applied to the bars.
    #[must_use]
    pub fn current(&self) -> SystemBarAppearance {
        *self.lock()
    }

    /// Replaces the current appearance.
    pub fn set(&self, appearance: SystemBarAppearance) {
        *self.lock() = appearance;
    }

    fn lock(&self) -> MutexGuard<'_, SystemBarAppearance> {
        // The value is plain data; a poisoned lock still holds a usable copy.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Scoped appearance override. Acquiring applies the new appearance and
/// records the prior one; dropping restores the prior appearance.
#[derive(Debug)]
pub struct ChromeOverride {
    controller: ChromeController,
    prior: SystemBarAppearance,
}

impl ChromeOverride {
    #[must_use]
    pub fn acquire(controller: &ChromeController, appearance: SystemBarAppearance) -> Self {
        let prior = controller.current();
        controller.set(appearance);
        Self {
            controller: controller.clone(),
            prior,
        }
    }

    /// The appearance that will be restored when this override is released.
    #[must_use]
    pub fn prior(&self) -> SystemBarAppearance {
        self.prior
    }
}

impl Drop for ChromeOverride {
    fn drop(&mut self) {
        self.controller.set(self.prior);
    }
}
