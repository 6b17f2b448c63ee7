// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a small navigation demo built with the Iced GUI
//! framework.
//!
//! It shows a scrollable gallery of remotely loaded images, a full-bleed
//! dialog screen that recolors the simulated system bars for its lifetime,
//! and a standalone full-screen overlay, with internationalization via
//! Fluent and user preferences in a TOML settings file.

pub mod app;
pub mod chrome;
pub mod config;
pub mod error;
pub mod i18n;
pub mod net;
pub mod ui;
