// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`blocklist`] - Filter table, add/edit dialog and custom rules editor
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top navigation with dropdown groups and a compact drawer
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod blocklist;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
