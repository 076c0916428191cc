// SPDX-License-Identifier: MPL-2.0
//! `dns_console` is a desktop administration console for DNS filtering
//! appliances, built with the Iced GUI framework.
//!
//! It manages blocklist subscriptions and custom filtering rules over the
//! appliance's HTTP control API, with Fluent localization and TOML
//! preferences.

pub mod api;
pub mod app;
pub mod error;
pub mod filtering;
pub mod i18n;
pub mod ui;

pub use app::config;
