// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::filtering::Outcome;
use crate::ui::blocklist;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Blocklist(blocklist::Message),
    /// An appliance request finished.
    Outcome(Outcome),
    Notification(notifications::NotificationMessage),
    WindowResized(Size),
    CursorMoved(Point),
    /// Left mouse button went down at the last known cursor position.
    PointerPressed,
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DNS_CONSOLE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional appliance base URL, overriding `[server] url`.
    pub server: Option<String>,
    /// Optional start route (e.g. `/filters`); unknown routes fall back to
    /// the dashboard.
    pub route: Option<String>,
}
