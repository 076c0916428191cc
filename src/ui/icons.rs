// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small monochrome SVGs embedded as string constants. Handles are
//! cached using `OnceLock` so each icon is parsed once. Widgets tint them
//! with the current text color, so one set serves both themes.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `delete_filter`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $doc:literal, $path:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $path,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone()).style(tinted)
        }
    };
}

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(
    dashboard,
    "Dashboard icon: four tiles.",
    r#"<rect x="3" y="3" width="7" height="7"/><rect x="14" y="3" width="7" height="7"/><rect x="3" y="14" width="7" height="7"/><rect x="14" y="14" width="7" height="7"/>"#
);
define_icon!(
    cog,
    "Settings icon: gear.",
    r#"<circle cx="12" cy="12" r="3"/><path d="M12 2v3M12 19v3M4.9 4.9l2.1 2.1M17 17l2.1 2.1M2 12h3M19 12h3M4.9 19.1 7 17M17 7l2.1-2.1"/>"#
);
define_icon!(
    funnel,
    "Filters icon: funnel.",
    r#"<path d="M3 4h18l-7 8v6l-4 2v-8z"/>"#
);
define_icon!(
    list,
    "Log icon: bulleted list.",
    r#"<path d="M8 6h13M8 12h13M8 18h13"/><circle cx="4" cy="6" r="1"/><circle cx="4" cy="12" r="1"/><circle cx="4" cy="18" r="1"/>"#
);
define_icon!(
    book,
    "Guide icon: open book.",
    r#"<path d="M2 4h7a3 3 0 0 1 3 3v13a2 2 0 0 0-2-2H2zM22 4h-7a3 3 0 0 0-3 3v13a2 2 0 0 1 2-2h8z"/>"#
);
define_icon!(
    hamburger,
    "Menu icon: three horizontal bars.",
    r#"<path d="M3 6h18M3 12h18M3 18h18"/>"#
);
define_icon!(
    chevron_down,
    "Chevron pointing down.",
    r#"<path d="m6 9 6 6 6-6"/>"#
);

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(plus, "Plus sign.", r#"<path d="M12 5v14M5 12h14"/>"#);
define_icon!(
    refresh,
    "Circular arrows.",
    r#"<path d="M21 12a9 9 0 1 1-3-6.7L21 8M21 3v5h-5"/>"#
);
define_icon!(
    pencil,
    "Pencil.",
    r#"<path d="M17 3a2.8 2.8 0 0 1 4 4L7.5 20.5 2 22l1.5-5.5z"/>"#
);
define_icon!(
    trash,
    "Trash can.",
    r#"<path d="M3 6h18M8 6V4h8v2M6 6l1 14h10l1-14"/>"#
);
define_icon!(cross, "Cross (X).", r#"<path d="M18 6 6 18M6 6l12 12"/>"#);

// =============================================================================
// Status Icons
// =============================================================================

define_icon!(checkmark, "Checkmark.", r#"<path d="M20 6 9 17l-5-5"/>"#);
define_icon!(
    info,
    "Letter i in a circle.",
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4M12 8h.01"/>"#
);
define_icon!(
    warning,
    "Exclamation mark in a triangle.",
    r#"<path d="M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0zM12 9v4M12 17h.01"/>"#
);

/// Tints the black source strokes with the theme text color.
fn tinted(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}

/// Tints an icon with a fixed color, e.g. a severity accent.
pub fn colored<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Sets a square size on an icon.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
