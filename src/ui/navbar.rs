// SPDX-License-Identifier: MPL-2.0
//! Top navigation menu.
//!
//! Three top-level links and two dropdown groups, rendered in their visual
//! order. Below [`sizing::COMPACT_BREAKPOINT`] the bar collapses to a
//! hamburger that expands a vertical drawer.
//!
//! The menu does not own the "menu open" flag; it drives it through
//! [`MenuActions`]. Which dropdown is expanded is local [`State`].
//!
//! Outside clicks are detected geometrically: the menu is laid out with the
//! fixed sizes from [`sizing`], so [`regions`] can compute the rectangles it
//! occupies and a pointer press anywhere else closes the menu.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding, Point, Rectangle, Size,
};

/// Collaborator that owns the "menu open" flag.
pub trait MenuActions {
    fn is_menu_open(&self) -> bool;
    fn close_menu(&mut self);
    fn toggle_menu_open(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Dashboard,
    Settings,
    Filters,
    Log,
    Guide,
}

impl MenuIcon {
    fn svg<'a>(self) -> Svg<'a> {
        match self {
            MenuIcon::Dashboard => icons::dashboard(),
            MenuIcon::Settings => icons::cog(),
            MenuIcon::Filters => icons::funnel(),
            MenuIcon::Log => icons::list(),
            MenuIcon::Guide => icons::book(),
        }
    }
}

/// A navigable menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub screen: Screen,
    /// Active only on an exact path match.
    pub exact: bool,
    pub text_key: &'static str,
    pub icon: Option<MenuIcon>,
    /// Visual order; group items inherit their group's order.
    pub order: u8,
}

impl MenuItem {
    const fn link(screen: Screen, text_key: &'static str, icon: MenuIcon, order: u8) -> Self {
        Self {
            screen,
            exact: false,
            text_key,
            icon: Some(icon),
            order,
        }
    }

    const fn grouped(screen: Screen, text_key: &'static str, order: u8) -> Self {
        Self {
            screen,
            exact: false,
            text_key,
            icon: None,
            order,
        }
    }

    #[must_use]
    pub fn route(&self) -> &'static str {
        self.screen.path()
    }

    /// Whether `path` selects this item: the route itself, or a sub-path
    /// below it unless the item is exact.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        let route = self.route();
        if self.exact {
            return path == route;
        }
        match path.strip_prefix(route) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || route.ends_with('/'),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupId {
    Settings,
    Filters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: GroupId,
    pub label_key: &'static str,
    pub icon: MenuIcon,
    pub order: u8,
    pub items: &'static [MenuItem],
}

impl MenuGroup {
    /// Whether `path` is one of this group's routes. Set membership only;
    /// sub-paths do not count.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.items.iter().any(|item| item.route() == path)
    }
}

pub static MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        exact: true,
        ..MenuItem::link(Screen::Dashboard, "nav-dashboard", MenuIcon::Dashboard, 0)
    },
    MenuItem::link(Screen::QueryLog, "nav-query-log", MenuIcon::Log, 3),
    MenuItem::link(Screen::SetupGuide, "nav-setup-guide", MenuIcon::Guide, 4),
];

pub static SETTINGS_ITEMS: [MenuItem; 5] = [
    MenuItem::grouped(Screen::GeneralSettings, "nav-general-settings", 1),
    MenuItem::grouped(Screen::DnsSettings, "nav-dns-settings", 1),
    MenuItem::grouped(Screen::EncryptionSettings, "nav-encryption-settings", 1),
    MenuItem::grouped(Screen::ClientSettings, "nav-client-settings", 1),
    MenuItem::grouped(Screen::DhcpSettings, "nav-dhcp-settings", 1),
];

pub static FILTERS_ITEMS: [MenuItem; 3] = [
    MenuItem::grouped(Screen::Blocklist, "nav-dns-blocklist", 2),
    MenuItem::grouped(Screen::Allowlist, "nav-dns-allowlist", 2),
    MenuItem::grouped(Screen::CustomRules, "nav-custom-rules", 2),
];

pub static GROUPS: [MenuGroup; 2] = [
    MenuGroup {
        id: GroupId::Settings,
        label_key: "nav-settings",
        icon: MenuIcon::Settings,
        order: 1,
        items: &SETTINGS_ITEMS,
    },
    MenuGroup {
        id: GroupId::Filters,
        label_key: "nav-filters",
        icon: MenuIcon::Filters,
        order: 2,
        items: &FILTERS_ITEMS,
    },
];

/// A top-level slot in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Link(&'static MenuItem),
    Group(&'static MenuGroup),
}

impl Entry {
    #[must_use]
    pub fn order(&self) -> u8 {
        match self {
            Entry::Link(item) => item.order,
            Entry::Group(group) => group.order,
        }
    }
}

/// Top-level entries sorted by visual order.
#[must_use]
pub fn entries() -> Vec<Entry> {
    let mut entries: Vec<Entry> = MENU_ITEMS
        .iter()
        .map(Entry::Link)
        .chain(GROUPS.iter().map(Entry::Group))
        .collect();
    entries.sort_by_key(Entry::order);
    entries
}

fn group(id: GroupId) -> Option<&'static MenuGroup> {
    GROUPS.iter().find(|group| group.id == id)
}

// =============================================================================
// State & update
// =============================================================================

/// Menu-local state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    open_group: Option<GroupId>,
}

impl State {
    #[must_use]
    pub fn open_group(&self) -> Option<GroupId> {
        self.open_group
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    /// Hamburger pressed (compact layout).
    ToggleMenu,
    ToggleGroup(GroupId),
    /// A top-level link or dropdown item was clicked.
    Navigate(Screen),
    /// A pointer button went down anywhere in the window.
    PointerPressed(Point),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Whether a window of `width` uses the hamburger layout.
#[must_use]
pub fn is_compact(width: f32) -> bool {
    width < sizing::COMPACT_BREAKPOINT
}

/// Bounds of the dropdown panel for `id` in the desktop layout.
fn dropdown_bounds(id: GroupId) -> Option<Rectangle> {
    let index = entries()
        .iter()
        .position(|entry| matches!(entry, Entry::Group(group) if group.id == id))?;
    let group = group(id)?;
    Some(Rectangle {
        x: spacing::MD + sizing::NAV_BRAND_WIDTH + index as f32 * sizing::NAV_ENTRY_WIDTH,
        y: sizing::NAVBAR_HEIGHT,
        width: sizing::DROPDOWN_WIDTH,
        height: group.items.len() as f32 * sizing::MENU_ITEM_HEIGHT + 2.0 * spacing::XS,
    })
}

/// Rectangles the menu currently occupies in a window of size `window`.
#[must_use]
pub fn regions(state: &State, menu_open: bool, window: Size) -> Vec<Rectangle> {
    let mut regions = vec![Rectangle {
        x: 0.0,
        y: 0.0,
        width: window.width,
        height: sizing::NAVBAR_HEIGHT,
    }];

    if is_compact(window.width) {
        if menu_open {
            regions.push(Rectangle {
                x: 0.0,
                y: sizing::NAVBAR_HEIGHT,
                width: sizing::DRAWER_WIDTH,
                height: (window.height - sizing::NAVBAR_HEIGHT).max(0.0),
            });
        }
    } else if let Some(bounds) = state.open_group.and_then(dropdown_bounds) {
        regions.push(bounds);
    }

    regions
}

/// Process a navbar message and return the corresponding event.
pub fn update(
    state: &mut State,
    message: Message,
    actions: &mut impl MenuActions,
    window: Size,
) -> Event {
    match message {
        Message::ToggleMenu => {
            actions.toggle_menu_open();
            Event::None
        }
        Message::ToggleGroup(id) => {
            state.open_group = if state.open_group == Some(id) {
                None
            } else {
                Some(id)
            };
            Event::None
        }
        Message::Navigate(screen) => {
            actions.toggle_menu_open();
            state.open_group = None;
            Event::Navigate(screen)
        }
        Message::PointerPressed(point) => {
            let inside = regions(state, actions.is_menu_open(), window)
                .iter()
                .any(|region| region.contains(point));
            if !inside {
                actions.close_menu();
                state.open_group = None;
            }
            Event::None
        }
    }
}

// =============================================================================
// View
// =============================================================================

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub current: Screen,
    pub menu_open: bool,
    pub window_width: f32,
}

/// Renders the bar itself.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Container::new(Text::new(ctx.i18n.tr("app-name")).size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::NAV_BRAND_WIDTH))
        .height(Length::Fill)
        .align_y(Vertical::Center);

    let mut row = Row::new().height(Length::Fill).align_y(Vertical::Center);

    if is_compact(ctx.window_width) {
        let hamburger = button(icons::sized(icons::hamburger(), sizing::ICON_MD))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::nav_entry(ctx.menu_open));
        row = row
            .spacing(spacing::SM)
            .push(hamburger)
            .push(brand);
    } else {
        row = row.push(brand);
        let path = ctx.current.path();
        for entry in entries() {
            row = row.push(
                Container::new(entry_button(ctx, entry, path))
                    .width(Length::Fixed(sizing::NAV_ENTRY_WIDTH)),
            );
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding(Padding::ZERO.left(spacing::MD).right(spacing::MD))
        .style(styles::container::navbar)
        .into()
}

/// Renders the open dropdown panel or drawer, positioned for a full-window
/// overlay layer.
pub fn overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let path = ctx.current.path();

    if is_compact(ctx.window_width) {
        if !ctx.menu_open {
            return None;
        }
        let drawer = Container::new(drawer_column(ctx, path))
            .width(Length::Fixed(sizing::DRAWER_WIDTH))
            .height(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::menu_panel);
        return Some(
            Container::new(drawer)
                .padding(Padding::ZERO.top(sizing::NAVBAR_HEIGHT))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        );
    }

    let id = ctx.state.open_group?;
    let group = group(id)?;
    let bounds = dropdown_bounds(id)?;

    let items = group.items.iter().fold(Column::new(), |column, item| {
        column.push(item_button(ctx, item, path, 0.0))
    });
    let panel = Container::new(items)
        .width(Length::Fixed(bounds.width))
        .height(Length::Fixed(bounds.height))
        .padding(spacing::XS)
        .style(styles::container::menu_panel);

    Some(
        Container::new(panel)
            .padding(Padding::ZERO.top(bounds.y).left(bounds.x))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top)
            .into(),
    )
}

fn drawer_column<'a>(ctx: &ViewContext<'a>, path: &str) -> Column<'a, Message> {
    let mut column = Column::new();
    for entry in entries() {
        match entry {
            Entry::Link(item) => column = column.push(item_button(ctx, item, path, 0.0)),
            Entry::Group(group) => {
                column = column.push(
                    Container::new(entry_button(ctx, entry, path))
                        .height(Length::Fixed(sizing::MENU_ITEM_HEIGHT)),
                );
                if ctx.state.open_group == Some(group.id) {
                    for item in group.items {
                        column = column.push(item_button(ctx, item, path, spacing::LG));
                    }
                }
            }
        }
    }
    column
}

fn entry_button<'a>(ctx: &ViewContext<'a>, entry: Entry, path: &str) -> Element<'a, Message> {
    let (icon, label, active, message) = match entry {
        Entry::Link(item) => (
            item.icon,
            ctx.i18n.tr(item.text_key),
            item.is_active(path),
            Message::Navigate(item.screen),
        ),
        Entry::Group(group) => (
            Some(group.icon),
            ctx.i18n.tr(group.label_key),
            group.contains(path),
            Message::ToggleGroup(group.id),
        ),
    };

    let mut content = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if let Some(icon) = icon {
        content = content.push(icons::sized(icon.svg(), sizing::ICON_SM));
    }
    content = content.push(Text::new(label).size(typography::BODY));
    if matches!(entry, Entry::Group(_)) {
        content = content.push(icons::sized(icons::chevron_down(), sizing::ICON_SM));
    }

    button(content)
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::nav_entry(active))
        .into()
}

fn item_button<'a>(
    ctx: &ViewContext<'a>,
    item: &MenuItem,
    path: &str,
    indent: f32,
) -> Element<'a, Message> {
    let mut content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fixed(indent)));
    if let Some(icon) = item.icon {
        content = content.push(icons::sized(icon.svg(), sizing::ICON_SM));
    }
    content = content.push(Text::new(ctx.i18n.tr(item.text_key)).size(typography::BODY));

    button(content)
        .on_press(Message::Navigate(item.screen))
        .padding([0.0, spacing::SM])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MENU_ITEM_HEIGHT))
        .style(styles::button::nav_entry(item.is_active(path)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Size = Size {
        width: 1280.0,
        height: 800.0,
    };
    const COMPACT: Size = Size {
        width: 600.0,
        height: 800.0,
    };

    #[derive(Debug, Default)]
    struct Recorder {
        open: bool,
        closes: usize,
        toggles: usize,
    }

    impl MenuActions for Recorder {
        fn is_menu_open(&self) -> bool {
            self.open
        }

        fn close_menu(&mut self) {
            self.closes += 1;
            self.open = false;
        }

        fn toggle_menu_open(&mut self) {
            self.toggles += 1;
            self.open = !self.open;
        }
    }

    fn center(rect: Rectangle) -> Point {
        Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
    }

    #[test]
    fn entries_follow_visual_order() {
        let orders: Vec<u8> = entries().iter().map(Entry::order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4]);
        assert!(matches!(entries()[1], Entry::Group(g) if g.id == GroupId::Settings));
        assert!(matches!(entries()[2], Entry::Group(g) if g.id == GroupId::Filters));
    }

    #[test]
    fn group_items_inherit_group_order() {
        for group in &GROUPS {
            assert!(group.items.iter().all(|item| item.order == group.order));
        }
    }

    #[test]
    fn group_trigger_active_only_for_member_routes() {
        let [settings, filters] = &GROUPS;

        for item in &SETTINGS_ITEMS {
            assert!(settings.contains(item.route()));
            assert!(!filters.contains(item.route()));
        }
        for item in &FILTERS_ITEMS {
            assert!(filters.contains(item.route()));
            assert!(!settings.contains(item.route()));
        }
        for path in ["/", "/logs", "/guide", "/filters/extra", "/settingsx"] {
            assert!(!settings.contains(path), "{path}");
            assert!(!filters.contains(path), "{path}");
        }
    }

    #[test]
    fn exact_link_matches_only_its_route() {
        let dashboard = &MENU_ITEMS[0];
        assert!(dashboard.exact);
        assert!(dashboard.is_active("/"));
        assert!(!dashboard.is_active("/logs"));
    }

    #[test]
    fn non_exact_link_matches_sub_paths() {
        let logs = &MENU_ITEMS[1];
        assert!(logs.is_active("/logs"));
        assert!(logs.is_active("/logs/today"));
        assert!(!logs.is_active("/logsx"));
        assert!(!logs.is_active("/"));
    }

    #[test]
    fn press_outside_closes_menu_once() {
        let mut state = State::default();
        let mut actions = Recorder::default();

        let event = update(
            &mut state,
            Message::PointerPressed(Point::new(400.0, 500.0)),
            &mut actions,
            DESKTOP,
        );

        assert_eq!(event, Event::None);
        assert_eq!(actions.closes, 1);
        assert_eq!(actions.toggles, 0);
    }

    #[test]
    fn press_on_bar_does_not_close() {
        let mut state = State::default();
        let mut actions = Recorder::default();

        update(
            &mut state,
            Message::PointerPressed(Point::new(900.0, sizing::NAVBAR_HEIGHT / 2.0)),
            &mut actions,
            DESKTOP,
        );

        assert_eq!(actions.closes, 0);
    }

    #[test]
    fn press_inside_open_dropdown_does_not_close() {
        let mut state = State::default();
        let mut actions = Recorder::default();
        update(
            &mut state,
            Message::ToggleGroup(GroupId::Filters),
            &mut actions,
            DESKTOP,
        );
        let panel = dropdown_bounds(GroupId::Filters).unwrap();

        update(
            &mut state,
            Message::PointerPressed(center(panel)),
            &mut actions,
            DESKTOP,
        );
        assert_eq!(actions.closes, 0);
        assert_eq!(state.open_group(), Some(GroupId::Filters));

        // Once collapsed, the same spot is outside.
        update(
            &mut state,
            Message::ToggleGroup(GroupId::Filters),
            &mut actions,
            DESKTOP,
        );
        update(
            &mut state,
            Message::PointerPressed(center(panel)),
            &mut actions,
            DESKTOP,
        );
        assert_eq!(actions.closes, 1);
    }

    #[test]
    fn press_outside_collapses_dropdown() {
        let mut state = State::default();
        let mut actions = Recorder::default();
        update(
            &mut state,
            Message::ToggleGroup(GroupId::Settings),
            &mut actions,
            DESKTOP,
        );

        update(
            &mut state,
            Message::PointerPressed(Point::new(1200.0, 700.0)),
            &mut actions,
            DESKTOP,
        );

        assert_eq!(state.open_group(), None);
        assert_eq!(actions.closes, 1);
    }

    #[test]
    fn link_click_toggles_menu_without_closing() {
        let mut state = State::default();
        let mut actions = Recorder {
            open: true,
            ..Recorder::default()
        };
        update(
            &mut state,
            Message::ToggleGroup(GroupId::Filters),
            &mut actions,
            COMPACT,
        );

        let event = update(
            &mut state,
            Message::Navigate(Screen::Blocklist),
            &mut actions,
            COMPACT,
        );

        assert_eq!(event, Event::Navigate(Screen::Blocklist));
        assert_eq!(actions.toggles, 1);
        assert_eq!(actions.closes, 0);
        assert_eq!(state.open_group(), None);
    }

    #[test]
    fn compact_drawer_counts_as_inside_only_while_open() {
        let mut state = State::default();
        let inside_drawer = Point::new(sizing::DRAWER_WIDTH / 2.0, 400.0);

        let mut actions = Recorder {
            open: true,
            ..Recorder::default()
        };
        update(
            &mut state,
            Message::PointerPressed(inside_drawer),
            &mut actions,
            COMPACT,
        );
        assert_eq!(actions.closes, 0);

        let mut actions = Recorder::default();
        update(
            &mut state,
            Message::PointerPressed(inside_drawer),
            &mut actions,
            COMPACT,
        );
        assert_eq!(actions.closes, 1);
    }

    #[test]
    fn hamburger_toggles_menu() {
        let mut state = State::default();
        let mut actions = Recorder::default();
        update(&mut state, Message::ToggleMenu, &mut actions, COMPACT);
        assert!(actions.open);
        update(&mut state, Message::ToggleMenu, &mut actions, COMPACT);
        assert!(!actions.open);
        assert_eq!(actions.closes, 0);
    }

    #[test]
    fn dropdown_lies_below_its_trigger() {
        let bounds = dropdown_bounds(GroupId::Settings).unwrap();
        assert_eq!(bounds.y, sizing::NAVBAR_HEIGHT);
        assert_eq!(
            bounds.x,
            spacing::MD + sizing::NAV_BRAND_WIDTH + sizing::NAV_ENTRY_WIDTH
        );
        assert_eq!(
            bounds.height,
            5.0 * sizing::MENU_ITEM_HEIGHT + 2.0 * spacing::XS
        );
    }

    #[test]
    fn view_renders_in_both_layouts() {
        let i18n = I18n::default();
        let state = State {
            open_group: Some(GroupId::Settings),
        };
        for (width, menu_open) in [(DESKTOP.width, false), (COMPACT.width, true)] {
            let ctx = ViewContext {
                i18n: &i18n,
                state: &state,
                current: Screen::Blocklist,
                menu_open,
                window_width: width,
            };
            let _bar = view(&ctx);
            assert!(overlay(&ctx).is_some());
        }
    }

    #[test]
    fn closed_compact_menu_has_no_overlay() {
        let i18n = I18n::default();
        let state = State::default();
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            current: Screen::Dashboard,
            menu_open: false,
            window_width: COMPACT.width,
        };
        assert!(overlay(&ctx).is_none());
    }
}
