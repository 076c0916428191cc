// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every appliance request goes through [`dispatch`], which asks
//! [`FilteringState::begin`] before spawning the HTTP task. Results come back
//! as [`Message::Outcome`] and are folded in by [`handle_outcome`].

use super::{HeaderMenu, Message, Screen};
use crate::api::{self, Client};
use crate::error::Result;
use crate::filtering::{FilteringState, Intent, Notice, Outcome};
use crate::ui::blocklist::{self, Event as BlocklistEvent};
use crate::ui::navbar::{self, Event as NavbarEvent, MenuActions};
use crate::ui::notifications::{self, Notification};
use iced::{Point, Size, Task};

/// Tag shared by status fetch failures so a later success can clear them.
const FETCH_STATUS_TAG: &str = "fetch-status";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub filtering: &'a mut FilteringState,
    pub blocklist: &'a mut blocklist::State,
    pub navbar: &'a mut navbar::State,
    pub menu: &'a mut HeaderMenu,
    pub notifications: &'a mut notifications::Manager,
    pub client: &'a Result<Client>,
    pub window_size: &'a mut Size,
    pub cursor: &'a mut Point,
}

/// Starts `intent` unless the same work is already in flight.
pub fn dispatch(ctx: &mut UpdateContext<'_>, intent: Intent) -> Task<Message> {
    if !ctx.filtering.begin(&intent) {
        tracing::debug!(intent = intent.label(), "request already in flight, ignored");
        return Task::none();
    }

    match ctx.client {
        Ok(client) => Task::perform(api::execute(client.clone(), intent), Message::Outcome),
        // Without a usable server address every request fails the same way.
        Err(error) => Task::done(Message::Outcome(intent.failed(error.clone()))),
    }
}

/// Folds a finished request into the state and reports it to the user.
pub fn handle_outcome(ctx: &mut UpdateContext<'_>, outcome: Outcome) -> Task<Message> {
    let fetched = matches!(outcome, Outcome::StatusFetched(Ok(_)));
    let rules_saved = matches!(outcome, Outcome::RulesSaved(Ok(())));
    let reaction = ctx.filtering.apply(outcome);

    if rules_saved {
        ctx.blocklist.rules_saved();
    }
    if fetched {
        ctx.blocklist.sync(ctx.filtering);
        ctx.notifications.clear_tagged(FETCH_STATUS_TAG);
        tracing::info!(
            filters = ctx.filtering.filters().len(),
            enabled = ctx.filtering.filtering_enabled(),
            "filtering status loaded"
        );
    }

    match reaction.notice {
        Notice::Silent => {}
        Notice::Success(key) => {
            tracing::info!(notice = key, "appliance request succeeded");
            ctx.notifications.push(Notification::success(key));
        }
        Notice::Refreshed(updated) => {
            tracing::info!(updated, "filter lists refreshed");
            ctx.notifications.push(
                Notification::success("notification-filters-refreshed")
                    .with_arg("count", updated.to_string()),
            );
        }
        Notice::Failure { action, error } => {
            ctx.notifications.push(
                Notification::error(error.i18n_key())
                    .with_arg("detail", error.detail())
                    .with_title(format!("action-{action}"))
                    .with_tag(action),
            );
        }
    }

    if reaction.refetch && ctx.filtering.request_refetch() {
        dispatch(ctx, Intent::FetchStatus)
    } else {
        Task::none()
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(ctx.navbar, message, ctx.menu, *ctx.window_size) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(screen) => navigate(ctx, screen),
    }
}

/// Tracks the window size. Crossing the compact breakpoint closes the menu,
/// so a flag left over from the other layout never opens the drawer.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    if navbar::is_compact(ctx.window_size.width) != navbar::is_compact(size.width) {
        ctx.menu.close_menu();
    }
    *ctx.window_size = size;
    Task::none()
}

/// Forwards a left press at the last known cursor position to the navbar.
pub fn handle_pointer_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let point = *ctx.cursor;
    handle_navbar_message(ctx, navbar::Message::PointerPressed(point))
}

/// Switches screens; screens showing filter data reload it on entry.
pub fn navigate(ctx: &mut UpdateContext<'_>, screen: Screen) -> Task<Message> {
    if *ctx.screen == screen {
        return Task::none();
    }
    tracing::info!(route = screen.path(), "navigate");
    *ctx.screen = screen;

    if screen.shows_filtering() {
        dispatch(ctx, Intent::FetchStatus)
    } else {
        Task::none()
    }
}

pub fn handle_blocklist_message(
    ctx: &mut UpdateContext<'_>,
    message: blocklist::Message,
) -> Task<Message> {
    match blocklist::update(ctx.blocklist, ctx.filtering, message) {
        BlocklistEvent::None => Task::none(),
        BlocklistEvent::Dispatch(intent) => dispatch(ctx, intent),
        BlocklistEvent::OpenUrl(url) => {
            if let Err(err) = open::that_detached(&url) {
                tracing::warn!(url = %url, error = %err, "failed to open link");
            }
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filtering::{test_entry, FilteringStatus};
    use iced::widget::text_editor::{Action, Edit};
    use std::sync::Arc;

    struct Fixture {
        screen: Screen,
        filtering: FilteringState,
        blocklist: blocklist::State,
        navbar: navbar::State,
        menu: HeaderMenu,
        notifications: notifications::Manager,
        client: Result<Client>,
        window_size: Size,
        cursor: Point,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                screen: Screen::Dashboard,
                filtering: FilteringState::new(),
                blocklist: blocklist::State::default(),
                navbar: navbar::State::default(),
                menu: HeaderMenu::default(),
                notifications: notifications::Manager::new(),
                client: Err(Error::Config("no server".into())),
                window_size: Size::new(1280.0, 800.0),
                cursor: Point::ORIGIN,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                screen: &mut self.screen,
                filtering: &mut self.filtering,
                blocklist: &mut self.blocklist,
                navbar: &mut self.navbar,
                menu: &mut self.menu,
                notifications: &mut self.notifications,
                client: &self.client,
                window_size: &mut self.window_size,
                cursor: &mut self.cursor,
            }
        }
    }

    fn status() -> FilteringStatus {
        FilteringStatus {
            enabled: true,
            interval: 24,
            filters: vec![test_entry("https://a.example/list.txt", "A", true)],
            user_rules: "||ads.example^".into(),
        }
    }

    #[test]
    fn navigating_to_blocklist_starts_status_fetch() {
        let mut fixture = Fixture::new();
        let _ = navigate(&mut fixture.ctx(), Screen::Blocklist);

        assert_eq!(fixture.screen, Screen::Blocklist);
        assert!(fixture.filtering.processing().filters);
        assert!(fixture.filtering.table_loading());
    }

    #[test]
    fn navigating_elsewhere_does_not_fetch() {
        let mut fixture = Fixture::new();
        let _ = navigate(&mut fixture.ctx(), Screen::QueryLog);
        assert!(!fixture.filtering.processing().filters);
    }

    #[test]
    fn duplicate_dispatch_is_refused() {
        let mut fixture = Fixture::new();
        let _ = dispatch(&mut fixture.ctx(), Intent::RefreshFilters);
        assert!(fixture.filtering.processing().refresh);
        // A second press while in flight leaves the flag and spawns nothing.
        let _ = dispatch(&mut fixture.ctx(), Intent::RefreshFilters);
        assert!(fixture.filtering.processing().refresh);
    }

    #[test]
    fn successful_fetch_syncs_and_clears_fetch_errors() {
        let mut fixture = Fixture::new();
        assert!(fixture.filtering.begin(&Intent::FetchStatus));
        let _ = handle_outcome(
            &mut fixture.ctx(),
            Outcome::StatusFetched(Err(Error::Http("refused".into()))),
        );
        assert_eq!(fixture.notifications.visible_count(), 1);

        assert!(fixture.filtering.begin(&Intent::FetchStatus));
        let _ = handle_outcome(&mut fixture.ctx(), Outcome::StatusFetched(Ok(status())));

        assert_eq!(fixture.notifications.visible_count(), 0);
        assert_eq!(fixture.filtering.filters().len(), 1);
        assert!(!fixture.filtering.table_loading());
    }

    #[test]
    fn failure_toast_names_action_and_error() {
        let mut fixture = Fixture::new();
        let intent = Intent::AddFilter {
            url: "https://b.example".into(),
            name: "B".into(),
        };
        assert!(fixture.filtering.begin(&intent));
        let _ = handle_outcome(
            &mut fixture.ctx(),
            intent.failed(Error::Api {
                status: 500,
                message: "boom".into(),
            }),
        );

        let toast = fixture.notifications.visible().next().unwrap();
        assert_eq!(toast.title_key(), Some("action-add-filter"));
        assert_eq!(toast.message_key(), "error-server");
        assert_eq!(toast.tag(), Some("add-filter"));
        assert!(!fixture.filtering.processing().add);
    }

    #[test]
    fn mutation_success_refetches_status() {
        let mut fixture = Fixture::new();
        let intent = Intent::RemoveFilter {
            url: "https://a.example/list.txt".into(),
        };
        assert!(fixture.filtering.begin(&intent));
        let _ = handle_outcome(
            &mut fixture.ctx(),
            Outcome::FilterRemoved {
                url: "https://a.example/list.txt".into(),
                result: Ok(()),
            },
        );

        assert!(!fixture.filtering.processing().remove);
        assert!(fixture.filtering.processing().filters);
        assert_eq!(fixture.notifications.visible_count(), 1);
    }

    #[test]
    fn mutation_finishing_during_fetch_refetches_after_it() {
        let mut fixture = Fixture::new();
        let b = "https://b.example/hosts";
        assert!(fixture.filtering.begin(&Intent::FetchStatus));
        let intent = Intent::RemoveFilter { url: b.into() };
        assert!(fixture.filtering.begin(&intent));

        let _ = handle_outcome(
            &mut fixture.ctx(),
            Outcome::FilterRemoved {
                url: b.into(),
                result: Ok(()),
            },
        );
        assert!(fixture.filtering.processing().filters);

        // The stale answer lands and a fresh fetch is started right away.
        let _ = handle_outcome(
            &mut fixture.ctx(),
            Outcome::StatusFetched(Ok(FilteringStatus {
                filters: vec![test_entry(b, "B", true)],
                ..status()
            })),
        );
        assert_eq!(fixture.filtering.filters().len(), 1);
        assert!(fixture.filtering.processing().filters);
    }

    #[test]
    fn crossing_breakpoint_closes_menu() {
        let mut fixture = Fixture::new();
        // A desktop link click flips the flag with no drawer on screen.
        let _ = handle_navbar_message(
            &mut fixture.ctx(),
            navbar::Message::Navigate(Screen::QueryLog),
        );
        assert!(fixture.menu.open);

        let _ = handle_window_resized(&mut fixture.ctx(), Size::new(1024.0, 700.0));
        assert!(fixture.menu.open);

        let _ = handle_window_resized(&mut fixture.ctx(), Size::new(600.0, 700.0));
        assert!(!fixture.menu.open);
        assert_eq!(fixture.window_size, Size::new(600.0, 700.0));
    }

    #[test]
    fn saved_rules_survive_next_fetch() {
        let mut fixture = Fixture::new();
        let _ = handle_blocklist_message(
            &mut fixture.ctx(),
            blocklist::Message::Rules(blocklist::rules::Message::Edit(Action::Edit(Edit::Paste(
                Arc::new("||mine.example^".to_string()),
            )))),
        );

        assert!(fixture.filtering.begin(&Intent::FetchStatus));
        let _ = handle_outcome(&mut fixture.ctx(), Outcome::StatusFetched(Ok(status())));
        assert!(fixture.filtering.user_rules().contains("||mine.example^"));

        assert!(fixture.filtering.begin(&Intent::SetRules("||mine.example^".into())));
        let _ = handle_outcome(&mut fixture.ctx(), Outcome::RulesSaved(Ok(())));

        // Once saved, the server copy is authoritative again.
        assert!(fixture.filtering.begin(&Intent::FetchStatus));
        let _ = handle_outcome(&mut fixture.ctx(), Outcome::StatusFetched(Ok(status())));
        assert_eq!(fixture.filtering.user_rules(), "||ads.example^");
    }

    #[test]
    fn refresh_reports_updated_count() {
        let mut fixture = Fixture::new();
        assert!(fixture.filtering.begin(&Intent::RefreshFilters));
        let _ = handle_outcome(&mut fixture.ctx(), Outcome::FiltersRefreshed(Ok(2)));

        let toast = fixture.notifications.visible().next().unwrap();
        assert_eq!(toast.message_key(), "notification-filters-refreshed");
        assert_eq!(
            toast.message_args(),
            &[("count".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn outside_press_closes_open_menu() {
        let mut fixture = Fixture::new();
        fixture.menu.open = true;
        fixture.cursor = Point::new(600.0, 500.0);

        let _ = handle_pointer_pressed(&mut fixture.ctx());
        assert!(!fixture.menu.open);
    }
}
