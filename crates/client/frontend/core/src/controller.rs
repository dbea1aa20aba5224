//! Application controller: current page, navigation, and reply routing.

use client_store_core::StoreError;
use roster_core::{FighterId, StatKind};

use crate::command::{Command, Reply, Request, Response, Ticket};
use crate::config::FrontendConfig;
use crate::form::FormEdit;
use crate::message::MessageLog;
use crate::pages::{CreatePage, DetailPage, EditPage, RosterPage};
use crate::route::Route;

/// The page currently shown.
#[derive(Clone, Debug)]
pub enum Page {
    Roster(RosterPage),
    Detail(DetailPage),
    Create(CreatePage),
    Edit(EditPage),
}

impl Page {
    fn for_route(route: Route) -> Self {
        match route {
            Route::Roster => Page::Roster(RosterPage::new()),
            Route::Detail(id) => Page::Detail(DetailPage::new(id)),
            Route::Create => Page::Create(CreatePage::new()),
            Route::Edit(id) => Page::Edit(EditPage::new(id)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Roster(_) => Route::Roster,
            Page::Detail(page) => Route::Detail(page.id().clone()),
            Page::Create(_) => Route::Create,
            Page::Edit(page) => Route::Edit(page.id().clone()),
        }
    }
}

/// What a reply means for the app once the page has absorbed it.
enum Outcome {
    Stay,
    Notice(String),
    Done { notice: String, next: Route },
    Failed { action: &'static str, error: StoreError },
}

/// Owns the current page and decides where every store reply lands.
///
/// Each navigation starts a new epoch. Requests are stamped with a
/// [`Ticket`] of the epoch they were issued in, and replies from an earlier
/// epoch are dropped, so a page never sees results meant for a page the user
/// already left.
#[derive(Debug)]
pub struct AppController {
    page: Page,
    epoch: u64,
    sequence: u64,
    messages: MessageLog,
    config: FrontendConfig,
}

impl AppController {
    /// Starts on the roster and returns its initial load.
    pub fn new(config: FrontendConfig) -> (Self, Request) {
        let mut roster = RosterPage::new();
        let ticket = Ticket::new(0, 0);
        let command = roster.begin_load(ticket);

        let app = Self {
            page: Page::Roster(roster),
            epoch: 0,
            sequence: 1,
            messages: MessageLog::new(config.messages.capacity),
            config,
        };
        (app, Request { ticket, command })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether a reply stamped with `ticket` would still be applied.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.epoch() == self.epoch
    }

    fn next_ticket(&mut self) -> Ticket {
        let ticket = Ticket::new(self.epoch, self.sequence);
        self.sequence += 1;
        ticket
    }

    fn issue(&mut self, command: Option<Command>) -> Option<Request> {
        let command = command?;
        let ticket = self.next_ticket();
        Some(Request { ticket, command })
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Replaces the current page and returns its initial load, if any.
    pub fn navigate(&mut self, route: Route) -> Option<Request> {
        self.epoch += 1;
        tracing::debug!(%route, epoch = self.epoch, "navigate");
        self.page = Page::for_route(route);
        self.load_current()
    }

    /// Reloads the current page. Edit forms reload only if nothing loaded yet.
    pub fn refresh(&mut self) -> Option<Request> {
        match &self.page {
            Page::Edit(page) if page.form().is_some() => None,
            Page::Create(_) => None,
            _ => self.load_current(),
        }
    }

    fn load_current(&mut self) -> Option<Request> {
        let ticket = self.next_ticket();
        let command = match &mut self.page {
            Page::Roster(page) => page.begin_load(ticket),
            Page::Detail(page) => page.begin_load(),
            Page::Edit(page) => page.begin_load(),
            Page::Create(_) => return None,
        };
        Some(Request { ticket, command })
    }

    /// Leaves the current page: edit goes back to its detail page, everything
    /// else to the roster.
    pub fn back(&mut self) -> Option<Request> {
        let route = match &self.page {
            Page::Edit(page) => Route::Detail(page.id().clone()),
            Page::Roster(_) => return None,
            Page::Detail(_) | Page::Create(_) => Route::Roster,
        };
        self.navigate(route)
    }

    // ------------------------------------------------------------------------
    // Roster
    // ------------------------------------------------------------------------

    pub fn select_next(&mut self) {
        if let Page::Roster(page) = &mut self.page {
            page.select_next();
        }
    }

    pub fn select_previous(&mut self) {
        if let Page::Roster(page) = &mut self.page {
            page.select_previous();
        }
    }

    fn focused_fighter(&self) -> Option<FighterId> {
        match &self.page {
            Page::Roster(page) => page.selected().map(|f| f.id.clone()),
            Page::Detail(page) => Some(page.id().clone()),
            Page::Create(_) | Page::Edit(_) => None,
        }
    }

    /// Opens the detail page of the selected card.
    pub fn open_selected(&mut self) -> Option<Request> {
        let id = match &self.page {
            Page::Roster(page) => page.selected()?.id.clone(),
            _ => return None,
        };
        self.navigate(Route::Detail(id))
    }

    /// Opens the edit form for the selected card or the fighter on screen.
    pub fn edit_focused(&mut self) -> Option<Request> {
        let id = self.focused_fighter()?;
        self.navigate(Route::Edit(id))
    }

    /// Persists a one-stat change to the selected card.
    pub fn quick_update(&mut self, kind: StatKind, delta: i64) -> Option<Request> {
        let command = match &self.page {
            Page::Roster(page) => page.quick_update(kind, delta),
            _ => None,
        };
        self.issue(command)
    }

    // ------------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------------

    pub fn edit_form(&mut self, edit: FormEdit) {
        match &mut self.page {
            Page::Create(page) => page.apply(edit),
            Page::Edit(page) => page.apply(edit),
            Page::Roster(_) | Page::Detail(_) => {}
        }
    }

    pub fn submit(&mut self) -> Option<Request> {
        let command = match &mut self.page {
            Page::Create(page) => page.submit(),
            Page::Edit(page) => page.submit(),
            Page::Roster(_) | Page::Detail(_) => None,
        };
        self.issue(command)
    }

    /// Deletes the fighter being edited, asking first when configured to.
    pub fn request_delete(&mut self) -> Option<Request> {
        let confirm = self.config.confirm_delete;
        let Page::Edit(page) = &mut self.page else {
            return None;
        };

        let command = page.request_delete(confirm);
        if command.is_none() && page.is_confirming_delete() {
            let name = page.form().map(|f| f.name().to_string()).unwrap_or_default();
            self.messages
                .warning(format!("Delete {name}? Press delete again to confirm."));
        }
        self.issue(command)
    }

    // ------------------------------------------------------------------------
    // Replies
    // ------------------------------------------------------------------------

    /// Applies a store reply and returns any follow-up request (e.g. the load
    /// of the page navigated to after a successful save).
    pub fn handle(&mut self, response: Response) -> Option<Request> {
        let Response { ticket, reply } = response;
        if !self.is_current(ticket) {
            tracing::debug!(?ticket, epoch = self.epoch, "stale reply dropped");
            return None;
        }

        let outcome = match (&mut self.page, reply) {
            (Page::Roster(page), Reply::Listed(result)) => match page.on_listed(ticket, result) {
                Ok(()) => Outcome::Stay,
                Err(error) => Outcome::Failed {
                    action: "load fighters",
                    error,
                },
            },
            (Page::Roster(page), Reply::Updated { id, patch, result }) => {
                match page.on_updated(&id, &patch, result) {
                    Ok(Some(fighter)) => Outcome::Notice(format!("Updated {}", fighter.name)),
                    Ok(None) => Outcome::Stay,
                    Err(error) => Outcome::Failed {
                        action: "update fighter",
                        error,
                    },
                }
            }
            (Page::Detail(page), Reply::Fetched(result)) => match page.on_fetched(result) {
                Ok(()) => Outcome::Stay,
                Err(error) => Outcome::Failed {
                    action: "load fighter",
                    error,
                },
            },
            (Page::Create(page), Reply::Created(result)) => match page.on_created(result) {
                Ok(fighter) => Outcome::Done {
                    notice: format!("Created {}", fighter.name),
                    next: Route::Roster,
                },
                Err(error) => Outcome::Failed {
                    action: "create fighter",
                    error,
                },
            },
            (Page::Edit(page), Reply::Fetched(result)) => match page.on_fetched(result) {
                Ok(()) => Outcome::Stay,
                Err(error) => Outcome::Failed {
                    action: "load fighter",
                    error,
                },
            },
            (Page::Edit(page), Reply::Updated { result, .. }) => {
                let name = page.form().map(|f| f.name().trim().to_string());
                match page.on_finished(result) {
                    Ok(()) => Outcome::Done {
                        notice: format!("Updated {}", name.unwrap_or_default()),
                        next: Route::Roster,
                    },
                    Err(error) => Outcome::Failed {
                        action: "update fighter",
                        error,
                    },
                }
            }
            (Page::Edit(page), Reply::Deleted { result, .. }) => {
                let name = page.form().map(|f| f.name().to_string());
                match page.on_finished(result) {
                    Ok(()) => Outcome::Done {
                        notice: format!("Deleted {}", name.unwrap_or_default()),
                        next: Route::Roster,
                    },
                    Err(error) => Outcome::Failed {
                        action: "delete fighter",
                        error,
                    },
                }
            }
            (page, reply) => {
                tracing::warn!(route = %page.route(), ?reply, "reply does not belong to page");
                Outcome::Stay
            }
        };

        match outcome {
            Outcome::Stay => None,
            Outcome::Notice(text) => {
                self.messages.info(text);
                None
            }
            Outcome::Done { notice, next } => {
                tracing::info!(%notice, "store call succeeded");
                self.messages.info(notice);
                self.navigate(next)
            }
            Outcome::Failed { action, error } => self.report(action, error),
        }
    }

    /// Routes a store failure to where the user sees it.
    fn report(&mut self, action: &'static str, error: StoreError) -> Option<Request> {
        match error {
            // Already shown inline by the form.
            StoreError::Validation(error) => {
                tracing::debug!(action, %error, "validation failed");
                None
            }
            StoreError::NotFound(id) => {
                tracing::warn!(action, %id, "fighter not found");
                self.messages.warning(format!("Fighter {id} not found"));
                self.navigate(Route::Roster)
            }
            StoreError::Transport(error) => {
                self.messages
                    .error(format!("Failed to {action}. Please try again. ({error})"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLevel;
    use client_store_core::TransportError;
    use roster_core::{Fighter, NewFighter};

    fn fighter(id: &str, name: &str) -> Fighter {
        Fighter::from_new(id.into(), NewFighter::new(name).normalized().unwrap())
    }

    #[test]
    fn starts_on_roster_with_a_list_load() {
        let (app, request) = AppController::new(FrontendConfig::default());
        assert_eq!(app.route(), Route::Roster);
        assert_eq!(request.command, Command::List);
        assert!(app.is_current(request.ticket));
    }

    #[test]
    fn reply_after_navigation_is_dropped() {
        let (mut app, initial) = AppController::new(FrontendConfig::default());
        app.navigate(Route::Create);

        let follow_up = app.handle(Response::new(
            initial.ticket,
            Reply::Listed(Ok(vec![fighter("1", "Late")])),
        ));
        assert!(follow_up.is_none());
        assert_eq!(app.route(), Route::Create);

        app.navigate(Route::Roster);
        let Page::Roster(page) = app.page() else {
            panic!("expected roster");
        };
        assert!(page.fighters().is_empty());
    }

    #[test]
    fn not_found_on_detail_warns_and_redirects() {
        let (mut app, _) = AppController::new(FrontendConfig::default());
        let request = app.navigate(Route::Detail("9".into())).unwrap();

        let follow_up = app.handle(Response::new(
            request.ticket,
            Reply::Fetched(Err(StoreError::NotFound("9".into()))),
        ));

        assert_eq!(app.route(), Route::Roster);
        assert_eq!(follow_up.map(|r| r.command), Some(Command::List));
        let latest = app.messages().latest().unwrap();
        assert_eq!(latest.level, MessageLevel::Warning);
        assert!(latest.text.contains("not found"));
    }

    #[test]
    fn transport_error_keeps_page_and_notifies() {
        let (mut app, request) = AppController::new(FrontendConfig::default());
        let follow_up = app.handle(Response::new(
            request.ticket,
            Reply::Listed(Err(StoreError::Transport(TransportError::Network(
                "timed out".into(),
            )))),
        ));

        assert!(follow_up.is_none());
        assert_eq!(app.route(), Route::Roster);
        assert_eq!(app.messages().latest().unwrap().level, MessageLevel::Error);
        assert!(app.refresh().is_some());
    }

    #[test]
    fn delete_confirmation_posts_a_warning() {
        let (mut app, _) = AppController::new(FrontendConfig::default());
        let load = app.navigate(Route::Edit("3".into())).unwrap();
        app.handle(Response::new(load.ticket, Reply::Fetched(Ok(fighter("3", "Temp")))));

        assert!(app.request_delete().is_none());
        assert!(app.messages().latest().unwrap().text.contains("Temp"));
        assert_eq!(
            app.request_delete().map(|r| r.command),
            Some(Command::Delete("3".into()))
        );
    }

    #[test]
    fn back_from_edit_goes_to_detail() {
        let (mut app, _) = AppController::new(FrontendConfig::default());
        app.navigate(Route::Edit("3".into()));
        let request = app.back().unwrap();
        assert_eq!(app.route(), Route::Detail("3".into()));
        assert_eq!(request.command, Command::Get("3".into()));
        assert!(app.back().is_some());
        assert!(app.back().is_none());
    }
}
