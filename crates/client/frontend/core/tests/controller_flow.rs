//! End-to-end page flows against the in-memory store.

use client_frontend_core::{
    AppController, FormEdit, FrontendConfig, MessageLevel, Page, Request, Response, Route,
    dispatch,
};
use client_store_core::{FighterStore, InMemoryFighterStore, TransportError};
use roster_core::{FighterClass, NewFighter, StatKind, StatLine};

/// Runs a request and every follow-up it triggers.
async fn drive(app: &mut AppController, store: &InMemoryFighterStore, request: Option<Request>) {
    let mut next = request;
    while let Some(request) = next {
        let reply = dispatch(store, request.command).await;
        next = app.handle(Response::new(request.ticket, reply));
    }
}

fn roster(app: &AppController) -> &client_frontend_core::RosterPage {
    match app.page() {
        Page::Roster(page) => page,
        other => panic!("expected roster, got {:?}", other.route()),
    }
}

async fn seeded() -> InMemoryFighterStore {
    let store = InMemoryFighterStore::new();
    for (name, class, (s, p, m)) in [
        ("Blaze", FighterClass::Warrior, (8, 5, 3)),
        ("Shadow Blade", FighterClass::Rogue, (6, 9, 4)),
        ("Mystic Seer", FighterClass::Mage, (3, 4, 10)),
    ] {
        store
            .create(
                NewFighter::new(name)
                    .with_class(class)
                    .with_stats(StatLine::from_values(s, p, m)),
            )
            .await
            .unwrap();
    }
    store
}

#[tokio::test]
async fn roster_loads_newest_first_with_team_stats() {
    let store = seeded().await;
    let (mut app, initial) = AppController::new(FrontendConfig::default());
    drive(&mut app, &store, Some(initial)).await;

    let page = roster(&app);
    let names: Vec<_> = page.fighters().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Mystic Seer", "Shadow Blade", "Blaze"]);
    assert_eq!(page.team_stats().team_power, 6);
}

#[tokio::test]
async fn create_flow_returns_to_roster_with_new_fighter() {
    let store = InMemoryFighterStore::new();
    let (mut app, initial) = AppController::new(FrontendConfig::default());
    drive(&mut app, &store, Some(initial)).await;

    let load = app.navigate(Route::Create);
    assert!(load.is_none());

    // Submitting an empty form stays on the page.
    assert!(app.submit().is_none());
    let Page::Create(page) = app.page() else {
        panic!("expected create page");
    };
    assert!(page.error().is_some());

    app.edit_form(FormEdit::Name("Frost Monk".into()));
    app.edit_form(FormEdit::Class(FighterClass::Monk));
    app.edit_form(FormEdit::AdjustStat(StatKind::Magic, 2));
    let submit = app.submit();
    drive(&mut app, &store, submit).await;

    assert_eq!(app.route(), Route::Roster);
    let created = &roster(&app).fighters()[0];
    assert_eq!(created.name, "Frost Monk");
    assert_eq!(created.stats, StatLine::from_values(7, 6, 8));
    assert_eq!(created.description, "A mighty monk ready for battle.");
    assert_eq!(app.messages().latest().unwrap().text, "Created Frost Monk");
}

#[tokio::test]
async fn edit_then_delete_flow() {
    let store = seeded().await;
    let (mut app, initial) = AppController::new(FrontendConfig::default());
    drive(&mut app, &store, Some(initial)).await;

    // Top card is the newest fighter.
    let open = app.open_selected();
    drive(&mut app, &store, open).await;
    let Page::Detail(detail) = app.page() else {
        panic!("expected detail page");
    };
    let id = detail.id().clone();
    assert_eq!(detail.view().unwrap().ability.name, "Arcane Blast");

    let edit = app.edit_focused();
    drive(&mut app, &store, edit).await;
    app.edit_form(FormEdit::Description("Sees all.".into()));
    let submit = app.submit();
    drive(&mut app, &store, submit).await;

    assert_eq!(store.get(&id).await.unwrap().description, "Sees all.");
    assert_eq!(app.route(), Route::Roster);

    let edit = app.navigate(Route::Edit(id.clone()));
    drive(&mut app, &store, edit).await;
    assert!(app.request_delete().is_none());
    let delete = app.request_delete();
    drive(&mut app, &store, delete).await;

    assert!(store.get(&id).await.unwrap_err().is_not_found());
    assert_eq!(roster(&app).fighters().len(), 2);
}

#[tokio::test]
async fn quick_update_recomputes_team_stats() {
    let store = seeded().await;
    let (mut app, initial) = AppController::new(FrontendConfig::default());
    drive(&mut app, &store, Some(initial)).await;

    let update = app.quick_update(StatKind::Strength, 7);
    drive(&mut app, &store, update).await;

    // Mystic Seer strength 3 -> 10; averages (10+6+8)/3 = 8, 6, 6.
    let stats = roster(&app).team_stats();
    assert_eq!(stats.avg_strength, 8);
    assert_eq!(stats.team_power, 7);
    assert_eq!(app.messages().latest().unwrap().text, "Updated Mystic Seer");
}

#[tokio::test]
async fn transport_failure_is_reported_and_retry_succeeds() {
    let store = seeded().await;
    store.fail_next(TransportError::Injected("offline".into()));

    let (mut app, initial) = AppController::new(FrontendConfig::default());
    drive(&mut app, &store, Some(initial)).await;

    assert!(roster(&app).fighters().is_empty());
    assert_eq!(app.messages().latest().unwrap().level, MessageLevel::Error);

    let retry = app.refresh();
    drive(&mut app, &store, retry).await;
    assert_eq!(roster(&app).fighters().len(), 3);
}

#[tokio::test]
async fn editing_a_deleted_fighter_redirects_home() {
    let store = seeded().await;
    let (mut app, _) = AppController::new(FrontendConfig::default());

    let load = app.navigate(Route::Edit("404".into()));
    drive(&mut app, &store, load).await;

    assert_eq!(app.route(), Route::Roster);
    assert_eq!(app.messages().latest().unwrap().level, MessageLevel::Warning);
    assert_eq!(roster(&app).fighters().len(), 3);
}
