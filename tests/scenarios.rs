//! End-to-end scenarios driven through the public API: fixture → sidebar →
//! observer → content controller.

use std::cell::RefCell;
use std::rc::Rc;

use zoutline::domain::fixtures;
use zoutline::domain::item::preorder;
use zoutline::{
    handle_event, initialize, Action, AppState, Config, ContentController, Event, Fixture, ListItem,
    Sidebar, Theme,
};

fn run(state: &mut AppState, events: &[Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        match handle_event(state, event) {
            Ok((_, mut emitted)) => actions.append(&mut emitted),
            Err(e) => panic!("{event:?} failed: {e}"),
        }
    }
    actions
}

#[test]
fn flat_fixture_selects_first_leaf() {
    let mut state = initialize(&Config::default());
    assert_eq!(state.sidebar.rows().len(), 100_000);

    let actions = run(&mut state, &[Event::SelectItem]);

    assert_eq!(actions, vec![Action::RenamePane { title: "Leaf 1".to_string() }]);
    let view = state.render_content().ok();
    assert_eq!(
        view.map(|v| (v.text, v.icon_key, v.glyph)),
        Some(("Selected item: Leaf 1".to_string(), "1.circle".to_string(), "①"))
    );
}

#[test]
fn flat_fixture_reaches_last_leaf() {
    let mut state = initialize(&Config::default());

    run(&mut state, &[Event::Bottom, Event::SelectItem]);

    assert_eq!(state.selected_item().map(ListItem::title), Some("Leaf 100000"));
}

#[test]
fn collapsed_leaf_in_third_folder_resolves() {
    let config = Config {
        fixture: Fixture::Folders,
        ..Config::default()
    };
    let mut state = initialize(&config);
    assert_eq!(state.sidebar.rows().len(), 4);

    let target = Rc::clone(&state.sidebar.items()[2].child_items()[123]);
    let resolved = state.sidebar.select(target.id());

    assert_eq!(resolved.as_deref().map(ListItem::title), Some("Leaf 50124"));
    assert_eq!(state.selected_item().map(ListItem::id), Some(target.id()));
    assert_eq!(
        state.render_content().ok().map(|v| v.text),
        Some("Selected item: Leaf 50124".to_string())
    );
}

#[test]
fn no_selection_shows_placeholder() {
    let state = initialize(&Config {
        leaf_count: 5,
        ..Config::default()
    });

    let view = state.render_content().ok();

    assert_eq!(
        view.map(|v| (v.text, v.icon_key)),
        Some(("No item selected".to_string(), "info.circle".to_string()))
    );
}

#[test]
fn outline_matches_preorder_when_fully_expanded() {
    let items = fixtures::folders(3, 4).child_items().to_vec();
    let expected: Vec<_> = preorder(&items).map(ListItem::id).collect();

    let sidebar = Sidebar::with_seed(items, 0);

    assert_eq!(sidebar.content().map(|c| c.items()), Some(expected));
}

#[test]
fn set_forest_twice_is_idempotent() {
    let items = fixtures::folders(2, 3).child_items().to_vec();
    let mut sidebar = Sidebar::with_seed(items.clone(), 0);
    let once = sidebar.content().map(|c| c.items());

    sidebar.set_forest(items);

    assert_eq!(sidebar.content().map(|c| c.items()), once);
}

#[test]
fn shuffle_permutes_roots_and_keeps_subtrees() {
    let items = fixtures::folders(6, 3).child_items().to_vec();
    let mut sidebar = Sidebar::with_seed(items.clone(), 11);

    sidebar.shuffle();

    let mut before: Vec<_> = items.iter().map(|i| i.id()).collect();
    let mut after: Vec<_> = sidebar.items().iter().map(|i| i.id()).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);

    for root in sidebar.items() {
        let children: Vec<_> = root.child_items().iter().map(|c| c.id()).collect();
        let snapshot = sidebar.content().map(|c| c.children_of(root.id()).to_vec());
        assert_eq!(snapshot, Some(children));
    }
}

#[test]
fn observer_fires_once_per_select() {
    let items = fixtures::flat(10).child_items().to_vec();
    let known = items[4].id();
    let mut sidebar = Sidebar::with_seed(items, 0);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    sidebar.set_selection_observer(move |item| {
        sink.borrow_mut().push(item.map(|i| i.title().to_string()));
    });

    sidebar.select(known);
    sidebar.select(zoutline::ItemId::new());

    assert_eq!(*seen.borrow(), vec![Some("Leaf 5".to_string()), None]);
}

#[test]
fn content_controller_is_independent_of_app_state() {
    let leaf = ListItem::leaf("Leaf 50", "50.circle");

    let view = ContentController::new().render(Some(&leaf)).ok();

    assert_eq!(view.map(|v| v.glyph), Some("㊿"));
}

#[test]
fn narrow_terminal_walks_between_panes() {
    let items = fixtures::folders(2, 2).child_items().to_vec();
    let mut state = AppState::new(Sidebar::with_seed(items, 0), Theme::default());
    state.viewport_cols = 40;

    run(&mut state, &[Event::Expand, Event::KeyDown, Event::SelectItem]);
    assert_eq!(state.selected_item().map(ListItem::title), Some("Leaf 1"));

    let vm = state.compute_viewmodel(24, 40).ok();
    assert_eq!(vm.map(|vm| vm.layout), Some(zoutline::Layout::Single(zoutline::PaneFocus::Content)));

    run(&mut state, &[Event::Back, Event::KeyDown]);
    assert_eq!(state.sidebar.cursor_row().and_then(|r| state.sidebar.item(r.id)).map(|i| i.title().to_string()),
        Some("Leaf 2".to_string()));
}
