use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use snip_tui::app::{App, AppMode};
use tempfile::tempdir;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

async fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(key(code)).await;
}

async fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

async fn add_item(app: &mut App, text: &str) {
    press(app, KeyCode::Char('a')).await;
    type_text(app, text).await;
    press(app, KeyCode::Enter).await;
}

#[tokio::test]
async fn add_prompt_appends_and_selects_new_item() {
    let mut app = App::new(None);

    add_item(&mut app, "alpha").await;

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.list.items(), ["alpha"]);
    assert_eq!(app.selection.get(), Some(0));
}

#[tokio::test]
async fn duplicate_add_keeps_prompt_open_with_message() {
    let mut app = App::new(None);
    add_item(&mut app, "alpha").await;

    press(&mut app, KeyCode::Char('a')).await;
    type_text(&mut app, "alpha").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.mode, AppMode::AddItem);
    assert_eq!(app.status_message.as_deref(), Some("Item already exists"));
    assert_eq!(app.list.len(), 1);
}

#[tokio::test]
async fn blank_add_keeps_prompt_open_with_message() {
    let mut app = App::new(None);

    press(&mut app, KeyCode::Char('a')).await;
    type_text(&mut app, "   ").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.mode, AppMode::AddItem);
    assert_eq!(app.status_message.as_deref(), Some("Please add item text"));
    assert!(app.list.is_empty());
}

#[tokio::test]
async fn edit_prompt_starts_from_selected_text() {
    let mut app = App::new(None);
    add_item(&mut app, "alpha").await;

    press(&mut app, KeyCode::Char('e')).await;
    assert_eq!(app.mode, AppMode::EditItem);
    assert_eq!(app.input.text(), "alpha");

    type_text(&mut app, "2").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.list.items(), ["alpha2"]);
}

#[tokio::test]
async fn edit_without_selection_shows_message() {
    let mut app = App::new(None);

    press(&mut app, KeyCode::Char('e')).await;

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(
        app.status_message.as_deref(),
        Some("Please select an item to edit")
    );
}

#[tokio::test]
async fn delete_removes_selected_and_clamps_cursor() {
    let mut app = App::new(None);
    add_item(&mut app, "a").await;
    add_item(&mut app, "b").await;

    // Adding selects the newest item, so the cursor sits on "b".
    press(&mut app, KeyCode::Char('d')).await;

    assert_eq!(app.list.items(), ["a"]);
    assert_eq!(app.selection.get(), Some(0));
}

#[tokio::test]
async fn delete_without_selection_shows_message() {
    let mut app = App::new(None);

    press(&mut app, KeyCode::Char('d')).await;

    assert_eq!(
        app.status_message.as_deref(),
        Some("Please select an item to delete")
    );
}

#[tokio::test]
async fn copy_on_empty_list_shows_message_and_counts_nothing() {
    let mut app = App::new(None);

    press(&mut app, KeyCode::Enter).await;

    assert_eq!(
        app.status_message.as_deref(),
        Some("Please add items to copy")
    );
    assert_eq!(app.list.copy_count(), 0);
}

#[tokio::test]
async fn clear_asks_for_confirmation_and_cancels() {
    let mut app = App::new(None);
    add_item(&mut app, "a").await;

    press(&mut app, KeyCode::Char('x')).await;
    assert_eq!(app.mode, AppMode::ConfirmClear);

    press(&mut app, KeyCode::Char('n')).await;
    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.list.len(), 1);
}

#[tokio::test]
async fn confirmed_clear_empties_the_list() {
    let mut app = App::new(None);
    add_item(&mut app, "a").await;
    add_item(&mut app, "b").await;

    press(&mut app, KeyCode::Char('x')).await;
    press(&mut app, KeyCode::Char('y')).await;

    assert!(app.list.is_empty());
    assert_eq!(app.selection.get(), None);
    assert_eq!(app.status_message.as_deref(), Some("Cleared 2 items"));
}

#[tokio::test]
async fn clear_on_empty_list_shows_message() {
    let mut app = App::new(None);

    press(&mut app, KeyCode::Char('x')).await;

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.status_message.as_deref(), Some("No items to clear"));
}

#[tokio::test]
async fn startup_loads_previously_saved_list() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("list.txt");
    std::fs::write(&file, "alpha\nbeta\n").unwrap();

    let mut app = App::new(Some(file.to_str().unwrap().to_string()));
    app.startup_load().await;

    assert_eq!(app.list.items(), ["alpha", "beta"]);
    assert_eq!(app.selection.get(), Some(0));
}

#[tokio::test]
async fn shutdown_saves_non_empty_list() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("list.txt");

    let mut app = App::new(Some(file.to_str().unwrap().to_string()));
    add_item(&mut app, "alpha").await;
    add_item(&mut app, "beta").await;
    app.shutdown_persist().await;

    let contents = std::fs::read_to_string(&file).unwrap();
    assert_eq!(contents, "alpha\nbeta\n");
}

#[tokio::test]
async fn shutdown_with_empty_list_deletes_stale_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("list.txt");
    std::fs::write(&file, "stale\n").unwrap();

    let mut app = App::new(Some(file.to_str().unwrap().to_string()));
    app.startup_load().await;
    press(&mut app, KeyCode::Char('x')).await;
    press(&mut app, KeyCode::Char('y')).await;
    app.shutdown_persist().await;

    assert!(!file.exists());
}
