use super::*;

fn listing(names: &[&str]) -> ListingState {
    let mut state = ListingState::default();
    state.replace(names.iter().map(|s| s.to_string()).collect());
    state
}

#[test]
fn replace_selects_first_row_of_fresh_listing() {
    let state = listing(&["a.txt", "b.png"]);
    assert_eq!(state.selected, Some(0));
    assert_eq!(state.selected_name(), Some("a.txt"));
}

#[test]
fn replace_follows_selected_name() {
    let mut state = listing(&["a", "b", "c"]);
    state.move_selection(2);
    assert_eq!(state.selected_name(), Some("c"));

    state.replace(vec!["c".into(), "a".into()]);
    assert_eq!(state.selected_name(), Some("c"));
    assert_eq!(state.selected, Some(0));
}

#[test]
fn replace_clamps_when_selected_name_disappears() {
    let mut state = listing(&["a", "b", "c"]);
    state.move_selection(2);

    state.replace(vec!["a".into()]);
    assert_eq!(state.selected, Some(0));
}

#[test]
fn replace_with_identical_listing_reports_unchanged() {
    let mut state = listing(&["a"]);
    assert!(!state.replace(vec!["a".into()]));
}

#[test]
fn clear_drops_rows_and_selection() {
    let mut state = listing(&["a", "b"]);
    assert!(state.clear());
    assert!(state.files.is_empty());
    assert_eq!(state.selected, None);
    assert!(!state.clear());
}

#[test]
fn move_selection_clamps_at_edges() {
    let mut state = listing(&["a", "b", "c"]);
    assert!(!state.move_selection(-1));
    assert!(state.move_selection(10));
    assert_eq!(state.selected, Some(2));
    assert!(!state.move_selection(1));
}

#[test]
fn selection_keeps_row_visible() {
    let names: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
    let mut state = ListingState::default();
    state.replace(names);
    state.set_view_height(5);

    state.move_selection(7);
    assert_eq!(state.selected, Some(7));
    assert_eq!(state.scroll_offset, 3);

    state.select_first();
    assert_eq!(state.scroll_offset, 0);

    state.select_last();
    assert_eq!(state.scroll_offset, 15);
}

#[test]
fn click_row_is_relative_to_scroll() {
    let names: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
    let mut state = ListingState::default();
    state.replace(names);
    state.set_view_height(5);
    state.scroll(4);

    assert!(state.click_row(1));
    assert_eq!(state.selected_name(), Some("f5"));
    assert!(!state.click_row(40));
}

#[test]
fn request_ids_are_monotonic() {
    let mut transfer = TransferState::default();
    let a = transfer.next_list_request();
    let b = transfer.next_list_request();
    assert!(b > a);
    assert_eq!(transfer.latest_list_request, b);
}

#[test]
fn confirm_dialog_takes_focus_over_input_dialog() {
    let mut ui = UiState::default();
    assert_eq!(ui.focus(), FocusTarget::FileList);

    ui.input_dialog.visible = true;
    assert_eq!(ui.focus(), FocusTarget::InputDialog);

    ui.confirm_dialog.visible = true;
    assert_eq!(ui.focus(), FocusTarget::ConfirmDialog);
}
