use super::*;

fn line_text(line: &Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn new_view_has_no_area() {
    let view = FileListView::new();
    assert!(view.area().is_none());
    assert_eq!(view.hit_test_row(0, 0), None);
}

#[test]
fn row_shows_icon_then_name() {
    let theme = UiTheme::default();
    let text = line_text(&render_row("b.png", false, 20, &theme));
    assert_eq!(text, format!(" {} b.png", FileIcon::Image.glyph()));
}

#[test]
fn selected_row_is_padded_to_width() {
    let theme = UiTheme::default();
    let text = line_text(&render_row("a.txt", true, 20, &theme));
    assert_eq!(text.width(), 20);
}

#[test]
fn long_names_are_ellipsized() {
    assert_eq!(ellipsize("abcdefgh", 5), "abcd…");
    assert_eq!(ellipsize("abc", 5), "abc");
    assert_eq!(ellipsize("abc", 0), "");
    assert!(ellipsize("文件名字很长", 5).width() <= 5);
}

#[test]
fn hit_test_is_relative_to_area() {
    let mut view = FileListView::new();
    view.area = Some(Rect::new(2, 5, 30, 4));

    assert_eq!(view.hit_test_row(3, 5), Some(0));
    assert_eq!(view.hit_test_row(3, 8), Some(3));
    assert_eq!(view.hit_test_row(3, 9), None);
    assert_eq!(view.hit_test_row(1, 6), None);

    view.hide();
    assert_eq!(view.hit_test_row(3, 5), None);
}
