//! Remote file list (pure rendering + hit testing).

use crate::app::theme::UiTheme;
use crate::kernel::{FileIcon, ListingState};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ICON_COLUMNS: usize = 3;

#[derive(Debug, Default)]
pub struct FileListView {
    area: Option<Rect>,
}

impl FileListView {
    pub fn new() -> Self {
        Self { area: None }
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    /// Visible row under the pointer, relative to the first rendered row.
    pub fn hit_test_row(&self, column: u16, row: u16) -> Option<usize> {
        if !self.contains(column, row) {
            return None;
        }
        let area = self.area?;
        Some((row - area.y) as usize)
    }

    /// Clears the cached area so stale hit tests miss while a placeholder is shown.
    pub fn hide(&mut self) {
        self.area = None;
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        listing: &ListingState,
        theme: &UiTheme,
    ) {
        self.area = Some(area);

        let start = listing.scroll_offset.min(listing.files.len());
        let end = (start + area.height as usize).min(listing.files.len());

        let lines: Vec<Line> = listing.files[start..end]
            .iter()
            .enumerate()
            .map(|(offset, name)| {
                let is_selected = listing.selected == Some(start + offset);
                render_row(name, is_selected, area.width as usize, theme)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn render_row(name: &str, is_selected: bool, width: usize, theme: &UiTheme) -> Line<'static> {
    let icon = FileIcon::classify(name);
    let icon_fg = match icon {
        FileIcon::Image => theme.image_icon_fg,
        FileIcon::Document => theme.document_icon_fg,
        FileIcon::Generic => theme.muted_fg,
    };

    let name_width = width.saturating_sub(ICON_COLUMNS);
    let mut label = ellipsize(name, name_width);
    if is_selected {
        let pad = name_width.saturating_sub(label.width());
        label.push_str(&" ".repeat(pad));
    }

    let (icon_style, label_style) = if is_selected {
        let selected = Style::default().bg(theme.selected_bg).fg(theme.selected_fg);
        (selected.fg(icon_fg), selected)
    } else {
        (Style::default().fg(icon_fg), Style::default())
    };

    Line::from(vec![
        Span::styled(format!(" {} ", icon.glyph()), icon_style),
        Span::styled(label, label_style),
    ])
}

fn ellipsize(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/views/file_list.rs"]
mod tests;
