use super::util::{centered_rect, inner};
use super::Workbench;
use crate::kernel::{Action as KernelAction, FocusTarget, NotificationKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INPUT_PREFIX: &str = "> ";

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_render_area = Some(area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(super::HEADER_HEIGHT),
            Constraint::Length(super::BANNER_HEIGHT),
            Constraint::Length(super::DROP_ZONE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(super::FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(workbench, frame, rows[0]);
    render_banner(workbench, frame, rows[1]);
    render_drop_zone(workbench, frame, rows[2]);
    render_file_list(workbench, frame, rows[3]);
    render_footer(workbench, frame, rows[4]);

    render_confirm_dialog(workbench, frame, area);
    render_input_dialog(workbench, frame, area);
}

fn render_header(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let title = Line::from(vec![
        Span::styled(
            "filedeck",
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            workbench.runtime.client().base().to_string(),
            Style::default().fg(theme.muted_fg),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);

    let refresh = if workbench.store.state().transfer.loading {
        Line::from(Span::styled(
            "Loading...",
            Style::default().fg(theme.muted_fg),
        ))
    } else {
        Line::from(vec![
            Span::styled("[r]", Style::default().fg(theme.header_fg)),
            Span::raw(" Refresh "),
        ])
    };
    frame.render_widget(Paragraph::new(refresh).alignment(Alignment::Right), area);
}

fn render_banner(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let Some(note) = workbench.store.state().notification.current() else {
        return;
    };
    let (mark, color) = match note.kind {
        NotificationKind::Success => ("✓", workbench.theme.success_fg),
        NotificationKind::Error => ("✗", workbench.theme.error_fg),
    };
    let line = Line::from(Span::styled(
        format!(" {mark} {}", note.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_drop_zone(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_drop_zone_area = Some(area);

    let state = workbench.store.state();
    let theme = &workbench.theme;
    let border = if state.drag.active {
        theme.drop_active_border
    } else {
        theme.border
    };

    let text = if state.transfer.uploading {
        Line::from(Span::styled(
            "Uploading...",
            Style::default().fg(theme.muted_fg),
        ))
    } else if state.drag.active {
        Line::from(Span::styled(
            "Drop to upload",
            Style::default()
                .fg(theme.drop_active_border)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::raw("Drop a file here or press "),
            Span::styled("[u]", Style::default().fg(theme.header_fg)),
            Span::raw(" to upload"),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_file_list(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let count = workbench.store.state().listing.files.len();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(workbench.theme.border))
        .title(Span::styled(
            format!(" Files ({count}) "),
            Style::default().fg(workbench.theme.header_fg),
        ));
    frame.render_widget(block, area);

    let content = inner(area);
    if content.width == 0 || content.height == 0 {
        workbench.file_list.hide();
        return;
    }

    let height = content.height as usize;
    if workbench.store.state().listing.view_height != height {
        let _ = workbench.dispatch_kernel(KernelAction::ListSetViewHeight { height });
    }

    let state = workbench.store.state();
    let placeholder = if state.transfer.loading {
        Some("Loading files...")
    } else if state.listing.files.is_empty() {
        Some("No files found")
    } else {
        None
    };

    match placeholder {
        Some(text) => {
            workbench.file_list.hide();
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    text,
                    Style::default().fg(workbench.theme.muted_fg),
                )))
                .alignment(Alignment::Center),
                content,
            );
        }
        None => workbench.file_list.render(
            frame,
            content,
            &workbench.store.state().listing,
            &workbench.theme,
        ),
    }
}

fn render_footer(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let theme = &workbench.theme;
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.header_fg));
    let muted = |t: &'static str| Span::styled(t, Style::default().fg(theme.muted_fg));

    let spans = match workbench.focus() {
        FocusTarget::FileList => {
            let mut spans = vec![
                key("↑↓"),
                muted(" select  "),
                key("enter"),
                muted(" download  "),
                key("x"),
                muted(" delete  "),
            ];
            if workbench.store.state().transfer.uploading {
                spans.push(muted("Uploading...  "));
            } else {
                spans.push(key("u"));
                spans.push(muted(" upload  "));
            }
            spans.extend([key("q"), muted(" quit")]);
            spans
        }
        FocusTarget::ConfirmDialog => vec![key("y"), muted(" confirm  "), key("n"), muted(" cancel")],
        FocusTarget::InputDialog => vec![key("enter"), muted(" upload  "), key("esc"), muted(" cancel")],
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_confirm_dialog(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let dialog = &workbench.store.state().ui.confirm_dialog;
    if !dialog.visible {
        return;
    }

    let dialog_area = centered_rect(50, 6, area);
    if dialog_area.width < 20 || dialog_area.height < 4 {
        return;
    }

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(workbench.theme.error_fg))
            .title(Span::styled(
                " Confirm ",
                Style::default()
                    .fg(workbench.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            )),
        dialog_area,
    );

    let content = inner(dialog_area);
    let hint = Line::from(vec![
        Span::styled("[y]", Style::default().fg(workbench.theme.error_fg)),
        Span::raw(" Delete  "),
        Span::styled("[n]", Style::default().fg(workbench.theme.muted_fg)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(vec![Line::from(dialog.message.as_str()), Line::raw(""), hint])
            .wrap(Wrap { trim: true }),
        content,
    );
}

fn render_input_dialog(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let dialog = &workbench.store.state().ui.input_dialog;
    if !dialog.visible {
        return;
    }

    let popup_area = centered_rect(60, 6, area);
    if popup_area.width < 20 || popup_area.height < 5 {
        return;
    }

    frame.render_widget(Clear, popup_area);
    let title = if dialog.title.is_empty() {
        "Input"
    } else {
        dialog.title.as_str()
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(workbench.theme.header_fg))
            .title(Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(workbench.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            )),
        popup_area,
    );

    let content = inner(popup_area);
    let prefix_w = INPUT_PREFIX.width() as u16;
    let field_width = content.width.saturating_sub(prefix_w).saturating_sub(1) as usize;
    let cursor = dialog.cursor.min(dialog.value.len());
    let start = visible_start(&dialog.value, cursor, field_width);
    let visible = tail_fit(&dialog.value[start..], field_width);

    let status = match dialog.error.as_deref() {
        Some(err) => Line::from(Span::styled(
            err,
            Style::default().fg(workbench.theme.error_fg),
        )),
        None => Line::from(Span::styled(
            "Path of the local file to upload",
            Style::default().fg(workbench.theme.muted_fg),
        )),
    };
    let hint = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(workbench.theme.header_fg)),
        Span::raw(" Upload  "),
        Span::styled("[Esc]", Style::default().fg(workbench.theme.muted_fg)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![Span::raw(INPUT_PREFIX), Span::raw(visible)]),
            status,
            hint,
        ]),
        content,
    );

    let before_w = dialog.value[start..cursor].width() as u16;
    let x = content
        .x
        .saturating_add(prefix_w)
        .saturating_add(before_w)
        .min(content.x + content.width.saturating_sub(1));
    frame.set_cursor_position((x, content.y));
}

/// Byte offset where the visible part of `value` starts so that `cursor` stays on screen.
fn visible_start(value: &str, cursor: usize, width: usize) -> usize {
    let before = &value[..cursor];
    if before.width() <= width {
        return 0;
    }

    let mut start = cursor;
    let mut used = 0usize;
    for (idx, ch) in before.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    start
}

fn tail_fit(text: &str, width: usize) -> &str {
    let mut used = 0usize;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}
