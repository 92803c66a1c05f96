use super::util::rect_contains;
use super::Workbench;
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::core::view::EventResult;
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{parse_drop_payload, Action as KernelAction, FocusTarget};

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let changed = match event {
        InputEvent::Key(key) => handle_key(workbench, key),
        InputEvent::Mouse(mouse) => handle_mouse(workbench, mouse),
        InputEvent::Paste(text) => handle_paste(workbench, text),
        InputEvent::Resize(..) => true,
        InputEvent::FocusGained => false,
        InputEvent::FocusLost => {
            workbench.store.state().drag.active && workbench.dispatch_kernel(KernelAction::DragLeave)
        }
    };

    if workbench.should_quit() {
        EventResult::Quit
    } else if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

fn keybinding_context(focus: FocusTarget) -> KeybindingContext {
    match focus {
        FocusTarget::FileList => KeybindingContext::List,
        FocusTarget::ConfirmDialog => KeybindingContext::Confirm,
        FocusTarget::InputDialog => KeybindingContext::Input,
    }
}

fn handle_key(workbench: &mut Workbench, event: &KeyEvent) -> bool {
    let focus = workbench.focus();
    let key = Key::from(*event);
    if let Some(command) = workbench
        .keybindings
        .resolve(keybinding_context(focus), &key)
        .cloned()
    {
        return run_command(workbench, command);
    }

    if focus != FocusTarget::InputDialog {
        return false;
    }

    // Unbound keys edit the path field.
    let action = match event.code {
        KeyCode::Char(ch)
            if !event.modifiers.contains(KeyModifiers::CONTROL)
                && !event.modifiers.contains(KeyModifiers::ALT) =>
        {
            KernelAction::InputDialogAppend(ch)
        }
        KeyCode::Backspace => KernelAction::InputDialogBackspace,
        KeyCode::Left => KernelAction::InputDialogCursorLeft,
        KeyCode::Right => KernelAction::InputDialogCursorRight,
        _ => return false,
    };
    workbench.dispatch_kernel(action)
}

fn run_command(workbench: &mut Workbench, command: Command) -> bool {
    if let Command::Custom(name) = &command {
        tracing::debug!(command = %name, "unknown command");
        return false;
    }
    workbench.dispatch_kernel(KernelAction::RunCommand(command))
}

/// A file dropped on the terminal arrives as pasted path text. With the upload dialog open the
/// text goes into the path field instead.
fn handle_paste(workbench: &mut Workbench, text: &str) -> bool {
    match workbench.focus() {
        FocusTarget::InputDialog => {
            let mut changed = false;
            for ch in text.trim_end_matches(['\r', '\n']).chars() {
                changed |= workbench.dispatch_kernel(KernelAction::InputDialogAppend(ch));
            }
            changed
        }
        FocusTarget::ConfirmDialog => false,
        FocusTarget::FileList => {
            let paths = parse_drop_payload(text);
            if paths.len() > 1 {
                tracing::info!(count = paths.len(), "multiple files dropped, uploading the first");
            }
            workbench.dispatch_kernel(KernelAction::Drop { paths })
        }
    }
}

fn handle_mouse(workbench: &mut Workbench, event: &MouseEvent) -> bool {
    if workbench.focus() != FocusTarget::FileList {
        return false;
    }

    let over_drop_zone = workbench
        .last_drop_zone_area
        .is_some_and(|area| rect_contains(area, event.column, event.row));

    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let active = workbench.store.state().drag.active;
            match (over_drop_zone, active) {
                (true, false) => workbench.dispatch_kernel(KernelAction::DragEnter),
                (true, true) => workbench.dispatch_kernel(KernelAction::DragOver),
                (false, true) => workbench.dispatch_kernel(KernelAction::DragLeave),
                (false, false) => false,
            }
        }
        MouseEventKind::Down(MouseButton::Left) if over_drop_zone => {
            run_command(workbench, Command::PickUpload)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match workbench.file_list.hit_test_row(event.column, event.row) {
                Some(row) => workbench.dispatch_kernel(KernelAction::ListClickRow { row }),
                None => false,
            }
        }
        MouseEventKind::ScrollUp if workbench.file_list.contains(event.column, event.row) => {
            workbench.dispatch_kernel(KernelAction::ListScroll {
                delta: -super::SCROLL_STEP,
            })
        }
        MouseEventKind::ScrollDown if workbench.file_list.contains(event.column, event.row) => {
            workbench.dispatch_kernel(KernelAction::ListScroll {
                delta: super::SCROLL_STEP,
            })
        }
        _ => false,
    }
}
