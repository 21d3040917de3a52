use super::state::AppState;
use crate::clipboard::copy_to_clipboard;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        // Any key dismisses the help overlay
        state.show_help = false;
        return Ok(());
    }

    match (key.code, key.modifiers) {
        // Tab switching
        (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
            state.next_tab();
        }
        (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            state.prev_tab();
        }
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            state.set_tab(c as usize - '1' as usize);
        }

        // Endpoint navigation
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.move_cursor_up();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.move_cursor_down();
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            state.move_cursor_first();
        }
        (KeyCode::Char('G'), _) => {
            state.move_cursor_last();
        }

        // Request/response pane
        (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
            state.toggle_pane();
        }

        // Copy the visible block
        (KeyCode::Char('y'), KeyModifiers::NONE) | (KeyCode::Enter, KeyModifiers::NONE) => {
            copy_visible_block(state);
        }

        // Copy the base URL
        (KeyCode::Char('u'), KeyModifiers::NONE) => {
            let block = state.reference.base_url_block();
            state.record_copy_result(&block.id, copy_to_clipboard(&block.code));
        }

        // Help toggle
        (KeyCode::Char('?'), KeyModifiers::NONE) => {
            state.show_help = true;
        }

        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, KeyModifiers::NONE) => {
            state.should_quit = true;
        }

        _ => {}
    }

    Ok(())
}

fn copy_visible_block(state: &mut AppState) {
    let Some(block) = state.visible_block() else {
        return;
    };
    let (token, code) = (block.id.clone(), block.code.clone());
    debug!(token, "copy requested");
    state.record_copy_result(&token, copy_to_clipboard(&code));
}
