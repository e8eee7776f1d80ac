//! Shared list-navigation helpers used by the demo screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle j/k or Up/Down list navigation with wraparound.
///
/// Returns `true` if the key moved the selection.
pub fn handle_list_navigation(key: &KeyEvent, selected: &mut usize, total: usize) -> bool {
    if total == 0 || !key.modifiers.is_empty() {
        return false;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            *selected = (*selected + 1) % total;
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *selected = if *selected == 0 { total - 1 } else { *selected - 1 };
            true
        }
        _ => false,
    }
}

/// Handle j/k or Up/Down scrolling without wraparound, for long tables.
///
/// `max_offset` is the largest allowed scroll position.
pub fn handle_scroll(key: &KeyEvent, offset: &mut usize, max_offset: usize) -> bool {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if *offset < max_offset {
                *offset += 1;
            }
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *offset = offset.saturating_sub(1);
            true
        }
        KeyCode::Char('g') => {
            *offset = 0;
            true
        }
        KeyCode::Char('G') => {
            *offset = max_offset;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_wraps_both_directions() {
        let mut selected = 4usize;
        assert!(handle_list_navigation(&key(KeyCode::Char('j')), &mut selected, 5));
        assert_eq!(selected, 0);

        assert!(handle_list_navigation(&key(KeyCode::Char('k')), &mut selected, 5));
        assert_eq!(selected, 4);
    }

    #[test]
    fn test_navigation_ignores_empty_lists() {
        let mut selected = 0usize;
        assert!(!handle_list_navigation(&key(KeyCode::Char('j')), &mut selected, 0));
    }

    #[test]
    fn test_scroll_clamps_at_both_ends() {
        let mut offset = 0usize;
        assert!(handle_scroll(&key(KeyCode::Char('k')), &mut offset, 10));
        assert_eq!(offset, 0);

        offset = 10;
        assert!(handle_scroll(&key(KeyCode::Char('j')), &mut offset, 10));
        assert_eq!(offset, 10);
    }

    #[test]
    fn test_scroll_jump_keys() {
        let mut offset = 5usize;
        assert!(handle_scroll(&key(KeyCode::Char('G')), &mut offset, 42));
        assert_eq!(offset, 42);
        assert!(handle_scroll(&key(KeyCode::Char('g')), &mut offset, 42));
        assert_eq!(offset, 0);
    }
}
