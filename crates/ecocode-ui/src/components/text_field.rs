//! Key handling for the chat input
//!
//! The window owns the buffer (it lives in the chat session); this module only
//! decides what a keystroke does to it.

use unicode_segmentation::UnicodeSegmentation;

/// Effect of one keystroke on the input buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    Backspace,
    Insert(String),
    Ignore,
}

/// Map a keystroke to a buffer edit.
///
/// `key` is the GPUI key name, `ime_key` the text it would type, if any.
pub fn key_action(key: &str, ime_key: Option<&str>, shift: bool, command: bool) -> KeyAction {
    match key {
        "enter" if shift => KeyAction::Insert("\n".to_string()),
        "enter" => KeyAction::Submit,
        "backspace" => KeyAction::Backspace,
        _ if command => KeyAction::Ignore,
        "space" => KeyAction::Insert(" ".to_string()),
        _ => match ime_key {
            Some(text) if !text.is_empty() && !text.chars().any(char::is_control) => {
                KeyAction::Insert(text.to_string())
            }
            _ => KeyAction::Ignore,
        },
    }
}

/// Apply an edit. Returns true if the buffer changed.
pub fn apply_edit(buffer: &mut String, action: &KeyAction) -> bool {
    match action {
        KeyAction::Insert(text) => {
            buffer.push_str(text);
            true
        }
        KeyAction::Backspace => pop_grapheme(buffer),
        KeyAction::Submit | KeyAction::Ignore => false,
    }
}

/// Remove the last user-perceived character
pub fn pop_grapheme(buffer: &mut String) -> bool {
    match buffer.grapheme_indices(true).next_back() {
        Some((start, _)) => {
            buffer.truncate(start);
            true
        }
        None => false,
    }
}
