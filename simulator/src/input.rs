//! Host-side input handling: key mapping and the length-limited entry buffer.
//!
//! The library never filters input; this is where the simulator enforces
//! `FieldConfig::max_input_len()` the way a platform length filter would.

use heapless::String;

/// Byte capacity of the entry buffer. Only ASCII is accepted, so this is
/// also the longest code the simulator can hold.
pub const INPUT_CAPACITY: usize = 16;

// =============================================================================
// Key Actions
// =============================================================================

/// What a key press asks the simulator to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Append a character.
    Type(char),
    /// Remove the last character.
    Backspace,
    /// Clear the whole entry.
    Clear,
    ToggleFocus,
    ToggleHidden,
    ToggleColorVariant,
    ToggleLayoutMode,
    ToggleCursor,
    ToggleUnderlineSpan,
    /// Step through the supported code lengths.
    CycleCodeLength,
}

impl Action {
    /// Map an SDL key name (as returned by `Keycode::name`) to an action.
    pub fn from_key_name(name: &str) -> Option<Self> {
        let action = match name {
            "Backspace" => Self::Backspace,
            "Escape" => Self::Clear,
            "Tab" => Self::ToggleFocus,
            "F1" => Self::ToggleHidden,
            "F2" => Self::ToggleColorVariant,
            "F3" => Self::ToggleLayoutMode,
            "F4" => Self::ToggleCursor,
            "F5" => Self::ToggleUnderlineSpan,
            "F6" => Self::CycleCodeLength,
            _ => {
                let name = name.strip_prefix("Keypad ").unwrap_or(name);
                let mut chars = name.chars();
                let c = chars.next()?;
                if chars.next().is_some() || !c.is_ascii_alphanumeric() {
                    return None;
                }
                Self::Type(c)
            }
        };
        Some(action)
    }
}

// =============================================================================
// Entry Buffer
// =============================================================================

/// Fixed-capacity entry buffer that never exceeds its maximum length.
#[derive(Clone, Debug, Default)]
pub struct CodeInput {
    buffer: String<INPUT_CAPACITY>,
    max_len: usize,
}

impl CodeInput {
    /// Create an empty buffer accepting up to `max_len` characters (capped at
    /// [`INPUT_CAPACITY`]).
    pub fn new(max_len: usize) -> Self {
        Self {
            buffer: String::new(),
            max_len: max_len.min(INPUT_CAPACITY),
        }
    }

    /// Append `c` if it is printable ASCII and there is room.
    ///
    /// Returns whether the character was accepted.
    pub fn push(
        &mut self,
        c: char,
    ) -> bool {
        if !c.is_ascii_graphic() || self.is_full() {
            return false;
        }
        self.buffer.push(c).is_ok()
    }

    /// Remove the last character. Returns whether anything was removed.
    pub fn pop(&mut self) -> bool { self.buffer.pop().is_some() }

    pub fn clear(&mut self) { self.buffer.clear(); }

    /// Change the maximum length, truncating the entry if needed.
    pub fn set_max_len(
        &mut self,
        max_len: usize,
    ) {
        self.max_len = max_len.min(INPUT_CAPACITY);
        self.buffer.truncate(self.max_len);
    }

    #[inline]
    pub fn as_str(&self) -> &str { self.buffer.as_str() }

    /// Number of characters entered.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    #[inline]
    pub fn is_full(&self) -> bool { self.len() >= self.max_len }

    #[inline]
    pub const fn max_len(&self) -> usize { self.max_len }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_respects_max_len() {
        let mut input = CodeInput::new(4);
        for c in "123456".chars() {
            input.push(c);
        }
        assert_eq!(input.as_str(), "1234");
        assert!(input.is_full());
        assert!(!input.push('9'), "full buffer must reject input");
    }

    #[test]
    fn test_push_rejects_non_printable() {
        let mut input = CodeInput::new(4);
        assert!(!input.push(' '));
        assert!(!input.push('\n'));
        assert!(!input.push('é'));
        assert!(input.is_empty());
    }

    #[test]
    fn test_pop_and_clear() {
        let mut input = CodeInput::new(6);
        input.push('4');
        input.push('2');
        assert!(input.pop());
        assert_eq!(input.as_str(), "4");
        input.clear();
        assert!(!input.pop(), "nothing left to remove");
    }

    #[test]
    fn test_set_max_len_truncates() {
        let mut input = CodeInput::new(6);
        for c in "123456".chars() {
            input.push(c);
        }
        input.set_max_len(3);
        assert_eq!(input.as_str(), "123");
        assert_eq!(input.max_len(), 3);
    }

    #[test]
    fn test_max_len_capped_at_capacity() {
        let input = CodeInput::new(100);
        assert_eq!(input.max_len(), INPUT_CAPACITY);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Action::from_key_name("7"), Some(Action::Type('7')));
        assert_eq!(Action::from_key_name("Keypad 3"), Some(Action::Type('3')));
        assert_eq!(Action::from_key_name("A"), Some(Action::Type('A')));
        assert_eq!(Action::from_key_name("Backspace"), Some(Action::Backspace));
        assert_eq!(Action::from_key_name("Tab"), Some(Action::ToggleFocus));
        assert_eq!(Action::from_key_name("F2"), Some(Action::ToggleColorVariant));
        assert_eq!(Action::from_key_name("F6"), Some(Action::CycleCodeLength));
        assert_eq!(Action::from_key_name("Left Shift"), None);
        assert_eq!(Action::from_key_name("-"), None);
        assert_eq!(Action::from_key_name(""), None);
    }
}
