//! Per-draw render state.

/// The state a host supplies on every draw request.
///
/// The core never stores this; focus is passed in rather than toggled by a
/// callback, so the same inputs always produce the same output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderState<'a> {
    /// Currently entered value. Ideally at most `code_length` characters;
    /// anything beyond is ignored.
    pub text: &'a str,
    /// Whether the field has input focus.
    pub focused: bool,
}

impl<'a> RenderState<'a> {
    pub const fn new(
        text: &'a str,
        focused: bool,
    ) -> Self {
        Self { text, focused }
    }

    /// Number of filled segments, counted in characters and capped at
    /// `code_length`.
    #[inline]
    pub fn filled_len(
        &self,
        code_length: usize,
    ) -> usize {
        self.text.chars().take(code_length).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_len_counts_chars_not_bytes() {
        let state = RenderState::new("äö1", true);
        assert_eq!(state.filled_len(6), 3);
    }

    #[test]
    fn test_filled_len_capped_at_code_length() {
        let state = RenderState::new("1234567", false);
        assert_eq!(state.filled_len(4), 4);
        assert_eq!(state.filled_len(0), 0);
    }

    #[test]
    fn test_default_is_empty_and_unfocused() {
        let state = RenderState::default();
        assert_eq!(state.filled_len(8), 0);
        assert!(!state.focused);
    }
}
