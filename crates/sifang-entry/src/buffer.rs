use std::fmt;

use sifang_types::MAX_BUFFER_LEN;

/// One raw, editable signed-integer buffer.
///
/// The buffer only ever holds an optional leading `-` followed by digits,
/// at most [`MAX_BUFFER_LEN`] characters total. A bare `-` and the empty
/// string are valid transient states that parse as 0.
///
/// First keystroke on an empty buffer yields a negative number. This is a
/// deliberate domain shortcut carried over from the original scorekeeper:
/// three of four players usually lose a hand, so defaulting to negative
/// saves keystrokes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreBuffer(String);

impl ScoreBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw buffer contents.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the buffer holds nothing a player would mind losing
    /// (empty or a bare sign).
    pub fn is_trivial(&self) -> bool {
        self.0.is_empty() || self.0 == "-"
    }

    /// Parse to a signed integer. Empty, bare `-`, or otherwise malformed
    /// contents parse as 0.
    pub fn parse(&self) -> i64 {
        self.0.parse().unwrap_or(0)
    }

    /// Append a digit, subject to the keypad rules. Non-digit characters
    /// and anything past the length cap are ignored.
    pub fn press_digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            return;
        }
        // Negative-biased first keystroke.
        if self.0.is_empty() || self.0 == "-" {
            self.0 = format!("-{d}");
            return;
        }
        // A bare zero is replaced by the next non-zero digit; a second
        // zero never grows it.
        if self.0 == "0" || self.0 == "-0" {
            if d == '0' {
                return;
            }
            self.0 = if self.0 == "0" {
                d.to_string()
            } else {
                format!("-{d}")
            };
            return;
        }
        if self.0.len() >= MAX_BUFFER_LEN {
            return;
        }
        self.0.push(d);
    }

    /// Cycle the sign: empty → `-` → empty; otherwise prefix or strip a
    /// leading `-`. Prefixing past the length cap is ignored.
    pub fn toggle_sign(&mut self) {
        if self.0.is_empty() {
            self.0.push('-');
        } else if self.0 == "-" {
            self.0.clear();
        } else if let Some(stripped) = self.0.strip_prefix('-') {
            self.0 = stripped.to_string();
        } else if self.0.len() < MAX_BUFFER_LEN {
            self.0.insert(0, '-');
        }
    }

    /// Remove the last character; no-op on an empty buffer.
    pub fn backspace(&mut self) {
        self.0.pop();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Overwrite with a concrete value (auto-balance and smart balance).
    ///
    /// Balance fills are exempt from the keypad length cap: three seats at
    /// the keypad maximum need a seven-character counterweight, and the
    /// fill must render it in full rather than truncate the amount.
    pub fn set_value(&mut self, value: i64) {
        self.0 = value.to_string();
    }
}

impl fmt::Display for ScoreBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn typed(keys: &str) -> ScoreBuffer {
        let mut buf = ScoreBuffer::new();
        for key in keys.chars() {
            match key {
                '-' => buf.toggle_sign(),
                '<' => buf.backspace(),
                _ => buf.press_digit(key),
            }
        }
        buf
    }

    #[test]
    fn first_digit_is_negative_biased() {
        assert_eq!(typed("5").as_str(), "-5");
    }

    #[test]
    fn sign_then_digit_yields_negative() {
        assert_eq!(typed("-5").as_str(), "-5");
    }

    #[test]
    fn double_toggle_then_digit_is_still_negative() {
        // "--" cycles back to empty, so the digit re-enters negative.
        assert_eq!(typed("--5").as_str(), "-5");
    }

    #[test]
    fn leading_zero_is_replaced_by_nonzero_digit() {
        // "0" arrives as "-0"; strip the sign to get a bare "0" first.
        let mut buf = typed("0-");
        assert_eq!(buf.as_str(), "0");
        buf.press_digit('5');
        assert_eq!(buf.as_str(), "5");
    }

    #[test]
    fn second_zero_is_ignored() {
        let mut buf = typed("0-");
        buf.press_digit('0');
        assert_eq!(buf.as_str(), "0");
    }

    #[test]
    fn negative_zero_keeps_sign_on_replacement() {
        let mut buf = typed("0");
        assert_eq!(buf.as_str(), "-0");
        buf.press_digit('7');
        assert_eq!(buf.as_str(), "-7");
    }

    #[test]
    fn length_is_capped() {
        let buf = typed("1234567890");
        assert_eq!(buf.as_str(), "-12345");
    }

    #[test]
    fn sign_toggle_cycles() {
        let mut buf = ScoreBuffer::new();
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "-");
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "");

        let mut buf = typed("25");
        assert_eq!(buf.as_str(), "-25");
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "25");
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "-25");
    }

    #[test]
    fn backspace_drops_last_char() {
        let mut buf = typed("123");
        assert_eq!(buf.as_str(), "-123");
        buf.backspace();
        assert_eq!(buf.as_str(), "-12");
        buf.clear();
        buf.backspace();
        assert_eq!(buf.as_str(), "");
    }

    #[test]
    fn parse_treats_trivial_as_zero() {
        assert_eq!(ScoreBuffer::new().parse(), 0);
        assert_eq!(typed("-").parse(), 0);
        assert_eq!(typed("500").parse(), -500);
        assert_eq!(typed("500-").parse(), 500);
    }

    #[test]
    fn set_value_overwrites() {
        let mut buf = typed("123");
        buf.set_value(4000);
        assert_eq!(buf.as_str(), "4000");
        assert_eq!(buf.parse(), 4000);
    }

    #[test]
    fn set_value_is_exempt_from_length_cap() {
        // Three seats at the keypad maximum balance to a 7-char fill.
        let mut buf = ScoreBuffer::new();
        buf.set_value(-299_997);
        assert_eq!(buf.as_str(), "-299997");
        assert_eq!(buf.parse(), -299_997);
    }

    proptest! {
        /// Any sequence of keypad operations keeps the buffer inside the
        /// documented grammar: at most one leading `-`, digits only after
        /// it, no leading-zero growth, length within the cap.
        #[test]
        fn buffer_grammar_holds(keys in proptest::collection::vec(
            prop_oneof![
                (0u32..10).prop_map(|d| char::from_digit(d, 10).unwrap()),
                Just('-'),
                Just('<'),
            ],
            0..40,
        )) {
            let mut buf = ScoreBuffer::new();
            for key in keys {
                match key {
                    '-' => buf.toggle_sign(),
                    '<' => buf.backspace(),
                    d => buf.press_digit(d),
                }

                let s = buf.as_str();
                prop_assert!(s.len() <= MAX_BUFFER_LEN);
                let unsigned = s.strip_prefix('-').unwrap_or(s);
                prop_assert!(!unsigned.contains('-'));
                prop_assert!(unsigned.chars().all(|c| c.is_ascii_digit()));
                if unsigned.len() > 1 {
                    prop_assert!(!unsigned.starts_with('0'));
                }
            }
        }
    }
}
