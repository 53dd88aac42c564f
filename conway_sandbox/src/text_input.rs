// text_input.rs - Single-line text entry

/// Line buffer the console composes. Knows nothing about commands.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    text: String,
}

impl TextInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends typed text, dropping control characters.
    pub fn push_str(&mut self, typed: &str) {
        self.text.extend(typed.chars().filter(|c| !c.is_control()));
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Returns the line and leaves the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_by_character() {
        let mut input = TextInput::default();
        input.push_str("clé\t");
        assert_eq!(input.text(), "clé");
        input.backspace();
        assert_eq!(input.text(), "cl");
        assert_eq!(input.take(), "cl");
        assert_eq!(input.text(), "");
        input.backspace();
        assert_eq!(input.text(), "");
    }
}
