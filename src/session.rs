use crate::tree::PrefixTree;

/// Rows above the prediction list: input line, a blank row, the banner and
/// one spare row.
pub const HEADER_ROWS: usize = 4;

/// Terminal height assumed when neither `--rows` nor `LINES` says otherwise.
pub const DEFAULT_TERMINAL_ROWS: usize = 24;

pub const PREDICTION_BANNER: &str = "--- prediction ---";

/// How many predictions fit on a terminal `terminal_rows` tall.
pub fn prediction_rows(terminal_rows: usize) -> usize {
    terminal_rows.saturating_sub(HEADER_ROWS)
}

/// Input state of the interactive front-end.
///
/// Only the full input line is stored. The fragment being completed is always
/// derived from it, so it can never drift out of sync after an edit.
#[derive(Debug, Clone, Default)]
pub struct Session {
    sentence: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.sentence
    }

    /// Appends one typed character. For front-ends that capture raw keys;
    /// line-oriented callers use [`Session::set_input`].
    pub fn push(&mut self, ch: char) {
        self.sentence.push(ch);
    }

    /// Deletes the last character, for front-ends that capture raw keys.
    /// Returns `false` if there was nothing to delete, which such a front-end
    /// treats as a request to quit.
    pub fn backspace(&mut self) -> bool {
        self.sentence.pop().is_some()
    }

    pub fn set_input(&mut self, line: &str) {
        self.sentence.clear();
        self.sentence.push_str(line);
    }

    /// The word being typed: everything after the last space.
    pub fn fragment(&self) -> &str {
        match self.sentence.rfind(' ') {
            Some(i) => &self.sentence[i + 1..],
            None => &self.sentence,
        }
    }

    /// Completions for the current fragment, at most `rows` of them.
    pub fn predictions(&self, tree: &PrefixTree, rows: usize) -> Vec<String> {
        tree.complete(self.fragment(), rows)
    }

    /// The screen for the current state: the input line, the banner and one
    /// prediction per line.
    pub fn render(&self, tree: &PrefixTree, rows: usize) -> String {
        let mut screen = format!("{}\n\n{}\n", self.sentence, PREDICTION_BANNER);
        for prediction in self.predictions(tree, rows) {
            screen.push_str("  ");
            screen.push_str(&prediction);
            screen.push('\n');
        }
        screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> PrefixTree {
        ["the", "then", "there", "these", "cat", "cats", "catch"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_fragment() {
        let mut session = Session::new();
        assert_eq!(session.fragment(), "");

        session.set_input("the");
        assert_eq!(session.fragment(), "the");

        session.set_input("see the ca");
        assert_eq!(session.fragment(), "ca");

        session.push(' ');
        assert_eq!(session.fragment(), "");
    }

    #[test]
    fn test_typing_and_deleting() {
        let t = tree();
        let mut session = Session::new();
        for ch in "the ca".chars() {
            session.push(ch);
        }
        assert_eq!(session.predictions(&t, 10), vec!["cat", "cats", "catch"]);

        assert!(session.backspace());
        assert!(session.backspace());
        assert_eq!(session.input(), "the ");
        assert!(session.predictions(&t, 10).is_empty());

        // Deleting the space brings the previous word back.
        assert!(session.backspace());
        assert_eq!(session.fragment(), "the");
        assert_eq!(session.predictions(&t, 10), vec!["then", "there", "these"]);
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut session = Session::new();
        assert!(!session.backspace());

        session.push('a');
        assert!(session.backspace());
        assert!(!session.backspace());
    }

    #[test]
    fn test_limit_follows_rows() {
        let t = tree();
        let mut session = Session::new();
        session.set_input("the");

        assert_eq!(session.predictions(&t, prediction_rows(6)), vec!["then", "there"]);
        assert!(session.predictions(&t, prediction_rows(3)).is_empty());
        assert_eq!(prediction_rows(DEFAULT_TERMINAL_ROWS), 20);
    }

    #[test]
    fn test_render() {
        let t = tree();
        let mut session = Session::new();
        session.set_input("a cat");

        assert_eq!(
            session.render(&t, 5),
            "a cat\n\n--- prediction ---\n  cats\n  catch\n"
        );
    }
}
