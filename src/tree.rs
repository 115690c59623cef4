use std::collections::VecDeque;

const ALPHABET_SIZE: usize = 26;

/// Validates and case-folds a candidate word.
///
/// Returns `None` for the empty string or when any character is not an ASCII
/// letter. Every tree operation goes through this, so rejected input behaves
/// exactly like a word that is not stored.
pub fn normalize(word: &str) -> Option<String> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}

fn slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

fn letter(slot: usize) -> char {
    (b'a' + slot as u8) as char
}

/// A node in the prefix tree
#[derive(Debug, Default)]
struct PrefixTreeNode {
    // Whether the prefix ending here is a stored word
    is_end_of_word: bool,
    // One slot per letter, a..z
    children: [Option<Box<PrefixTreeNode>>; ALPHABET_SIZE],
}

impl PrefixTreeNode {
    fn child(&self, letter: u8) -> Option<&PrefixTreeNode> {
        self.children[slot(letter)].as_deref()
    }

    /// Children in alphabetical order, paired with their letter.
    fn iter_children(&self) -> impl Iterator<Item = (char, &PrefixTreeNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| child.as_deref().map(|node| (letter(i), node)))
    }
}

/// The prefix tree data structure.
///
/// Words are restricted to ASCII letters and stored lowercase. Input that does
/// not pass [`normalize`] is silently ignored by every operation.
#[derive(Debug, Default)]
pub struct PrefixTree {
    root: PrefixTreeNode,
}

impl PrefixTree {
    /// Creates a new, empty prefix tree
    pub fn new() -> Self {
        PrefixTree {
            root: PrefixTreeNode::default(),
        }
    }

    /// Inserts a word into the prefix tree.
    ///
    /// Returns `true` if the word was not stored before. Invalid words leave
    /// the tree untouched and return `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some(word) = normalize(word) else {
            return false;
        };

        let mut current_node = &mut self.root;
        for b in word.bytes() {
            current_node = current_node.children[slot(b)]
                .get_or_insert_with(Box::default)
                .as_mut();
        }

        let added = !current_node.is_end_of_word;
        current_node.is_end_of_word = true;
        added
    }

    /// Returns `true` if `word` was inserted. A prefix of a stored word is not
    /// itself a match.
    pub fn contains(&self, word: &str) -> bool {
        let Some(word) = normalize(word) else {
            return false;
        };

        self.find_node(&word).is_some_and(|node| node.is_end_of_word)
    }

    /// Number of distinct stored words.
    pub fn word_count(&self) -> usize {
        self.bfs_nodes().filter(|node| node.is_end_of_word).count()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.bfs_nodes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.iter().all(Option::is_none)
    }

    /// Returns up to `limit` stored words that extend `partial`.
    ///
    /// Completions come out shortest first, then alphabetically, which is the
    /// order a breadth-first walk visiting children a..z discovers them in.
    /// `partial` itself is never returned, even when it is a stored word.
    pub fn complete(&self, partial: &str, limit: usize) -> Vec<String> {
        let mut completions = Vec::new();

        let Some(partial) = normalize(partial) else {
            return completions;
        };
        let Some(start) = self.find_node(&partial) else {
            return completions;
        };

        let mut queue = VecDeque::new();
        queue.push_back((start, partial.clone()));

        // The cap is checked before every dequeue, so nothing past `limit` is
        // ever appended even if siblings are still queued.
        while completions.len() < limit {
            let Some((node, word)) = queue.pop_front() else {
                break;
            };

            if node.is_end_of_word && word != partial {
                completions.push(word.clone());
            }

            for (c, child) in node.iter_children() {
                let mut next = String::with_capacity(word.len() + 1);
                next.push_str(&word);
                next.push(c);
                queue.push_back((child, next));
            }
        }

        completions
    }

    /// Renders the tree one node per line, depth-first in alphabetical order.
    ///
    /// Each line is the node's letter indented four columns per level, with
    /// `(*)` after terminal nodes. The root is rendered as a blank label.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(&self.root, 0usize, ' ')];

        while let Some((node, depth, label)) = stack.pop() {
            out.push_str(&format!("{:>width$} ", label, width = (depth * 4).max(1)));
            if node.is_end_of_word {
                out.push_str("(*)");
            }
            out.push('\n');

            // Reversed so the stack pops children a..z.
            let children: Vec<_> = node.iter_children().collect();
            for (c, child) in children.into_iter().rev() {
                stack.push((child, depth + 1, c));
            }
        }

        out
    }

    fn find_node(&self, normalized: &str) -> Option<&PrefixTreeNode> {
        let mut current_node = &self.root;
        for b in normalized.bytes() {
            current_node = current_node.child(b)?;
        }
        Some(current_node)
    }

    fn bfs_nodes(&self) -> impl Iterator<Item = &PrefixTreeNode> {
        let mut queue = VecDeque::from([&self.root]);
        std::iter::from_fn(move || {
            let node = queue.pop_front()?;
            queue.extend(node.iter_children().map(|(_, child)| child));
            Some(node)
        })
    }
}

// Frees nodes from an explicit stack. The derived drop recurses once per
// letter, which overflows the stack on very long words.
impl Drop for PrefixTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<PrefixTreeNode>> = self
            .root
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut tree = PrefixTree::new();
        tree.extend(words);
        tree
    }
}
