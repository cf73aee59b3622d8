/// Time each focus word stays on screen.
pub const FLIP_INTERVAL_MS: u64 = 3000;

/// Endless rotation through a fixed word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCycle {
    words: &'static [&'static str],
    index: usize,
}

impl WordCycle {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self { words, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        self.words.get(self.index).copied().unwrap_or_default()
    }

    /// Moves to the next word, wrapping back to the first.
    pub fn advance(&mut self) -> &'static str {
        if !self.words.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FOCUS_WORDS;

    #[test]
    fn test_cycle_wraps() {
        let mut cycle = WordCycle::new(FOCUS_WORDS);
        assert_eq!(cycle.current(), "Next.js");
        assert_eq!(cycle.advance(), "React");
        assert_eq!(cycle.advance(), "Full-Stack Dev");
        assert_eq!(cycle.advance(), "Next.js");
    }

    #[test]
    fn test_empty_list() {
        let mut cycle = WordCycle::new(&[]);
        assert_eq!(cycle.current(), "");
        assert_eq!(cycle.advance(), "");
    }
}
