//! Extraction of the longest substring accepted by an automaton.

use crate::automaton::CondensedAutomaton;
use crate::solver::{LongestWalkSolver, Step};

/// A non-empty substring of the word accepted by the automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringMatch {
    /// Byte offset of the first matched character
    pub start: usize,
    /// The matched text
    pub text: String,
}

impl SubstringMatch {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the last matched character.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Finds the leftmost longest substring of one word accepted by an automaton.
///
/// ```
/// use longsub::{Automaton, Edge, LongestSubstringFinder};
///
/// let automaton = Automaton::build(2, [Edge::new(0, 'a', 1), Edge::new(1, 'b', 1)], [1])?
///     .condense();
/// let mut finder = LongestSubstringFinder::new(&automaton, "xxabbbyy");
/// let found = finder.find().unwrap();
/// assert_eq!(found.text, "abbb");
/// assert_eq!(found.start, 2);
/// # Ok::<(), longsub::AutomatonError>(())
/// ```
pub struct LongestSubstringFinder<'a> {
    solver: LongestWalkSolver<'a>,
    answer: Option<Option<SubstringMatch>>,
}

impl<'a> LongestSubstringFinder<'a> {
    pub fn new(automaton: &'a CondensedAutomaton, word: &'a str) -> Self {
        Self {
            solver: LongestWalkSolver::new(automaton, word),
            answer: None,
        }
    }

    /// The longest accepted substring, or `None` if no non-empty substring is
    /// accepted. Ties go to the smallest start position. Computed once.
    pub fn find(&mut self) -> Option<&SubstringMatch> {
        if self.answer.is_none() {
            self.answer = Some(self.restore());
        }
        self.answer.as_ref().and_then(Option::as_ref)
    }

    fn restore(&mut self) -> Option<SubstringMatch> {
        let init = self.solver.automaton().init_vertex();
        let word = self.solver.word();

        let mut best: Option<(usize, usize)> = None;
        for position in 0..word.len() {
            if let Some(length) = self.solver.longest_walk(init, position) {
                if length > best.map_or(0, |(_, longest)| longest) {
                    best = Some((position, length));
                }
            }
        }

        let Some((start, length)) = best else {
            tracing::debug!(word_len = word.len(), "no accepting substring");
            return None;
        };

        let mut text = Vec::with_capacity(length);
        let mut step = Step {
            vertex: init,
            position: start,
        };
        while let Some(next) = self
            .solver
            .entry(step.vertex, step.position)
            .and_then(|entry| entry.next)
        {
            if step.consumes(&next) {
                text.push(word[step.position]);
            }
            step = next;
        }
        debug_assert_eq!(text.len(), length, "reconstructed length differs from longest walk");

        tracing::debug!(start, length, "found longest accepted substring");

        // Only bytes in a..=z are ever consumed
        let text = String::from_utf8(text).ok()?;
        Some(SubstringMatch { start, text })
    }
}

/// Longest substring of `word` accepted by `automaton`; empty if there is none.
pub fn longest_accepted_substring(automaton: &CondensedAutomaton, word: &str) -> String {
    LongestSubstringFinder::new(automaton, word)
        .find()
        .map(|found| found.text.clone())
        .unwrap_or_default()
}
