//! Longest accepted walk over the product of automaton vertices and word positions.
//!
//! For a product state `(vertex, position)` the solver computes the largest
//! number of characters of `word[position..]` that can be consumed by a walk
//! from `vertex` ending in a terminal vertex. Epsilon edges are free; a letter
//! edge consumes `word[position]` and advances the position by one.
//!
//! States are evaluated lazily with an explicit work stack, so deep chains of
//! dependencies never touch the call stack. Termination relies on the epsilon
//! subgraph being acyclic, which [`CondensedAutomaton`] guarantees.

use crate::automaton::{CondensedAutomaton, EPSILON, VertexId, letter_of_byte};

/// A product state: a vertex together with a position in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub vertex: VertexId,
    pub position: usize,
}

impl Step {
    /// Whether moving from `self` to `next` consumes a character.
    pub fn consumes(&self, next: &Step) -> bool {
        next.position == self.position + 1
    }
}

/// Memo entry of one evaluated product state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkEntry {
    /// Longest number of consumed characters, `None` if no terminal is reachable
    pub length: Option<usize>,
    /// Best continuation, `None` when the walk stops here
    pub next: Option<Step>,
}

/// Memoized longest-walk computation for one word.
///
/// The memo table is sized for this word and must not be reused for another.
pub struct LongestWalkSolver<'a> {
    automaton: &'a CondensedAutomaton,
    word: &'a [u8],
    /// `None` until the state has been evaluated
    memo: Vec<Option<WalkEntry>>,
    evaluated: usize,
}

impl<'a> LongestWalkSolver<'a> {
    /// # Panics
    /// Panics if the memo table size `num_vertices * (word.len() + 1)` overflows.
    pub fn new(automaton: &'a CondensedAutomaton, word: &'a str) -> Self {
        let word = word.as_bytes();
        let size = word
            .len()
            .checked_add(1)
            .and_then(|columns| columns.checked_mul(automaton.num_vertices()))
            .unwrap_or_else(|| panic!("memo table for a word of {} bytes overflows", word.len()));
        Self {
            automaton,
            word,
            memo: vec![None; size],
            evaluated: 0,
        }
    }

    pub fn word(&self) -> &'a [u8] {
        self.word
    }

    pub fn automaton(&self) -> &'a CondensedAutomaton {
        self.automaton
    }

    /// Number of product states evaluated so far.
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    #[inline]
    fn index(&self, step: Step) -> usize {
        debug_assert!(step.position <= self.word.len(), "position out of range");
        debug_assert!((step.vertex as usize) < self.automaton.num_vertices());
        step.vertex as usize * (self.word.len() + 1) + step.position
    }

    /// The memo entry of a state, if it has been evaluated.
    pub fn entry(&self, vertex: VertexId, position: usize) -> Option<&WalkEntry> {
        self.memo[self.index(Step { vertex, position })].as_ref()
    }

    /// Longest number of characters consumed by an accepting walk from
    /// `(vertex, position)`, or `None` if no terminal vertex is reachable.
    ///
    /// # Panics
    /// Panics if `position > word.len()` or `vertex` is out of range.
    pub fn longest_walk(&mut self, vertex: VertexId, position: usize) -> Option<usize> {
        assert!(position <= self.word.len(), "position {position} out of range");
        assert!(
            (vertex as usize) < self.automaton.num_vertices(),
            "vertex {vertex} out of range"
        );
        let root = Step { vertex, position };
        self.evaluate(root);
        self.memo[self.index(root)].and_then(|entry| entry.length)
    }

    /// Successor states of `step`: epsilon successors first, then the letter
    /// successors matching `word[position]`, each in edge insertion order.
    fn successors(&self, step: Step) -> impl Iterator<Item = Step> + use<'a> {
        let automaton = self.automaton;
        let word = self.word;
        let Step { vertex, position } = step;

        let silent = automaton
            .transitions(vertex, EPSILON)
            .iter()
            .map(move |&next| Step {
                vertex: next,
                position,
            });
        let letter = word
            .get(position)
            .and_then(|&byte| letter_of_byte(byte))
            .map(move |letter| automaton.transitions(vertex, letter))
            .unwrap_or(&[]);
        let consuming = letter.iter().map(move |&next| Step {
            vertex: next,
            position: position + 1,
        });

        silent.chain(consuming)
    }

    fn evaluate(&mut self, root: Step) {
        let mut stack = vec![root];

        while let Some(&step) = stack.last() {
            if self.memo[self.index(step)].is_some() {
                stack.pop();
                continue;
            }

            let before = stack.len();
            for next in self.successors(step) {
                if self.memo[self.index(next)].is_none() {
                    stack.push(next);
                }
            }
            if stack.len() > before {
                continue;
            }

            stack.pop();
            let entry = self.combine(step);
            let idx = self.index(step);
            self.memo[idx] = Some(entry);
            self.evaluated += 1;
        }

        tracing::trace!(
            evaluated = self.evaluated,
            table_size = self.memo.len(),
            "evaluated product states"
        );
    }

    /// Pick the best continuation of `step`; all successors must be evaluated.
    ///
    /// Stopping at a terminal scores 0. A candidate replaces the current best
    /// only if it is strictly longer, so earlier candidates win ties.
    fn combine(&self, step: Step) -> WalkEntry {
        let mut best = WalkEntry {
            length: self.automaton.is_terminal(step.vertex).then_some(0),
            next: None,
        };

        for next in self.successors(step) {
            let Some(length) = self.memo[self.index(next)].and_then(|entry| entry.length) else {
                continue;
            };
            let candidate = if step.consumes(&next) {
                length + 1
            } else {
                length
            };
            if best.length.is_none_or(|current| current < candidate) {
                best = WalkEntry {
                    length: Some(candidate),
                    next: Some(next),
                };
            }
        }

        best
    }
}
