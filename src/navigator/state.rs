use crate::form::PageNumber;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The navigation record of one active form instance.
///
/// Invariants, upheld by construction:
/// - the history stack is never empty and its top is the current page,
/// - every page ever pushed to the history is in the visited set,
/// - the visited and skipped sets are disjoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    current: PageNumber,
    history: Vec<PageNumber>,
    visited: AHashSet<PageNumber>,
    skipped: AHashSet<PageNumber>,
}

impl NavigationState {
    /// Fresh state positioned on `start`, with `start` as the sole history
    /// entry.
    pub fn new(start: PageNumber) -> Self {
        let mut visited = AHashSet::new();
        visited.insert(start);
        Self {
            current: start,
            history: vec![start],
            visited,
            skipped: AHashSet::new(),
        }
    }

    pub fn current(&self) -> PageNumber {
        self.current
    }

    pub fn history(&self) -> &[PageNumber] {
        &self.history
    }

    /// Pages actually seen, in ascending order. Progress displays use this
    /// rather than the raw page count.
    pub fn active_path(&self) -> Vec<PageNumber> {
        self.visited.iter().copied().sorted().collect()
    }

    /// Pages bypassed by branch jumps, in ascending order.
    pub fn skipped_pages(&self) -> Vec<PageNumber> {
        self.skipped.iter().copied().sorted().collect()
    }

    pub fn is_visited(&self, page: PageNumber) -> bool {
        self.visited.contains(&page)
    }

    /// Moves forward to `page`, recording it on the history stack.
    ///
    /// The stack only grows when the target differs from its top; the
    /// visited set always absorbs the page, and visiting a page removes it
    /// from the skipped set to keep the two disjoint.
    pub fn move_to(&mut self, page: PageNumber) {
        if self.history.last() != Some(&page) {
            self.history.push(page);
        }
        self.visited.insert(page);
        self.skipped.remove(&page);
        self.current = page;
    }

    /// Retraces one step of the actual path. Returns the new current page,
    /// or `None` when only the first visited page remains (a no-op).
    pub fn back(&mut self) -> Option<PageNumber> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        // The stack is still non-empty after the guard above.
        let top = *self.history.last()?;
        self.current = top;
        Some(top)
    }

    /// Records every page strictly between `from` and `to` that was never
    /// visited as skipped. Direction does not matter.
    pub fn mark_skipped(&mut self, from: PageNumber, to: PageNumber) {
        let (lo, hi) = (from.min(to), from.max(to));
        for page in (lo + 1)..hi {
            if !self.visited.contains(&page) {
                self.skipped.insert(page);
            }
        }
    }

    /// Repairs a current page found outside `[1, total]`. Defensive only;
    /// callers log when this actually changes anything.
    pub fn clamp_current(&mut self, total: PageNumber) -> bool {
        if self.current > total && total > 0 {
            self.move_to(total);
            true
        } else {
            false
        }
    }
}

/// A serializable capture of navigation state, for hosts that persist the
/// resume position of a partially answered form. The engine itself never
/// touches storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub current: PageNumber,
    pub history: Vec<PageNumber>,
    pub visited: Vec<PageNumber>,
    pub skipped: Vec<PageNumber>,
}

impl NavigationSnapshot {
    pub(crate) fn capture(state: &NavigationState) -> Self {
        Self {
            current: state.current,
            history: state.history.clone(),
            visited: state.active_path(),
            skipped: state.skipped_pages(),
        }
    }

    /// Rebuilds state from a snapshot, re-deriving the invariants: history
    /// entries are always visited, and skipped pages that were since visited
    /// are dropped.
    pub(crate) fn into_state(self) -> NavigationState {
        let mut visited: AHashSet<PageNumber> = self.visited.into_iter().collect();
        visited.extend(self.history.iter().copied());
        let skipped = self
            .skipped
            .into_iter()
            .filter(|page| !visited.contains(page))
            .collect();
        let history = if self.history.is_empty() {
            vec![self.current]
        } else {
            self.history
        };
        let mut state = NavigationState {
            current: self.current,
            history,
            visited,
            skipped,
        };
        state.visited.insert(state.current);
        if state.history.last() != Some(&state.current) {
            state.history.push(state.current);
        }
        state
    }
}
