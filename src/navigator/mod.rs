//! Navigation orchestration: validation-gated forward moves, path-retracing
//! backward moves, and the per-form navigation record.

use crate::form::{PageNumber, PageRegistry};
use crate::host::{FieldValueProvider, PageValidation, Tracker, Validator};
use crate::transition::{Transition, TransitionEvaluator};

mod state;

pub use state::{NavigationSnapshot, NavigationState};

/// What an `advance` call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The form reached its terminal submit decision. Navigation is over;
    /// further calls are no-ops that report `Submitted` again.
    Submitted,
    /// Navigation moved to this page.
    Moved(PageNumber),
    /// Validation rejected the current page; nothing moved. Carries the
    /// first invalid field for focus management.
    Blocked { first_invalid: String },
}

/// Owns the navigation state of exactly one active form instance.
///
/// Collaborators are injected per call, so the controller itself stays a
/// pure state machine over page numbers: the validator gates every forward
/// move, the provider supplies captured field values for branching, and the
/// tracker receives realized navigation events.
pub struct NavigationController<R: PageRegistry> {
    pages: R,
    state: NavigationState,
    submitted: bool,
}

impl<R: PageRegistry> NavigationController<R> {
    /// A controller positioned on the first page.
    pub fn new(pages: R) -> Self {
        Self {
            pages,
            state: NavigationState::new(1),
            submitted: false,
        }
    }

    pub fn current_page(&self) -> PageNumber {
        self.state.current()
    }

    pub fn history(&self) -> &[PageNumber] {
        self.state.history()
    }

    /// Pages actually seen so far, ascending.
    pub fn active_path(&self) -> Vec<PageNumber> {
        self.state.active_path()
    }

    /// Pages bypassed by branch jumps so far, ascending.
    pub fn skipped_pages(&self) -> Vec<PageNumber> {
        self.state.skipped_pages()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn registry(&self) -> &R {
        &self.pages
    }

    /// Computes the transition that an `advance` from the current page would
    /// take, without mutating anything. Used for live progress previews on
    /// field-change events.
    pub fn preview(&self, provider: &impl FieldValueProvider) -> Transition {
        TransitionEvaluator::new(&self.pages).next_page(self.state.current(), provider)
    }

    /// Attempts a validated forward move from the current page.
    ///
    /// The validation gate runs first: a rejected page aborts with zero
    /// state mutation. Only then does branching logic run. A plain advance
    /// emits `page_change`; a realized jump additionally emits `branch_jump`
    /// and records the bypassed pages as skipped.
    pub fn advance(
        &mut self,
        provider: &impl FieldValueProvider,
        validator: &impl Validator,
        tracker: &mut impl Tracker,
    ) -> AdvanceOutcome {
        if self.submitted {
            return AdvanceOutcome::Submitted;
        }
        self.repair_current();

        let from = self.state.current();
        if let PageValidation::Invalid { first_invalid } = validator.validate_page(from) {
            return AdvanceOutcome::Blocked { first_invalid };
        }

        let transition = TransitionEvaluator::new(&self.pages).next_page(from, provider);
        match transition {
            Transition::Submit => {
                self.submitted = true;
                AdvanceOutcome::Submitted
            }
            Transition::NextPage => {
                let target = from + 1;
                // Advancing off the last page, or onto the thank-you page,
                // is the submit decision.
                if target > self.pages.total_pages() || self.pages.is_thank_you(target) {
                    self.submitted = true;
                    return AdvanceOutcome::Submitted;
                }
                self.state.move_to(target);
                tracker.page_change(target);
                AdvanceOutcome::Moved(target)
            }
            Transition::GoToPage {
                target,
                field_id,
                matched_value,
                ..
            } => {
                self.state.move_to(target);
                if target != from + 1 {
                    self.state.mark_skipped(from, target);
                    tracker.branch_jump(
                        from,
                        target,
                        field_id.as_deref().unwrap_or(""),
                        matched_value.as_ref(),
                    );
                }
                tracker.page_change(target);
                AdvanceOutcome::Moved(target)
            }
        }
    }

    /// Steps backward along the actual visitation path.
    ///
    /// Pops the history stack and moves to its new top; with only one entry
    /// left (the first page actually visited) this is a no-op. Never a blind
    /// `current - 1`: forward branching may have skipped pages.
    pub fn retreat(&mut self, tracker: &mut impl Tracker) -> Option<PageNumber> {
        if self.submitted {
            return None;
        }
        let page = self.state.back()?;
        tracker.page_change(page);
        Some(page)
    }

    /// Discards all navigation history and repositions on `page` (clamped
    /// into range) as the sole history entry. Used when restoring a
    /// previously saved partial response.
    pub fn reset(&mut self, page: PageNumber) {
        let start = self.pages.clamp(i64::from(page));
        self.state = NavigationState::new(start);
        self.submitted = false;
    }

    /// Captures the navigation record for host-side persistence.
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot::capture(&self.state)
    }

    /// Adopts a previously captured navigation record, re-deriving the
    /// state invariants and clamping the resume page into range.
    pub fn restore(&mut self, mut snapshot: NavigationSnapshot) {
        snapshot.current = self.pages.clamp(i64::from(snapshot.current));
        self.state = snapshot.into_state();
        self.submitted = false;
        self.repair_current();
    }

    /// Defensive invariant check: a current page beyond the page count is
    /// corrected in place. Not expected in normal operation.
    fn repair_current(&mut self) {
        let total = self.pages.total_pages();
        if self.state.clamp_current(total) {
            log::error!(
                "Current page exceeded the page count ({}); repaired to {}",
                total,
                self.state.current()
            );
        }
    }
}
