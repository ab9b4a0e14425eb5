//! Submission scheduler
//!
//! Holds every in-flight submission and steps them each frame. Completed
//! entries are pruned with an unconditional retain pass at the start of
//! the next frame, so a submission is still sampleable on the frame it
//! finishes.

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

use crate::submission::Submission;

new_key_type! {
    pub struct SubmissionId;
}

/// The active set of submission animations
#[derive(Default)]
pub struct SubmissionScheduler {
    submissions: SlotMap<SubmissionId, Submission>,
}

impl SubmissionScheduler {
    pub fn new() -> Self {
        Self {
            submissions: SlotMap::with_key(),
        }
    }

    pub fn enqueue(&mut self, submission: Submission) -> SubmissionId {
        self.submissions.insert(submission)
    }

    pub fn get(&self, id: SubmissionId) -> Option<&Submission> {
        self.submissions.get(id)
    }

    /// Prune completed submissions, then advance the rest
    ///
    /// The prune runs unconditionally every frame; running it against an
    /// already-pruned set is a no-op.
    pub fn advance(&mut self, delta_frames: f32) {
        let before = self.submissions.len();
        self.submissions.retain(|_, sub| !sub.is_complete());
        let pruned = before - self.submissions.len();
        if pruned > 0 {
            trace!(pruned, "removed finished submissions");
        }

        for (_, sub) in self.submissions.iter_mut() {
            sub.advance(delta_frames);
        }
    }

    /// Iterate the in-flight submissions
    pub fn iter(&self) -> impl Iterator<Item = (SubmissionId, &Submission)> {
        self.submissions.iter()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}
