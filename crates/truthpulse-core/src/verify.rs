//! State held by the Verify page.

use crate::score::{ScoreSource, TruthScore, Verdict};
use tracing::debug;

/// Claim text and the most recent truth score.
///
/// The two fields are independent: editing the claim never touches the score,
/// and the score never looks at the claim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyState {
    claim_text: String,
    score: Option<TruthScore>,
}

impl VerifyState {
    /// Empty claim, no score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current claim text.
    pub fn claim_text(&self) -> &str {
        &self.claim_text
    }

    /// Replace the claim text (one call per keystroke).
    pub fn set_claim_text(&mut self, text: impl Into<String>) {
        self.claim_text = text.into();
    }

    /// Most recent score, if the verify action has fired.
    pub fn score(&self) -> Option<TruthScore> {
        self.score
    }

    /// Verdict for the current score.
    pub fn verdict(&self) -> Option<Verdict> {
        self.score.map(Verdict::from_score)
    }

    /// Fire the verify action: draw a fresh score and store it.
    pub fn verify<S: ScoreSource + ?Sized>(&mut self, source: &S) -> TruthScore {
        let score = source.draw();
        debug!(score = score.value(), claim_len = self.claim_text.len(), "Claim verified");
        self.score = Some(score);
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::FixedScoreSource;

    fn fixed(value: u32) -> FixedScoreSource {
        FixedScoreSource::new(TruthScore::new(value).unwrap())
    }

    #[test]
    fn test_initial_state_has_no_score() {
        let state = VerifyState::new();
        assert_eq!(state.claim_text(), "");
        assert_eq!(state.score(), None);
        assert_eq!(state.verdict(), None);
    }

    #[test]
    fn test_verify_sets_score() {
        let mut state = VerifyState::new();
        let score = state.verify(&fixed(71));

        assert_eq!(score.value(), 71);
        assert_eq!(state.score(), Some(score));
        assert_eq!(state.verdict(), Some(Verdict::LikelyTrue));
    }

    #[test]
    fn test_typing_leaves_score_alone() {
        let mut state = VerifyState::new();
        state.set_claim_text("Vaccines");
        state.verify(&fixed(12));

        for text in ["Vaccines c", "Vaccines ca", "Vaccines cause", ""] {
            state.set_claim_text(text);
            assert_eq!(state.claim_text(), text);
            assert_eq!(state.score().map(TruthScore::value), Some(12));
        }
    }

    #[test]
    fn test_verify_ignores_claim_content() {
        let source = fixed(50);

        let mut empty = VerifyState::new();
        let mut long = VerifyState::new();
        long.set_claim_text("x".repeat(100_000));

        assert_eq!(empty.verify(&source), long.verify(&source));
    }

    #[test]
    fn test_verify_again_replaces_score() {
        let mut state = VerifyState::new();
        state.verify(&fixed(5));
        state.verify(&fixed(95));
        assert_eq!(state.score().map(TruthScore::value), Some(95));
    }

    #[test]
    fn test_verify_with_trait_object() {
        let source: Box<dyn ScoreSource> = Box::new(fixed(40));
        let mut state = VerifyState::new();
        state.verify(source.as_ref());
        assert_eq!(state.verdict(), Some(Verdict::PartiallyTrue));
    }
}
