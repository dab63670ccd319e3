//! Browser-side score source

use truthpulse_core::{ScoreSource, TruthScore};

/// Draws truth scores from `Math.random()`.
///
/// `rand` is not built for the browser, so the core crate is pulled in
/// without its `rand` feature and the draw happens here instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScoreSource;

impl ScoreSource for BrowserScoreSource {
    fn draw(&self) -> TruthScore {
        TruthScore::from_unit(js_sys::Math::random())
    }
}
