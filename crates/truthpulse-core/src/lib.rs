//! # truthpulse-core
//!
//! Domain types shared by the TruthPulse server and its Leptos front-end.
//!
//! Nothing in here performs I/O, so the crate builds for native targets and
//! for `wasm32-unknown-unknown` alike. The browser build disables the default
//! `rand` feature and supplies its own [`ScoreSource`].
//!
//! ## Quick Start
//!
//! ```rust
//! use truthpulse_core::{FixedScoreSource, TruthScore, Verdict, VerifyState};
//!
//! let mut state = VerifyState::default();
//! state.set_claim_text("The moon is made of cheese");
//!
//! let source = FixedScoreSource::new(TruthScore::new(42).unwrap());
//! state.verify(&source);
//!
//! assert_eq!(state.verdict(), Some(Verdict::PartiallyTrue));
//! ```
//!
//! ## Modules
//!
//! - [`score`] - Truth score newtype, verdict buckets and score sources
//! - [`verify`] - State held by the Verify page
//! - [`trends`] - Static trend datasets and palettes
//! - [`pages`] - Client-side route table
//! - [`chart`] - SVG geometry for the gauge, line and pie charts

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chart;
pub mod error;
pub mod pages;
pub mod score;
pub mod trends;
pub mod verify;

pub use error::{Error, Result};
pub use pages::Page;
pub use score::{FixedScoreSource, ScoreSource, Tone, TruthScore, Verdict};
#[cfg(feature = "rand")]
pub use score::RandomScoreSource;
pub use trends::{CategoryShare, TrendAlert, TrendPoint, TrendsSnapshot};
pub use verify::VerifyState;

/// Product name shown in the navigation bar and API responses.
pub const APP_NAME: &str = "TruthPulse AI";
