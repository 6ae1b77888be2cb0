//! Merging partial reports into one canonical record and rendering it as
//! tiered markdown.
//!
//! Both steps are pure: the synthesizer takes its clock reading as an
//! argument and the renderer only templates what it is given.

pub mod error;
pub mod format;
pub mod render;
pub mod synthesize;
pub mod tier;

pub use error::ReportError;
pub use render::{render, RenderedReport};
pub use synthesize::{synthesize, CONFIDENCE_CAP};
pub use tier::ReportTier;
