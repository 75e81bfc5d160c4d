// Core reporting logic: line scanning and fixed-width layout.
// Everything here works on documents already in memory; fetching them is the
// CLI's job.

pub mod entity;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod report;
pub mod scan;
pub mod text;
pub mod theme;

pub use error::{Error, Result};
pub use model::{MediaKind, SessionRecord, TranscodeMode, LOCAL_USER};
pub use render::{Layout, LayoutMetrics, SessionRenderer};
pub use report::Reporter;
pub use scan::{classify, LineEvent, ScanState, ServerIdentity, Transition};
pub use theme::{Category, ColorTheme};
