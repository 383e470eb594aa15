//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `app`, `sim` und Binary
//! geteilt werden.

pub mod options;

pub use options::GrabOptions;
pub use options::{ACTION_TTL_SECS, MAX_SOLID_ANGLE, TICK_INTERVAL_MS};
