//! Timeline layout engine for calendar-style task boards.
//!
//! Given a set of date-ranged tasks, a time granularity (day, week, or
//! month), and a grouping key, [`layout::LayoutEngine`] produces a
//! [`model::BoardLayout`]: ordered column headers plus, for every group,
//! a collision-free row assignment for each task intersecting the
//! visible window. Layouts are memoized behind a bounded cache keyed by
//! a fingerprint of every input; identical requests return the same
//! `Arc` so callers can skip re-rendering on pointer equality.
//!
//! The engine is pure and synchronous: it does no I/O, never blocks, and
//! holds no state beyond the cache it owns. Loading tasks, persisting
//! settings, and painting the computed grid are the caller's business —
//! the `io` and `settings` modules and the `timeboard` binary cover the
//! common cases.

pub mod error;
pub mod io;
pub mod layout;
pub mod model;
pub mod settings;

pub use error::BoardError;
pub use layout::{GroupBy, LayoutEngine, LayoutRequest};
pub use model::{BoardLayout, Task, TimeUnit, Viewport};
pub use settings::BoardSettings;
