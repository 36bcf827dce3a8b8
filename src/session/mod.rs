//! Frame scheduling and the capture session lifecycle.
//!
//! [`driver`] owns the single frame loop used by both the live preview and the export. The loop is
//! parameterized by a [`driver::TimeSource`]: wall-clock modulo the timeline duration for preview,
//! frame index over fps for export. [`capture`] wraps the export loop in the
//! `Idle -> Recording -> Finalizing -> Idle` state machine.

pub(crate) mod capture;
pub(crate) mod driver;
pub(crate) mod preview;
