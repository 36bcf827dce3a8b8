//! The two static pages: `/` (landing) and `/ad` (video ad).
//!
//! Pages are plain HTML strings. The `/ad` controls are a view of a
//! [`CaptureSession`](crate::CaptureSession): the trigger is disabled while an export runs and the
//! download link exists only once an artifact does.

pub(crate) mod pages;
pub(crate) mod route;
