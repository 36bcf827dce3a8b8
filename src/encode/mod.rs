//! Encoding sinks.
//!
//! Sinks consume rendered frames in timeline order during a capture session and hand back the
//! encoded media once finalized.

pub(crate) mod artifact;
pub(crate) mod ffmpeg;
pub(crate) mod sink;
