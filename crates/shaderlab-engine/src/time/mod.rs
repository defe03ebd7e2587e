//! Time subsystem.
//!
//! Frame timing without coupling to the host loop:
//! - one `FrameClock` per preview
//! - call `tick(now)` once per animation callback to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
