//! Half-block frame rendering pipeline.
//!
//! 1. **Resize** - optional nearest-neighbor stretch to the terminal
//! 2. **Info bar** - optional stats banner
//! 3. **Row encoding** - run-length encoded color escapes per character row
//! 4. **Timing** - render duration and render-only frame rate

mod fps;
pub mod info_bar;
mod renderer;
mod run_encoder;
mod stats;

pub use fps::{FpsTracker, FrameCounter, AVG_FPS_ALPHA};
pub use renderer::{EncodedFrame, FrameRenderer};
pub use run_encoder::{encode_row, RunEncoder, HALF_BLOCK, RESET};
pub use stats::RenderStats;
