pub mod api;
pub mod core;
pub mod input;
pub mod systems;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::config::PrompterConfig;
pub use api::prompter::Prompter;
pub use api::types::{ControlToken, DisplayMode};
pub use core::geometry::{GeometryInputs, DEFAULT_FONT_SIZE, DEFAULT_LOOP_GAP, MAX_FADE_FRACTION};
pub use core::ramp::SpeedRamp;
pub use core::scroll::{Motion, ScrollClock, ScrollState};
pub use core::time::{FixedStep, Substeps};
pub use input::controls::{ControlInputs, FrameInputs};
pub use input::handler::{apply_event, apply_events};
pub use input::queue::{ControlEvent, ControlQueue};
pub use systems::fade::{BandEdge, EdgeBand, EdgeFade, FadeMask, GradientStop};
pub use systems::measure::ContentMeasure;
pub use systems::presentation::{EMPTY_STATE_MESSAGE, READY_STATE_MESSAGE};
pub use systems::tiling::{repetition_count, TilePlan};
pub use bridge::protocol::{RenderFrame, FRAME_FLOATS, PROTOCOL_VERSION};
