//! Core animation engine for the drift loading screen.
//!
//! Everything here is platform-free and natively testable: the dots, their
//! wave-band kinematics, the Visible/Clear phase scheduler, and the per-frame
//! scene driver. Platform concerns (canvas, clock, pointer, frame
//! scheduling) enter through [`surface::Surface`] and the arguments of
//! [`scene::Scene::frame`].

pub mod constants;
pub mod dot;
pub mod easing;
pub mod field;
pub mod label;
pub mod scene;
pub mod scheduler;
pub mod surface;

pub use dot::{Dot, DotFate, DotParams};
pub use easing::ease_in_out_cubic;
pub use field::{batch_size, DotField};
pub use label::LoadingLabel;
pub use scene::{FrameInput, Scene, SceneParams, Viewport};
pub use scheduler::{Phase, PhaseScheduler};
pub use surface::{Rgb, Surface};
