//! embusen animates a performer marker along the floor pattern of a martial-arts form.
//!
//! A form is an ordered list of [`Step`]s, each optionally carrying a floor position and a
//! compass facing. Three independent pieces turn that list into a drawable diagram:
//!
//! 1. **Orientation**: [`heading_of`] maps the eight compass labels to clockwise headings and
//!    [`glyph_of`] maps guard labels to small symbols.
//! 2. **Interpolation**: [`StepTween`] produces the frames between the last rendered
//!    [`RenderPose`] and a target step, always turning the short way round. [`Animator`] owns
//!    the `Idle`/`Animating` state and the single timer that drives it.
//! 3. **Framing**: [`ViewRegion`] frames every positioned step with padding and provides the
//!    flipped drawing rectangle (stored `y` is up-positive, drawn `y` is down-positive).
//!
//! None of the three calls another. [`DiagramSession`] is the caller-side orchestration used by
//! the `embusen` binary: it reframes on list changes and retargets on index changes.
//!
//! The core never fails on its inputs. Missing positions hold and unknown facings resolve to
//! north. Empty lists frame a default square. [`EmbusenError`] surfaces from option
//! validation, sequence decoding, index preconditions and rasterization.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod framing;
mod orientation;
mod render;
mod sequence;
mod session;

pub use animation::animator::{AnimState, Animator};
pub use animation::pose::RenderPose;
pub use animation::scheduler::{Scheduler, Tick, TimerId, VirtualScheduler};
pub use animation::tween::{
    DEFAULT_FRAME_COUNT, DEFAULT_STEP_DURATION_MS, StepTween, TweenFrame, TweenOpts,
};
pub use foundation::core::{Point, Rect, TimeMs};
pub use foundation::error::{EmbusenError, EmbusenResult};
pub use foundation::math::Lerp;
pub use framing::view::{DEFAULT_PADDING, ViewRegion, flip_point, flip_y};
pub use orientation::compass::{CompassLabel, Facing, heading_of, heading_of_facing};
pub use orientation::glyph::{GuardLevel, PLACEHOLDER_GLYPH, glyph_of};
pub use render::raster::{FrameRGBA, rasterize_svg, save_png};
pub use render::scene::DiagramScene;
pub use render::svg::{SvgStyle, render_svg};
pub use sequence::record::Sequence;
pub use sequence::step::Step;
pub use session::diagram_session::DiagramSession;
pub use session::opts::PlaybackOpts;
