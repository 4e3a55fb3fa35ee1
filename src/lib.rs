//! Earth Journey is a frame-deterministic camera animation engine for cinematic globe flights.
//!
//! Every query is a pure function of the frame number, so frames can be sampled in any order and
//! a recorded render matches a live preview exactly. The public API is session-oriented:
//!
//! - Load and validate an [`AnimationProject`] (or pick one from [`catalog`])
//! - Create a [`RenderSession`]
//! - Sample single frames, stream a range into a [`FrameSink`], or drive a [`GlobeRenderer`]
//!
//! The building blocks are usable on their own: [`CameraPathAnimator`] for keyframed flights,
//! [`LineAnimator`] and [`TrailOverlay`] for arcs drawn over time, and [`cloud_opacity`] for the
//! altitude-driven cloud layer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod camera;
pub(crate) mod geo;
pub(crate) mod scene;
pub(crate) mod session;
pub(crate) mod trail;

pub use crate::foundation::core::{
    CameraPose, Fps, FrameIndex, FrameRange, GeoSample, Location,
};
pub use crate::foundation::error::{JourneyError, JourneyResult};
pub use crate::foundation::math;

pub use crate::animation::clock::AnimationClock;
pub use crate::animation::lerp::Lerp;
pub use crate::camera::animator::{
    CameraPathAnimator, END_SEGMENT, END_SNAP, PathSample, START_SNAP,
};
pub use crate::camera::catmull::{EDGE_EASE_WINDOW, SegmentedCatmullRom};
pub use crate::camera::cloud::{CloudBand, cloud_opacity};
pub use crate::camera::hermite::{HermiteLogAltitude, Tangent};
pub use crate::camera::path::{FlightPath, FlightSegment};
pub use crate::camera::policy::{PathInterpolator, PathPolicy};
pub use crate::geo::arc::{
    Arc, ArcPoints, ArcPointsIter, LINE_ARC_FACTOR, TRAIL_ARC_FACTOR, generate_arc_points,
};
pub use crate::geo::{EARTH_RADIUS_KM, distance_km, haversine_km, to_ecef};
pub use crate::scene::catalog;
pub use crate::scene::globe::{
    DEFAULT_FOLLOW_ALT, DEFAULT_FOLLOW_PITCH, GlobeCameraConfig, GlobeLineScene,
};
pub use crate::scene::project::{AnimationProject, FlightConfig, GlobeLineConfig, ProjectKind};
pub use crate::scene::{
    FlightScene, FrameState, GLOBE_SEGMENT, LineSnapshot, SampleOptions, Scene, TrailSnapshot,
};
pub use crate::session::player::{
    DEFAULT_ARC_POINTS, GlobeRenderer, PlaybackReport, TRAIL_POLYLINE, format_altitude,
};
pub use crate::session::render_session::{RenderSession, RenderSessionOpts, RenderStats};
pub use crate::session::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use crate::trail::lines::{LineAnimator, LineSegment, LineState};
pub use crate::trail::overlay::{DEFAULT_DIRECTION, TrailConfig, TrailOverlay};
