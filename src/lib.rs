//! Route Cut Editor Library.
//!
//! Schneidet ein Teilstück aus einer Trasse (Polylinie) heraus und gruppiert
//! die verbleibenden Teile nach Zusammenhang neu. Core-Funktionalität als
//! Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod cut;
pub mod feature_set;
pub mod session;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{
    explode, touches, Bounds, EditError, EditResult, Path, Point, Polyline, Route,
    RouteAttributes, RouteId, DEFAULT_EPSILON,
};
pub use core::{CommitApplied, RouteLayer, SegmentIndex, SegmentMatch};
pub use cut::{
    difference, group_by_connectivity, merge_groups, nearest_point_on_path, slice_between,
    PathProjection,
};
pub use feature_set::{parse_feature_set, write_feature_set};
pub use session::{
    CutPoint, EditCommit, EditOutcome, EditSession, RejectReason, RouteHost, SessionConfig,
    SessionState, SnapPolicy,
};
pub use shared::EditorOptions;
