use crate::data::point::{ClassLabel, Point};
use crate::network::Architecture;

/// Discrete UI actions. Each variant has exactly one handler:
/// `Session::handle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Click at surface pixel coordinates (margin included).
    PointAdded { pixel_x: f64, pixel_y: f64 },
    ClassChanged(ClassLabel),
    ClearRequested,
    StartFitRequested,
    StopFitRequested,
    ArchitectureChanged(Architecture),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    OutsideViewport,
    /// Editing is disabled while fitting runs.
    InputLocked,
    NotRunning,
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PointStored(Point),
    ClassChanged(ClassLabel),
    Cleared { removed: usize },
    FitStarted,
    FitStopped,
    ArchitectureChanged(Architecture),
    Ignored(IgnoreReason),
}
