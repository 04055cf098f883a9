use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which of the three camera representations drives the projection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PerspectiveMode {
    /// Walk the ground plane and look around from eye height.
    #[default]
    FirstPerson,
    /// Orbit a fixed target at `horizon.distance`.
    Polar,
    /// Axis-aligned view of the ortho window rectangle.
    Orthographic,
}

impl PerspectiveMode {
    /// The mode the "cycle" command advances to.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::FirstPerson => Self::Polar,
            Self::Polar => Self::Orthographic,
            Self::Orthographic => Self::FirstPerson,
        }
    }

    /// Whether this mode uses the perspective frustum.
    #[must_use]
    pub const fn is_perspective(self) -> bool {
        !matches!(self, Self::Orthographic)
    }
}

impl fmt::Display for PerspectiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Self::FirstPerson => "First Person Perspective",
            Self::Polar => "Polar Perspective",
            Self::Orthographic => "Orthographic Perspective",
        };
        f.write_str(title)
    }
}
