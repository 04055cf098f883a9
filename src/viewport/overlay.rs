//! Repeating ground and grid overlays.
//!
//! The overlays tile forever, so instead of following the origin they are
//! drawn at an anchor that wraps within one tile of the world origin. The
//! renderer draws a fixed patch at the anchor and the pattern appears to
//! scroll as the origin walks.

use glam::Vec3;

use crate::settings::{SettingFlag, SettingsFlags};

/// Ground tile size in world units.
pub const GROUND_TILE: f32 = 2.0;
/// Ground squares drawn along each axis.
pub const GROUND_SQUARES: u32 = 8;
/// Grid cell size in world units.
pub const GRID_SPAN: f32 = 5.0;
/// Grid cells drawn along each axis in each direction.
pub const GRID_REPEATS: u32 = 4;

/// Reduce `value` into `(-modulus, modulus)`, keeping its sign and
/// fractional part.
///
/// Uses truncated division, so `-7.25` wraps to `-2.25` under modulus 5.
#[must_use]
pub fn modulus_context(value: f32, modulus: f32) -> f32 {
    value.trunc() % modulus + value.fract()
}

/// Checkerboard ground plane under the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundOverlay {
    /// Where to draw the board. Sits at the origin's negated height.
    pub anchor: Vec3,
    /// Tile size.
    pub tile: f32,
    /// Squares per side.
    pub squares: u32,
}

impl GroundOverlay {
    /// Ground for a camera at `origin`.
    #[must_use]
    pub fn around(origin: Vec3) -> Self {
        Self {
            anchor: Vec3::new(
                modulus_context(-origin.x, GROUND_TILE),
                modulus_context(-origin.y, GROUND_TILE),
                -origin.z,
            ),
            tile: GROUND_TILE,
            squares: GROUND_SQUARES,
        }
    }
}

/// One marker of the grid: three unit axis lines crossing at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCross {
    /// Crossing point, relative to the grid anchor.
    pub center: Vec3,
    /// Fades from near 1 at the anchor to 0 at the edge of the lattice.
    pub brightness: f32,
}

impl GridCross {
    /// The three axis lines, each running one unit either side of the
    /// center.
    #[must_use]
    pub fn segments(&self) -> [[Vec3; 2]; 3] {
        [Vec3::X, Vec3::Y, Vec3::Z]
            .map(|axis| [self.center - axis, self.center + axis])
    }
}

/// Three-axis lattice of fading crosses around the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOverlay {
    /// Lattice point nearest the world origin.
    pub anchor: Vec3,
    /// Cell size.
    pub span: f32,
    /// Cells in each direction from the anchor.
    pub repeats: u32,
}

impl GridOverlay {
    /// Grid for a camera at `origin`.
    #[must_use]
    pub fn around(origin: Vec3) -> Self {
        let wrap = |v: f32| modulus_context(-v, GRID_SPAN);
        Self {
            anchor: Vec3::new(wrap(origin.x), wrap(origin.y), wrap(origin.z)),
            span: GRID_SPAN,
            repeats: GRID_REPEATS,
        }
    }

    /// Crosses of the lattice, relative to the anchor.
    ///
    /// Lattice offsets cover `[-reach, reach)` on each axis where
    /// `reach = span * repeats`. Brightness falls off with a taxicab
    /// distance and is clamped to `[0, 1]`.
    #[must_use]
    pub fn crosses(&self) -> Vec<GridCross> {
        let reach = self.span * self.repeats as f32;
        let floored = |v: f32| v - (v / self.span).floor() * self.span;
        let phase = Vec3::new(
            floored(self.anchor.x),
            floored(self.anchor.y),
            floored(self.anchor.z),
        );
        let steps = self.repeats * 2;
        let offset = |n: u32| n as f32 * self.span - reach;

        let mut crosses = Vec::with_capacity((steps * steps * steps) as usize);
        for i in (0..steps).map(offset) {
            for j in (0..steps).map(offset) {
                for k in (0..steps).map(offset) {
                    let distance = (i + phase.x - 1.0).abs()
                        + (j + phase.y - 1.0).abs()
                        + k.abs();
                    crosses.push(GridCross {
                        center: Vec3::new(i, j, k) + phase - self.anchor,
                        brightness: (1.0 - distance / reach).clamp(0.0, 1.0),
                    });
                }
            }
        }
        crosses
    }
}

/// The overlays enabled for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overlays {
    /// Present when [`SettingFlag::ShowGround`] is set.
    pub ground: Option<GroundOverlay>,
    /// Present when [`SettingFlag::ShowGrid`] is set.
    pub grid: Option<GridOverlay>,
}

impl Overlays {
    /// Overlays for a camera at `origin` under `settings`.
    #[must_use]
    pub fn new(origin: Vec3, settings: SettingsFlags) -> Self {
        Self {
            ground: settings
                .contains(SettingFlag::ShowGround)
                .then(|| GroundOverlay::around(origin)),
            grid: settings
                .contains(SettingFlag::ShowGrid)
                .then(|| GridOverlay::around(origin)),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn modulus_context_truncates_toward_zero() {
        assert_abs_diff_eq!(modulus_context(7.25, 5.0), 2.25);
        assert_abs_diff_eq!(modulus_context(-7.25, 5.0), -2.25);
        assert_abs_diff_eq!(modulus_context(3.5, 2.0), 1.5);
        assert_abs_diff_eq!(modulus_context(0.0, 2.0), 0.0);
    }

    #[test]
    fn ground_follows_height_but_wraps_plane() {
        let ground = GroundOverlay::around(Vec3::new(5.5, -3.0, 1.5));
        assert!(ground.anchor.abs_diff_eq(Vec3::new(-1.5, 1.0, -1.5), 1e-6));
        assert_eq!(ground.squares, 8);
    }

    #[test]
    fn grid_wraps_every_axis() {
        let grid = GridOverlay::around(Vec3::new(12.0, 0.0, -6.5));
        assert!(grid.anchor.abs_diff_eq(Vec3::new(-2.0, 0.0, 1.5), 1e-6));
    }

    #[test]
    fn grid_crosses_fade_with_distance() {
        let crosses = GridOverlay::around(Vec3::ZERO).crosses();
        // 8 offsets per axis over [-20, 20)
        assert_eq!(crosses.len(), 8 * 8 * 8);

        let center = crosses
            .iter()
            .find(|c| c.center.abs_diff_eq(Vec3::ZERO, 1e-6))
            .unwrap();
        assert_abs_diff_eq!(center.brightness, 0.9, epsilon = 1e-6);

        let corner = crosses
            .iter()
            .find(|c| c.center.abs_diff_eq(Vec3::splat(-20.0), 1e-6))
            .unwrap();
        assert_abs_diff_eq!(corner.brightness, 0.0);
        assert!(crosses.iter().all(|c| (0.0..=1.0).contains(&c.brightness)));
    }

    #[test]
    fn grid_crosses_keep_lattice_phase() {
        let grid = GridOverlay::around(Vec3::new(12.0, 0.0, 0.0));
        // anchor x = -2, floored phase 3, so centers sit at 5n + 5
        assert!(grid
            .crosses()
            .iter()
            .all(|c| (c.center.x / 5.0).fract().abs() < 1e-6));
    }

    #[test]
    fn cross_arms_are_unit_length() {
        let cross = GridCross {
            center: Vec3::new(1.0, 2.0, 3.0),
            brightness: 1.0,
        };
        for [a, b] in cross.segments() {
            assert_abs_diff_eq!(a.distance(b), 2.0);
            assert!(((a + b) * 0.5).abs_diff_eq(cross.center, 1e-6));
        }
    }

    #[test]
    fn overlays_follow_flags() {
        let mut flags = SettingsFlags::all();
        let all = Overlays::new(Vec3::ZERO, flags);
        assert!(all.ground.is_some() && all.grid.is_some());

        flags.remove(SettingFlag::ShowGrid);
        let ground_only = Overlays::new(Vec3::ZERO, flags);
        assert!(ground_only.ground.is_some());
        assert!(ground_only.grid.is_none());

        assert_eq!(
            Overlays::new(Vec3::ZERO, SettingsFlags::empty()),
            Overlays::default()
        );
    }
}
