//! Board geometry
//!
//! Every coordinate range on the board is derived from a single size value so that
//! boundary math, baselines and coin placement all agree.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Player;
use crate::consts::*;

/// Immutable layout of a square carrom board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Top-left corner of the frame
    pub origin: Vec2,
    /// Outer size, frame included
    pub size: f32,
    pub frame_width: f32,
    /// Side length of the interior playable square
    pub play_area_size: f32,
    /// Inset of each baseline from the interior edge
    pub baseline_offset: f32,

    // Cosmetic geometry, read by renderers only
    pub pocket_radius: f32,
    pub baseline_thickness: f32,
    pub baseline_gap: f32,
    pub center_circle_radius: f32,
    pub restricted_area_size: f32,
}

impl BoardLayout {
    /// Layout with the frame's top-left corner at the origin
    pub fn new(size: f32) -> Self {
        Self::with_origin(Vec2::ZERO, size)
    }

    /// Layout sized to 90% of a square canvas and centered in it
    pub fn centered(canvas: f32) -> Self {
        let size = canvas * BOARD_CANVAS_RATIO;
        let offset = (canvas - size) / 2.0;
        Self::with_origin(Vec2::splat(offset), size)
    }

    fn with_origin(origin: Vec2, size: f32) -> Self {
        let frame_width = size * FRAME_RATIO;
        let play_area_size = size - 2.0 * frame_width;
        let baseline_thickness = play_area_size * BASELINE_THICKNESS_RATIO;
        Self {
            origin,
            size,
            frame_width,
            play_area_size,
            baseline_offset: play_area_size * BASELINE_OFFSET_RATIO,
            pocket_radius: play_area_size * POCKET_RATIO,
            baseline_thickness,
            baseline_gap: baseline_thickness * 2.0,
            center_circle_radius: play_area_size * CENTER_CIRCLE_RATIO,
            restricted_area_size: play_area_size * RESTRICTED_AREA_RATIO,
        }
    }

    /// Top-left corner of the play area
    #[inline]
    pub fn interior_min(&self) -> Vec2 {
        self.origin + Vec2::splat(self.frame_width)
    }

    /// Bottom-right corner of the play area
    #[inline]
    pub fn interior_max(&self) -> Vec2 {
        self.interior_min() + Vec2::splat(self.play_area_size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.interior_min() + Vec2::splat(self.play_area_size / 2.0)
    }

    /// Legal range for the center of a disc with the given radius
    pub fn center_bounds(&self, radius: f32) -> (Vec2, Vec2) {
        (
            self.interior_min() + Vec2::splat(radius),
            self.interior_max() - Vec2::splat(radius),
        )
    }

    /// Whether a disc of `radius` centered at `pos` lies fully inside the play area
    pub fn contains(&self, pos: Vec2, radius: f32) -> bool {
        let (min, max) = self.center_bounds(radius);
        pos.cmpge(min).all() && pos.cmple(max).all()
    }

    /// Y coordinate of a player's baseline. Player one shoots from the bottom.
    pub fn baseline_y(&self, player: Player) -> f32 {
        match player {
            Player::One => self.interior_max().y - self.baseline_offset,
            Player::Two => self.interior_min().y + self.baseline_offset,
        }
    }

    /// Horizontal extent of both baselines
    pub fn baseline_x_range(&self) -> (f32, f32) {
        (
            self.interior_min().x + self.baseline_offset,
            self.interior_max().x - self.baseline_offset,
        )
    }

    /// Striker start point for a player: middle of their baseline
    pub fn start_position(&self, player: Player) -> Vec2 {
        Vec2::new(self.center().x, self.baseline_y(player))
    }

    /// Pocket centers, clockwise from top-left
    pub fn pocket_centers(&self) -> [Vec2; 4] {
        let min = self.interior_min() + Vec2::splat(self.pocket_radius);
        let max = self.interior_max() - Vec2::splat(self.pocket_radius);
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }
}
