//! Fill modes, alignment, and axes.

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-to-right.
    Horizontal,
    /// Bottom-to-top.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The perpendicular axis.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// How a tile's size along one axis is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fill {
    /// Explicit pixel size.
    #[default]
    Absolute,
    /// Proportional share of the parent's free space, governed by weight.
    FillParent,
    /// Size derived from children (layouts only).
    WrapContent,
    /// Like `FillParent`, then shrunk to keep the tile's aspect ratio.
    FillParentAspect,
    /// Like `WrapContent`, then grown to keep the tile's aspect ratio.
    WrapContentAspect,
}

impl Fill {
    /// Whether the size comes from the parent's free space.
    pub const fn is_fill_parent(self) -> bool {
        matches!(self, Self::FillParent | Self::FillParentAspect)
    }

    /// Whether the size comes from the tile's own children.
    pub const fn is_wrap(self) -> bool {
        matches!(self, Self::WrapContent | Self::WrapContentAspect)
    }

    /// Whether the width:height ratio is locked during resolution.
    pub const fn keeps_aspect(self) -> bool {
        matches!(self, Self::FillParentAspect | Self::WrapContentAspect)
    }
}

/// Placement of a tile within the space its parent grants it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    BottomLeft,
    Bottom,
    BottomRight,
    Left,
    #[default]
    Center,
    Right,
    TopLeft,
    Top,
    TopRight,
}

impl Align {
    /// Normalized `(horizontal, vertical)` offsets: 0.0 hugs the left or
    /// bottom edge, 1.0 hugs the right or top edge.
    pub const fn fractions(self) -> (f32, f32) {
        match self {
            Self::BottomLeft => (0.0, 0.0),
            Self::Bottom => (0.5, 0.0),
            Self::BottomRight => (1.0, 0.0),
            Self::Left => (0.0, 0.5),
            Self::Center => (0.5, 0.5),
            Self::Right => (1.0, 0.5),
            Self::TopLeft => (0.0, 1.0),
            Self::Top => (0.5, 1.0),
            Self::TopRight => (1.0, 1.0),
        }
    }

    /// Offset along a single axis.
    pub const fn fraction(self, axis: Axis) -> f32 {
        let (h, v) = self.fractions();
        match axis {
            Axis::Horizontal => h,
            Axis::Vertical => v,
        }
    }

    /// Center of a span of `size` pixels placed inside `[lo, hi]`.
    ///
    /// The span starts flush with `lo` and is pushed towards `hi` by the
    /// alignment fraction of the slack. Slack may be negative when the
    /// span is larger than the band.
    pub fn place(self, axis: Axis, lo: i32, hi: i32, size: i32) -> i32 {
        let slack = hi - lo - size;
        let shift = (slack as f32 * self.fraction(axis)) as i32;
        lo + size / 2 + shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_axis_flips() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }

    #[test]
    fn aspect_variants_share_base_behavior() {
        assert!(Fill::FillParentAspect.is_fill_parent());
        assert!(Fill::WrapContentAspect.is_wrap());
        assert!(!Fill::FillParent.keeps_aspect());
        assert!(Fill::WrapContentAspect.keeps_aspect());
        assert!(!Fill::Absolute.is_fill_parent());
        assert!(!Fill::Absolute.is_wrap());
    }

    #[test]
    fn corner_fractions() {
        assert_eq!(Align::BottomLeft.fractions(), (0.0, 0.0));
        assert_eq!(Align::TopRight.fractions(), (1.0, 1.0));
        assert_eq!(Align::Top.fraction(Axis::Horizontal), 0.5);
        assert_eq!(Align::Top.fraction(Axis::Vertical), 1.0);
    }

    #[test]
    fn place_left_center_right() {
        let h = Axis::Horizontal;
        assert_eq!(Align::Left.place(h, -50, 50, 20), -40);
        assert_eq!(Align::Center.place(h, -50, 50, 20), 0);
        assert_eq!(Align::Right.place(h, -50, 50, 20), 40);
    }

    #[test]
    fn place_bottom_top() {
        let v = Axis::Vertical;
        assert_eq!(Align::Bottom.place(v, 0, 100, 10), 5);
        assert_eq!(Align::Top.place(v, 0, 100, 10), 95);
    }

    #[test]
    fn place_oversized_span() {
        // Span wider than the band overhangs both edges when centered.
        assert_eq!(Align::Center.place(Axis::Horizontal, 0, 10, 30), 5);
        assert_eq!(Align::Left.place(Axis::Horizontal, 0, 10, 30), 15);
    }
}
