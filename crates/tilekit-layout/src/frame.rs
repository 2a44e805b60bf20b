//! Frame resolution: every child aligned independently inside the padded
//! interior.
//!
//! A frame wraps to the largest child on each axis, or hands its full
//! interior to children that fill their parent.

use crate::fill::Axis;
use crate::layout::Layout;

pub(crate) fn resolve(frame: &mut Layout) {
    frame.measure_children();
    for axis in Axis::BOTH {
        frame.size_stacked_axis(axis);
    }
    frame.clamp_aspect();
    for axis in Axis::BOTH {
        frame.place_children(axis);
    }
    frame.update_children();
}
