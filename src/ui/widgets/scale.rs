//! Scale emulation through padding
//!
//! iced has no scale transform for ordinary widgets, so a control that
//! should shrink or grow trades padding between an outer margin and its own
//! frame. The outer footprint stays fixed and the layout never jumps.

use iced::Padding;

/// Largest change in inset, in logical pixels, either way
pub const SLACK: f32 = 4.0;
/// Pixels of inset per unit of scale
const INSET_PER_SCALE: f32 = 40.0;

/// Split `padding` ([vertical, horizontal]) into (outer margin, inner padding) for `scale`
pub fn scaled_padding(padding: [f32; 2], scale: f32) -> (Padding, Padding) {
    let inset = ((1.0 - scale) * INSET_PER_SCALE).clamp(-SLACK, SLACK);
    let [vertical, horizontal] = padding;

    let outer = Padding::from([SLACK + inset, (SLACK + inset) * 2.0]);
    let inner = Padding::from([
        (vertical - inset).max(0.0),
        (horizontal - inset * 2.0).max(0.0),
    ]);
    (outer, inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(outer: Padding, inner: Padding) -> (f32, f32) {
        (outer.top + inner.top, outer.left + inner.left)
    }

    #[test]
    fn footprint_is_constant() {
        let rest = scaled_padding([12.0, 24.0], 1.0);
        let pressed = scaled_padding([12.0, 24.0], 0.95);
        let hovered = scaled_padding([12.0, 24.0], 1.02);

        let same = |a: (f32, f32), b: (f32, f32)| {
            (a.0 - b.0).abs() < 1e-4 && (a.1 - b.1).abs() < 1e-4
        };
        assert!(same(total(rest.0, rest.1), total(pressed.0, pressed.1)));
        assert!(same(total(rest.0, rest.1), total(hovered.0, hovered.1)));
    }

    #[test]
    fn pressed_frame_is_smaller() {
        let (_, rest) = scaled_padding([12.0, 24.0], 1.0);
        let (_, pressed) = scaled_padding([12.0, 24.0], 0.95);
        assert!(pressed.top < rest.top);
        assert!(pressed.left < rest.left);
    }
}
