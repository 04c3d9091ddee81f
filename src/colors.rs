//! Packed ARGB8888 colors and the exercise palette.

pub const BACKGROUND: u32 = 0xFFF2F2F2;
pub const GRID: u32 = 0xFFDDDDDD;
pub const CLIP_WINDOW: u32 = 0xFF555555;
pub const BLACK: u32 = 0xFF000000;
pub const RED: u32 = 0xFFFF0000;
pub const BLUE: u32 = 0xFF0000FF;

/// Colors selected with the digit keys `0`..=`9`, as `(r, g, b)` in `[0, 1]`.
const PALETTE: [(f32, f32, f32); 10] = [
    (1.0, 0.5, 1.0),
    (1.0, 0.0, 0.0),
    (0.0, 1.0, 0.0),
    (0.0, 0.0, 1.0),
    (1.0, 1.0, 0.0),
    (1.0, 0.0, 1.0),
    (0.0, 1.0, 1.0),
    (1.0, 0.5, 0.0),
    (0.5, 0.0, 1.0),
    (0.0, 0.0, 0.0),
];

/// Pack normalized RGBA components into ARGB8888.
///
/// Components are clamped to `[0, 1]` and rounded to the nearest step.
#[inline]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

/// Palette color for a digit key, or `None` for anything but `'0'..='9'`.
pub fn palette(key: char) -> Option<u32> {
    let index = key.to_digit(10)? as usize;
    let (r, g, b) = PALETTE[index];
    Some(pack_color(r, g, b, 1.0))
}

/// Split an ARGB8888 color into RGBA bytes.
#[inline]
pub fn to_rgba_bytes(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_primaries() {
        assert_eq!(pack_color(1.0, 0.0, 0.0, 1.0), RED);
        assert_eq!(pack_color(0.0, 0.0, 1.0, 1.0), BLUE);
        assert_eq!(pack_color(2.0, -1.0, 0.0, 1.0), RED);
    }

    #[test]
    fn pack_rounds_to_nearest_step() {
        assert_eq!(pack_color(0.5, 0.25, 0.125, 1.0), 0xFF804020);
    }

    #[test]
    fn palette_digits() {
        assert_eq!(palette('1'), Some(RED));
        assert_eq!(palette('3'), Some(BLUE));
        assert_eq!(palette('9'), Some(BLACK));
        assert_eq!(palette('7'), Some(0xFFFF8000));
        assert_eq!(palette('a'), None);
    }

    #[test]
    fn rgba_byte_order() {
        assert_eq!(to_rgba_bytes(0x80112233), [0x11, 0x22, 0x33, 0x80]);
    }
}
