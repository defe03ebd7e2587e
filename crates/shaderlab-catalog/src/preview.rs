/// Two-colour palette for a catalog card preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewPalette {
    /// Bright centre colour, RGB bytes.
    pub primary: [u8; 3],
    /// Dark edge colour on the opposite side of the hue wheel.
    pub secondary: [u8; 3],
}

/// 31-multiplier string hash with 32-bit wrapping, over UTF-16 code units.
fn id_hash(id: &str) -> i32 {
    id.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(i32::from(unit))
    })
}

/// Deterministic palette derived from an example id, so every card keeps the
/// same colours across reloads without running its shader.
pub fn preview_palette(id: &str) -> PreviewPalette {
    let hue1 = (id_hash(id) % 360).unsigned_abs();
    let hue2 = (hue1 + 180) % 360;

    PreviewPalette {
        primary: hsv_to_rgb(hue1 as f32, 0.7, 0.9),
        secondary: hsv_to_rgb(hue2 as f32, 0.6, 0.3),
    }
}

/// HSV (hue in degrees, saturation and value in `[0, 1]`) to RGB bytes.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_byte = |channel: f32| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_byte(r), to_byte(g), to_byte(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(id_hash(""), 0);
        assert_eq!(id_hash("a"), 97);
        assert_eq!(id_hash("ab"), 97 * 31 + 98);
        assert_eq!(id_hash("cube-3d"), 1_111_720_745);
    }

    #[test]
    fn hash_wraps_like_int32_arithmetic() {
        assert_eq!(id_hash("coordinate-spaces"), -1_444_835_806);
        assert_eq!(id_hash("particles-3d"), -1_903_513_167);
        assert_eq!(id_hash(&"coordinate-spaces".repeat(8)), -382_025_472);
    }

    #[test]
    fn negative_hash_uses_its_magnitude_for_hue() {
        let palette = preview_palette("coordinate-spaces");
        assert_eq!(palette.primary, hsv_to_rgb(286.0, 0.7, 0.9));
        assert_eq!(palette.secondary, hsv_to_rgb(106.0, 0.6, 0.3));
    }

    #[test]
    fn primary_colours() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(0.0, 0.0, 0.5), [128, 128, 128]);
    }

    #[test]
    fn palette_is_stable_and_complementary() {
        let a = preview_palette("cube-3d");
        assert_eq!(a, preview_palette("cube-3d"));

        let hue1 = (id_hash("cube-3d") % 360).unsigned_abs();
        assert_eq!(a.primary, hsv_to_rgb(hue1 as f32, 0.7, 0.9));
        assert_eq!(a.secondary, hsv_to_rgb(((hue1 + 180) % 360) as f32, 0.6, 0.3));
    }

    #[test]
    fn secondary_is_darker() {
        for id in ["solid-color", "particles-3d", "sphere-deform"] {
            let p = preview_palette(id);
            let sum = |c: [u8; 3]| c.iter().map(|&v| v as u32).sum::<u32>();
            assert!(sum(p.secondary) < sum(p.primary), "{id}");
        }
    }
}
