//! Evenly spaced HLS hue palettes.

use rand::seq::SliceRandom;

use crate::color::Rgb;

// Fixed lightness and saturation keep every hue readable against dark edges.
const LIGHTNESS: f32 = 0.6;
const SATURATION: f32 = 0.65;

/// Generates `n` evenly spaced hues as `#rrggbb` strings.
///
/// The hue wheel is split into `n` equal steps at fixed lightness and
/// saturation, so two palettes of the same size are identical. Callers that
/// want a randomized order shuffle afterwards.
pub fn evenly_spaced(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let hue = i as f32 / n as f32;
            hls_to_rgb(hue, LIGHTNESS, SATURATION).to_hex()
        })
        .collect()
}

/// Shuffles a palette in place with the thread local RNG.
pub fn shuffle(palette: &mut [String]) {
    palette.shuffle(&mut rand::thread_rng());
}

fn hls_to_rgb(h: f32, l: f32, s: f32) -> Rgb {
    if s == 0.0 {
        let v = channel(l);
        return Rgb { r: v, g: v, b: v };
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    Rgb {
        r: channel(hue_component(m1, m2, h + 1.0 / 3.0)),
        g: channel(hue_component(m1, m2, h)),
        b: channel(hue_component(m1, m2, h - 1.0 / 3.0)),
    }
}

fn hue_component(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_hues() {
        let palette = evenly_spaced(6);
        assert_eq!(palette.len(), 6);
        let mut unique = palette.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn palette_is_deterministic() {
        assert_eq!(evenly_spaced(5), evenly_spaced(5));
    }

    #[test]
    fn zero_communities_yield_empty_palette() {
        assert!(evenly_spaced(0).is_empty());
    }

    #[test]
    fn grey_axis_when_unsaturated() {
        let grey = hls_to_rgb(0.25, 0.5, 0.0);
        assert_eq!(grey.r, grey.g);
        assert_eq!(grey.g, grey.b);
    }
}
