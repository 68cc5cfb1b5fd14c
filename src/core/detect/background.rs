use image::Pixel;

use crate::core::params::BackgroundParams;

/// True when `pixel` is transparent or near-white.
///
/// Pixels with an alpha channel (the last of 2 or 4 channels) below
/// `params.alpha_cutoff` are background regardless of color. Otherwise every
/// color channel must reach `params.threshold`.
pub fn is_background<P>(pixel: &P, params: &BackgroundParams) -> bool
where
    P: Pixel<Subpixel = u8>,
{
    let channels = pixel.channels();
    // LumaA and Rgba carry alpha last
    let color = match channels {
        [color @ .., alpha] if matches!(channels.len(), 2 | 4) => {
            if *alpha < params.alpha_cutoff {
                return true;
            }
            color
        }
        _ => channels,
    };

    color.iter().all(|&c| c >= params.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, LumaA, Rgb, Rgba};

    #[test]
    fn near_white_is_background() {
        let params = BackgroundParams::default();
        assert!(is_background(&Rgb([255u8, 255, 255]), &params));
        assert!(is_background(&Rgb([245u8, 250, 245]), &params));
        assert!(is_background(&Rgba([245u8, 245, 245, 255]), &params));
        assert!(!is_background(&Rgb([244u8, 255, 255]), &params));
        assert!(!is_background(&Rgba([255u8, 255, 200, 255]), &params));
    }

    #[test]
    fn transparent_is_background_regardless_of_color() {
        let params = BackgroundParams::default();
        assert!(is_background(&Rgba([0u8, 0, 0, 0]), &params));
        assert!(is_background(&Rgba([10u8, 20, 30, 127]), &params));
        assert!(!is_background(&Rgba([10u8, 20, 30, 128]), &params));
        assert!(is_background(&LumaA([0u8, 5]), &params));
    }

    #[test]
    fn opaque_black_is_never_background() {
        for threshold in 1..=255u8 {
            let params = BackgroundParams {
                threshold,
                ..Default::default()
            };
            assert!(!is_background(&Rgb([0u8, 0, 0]), &params), "threshold {threshold}");
            assert!(!is_background(&Rgba([0u8, 0, 0, 255]), &params), "threshold {threshold}");
            assert!(is_background(&Rgb([threshold, threshold, threshold]), &params));
            assert!(is_background(&Rgba([255u8, 255, 255, 255]), &params));
        }
    }

    #[test]
    fn rgb_and_rgba_agree_when_opaque() {
        let params = BackgroundParams::default();
        for v in [0u8, 100, 244, 245, 255] {
            let rgb = Rgb([v, v, 250]);
            let rgba = Rgba([v, v, 250, 255]);
            assert_eq!(is_background(&rgb, &params), is_background(&rgba, &params));
        }
        assert!(is_background(&Luma([250u8]), &params));
    }
}
