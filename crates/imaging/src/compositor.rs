//! Centered logo overlay.
//!
//! The logo is resized to one fifth of the QR image width (aspect preserved,
//! Lanczos3), a white patch is cleared under it, and it is alpha-blended on
//! top. The patch is always white, even when the QR background is not.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

/// Logo width as a fraction of the QR image width.
const LOGO_WIDTH_DIVISOR: u32 = 5;

const PATCH: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Target `(width, height)` of the logo for a QR image `qr_width` pixels wide.
///
/// Height follows the logo's aspect ratio, rounded with a +0.7 bias and never
/// below one pixel.
pub fn logo_size(qr_width: u32, logo_width: u32, logo_height: u32) -> (u32, u32) {
    let width = (qr_width / LOGO_WIDTH_DIVISOR).max(1);
    if logo_width == 0 {
        return (width, 1);
    }
    let height = 0.7 + f64::from(logo_height) * f64::from(width) / f64::from(logo_width);
    (width, (height as u32).max(1))
}

/// Source rows of a `logo_height`-row logo that stay visible once it is
/// scaled to `height` and centered on a canvas `canvas_height` pixels tall.
///
/// Returns `(top, rows, visible_height)`. Logos that fit are untouched; taller
/// ones are cropped to their central band so only visible pixels are resampled.
fn visible_band(logo_height: u32, height: u32, canvas_height: u32) -> (u32, u32, u32) {
    if height <= canvas_height {
        return (0, logo_height, height);
    }
    let rows = u64::from(canvas_height) * u64::from(logo_height) / u64::from(height);
    let rows = (rows as u32).clamp(1, logo_height);
    ((logo_height - rows) / 2, rows, canvas_height)
}

/// Returns a copy of `qr` with `logo` composited at its center.
///
/// Output dimensions always equal `qr`'s. Parts of a very tall logo that
/// fall outside the image are cropped before resampling.
pub fn overlay_logo(qr: &RgbaImage, logo: &DynamicImage) -> RgbaImage {
    let mut out = qr.clone();
    if logo.width() == 0 || logo.height() == 0 {
        tracing::warn!("logo has no pixels, skipping overlay");
        return out;
    }

    let (w, full_h) = logo_size(qr.width(), logo.width(), logo.height());
    let (top, rows, h) = visible_band(logo.height(), full_h, qr.height());
    let source = logo.crop_imm(0, top, logo.width(), rows).to_rgba8();
    let resized = imageops::resize(&source, w, h, FilterType::Lanczos3);

    let x = (i64::from(out.width()) - i64::from(w)) / 2;
    let y = (i64::from(out.height()) - i64::from(h)) / 2;
    clear_patch(&mut out, x, y, w, h);
    imageops::overlay(&mut out, &resized, x, y);

    tracing::debug!(
        logo_width = w,
        logo_height = h,
        cropped_rows = logo.height() - rows,
        offset_x = x,
        offset_y = y,
        "composited logo"
    );
    out
}

/// Paints the clipped rectangle at `(x, y)` of size `w x h` white.
fn clear_patch(img: &mut RgbaImage, x: i64, y: i64, w: u32, h: u32) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(w)).min(i64::from(img.width()));
    let y1 = (y + i64::from(h)).min(i64::from(img.height()));
    for py in y0..y1 {
        for px in x0..x1 {
            img.put_pixel(px as u32, py as u32, PATCH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn solid_logo(w: u32, h: u32, px: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, px))
    }

    #[test]
    fn logo_size_is_one_fifth_wide_with_aspect_kept() {
        assert_eq!(logo_size(230, 100, 50), (46, 23));
        assert_eq!(logo_size(230, 100, 100), (46, 46));
        assert_eq!(logo_size(250, 10, 30), (50, 150));
    }

    #[test]
    fn logo_size_upscales_small_logos_to_target_width() {
        assert_eq!(logo_size(300, 8, 8).0, 60);
    }

    #[test]
    fn logo_size_never_collapses_to_zero_height() {
        assert_eq!(logo_size(230, 10_000, 1), (46, 1));
    }

    #[test]
    fn overlay_keeps_dimensions() {
        let qr = RgbaImage::from_pixel(230, 230, BLACK);
        let out = overlay_logo(&qr, &solid_logo(500, 120, Rgba([255, 0, 0, 255])));
        assert_eq!(out.dimensions(), qr.dimensions());
    }

    #[test]
    fn opaque_logo_covers_center() {
        let qr = RgbaImage::from_pixel(230, 230, BLACK);
        let out = overlay_logo(&qr, &solid_logo(100, 100, Rgba([255, 0, 0, 255])));
        let center = out.get_pixel(115, 115).0;
        assert!(center[0] > 200 && center[1] < 50 && center[2] < 50, "{center:?}");
        // logo is 46x46 at offset 92; outside stays untouched
        assert_eq!(*out.get_pixel(91, 115), BLACK);
        assert_eq!(*out.get_pixel(138, 115), BLACK);
    }

    #[test]
    fn transparent_logo_leaves_white_patch() {
        let qr = RgbaImage::from_pixel(230, 230, BLACK);
        let out = overlay_logo(&qr, &solid_logo(100, 50, Rgba([0, 0, 255, 0])));
        // 46x23 patch at (92, 103)
        assert_eq!(*out.get_pixel(92, 103), PATCH);
        assert_eq!(*out.get_pixel(137, 125), PATCH);
        assert_eq!(*out.get_pixel(92, 102), BLACK);
        assert_eq!(*out.get_pixel(137, 126), BLACK);
    }

    #[test]
    fn tall_logo_is_clipped_not_resized_further() {
        let qr = RgbaImage::from_pixel(100, 100, BLACK);
        let out = overlay_logo(&qr, &solid_logo(10, 100, Rgba([0, 255, 0, 255])));
        assert_eq!(out.dimensions(), (100, 100));
        // 20x200 logo centered at x=40 spans the full height
        assert_ne!(*out.get_pixel(50, 0), BLACK);
        assert_ne!(*out.get_pixel(50, 99), BLACK);
        assert_eq!(*out.get_pixel(39, 50), BLACK);
    }

    #[test]
    fn visible_band_keeps_short_logos_whole() {
        assert_eq!(visible_band(50, 23, 230), (0, 50, 23));
        assert_eq!(visible_band(50, 230, 230), (0, 50, 230));
    }

    #[test]
    fn visible_band_crops_tall_logos_to_canvas_height() {
        // 1x20000 logo scaled to 46x920000 on a 230 px canvas
        assert_eq!(visible_band(20_000, 920_000, 230), (9_997, 5, 230));
        assert_eq!(visible_band(100, 200, 100), (25, 50, 100));
        assert_eq!(visible_band(3, 10_000, 10), (1, 1, 10));
    }

    #[test]
    fn very_tall_logo_is_resampled_at_canvas_height() {
        let qr = RgbaImage::from_pixel(230, 230, BLACK);
        let out = overlay_logo(&qr, &solid_logo(1, 20_000, Rgba([0, 255, 0, 255])));
        assert_eq!(out.dimensions(), (230, 230));
        let top = out.get_pixel(115, 0).0;
        let bottom = out.get_pixel(115, 229).0;
        assert!(top[1] > 200 && top[0] < 50, "{top:?}");
        assert!(bottom[1] > 200 && bottom[0] < 50, "{bottom:?}");
        assert_eq!(*out.get_pixel(91, 115), BLACK);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn composite_never_changes_dimensions(
                side in 210_u32..=400,
                lw in 10_u32..=120,
                lh in 10_u32..=120,
            ) {
                let qr = RgbaImage::from_pixel(side, side, BLACK);
                let out = overlay_logo(&qr, &solid_logo(lw, lh, Rgba([9, 9, 9, 128])));
                prop_assert_eq!(out.dimensions(), (side, side));
            }
        }
    }
}
