//! Finder-pattern ("eye") classification of module coordinates.
//!
//! A QR symbol carries finder patterns in three corners only: top-left,
//! top-right and bottom-left. The bottom-right corner never has one.

/// Edge length of a finder pattern in modules.
pub const EYE_SIZE: usize = 7;

/// Offset of the 3x3 eyeball inside a finder pattern.
const EYEBALL_OFFSET: usize = 2;
const EYEBALL_SIZE: usize = 3;

/// Classification of one module relative to the finder patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EyeClass {
    /// The module lies inside one of the three 7x7 finder regions.
    pub is_eye: bool,
    /// The module lies inside the inner 3x3 eyeball of that region.
    pub is_eyeball: bool,
}

impl EyeClass {
    const OUTSIDE: EyeClass = EyeClass {
        is_eye: false,
        is_eyeball: false,
    };
}

/// Classifies `(x, y)` in a symbol of `size` modules per side.
///
/// Regions are tested top-left, top-right, bottom-left; they cannot overlap
/// for `size >= 14`, so the order only short-circuits.
pub fn classify(x: usize, y: usize, size: usize) -> EyeClass {
    let far = size.saturating_sub(EYE_SIZE);
    let origins = [(0, 0), (far, 0), (0, far)];
    origins
        .into_iter()
        .find_map(|(ox, oy)| classify_in_region(x, y, ox, oy))
        .unwrap_or(EyeClass::OUTSIDE)
}

fn classify_in_region(x: usize, y: usize, ox: usize, oy: usize) -> Option<EyeClass> {
    let (dx, dy) = (x.checked_sub(ox)?, y.checked_sub(oy)?);
    if dx >= EYE_SIZE || dy >= EYE_SIZE {
        return None;
    }
    let ball = EYEBALL_OFFSET..EYEBALL_OFFSET + EYEBALL_SIZE;
    Some(EyeClass {
        is_eye: true,
        is_eyeball: ball.contains(&dx) && ball.contains(&dy),
    })
}
