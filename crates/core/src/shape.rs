//! Module shapes and their rasterization into a [`Canvas`] cell.
//!
//! Every shape is painted inside one `UNIT x UNIT` cell and clipped to it, so
//! neighbouring modules never bleed into each other.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::canvas::{Canvas, UNIT};
use crate::color::Rgb;

/// Radius of the inscribed disk used by `Circle` and `Rounded`.
const RADIUS: isize = 5;

/// Inset of the centered square that `Rounded` adds on top of the disk.
const ROUNDED_INSET: usize = 2;

const SHAPE_NAMES: &[&str] = &["square", "circle", "rounded", "diamond"];

/// The shape drawn for one dark module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Full cell fill.
    #[default]
    Square,
    /// Disk of radius 5 inscribed in the cell.
    Circle,
    /// Inscribed disk unioned with the square inset by 2 pixels.
    Rounded,
    /// One-pixel cross through the cell center (segments shrinking
    /// towards the middle, all covered by the outermost pair).
    Diamond,
}

impl ShapeKind {
    /// Resolves a shape name. Unrecognized names fall back to `Square`.
    pub fn from_name(name: &str) -> ShapeKind {
        match name {
            "circle" => ShapeKind::Circle,
            "rounded" => ShapeKind::Rounded,
            "diamond" => ShapeKind::Diamond,
            _ => ShapeKind::Square,
        }
    }

    /// The lowercase name accepted by [`ShapeKind::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Rounded => "rounded",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Returns all recognized shape names.
    pub fn list_names() -> &'static [&'static str] {
        SHAPE_NAMES
    }

    /// Paints this shape into the cell whose top-left pixel is `(x, y)`.
    pub fn paint(self, canvas: &mut Canvas, x: usize, y: usize, color: Rgb) {
        let mut cell = Cell {
            canvas,
            x,
            y,
            color,
        };
        match self {
            ShapeKind::Square => cell.fill(0, 0, UNIT, UNIT),
            ShapeKind::Circle => cell.disk(),
            ShapeKind::Rounded => {
                cell.disk();
                cell.fill(
                    ROUNDED_INSET,
                    ROUNDED_INSET,
                    UNIT - ROUNDED_INSET,
                    UNIT - ROUNDED_INSET,
                );
            }
            ShapeKind::Diamond => {
                let mid = (UNIT / 2) as isize;
                let end = UNIT as isize;
                for i in 0..RADIUS {
                    cell.line(mid, i, mid, end - i);
                    cell.line(i, mid, end - i, mid);
                }
            }
        }
    }
}

/// Paints `shape` in `color` into the module cell anchored at `(x, y)`.
pub fn paint_module(canvas: &mut Canvas, x: usize, y: usize, shape: ShapeKind, color: Rgb) {
    shape.paint(canvas, x, y, color);
}

/// Drawing context for one module cell. Cell-relative coordinates outside
/// `[0, UNIT)` are dropped.
struct Cell<'a> {
    canvas: &'a mut Canvas,
    x: usize,
    y: usize,
    color: Rgb,
}

impl Cell<'_> {
    fn plot(&mut self, dx: isize, dy: isize) {
        let unit = UNIT as isize;
        if !(0..unit).contains(&dx) || !(0..unit).contains(&dy) {
            return;
        }
        self.canvas
            .set_pixel(self.x as isize + dx, self.y as isize + dy, self.color);
    }

    fn fill(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        self.canvas
            .fill_rect(self.x + x0, self.y + y0, self.x + x1, self.y + y1, self.color);
    }

    /// Disk of `RADIUS` around the cell center, boundary inclusive.
    fn disk(&mut self) {
        let c = (UNIT / 2) as isize;
        for dy in -RADIUS..=RADIUS {
            for dx in -RADIUS..=RADIUS {
                if dx * dx + dy * dy <= RADIUS * RADIUS {
                    self.plot(c + dx, c + dy);
                }
            }
        }
    }

    /// Axis-aligned segment, both endpoints inclusive.
    fn line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize) {
        for px in x0..=x1 {
            for py in y0..=y1 {
                self.plot(px, py);
            }
        }
    }
}

impl Serialize for ShapeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ShapeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ShapeKind::from_name(&s))
    }
}
