//! Rectangles, clip regions and line clipping

/// Integer point
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle
///
/// The left and top edges are inclusive, the right and bottom edges
/// exclusive. Line clipping treats `x2-1`/`y2-1` as the boundary, so the
/// same rectangle clips fills half-open and lines closed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Rect { x1, y1, x2, y2 }
    }
    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }
    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
    pub fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }
    /// Half-open containment test
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }
    /// Translate by (`dx`, `dy`)
    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }
    /// Intersection with `other`; may be empty
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        )
    }
}

/// The set of rectangles of a surface eligible to receive writes
///
/// `Single` is the extents fast path; `Multiple` holds an ordered list of
/// disjoint rectangles. Draw operations repeat their primitive once per
/// rectangle.
#[derive(Debug, Clone)]
pub enum ClipRegion {
    Single(Rect),
    Multiple(Vec<Rect>),
}

impl ClipRegion {
    /// The rectangles of the region, uniformly for both variants
    pub fn rects(&self) -> &[Rect] {
        match self {
            ClipRegion::Single(r) => std::slice::from_ref(r),
            ClipRegion::Multiple(v) => v,
        }
    }
    pub fn num_rects(&self) -> usize {
        self.rects().len()
    }
    /// The rectangle of the region containing (`x`, `y`), if any
    pub fn contains_point(&self, x: i32, y: i32) -> Option<Rect> {
        self.rects().iter().find(|r| r.contains(x, y)).copied()
    }
    /// Bounding box of the region
    pub fn extents(&self) -> Rect {
        match self {
            ClipRegion::Single(r) => *r,
            ClipRegion::Multiple(v) => {
                let mut it = v.iter();
                let mut e = match it.next() {
                    Some(r) => *r,
                    None => return Rect::default(),
                };
                for r in it {
                    e.x1 = e.x1.min(r.x1);
                    e.y1 = e.y1.min(r.y1);
                    e.x2 = e.x2.max(r.x2);
                    e.y2 = e.y2.max(r.y2);
                }
                e
            }
        }
    }
}

// Cohen-Sutherland outcodes. TOP is the low-y side; the naming follows the
// framebuffer convention where y grows downward.
const CODE_BOTTOM: u8 = 1;
const CODE_TOP: u8 = 2;
const CODE_LEFT: u8 = 4;
const CODE_RIGHT: u8 = 8;

fn compute_outcode(x: i32, y: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> u8 {
    let mut code = 0;
    if y < y1 {
        code |= CODE_TOP;
    } else if y > y2 {
        code |= CODE_BOTTOM;
    }
    if x < x1 {
        code |= CODE_LEFT;
    } else if x > x2 {
        code |= CODE_RIGHT;
    }
    code
}

/// Clip the segment (x1,y1)-(x2,y2) against `rect`
///
/// The clip boundary is the closed rectangle `[x1, x2-1] x [y1, y2-1]`.
/// Returns the clipped endpoints, or `None` when the segment lies entirely
/// outside. Fully inside segments are returned unmodified; horizontal and
/// vertical segments clamp each endpoint independently; everything else
/// runs Cohen-Sutherland with integer parametric intersections.
pub fn intersect_rect_line(
    rect: &Rect,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> Option<(i32, i32, i32, i32)> {
    let (mut x1, mut y1, mut x2, mut y2) = (x1, y1, x2, y2);
    let rectx1 = rect.x1;
    let recty1 = rect.y1;
    let rectx2 = rect.x2 - 1;
    let recty2 = rect.y2 - 1;

    // Entire line inside rect
    if x1 >= rectx1
        && x1 <= rectx2
        && x2 >= rectx1
        && x2 <= rectx2
        && y1 >= recty1
        && y1 <= recty2
        && y2 >= recty1
        && y2 <= recty2
    {
        return Some((x1, y1, x2, y2));
    }

    // Entire line to one side of rect
    if (x1 < rectx1 && x2 < rectx1)
        || (x1 > rectx2 && x2 > rectx2)
        || (y1 < recty1 && y2 < recty1)
        || (y1 > recty2 && y2 > recty2)
    {
        return None;
    }

    if y1 == y2 {
        // Horizontal line, easy to clip
        x1 = x1.max(rectx1).min(rectx2);
        x2 = x2.max(rectx1).min(rectx2);
        return Some((x1, y1, x2, y2));
    }

    if x1 == x2 {
        // Vertical line, easy to clip
        y1 = y1.max(recty1).min(recty2);
        y2 = y2.max(recty1).min(recty2);
        return Some((x1, y1, x2, y2));
    }

    // More complicated Cohen-Sutherland algorithm
    let mut outcode1 = compute_outcode(x1, y1, rectx1, recty1, rectx2, recty2);
    let mut outcode2 = compute_outcode(x2, y2, rectx1, recty1, rectx2, recty2);
    while outcode1 != 0 || outcode2 != 0 {
        if outcode1 & outcode2 != 0 {
            return None;
        }
        if outcode1 != 0 {
            let (x, y);
            if outcode1 & CODE_TOP != 0 {
                y = recty1;
                x = x1 + (x2 - x1) * (y - y1) / (y2 - y1);
            } else if outcode1 & CODE_BOTTOM != 0 {
                y = recty2;
                x = x1 + (x2 - x1) * (y - y1) / (y2 - y1);
            } else if outcode1 & CODE_LEFT != 0 {
                x = rectx1;
                y = y1 + (y2 - y1) * (x - x1) / (x2 - x1);
            } else {
                x = rectx2;
                y = y1 + (y2 - y1) * (x - x1) / (x2 - x1);
            }
            x1 = x;
            y1 = y;
            outcode1 = compute_outcode(x1, y1, rectx1, recty1, rectx2, recty2);
        } else {
            let (x, y);
            if outcode2 & CODE_TOP != 0 {
                y = recty1;
                x = x1 + (x2 - x1) * (y - y1) / (y2 - y1);
            } else if outcode2 & CODE_BOTTOM != 0 {
                y = recty2;
                x = x1 + (x2 - x1) * (y - y1) / (y2 - y1);
            } else if outcode2 & CODE_LEFT != 0 {
                x = rectx1;
                y = y1 + (y2 - y1) * (x - x1) / (x2 - x1);
            } else {
                x = rectx2;
                y = y1 + (y2 - y1) * (x - x1) / (x2 - x1);
            }
            x2 = x;
            y2 = y;
            outcode2 = compute_outcode(x2, y2, rectx1, recty1, rectx2, recty2);
        }
    }

    Some((x1, y1, x2, y2))
}
