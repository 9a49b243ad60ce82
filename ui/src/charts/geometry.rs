//! Plain 2D geometry in canvas pixels (origin top-left, y down).

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    /// Shrink by per-side insets; never goes negative.
    pub fn inset(&self, insets: Insets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.left - insets.right).max(0.0),
            (self.height - insets.top - insets.bottom).max(0.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Drawing commands for one outline.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
    },
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path(pub Vec<PathCmd>);

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, point: Point) -> Self {
        self.0.push(PathCmd::MoveTo(point));
        self
    }

    pub fn line_to(mut self, point: Point) -> Self {
        self.0.push(PathCmd::LineTo(point));
        self
    }

    pub fn cubic_to(mut self, c1: Point, c2: Point, to: Point) -> Self {
        self.0.push(PathCmd::CubicTo(c1, c2, to));
        self
    }

    pub fn arc(mut self, center: Point, radius: f64, start: f64, end: f64, anticlockwise: bool) -> Self {
        self.0.push(PathCmd::Arc {
            center,
            radius,
            start,
            end,
            anticlockwise,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.0.push(PathCmd::Close);
        self
    }

    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Path::new();
        for (index, point) in points.iter().enumerate() {
            path = if index == 0 {
                path.move_to(*point)
            } else {
                path.line_to(*point)
            };
        }
        path
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Path::new()
            .move_to(Point::new(center.x + radius, center.y))
            .arc(center, radius, 0.0, std::f64::consts::TAU, false)
            .close()
    }

    pub fn rect(rect: Rect) -> Self {
        Path::polyline(&[
            Point::new(rect.x, rect.y),
            Point::new(rect.right(), rect.y),
            Point::new(rect.right(), rect.bottom()),
            Point::new(rect.x, rect.bottom()),
        ])
        .close()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extend(&mut self, other: Path) {
        self.0.extend(other.0);
    }
}
