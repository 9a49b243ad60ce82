//! The drawing boundary every chart renders through.
//!
//! Charts lay themselves out in pixel space and issue a handful of primitive
//! calls; [`CanvasPainter`] forwards them to a browser 2D context while
//! [`Recording`] keeps them as [`DrawOp`]s for native builds and tests.

use super::geometry::{Path, Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_px: f64,
    pub color: String,
    pub align: Align,
    pub bold: bool,
    /// Clockwise, in radians, around the anchor point.
    pub rotation: f64,
}

impl TextStyle {
    pub fn new(font_px: f64, color: &str) -> Self {
        Self {
            font_px,
            color: color.to_string(),
            align: Align::Left,
            bold: false,
            rotation: 0.0,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, radians: f64) -> Self {
        self.rotation = radians;
        self
    }

    /// CSS font shorthand.
    pub fn font(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{weight}{}px Arial, sans-serif", self.font_px)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
        }
    }
}

pub trait Painter {
    fn size(&self) -> Size;

    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// Even-odd fill, so polygon holes stay empty.
    fn fill_path(&mut self, path: &Path, color: &str);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    /// Horizontal gradient across `rect`; stops are `(offset 0..=1, colour)`.
    fn fill_gradient(&mut self, rect: Rect, stops: &[(f64, String)]);

    /// Text with its baseline centred on `at`.
    fn text(&mut self, text: &str, at: Point, style: &TextStyle);

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillRect { rect: Rect, color: String },
    FillPath { path: Path, color: String },
    StrokePath { path: Path, stroke: Stroke },
    Gradient { rect: Rect, stops: Vec<(f64, String)> },
    Text { text: String, at: Point, style: TextStyle },
}

/// In-memory painter. Text width is estimated from the font size.
#[derive(Debug, Clone)]
pub struct Recording {
    size: Size,
    ops: Vec<DrawOp>,
}

impl Recording {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillPath { color, .. } | DrawOp::FillRect { color, .. } => Some(color.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for Recording {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn fill_path(&mut self, path: &Path, color: &str) {
        self.ops.push(DrawOp::FillPath {
            path: path.clone(),
            color: color.to_string(),
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn fill_gradient(&mut self, rect: Rect, stops: &[(f64, String)]) {
        self.ops.push(DrawOp::Gradient {
            rect,
            stops: stops.to_vec(),
        });
    }

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            style: style.clone(),
        });
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> f64 {
        let factor = if style.bold { 0.62 } else { 0.55 };
        text.chars().count() as f64 * style.font_px * factor
    }
}

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use web_sys::{CanvasRenderingContext2d, CanvasWindingRule, HtmlCanvasElement};

    use super::{Align, Painter, Stroke, TextStyle};
    use crate::charts::geometry::{Path, PathCmd, Point, Rect, Size};

    /// Painter over a `<canvas>` 2D context.
    pub struct CanvasPainter {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl CanvasPainter {
        pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
            Self { canvas, ctx }
        }

        fn trace(&self, path: &Path) {
            self.ctx.begin_path();
            for cmd in &path.0 {
                match *cmd {
                    PathCmd::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                    PathCmd::LineTo(p) => self.ctx.line_to(p.x, p.y),
                    PathCmd::CubicTo(c1, c2, p) => {
                        self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y)
                    }
                    PathCmd::Arc {
                        center,
                        radius,
                        start,
                        end,
                        anticlockwise,
                    } => {
                        let _ = self.ctx.arc_with_anticlockwise(
                            center.x,
                            center.y,
                            radius.max(0.0),
                            start,
                            end,
                            anticlockwise,
                        );
                    }
                    PathCmd::Close => self.ctx.close_path(),
                }
            }
        }
    }

    impl Painter for CanvasPainter {
        fn size(&self) -> Size {
            Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
        }

        fn clear(&mut self) {
            let size = self.size();
            self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
        }

        fn fill_rect(&mut self, rect: Rect, color: &str) {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }

        fn fill_path(&mut self, path: &Path, color: &str) {
            self.trace(path);
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_with_canvas_winding_rule(CanvasWindingRule::Evenodd);
        }

        fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
            self.trace(path);
            self.ctx.set_stroke_style_str(&stroke.color);
            self.ctx.set_line_width(stroke.width);
            self.ctx.stroke();
        }

        fn fill_gradient(&mut self, rect: Rect, stops: &[(f64, String)]) {
            let gradient = self
                .ctx
                .create_linear_gradient(rect.x, rect.y, rect.right(), rect.y);
            for (offset, color) in stops {
                if let Err(err) = gradient.add_color_stop(*offset as f32, color) {
                    tracing::debug!(?err, %color, "invalid gradient stop");
                }
            }
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }

        fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
            self.ctx.save();
            self.ctx.set_font(&style.font());
            self.ctx.set_fill_style_str(&style.color);
            self.ctx.set_text_align(match style.align {
                Align::Left => "left",
                Align::Center => "center",
                Align::Right => "right",
            });
            self.ctx.set_text_baseline("middle");
            let _ = self.ctx.translate(at.x, at.y);
            if style.rotation != 0.0 {
                let _ = self.ctx.rotate(style.rotation);
            }
            let _ = self.ctx.fill_text(text, 0.0, 0.0);
            self.ctx.restore();
        }

        fn measure_text(&mut self, text: &str, style: &TextStyle) -> f64 {
            self.ctx.set_font(&style.font());
            self.ctx
                .measure_text(text)
                .map(|metrics| metrics.width())
                .unwrap_or(text.len() as f64 * style.font_px * 0.55)
        }
    }
}
