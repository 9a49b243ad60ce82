use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::geometry::Point;
use super::handle::{ChartHandle, RenderError, Surface};
use super::hit::Pick;
use super::paint::Painter;
use super::spec::ChartSpec;

#[derive(Debug, Clone, PartialEq)]
struct Tooltip {
    text: String,
    x: f64,
    y: f64,
}

/// A `<canvas>` hosting one chart. The chart handle is replaced whenever
/// `spec` changes and released when the component unmounts.
#[component]
pub fn ChartCanvas(
    spec: ChartSpec,
    #[props(default = 640)] width: u32,
    #[props(default = 320)] height: u32,
    #[props(default)] on_pick: Option<EventHandler<Pick>>,
    #[props(default)] label: Option<String>,
) -> Element {
    let canvas_id = use_hook(|| format!("chart-{}", uuid::Uuid::new_v4()));
    let slot: Rc<RefCell<Option<ChartHandle<CanvasSurface>>>> = use_hook(|| Rc::new(RefCell::new(None)));
    let mut tooltip = use_signal(|| Option::<Tooltip>::None);

    {
        let slot = slot.clone();
        let canvas_id = canvas_id.clone();
        use_effect(use_reactive((&spec,), move |(spec,)| {
            // Old chart first, then the new one.
            slot.borrow_mut().take();
            tooltip.set(None);
            match CanvasSurface::attach(&canvas_id) {
                Ok(surface) => {
                    *slot.borrow_mut() = Some(ChartHandle::acquire(surface, &spec));
                }
                Err(err) => tracing::debug!(%err, kind = spec.kind(), "chart not painted"),
            }
        }));
    }

    {
        let slot = slot.clone();
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    let click_slot = slot.clone();
    let on_click = move |evt: MouseEvent| {
        let at = evt.element_coordinates();
        let pick = click_slot
            .borrow()
            .as_ref()
            .and_then(|handle| handle.pick_at(Point::new(at.x, at.y)));
        if let (Some(pick), Some(handler)) = (pick, on_pick.as_ref()) {
            tracing::debug!(?pick, "chart pick");
            handler.call(pick);
        }
    };

    let hover_slot = slot.clone();
    let on_move = move |evt: MouseEvent| {
        let at = evt.element_coordinates();
        let text = hover_slot
            .borrow()
            .as_ref()
            .and_then(|handle| handle.region_at(Point::new(at.x, at.y)))
            .map(|region| region.tooltip.clone())
            .filter(|text| !text.is_empty());
        let next = text.map(|text| Tooltip { text, x: at.x, y: at.y });
        if *tooltip.peek() != next {
            tooltip.set(next);
        }
    };

    let clickable = on_pick.is_some();
    let aria = label.unwrap_or_else(|| spec.kind().to_string());

    rsx! {
        div { class: "chart-canvas",
            canvas {
                id: "{canvas_id}",
                class: if clickable { "chart-canvas__surface chart-canvas__surface--pickable" } else { "chart-canvas__surface" },
                width: "{width}",
                height: "{height}",
                role: "img",
                aria_label: "{aria}",
                onclick: on_click,
                onmousemove: on_move,
                onmouseleave: move |_| tooltip.set(None),
            }
            if let Some(tip) = tooltip() {
                div {
                    class: "chart-canvas__tooltip",
                    style: "left: {tip.x + 12.0}px; top: {tip.y + 12.0}px;",
                    "{tip.text}"
                }
            }
        }
    }
}

/// Browser canvas looked up by element id. Native builds cannot attach one.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct CanvasSurface {
    #[cfg(target_arch = "wasm32")]
    painter: super::paint::CanvasPainter,
    #[cfg(target_arch = "wasm32")]
    ratio: (f64, f64),
    #[cfg(not(target_arch = "wasm32"))]
    painter: super::paint::Recording,
}

impl CanvasSurface {
    #[cfg(target_arch = "wasm32")]
    fn attach(id: &str) -> Result<Self, RenderError> {
        use wasm_bindgen::JsCast;
        use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| RenderError::MissingCanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| RenderError::NoContext(id.to_string()))?;

        // The element may be scaled by CSS; pointer events arrive in CSS pixels.
        let ratio = |attr: u32, css: i32| if css > 0 { attr as f64 / css as f64 } else { 1.0 };
        let ratio = (
            ratio(canvas.width(), canvas.client_width()),
            ratio(canvas.height(), canvas.client_height()),
        );

        Ok(Self {
            painter: super::paint::CanvasPainter::new(canvas, ctx),
            ratio,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn attach(_id: &str) -> Result<Self, RenderError> {
        Err(RenderError::Unsupported)
    }
}

impl Surface for CanvasSurface {
    fn painter(&mut self) -> &mut dyn Painter {
        &mut self.painter
    }

    #[cfg(target_arch = "wasm32")]
    fn to_surface(&self, point: Point) -> Point {
        Point::new(point.x * self.ratio.0, point.y * self.ratio.1)
    }
}
