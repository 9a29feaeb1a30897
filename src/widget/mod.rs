//! Browser widget: mounts a `DrawingSurface` into a host element and wires
//! mouse / touch input, the palette bar and the clear button to it.
//!
//! Each mounted widget owns its state behind an `Rc<RefCell<_>>` shared only by
//! its own event closures. A thread-local registry remembers which host
//! elements are already wired so mounting twice returns the same handle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, EventTarget,
    HtmlCanvasElement, HtmlElement, window,
};

use crate::config::SurfaceConfig;
use crate::geometry::Point;
use crate::palette::PaletteColor;
use crate::surface::DrawingSurface;

mod dom;
mod input;
mod render;

use input::{POINTER_EVENTS, PointerPhase};

/// Runtime state of one mounted widget.
struct PaintState {
    surface: DrawingSurface,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    swatches: Vec<(PaletteColor, HtmlElement)>,
}

impl PaintState {
    fn select(&mut self, color: PaletteColor) {
        self.surface.select_color(color);
        dom::update_swatches(&self.swatches, self.surface.palette());
    }

    fn clear(&mut self) {
        self.surface.clear();
        render::wipe(&self.ctx, &self.canvas);
    }

    /// Surface-local position of a pointer event, relative to the canvas.
    fn local_point(&self, evt: &Event) -> Option<Point> {
        let client = input::client_point(evt)?;
        let rect = self.canvas.get_bounding_client_rect();
        Some(self.surface.to_local(client, Point::new(rect.left(), rect.top())))
    }

    fn on_pointer(&mut self, phase: PointerPhase, evt: &Event) {
        match phase {
            PointerPhase::Down => {
                evt.prevent_default();
                let Some(p) = self.local_point(evt) else {
                    return;
                };
                let new = self.surface.begin_stroke(p);
                render::paint_dots(&self.ctx, new);
            }
            PointerPhase::Move => {
                if !self.surface.is_drawing() {
                    return;
                }
                evt.prevent_default();
                let Some(p) = self.local_point(evt) else {
                    return;
                };
                let new = self.surface.continue_stroke(p);
                render::paint_dots(&self.ctx, new);
            }
            PointerPhase::Up => self.surface.end_stroke(),
        }
    }
}

/// Handle to a mounted paint widget, usable from JS.
#[wasm_bindgen]
#[derive(Clone)]
pub struct PaintHandle {
    state: Rc<RefCell<PaintState>>,
}

#[wasm_bindgen]
impl PaintHandle {
    /// Select a palette entry by position (0..5). Returns false when out of range.
    pub fn select_color(&self, index: usize) -> bool {
        match PaletteColor::from_index(index) {
            Some(c) => {
                self.state.borrow_mut().select(c);
                true
            }
            None => false,
        }
    }

    /// Select a palette entry by its `#RRGGBB` value.
    pub fn select_color_hex(&self, hex: &str) -> bool {
        match PaletteColor::from_hex(hex) {
            Some(c) => {
                self.state.borrow_mut().select(c);
                true
            }
            None => false,
        }
    }

    pub fn clear(&self) {
        self.state.borrow_mut().clear();
    }

    pub fn dot_count(&self) -> usize {
        self.state.borrow().surface.dot_count()
    }

    pub fn is_drawing(&self) -> bool {
        self.state.borrow().surface.is_drawing()
    }

    pub fn active_color(&self) -> String {
        self.state.borrow().surface.active_color().hex().to_string()
    }
}

impl PaintHandle {
    /// Read-only access to the underlying surface model.
    pub fn with_surface<R>(&self, f: impl FnOnce(&DrawingSurface) -> R) -> R {
        f(&self.state.borrow().surface)
    }

    fn same_as(&self, other: &PaintHandle) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl PartialEq for PaintHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

thread_local! {
    // Hosts wired so far. Entries whose host left the document are dropped on
    // the next lookup, so the list only holds live widgets.
    static MOUNTED: RefCell<Vec<(Element, PaintHandle)>> = const { RefCell::new(Vec::new()) };
}

fn mounted_handle(host: &Element) -> Option<PaintHandle> {
    MOUNTED.with(|m| {
        let mut m = m.borrow_mut();
        m.retain(|(el, _)| el.is_connected());
        m.iter()
            .find(|(el, _)| el.is_same_node(Some(host)))
            .map(|(_, h)| h.clone())
    })
}

fn listen(
    target: &EventTarget,
    ty: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(ty, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page; the registry prevents duplicates.
    closure.forget();
    Ok(())
}

fn document() -> Result<Document, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    win.document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Wait for the page structure, then mount on the default `.paint` host.
#[wasm_bindgen]
pub fn init_painting() -> Result<(), JsValue> {
    let doc = document()?;
    if doc.ready_state() == "loading" {
        log::debug!("document still loading; deferring paint init");
        let cb = Closure::once_into_js(move || {
            if let Err(e) = start_painting(crate::config::DEFAULT_SELECTOR) {
                log::warn!("paint init failed: {:?}", e);
            }
        });
        doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())?;
        return Ok(());
    }
    start_painting(crate::config::DEFAULT_SELECTOR).map(|_| ())
}

/// Mount on the first element matching `selector` with default settings.
/// Returns `None` when nothing matches.
#[wasm_bindgen]
pub fn start_painting(selector: &str) -> Result<Option<PaintHandle>, JsValue> {
    let cfg = SurfaceConfig {
        selector: selector.to_string(),
        ..SurfaceConfig::default()
    };
    mount(&document()?, cfg)
}

/// Mount using a JSON `SurfaceConfig`; omitted fields take their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_painting_with_config(json: &str) -> Result<Option<PaintHandle>, JsValue> {
    let cfg = SurfaceConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
    mount(&document()?, cfg)
}

pub fn mount(doc: &Document, cfg: SurfaceConfig) -> Result<Option<PaintHandle>, JsValue> {
    let Some(host_el) = doc.query_selector(&cfg.selector)? else {
        log::debug!("paint host '{}' not found; skipping", cfg.selector);
        return Ok(None);
    };
    if let Some(existing) = mounted_handle(&host_el) {
        log::debug!("paint host '{}' already mounted", cfg.selector);
        return Ok(Some(existing));
    }
    let host: HtmlElement = match host_el.clone().dyn_into() {
        Ok(h) => h,
        Err(_) => {
            log::debug!("paint host '{}' is not an HTML element; skipping", cfg.selector);
            return Ok(None);
        }
    };

    // Host-provided inline size wins over the defaults.
    let style = host.style();
    let cfg = cfg.with_host_size(
        &style.get_property_value("width")?,
        &style.get_property_value("height")?,
    );
    cfg.validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    host.set_inner_html("");
    dom::style_host(&host, &cfg)?;

    let (canvas, ctx) = dom::create_canvas(doc, &cfg)?;
    host.append_child(&canvas)?;

    let surface = DrawingSurface::from_config(&cfg);
    let (bar, swatches) = dom::create_palette_bar(doc, &cfg, surface.palette())?;
    host.append_child(&bar)?;
    let clear_btn = dom::create_clear_button(doc, &cfg)?;
    host.append_child(&clear_btn)?;

    let state = Rc::new(RefCell::new(PaintState {
        surface,
        canvas,
        ctx,
        swatches,
    }));

    // Stroke input on the whole host.
    for ty in POINTER_EVENTS {
        let st = state.clone();
        listen(&host, ty, move |evt: Event| {
            if let Some(phase) = PointerPhase::from_event_type(&evt.type_()) {
                st.borrow_mut().on_pointer(phase, &evt);
            }
        })?;
    }
    listen(&host, "contextmenu", |evt: Event| evt.prevent_default())?;

    // Presses on the overlays must not start a stroke underneath.
    for overlay in [&bar, &clear_btn] {
        for ty in ["mousedown", "touchstart"] {
            listen(overlay, ty, |evt: Event| evt.stop_propagation())?;
        }
    }

    let swatch_els: Vec<(PaletteColor, HtmlElement)> = state.borrow().swatches.clone();
    for (color, sw) in swatch_els {
        let st = state.clone();
        listen(&sw, "click", move |_evt: Event| st.borrow_mut().select(color))?;
        let hover = sw.clone();
        listen(&sw, "mouseover", move |_evt: Event| {
            hover.style().set_property("transform", "scale(1.1)").ok();
        })?;
        let hover = sw.clone();
        listen(&sw, "mouseout", move |_evt: Event| {
            hover.style().set_property("transform", "scale(1)").ok();
        })?;
    }

    {
        let st = state.clone();
        listen(&clear_btn, "click", move |_evt: Event| st.borrow_mut().clear())?;
        let hover = clear_btn.clone();
        listen(&clear_btn, "mouseover", move |_evt: Event| {
            hover
                .style()
                .set_property("background-color", dom::CLEAR_BG_HOVER)
                .ok();
        })?;
        let hover = clear_btn.clone();
        listen(&clear_btn, "mouseout", move |_evt: Event| {
            hover.style().set_property("background-color", dom::CLEAR_BG).ok();
        })?;
    }

    let handle = PaintHandle { state };
    MOUNTED.with(|m| m.borrow_mut().push((host_el, handle.clone())));
    log::debug!(
        "paint surface mounted on '{}' ({}x{}, brush radius {})",
        cfg.selector,
        cfg.width,
        cfg.height,
        cfg.brush_radius
    );
    Ok(Some(handle))
}
