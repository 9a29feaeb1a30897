// DOM construction for the paint widget: host styling, drawing canvas,
// palette bar and clear button. Inline styles only; the host page ships no CSS
// for any of this.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use crate::config::SurfaceConfig;
use crate::palette::{Palette, PaletteColor};

pub(crate) const CLEAR_BG: &str = "#FE3E36";
pub(crate) const CLEAR_BG_HOVER: &str = "#ff5555";

pub(crate) fn style_host(host: &HtmlElement, cfg: &SurfaceConfig) -> Result<(), JsValue> {
    let style = host.style();
    style.set_property("position", "relative")?;
    style.set_property("overflow", "hidden")?;
    style.set_property("width", &format!("{}px", cfg.width))?;
    style.set_property("height", &format!("{}px", cfg.height))?;
    style.set_property("background-color", &cfg.background)?;
    style.set_property(
        "border",
        &format!("{}px solid {}", cfg.border_width, cfg.border_color),
    )?;
    // Keep the browser from scrolling / zooming while a finger paints.
    style.set_property("touch-action", "none")?;
    Ok(())
}

fn create_html(doc: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    doc.create_element(tag)?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// Retained drawing layer covering the whole host.
pub(crate) fn create_canvas(
    doc: &Document,
    cfg: &SurfaceConfig,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_width(cfg.width.round() as u32);
    canvas.set_height(cfg.height.round() as u32);
    canvas.set_attribute(
        "style",
        &format!(
            "position:absolute; top:0; left:0; width:{}px; height:{}px; z-index:1; display:block;",
            cfg.width, cfg.height
        ),
    )?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    Ok((canvas, ctx))
}

pub(crate) fn swatch_style(color: PaletteColor, active: bool) -> String {
    format!(
        "width:30px; height:30px; background-color:{}; border:2px solid {}; border-radius:50%; cursor:pointer; transition:transform 0.2s;",
        color.hex(),
        swatch_border(active)
    )
}

pub(crate) fn swatch_border(active: bool) -> &'static str {
    if active { "#000" } else { "#ccc" }
}

/// Palette bar (label + one swatch per colour), centred along the top edge.
pub(crate) fn create_palette_bar(
    doc: &Document,
    cfg: &SurfaceConfig,
    palette: &Palette,
) -> Result<(HtmlElement, Vec<(PaletteColor, HtmlElement)>), JsValue> {
    let bar = create_html(doc, "div")?;
    bar.set_attribute("style", "position:absolute; top:10px; left:50%; transform:translateX(-50%); display:flex; gap:8px; padding:8px; background:white; border:2px solid black; border-radius:8px; z-index:100; box-shadow:0 2px 5px rgba(0,0,0,0.2);")?;

    let label = create_html(doc, "span")?;
    label.set_text_content(Some(&cfg.palette_label));
    label.set_attribute("style", "font-family:'Anonymous Pro', sans-serif; font-size:14px; margin-right:5px; line-height:30px;")?;
    bar.append_child(&label)?;

    let mut swatches = Vec::with_capacity(palette.colors().len());
    for &color in palette.colors() {
        let sw = create_html(doc, "div")?;
        sw.set_attribute("style", &swatch_style(color, palette.is_active(color)))?;
        sw.set_attribute("data-color", color.hex())?;
        sw.set_title(color.hex());
        bar.append_child(&sw)?;
        swatches.push((color, sw));
    }
    Ok((bar, swatches))
}

/// Refresh swatch borders so only the active colour is highlighted.
pub(crate) fn update_swatches(swatches: &[(PaletteColor, HtmlElement)], palette: &Palette) {
    for (color, el) in swatches {
        let border = format!("2px solid {}", swatch_border(palette.is_active(*color)));
        if el.style().set_property("border", &border).is_err() {
            log::warn!("failed to restyle swatch {}", color.hex());
        }
    }
}

pub(crate) fn create_clear_button(
    doc: &Document,
    cfg: &SurfaceConfig,
) -> Result<HtmlElement, JsValue> {
    let btn = create_html(doc, "button")?;
    btn.set_text_content(Some(&cfg.clear_label));
    btn.set_attribute(
        "style",
        &format!(
            "position:absolute; bottom:10px; left:50%; transform:translateX(-50%); padding:8px 16px; background:{}; color:white; border:2px solid black; border-radius:5px; cursor:pointer; font-family:'Anonymous Pro', sans-serif; font-size:14px; font-weight:bold; z-index:100; transition:background-color 0.2s;",
            CLEAR_BG
        ),
    )?;
    Ok(btn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_style_marks_active() {
        let s = swatch_style(PaletteColor::Red, true);
        assert!(s.contains("background-color:#FE3E36"));
        assert!(s.contains("border:2px solid #000"));
        let s = swatch_style(PaletteColor::Red, false);
        assert!(s.contains("border:2px solid #ccc"));
    }
}
