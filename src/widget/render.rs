// Canvas painting for dots. The canvas is the retained bitmap; the dot list in
// `DrawingSurface` stays the source of truth for queries.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::Dot;

/// Paint dots in order so later dots overlap earlier ones.
pub(crate) fn paint_dots(ctx: &CanvasRenderingContext2d, dots: &[Dot]) {
    for dot in dots {
        ctx.begin_path();
        if ctx
            .arc(
                dot.center.x,
                dot.center.y,
                dot.radius,
                0.0,
                std::f64::consts::TAU,
            )
            .is_err()
        {
            log::warn!("arc rejected at ({}, {})", dot.center.x, dot.center.y);
            continue;
        }
        ctx.set_fill_style_str(dot.color.hex());
        ctx.fill();
    }
}

/// Clear the whole backing bitmap, which may be a rounded surface size.
pub(crate) fn wipe(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}
