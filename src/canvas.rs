use hearts_core::render::outline;
use hearts_core::{FieldError, HeartSprite, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of the core drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context. Failing here is fatal for this field: the
    /// caller must not start the frame loop.
    pub fn new(canvas: &web::HtmlCanvasElement) -> hearts_core::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| FieldError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| FieldError::SurfaceUnavailable("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| FieldError::SurfaceUnavailable("context is not 2d".into()))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

fn css_rgba(c: [f32; 4]) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        c[0].round() as u8,
        c[1].round() as u8,
        c[2].round() as u8,
        c[3]
    )
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn veil(&mut self, alpha: f32) {
        let (w, h) = self.size();
        self.ctx.save();
        _ = self.ctx.set_global_composite_operation("source-over");
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str("rgba(255,255,255,1)");
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
        self.ctx.restore();
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn draw_heart(&mut self, heart: &HeartSprite) {
        let ctx = &self.ctx;
        let s = heart.size as f64;
        let at = |p: [f32; 2]| (p[0] as f64 * s, p[1] as f64 * s);

        ctx.save();
        _ = ctx.translate(heart.position.x as f64, heart.position.y as f64);
        _ = ctx.rotate(heart.rotation as f64);
        ctx.set_global_alpha(heart.alpha as f64);

        ctx.begin_path();
        let (x0, y0) = at(outline::START);
        ctx.move_to(x0, y0);
        for lobe in [outline::RIGHT_LOBE, outline::LEFT_LOBE] {
            let (c1x, c1y) = at(lobe[0]);
            let (c2x, c2y) = at(lobe[1]);
            let (ex, ey) = at(lobe[2]);
            ctx.bezier_curve_to(c1x, c1y, c2x, c2y, ex, ey);
        }
        ctx.close_path();
        ctx.set_fill_style_str(&css_rgba(heart.color));
        ctx.fill();

        ctx.set_global_alpha(heart.alpha as f64 * hearts_core::constants::HIGHLIGHT_ALPHA as f64);
        ctx.set_fill_style_str("rgba(255,255,255,0.95)");
        ctx.begin_path();
        let (hx, hy) = at(outline::HIGHLIGHT_CENTER);
        let (rx, ry) = at(outline::HIGHLIGHT_RADII);
        _ = ctx.ellipse(hx, hy, rx, ry, outline::HIGHLIGHT_ROTATION as f64, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }
}
