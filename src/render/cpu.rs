use kurbo::{BezPath, Cap, Join, Shape as _, Stroke, StrokeOpts};

use crate::composition::pipeline::Composition;
use crate::foundation::error::{TesseraError, TesseraResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::gradient::{self, PixelBox};
use crate::scene::primitive::{PATH_TOLERANCE, Paint, Primitive, StrokeStyle};

/// Software backend on `vello_cpu`.
///
/// Primitives are filled with the nonzero rule in paint order; strokes are expanded to
/// outlines first. Gradient paints are baked per primitive and painted as images.
pub struct CpuBackend {
    settings: RenderSettings,
}

impl CpuBackend {
    /// Backend with the given settings. Settings are validated on each render.
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Active settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(
        skip_all,
        fields(width = comp.dims.width, height = comp.dims.height, scale = self.settings.scale)
    )]
    fn render(&mut self, comp: &Composition) -> TesseraResult<FrameRGBA> {
        self.settings.validate()?;
        let width = device_extent(comp.dims.width, self.settings.scale, "width")?;
        let height = device_extent(comp.dims.height, self.settings.scale, "height")?;
        let scale = f64::from(self.settings.scale);

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::scale(scale));

        let mut drawn = 0usize;
        for prim in &comp.primitives {
            if draw_primitive(&mut ctx, prim, scale, width, height)? {
                drawn += 1;
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);

        tracing::debug!(
            drawn,
            skipped = comp.primitives.len() - drawn,
            "rasterized"
        );
        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn device_extent(logical: u32, scale: u32, what: &str) -> TesseraResult<u16> {
    logical
        .checked_mul(scale)
        .and_then(|v| u16::try_from(v).ok())
        .ok_or_else(|| {
            TesseraError::render(format!(
                "{what} {logical} at scale {scale} exceeds {}",
                u16::MAX
            ))
        })
}

/// Returns whether anything was submitted for `prim`.
fn draw_primitive(
    ctx: &mut vello_cpu::RenderContext,
    prim: &Primitive,
    scale: f64,
    width: u16,
    height: u16,
) -> TesseraResult<bool> {
    if !prim.is_finite() {
        tracing::warn!("skipping primitive with non-finite coordinates");
        return Ok(false);
    }
    if prim.alpha <= 0.0 {
        return Ok(false);
    }

    let outline = prim.geometry.to_bezpath();
    let path = match prim.stroke {
        Some(style) => stroke_outline(&outline, style),
        None => outline,
    };
    if path.elements().is_empty() {
        return Ok(false);
    }

    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match &prim.paint {
        Paint::Solid { color } => {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                color.r, color.g, color.b, color.a,
            ));
        }
        paint => {
            let Some(area) = PixelBox::covering(
                path.bounding_box(),
                scale,
                u32::from(width),
                u32::from(height),
            ) else {
                return Ok(false);
            };
            let tile = gradient::bake(paint, area, scale);
            let image = premul_tile_to_image(&tile, area)?;
            // Tile pixel (0, 0) lands on device pixel (x0, y0) under the scale transform.
            ctx.set_paint_transform(
                vello_cpu::kurbo::Affine::translate((
                    f64::from(area.x0) / scale,
                    f64::from(area.y0) / scale,
                )) * vello_cpu::kurbo::Affine::scale(1.0 / scale),
            );
            ctx.set_paint(image);
        }
    }

    let layered = prim.alpha < 1.0;
    if layered {
        ctx.push_opacity_layer(prim.alpha as f32);
    }
    ctx.fill_path(&bezpath_to_cpu(&path));
    if layered {
        ctx.pop_layer();
    }
    Ok(true)
}

fn stroke_outline(path: &BezPath, style: StrokeStyle) -> BezPath {
    if style.width <= 0.0 {
        return BezPath::new();
    }
    let stroke = if style.round_cap {
        Stroke::new(style.width)
            .with_caps(Cap::Round)
            .with_join(Join::Round)
    } else {
        Stroke::new(style.width)
            .with_caps(Cap::Butt)
            .with_join(Join::Miter)
    };
    kurbo::stroke(
        path.elements().iter().copied(),
        &stroke,
        &StrokeOpts::default(),
        PATH_TOLERANCE,
    )
}

fn premul_tile_to_image(rgba8_premul: &[u8], area: PixelBox) -> TesseraResult<vello_cpu::Image> {
    let w: u16 = area
        .width
        .try_into()
        .map_err(|_| TesseraError::render("gradient tile width exceeds u16"))?;
    let h: u16 = area
        .height
        .try_into()
        .map_err(|_| TesseraError::render("gradient tile height exceeds u16"))?;
    if rgba8_premul.len() != area.width as usize * area.height as usize * 4 {
        return Err(TesseraError::render("gradient tile byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(area.width as usize * area.height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        });
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
