use std::io::Cursor;

use rayon::prelude::*;

use crate::composition::pipeline::compose;
use crate::composition::request::GenerationRequest;
use crate::foundation::error::{TesseraError, TesseraResult};
use crate::random::prng::DEFAULT_SEED;
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::cpu::CpuBackend;

/// Encode `frame` as PNG bytes with straight alpha.
pub fn encode_png(frame: &FrameRGBA) -> TesseraResult<Vec<u8>> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(TesseraError::render(format!(
            "frame has {} bytes, expected {expected}",
            frame.data.len()
        )));
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_in_place(&mut data);
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, data)
        .ok_or_else(|| TesseraError::render("frame buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| TesseraError::render(format!("png encode failed: {e}")))?;
    Ok(buf)
}

pub(crate) fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Download name `geo-{style}-{size}-{seed}.png`.
///
/// `size` is the aspect id, or `{w}x{h}` when both dimension overrides are set. Unknown styles
/// keep their raw id; an empty seed is written as the default seed and path separators in the
/// seed become `_`.
pub fn export_file_name(req: &GenerationRequest) -> String {
    let style = req
        .style_id()
        .map_or_else(|_| req.style.clone(), |s| s.id().to_string());
    let seed = if req.seed.is_empty() {
        DEFAULT_SEED.to_string()
    } else {
        req.seed.replace(['/', '\\'], "_")
    };
    let size = match (req.width, req.height) {
        (Some(w), Some(h)) => format!("{w}x{h}"),
        _ => req.aspect.id().to_string(),
    };
    format!("geo-{style}-{size}-{seed}.png")
}

/// Compose `req` and rasterize it with `backend`.
pub fn render_request(
    req: &GenerationRequest,
    backend: &mut dyn RenderBackend,
) -> TesseraResult<FrameRGBA> {
    let comp = compose(req)?;
    backend.render(&comp)
}

/// Render every request on a rayon pool, one [`CpuBackend`] per worker.
///
/// Frames come back in input order. The first failing request aborts the batch.
#[tracing::instrument(skip(requests, settings), fields(count = requests.len()))]
pub fn render_batch(
    requests: &[GenerationRequest],
    settings: &RenderSettings,
    threads: Option<usize>,
) -> TesseraResult<Vec<FrameRGBA>> {
    settings.validate()?;
    let pool = build_thread_pool(threads)?;

    let rendered = pool.install(|| {
        requests
            .par_iter()
            .map_init(
                || CpuBackend::new(settings.clone()),
                |worker_backend, req| render_request(req, worker_backend),
            )
            .collect::<Vec<_>>()
    });

    rendered.into_iter().collect()
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> TesseraResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TesseraError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TesseraError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
