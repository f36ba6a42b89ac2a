use crate::{
    foundation::core::{Affine, Rect, Rgba8Premul, Viewport, unpremul},
    foundation::error::{ScrollreelError, ScrollreelResult},
    render::fit::ContainFit,
};

/// Pixels read back from the render surface.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRgba {
    /// RGBA8 pixel at `(x, y)`, as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha image suitable for PNG export.
    pub fn to_rgba_image(&self) -> ScrollreelResult<image::RgbaImage> {
        let mut data = self.data.clone();
        if self.premultiplied {
            for px in data.chunks_exact_mut(4) {
                let a = px[3];
                px[0] = unpremul(px[0], a);
                px[1] = unpremul(px[1], a);
                px[2] = unpremul(px[2], a);
            }
        }
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| ScrollreelError::render("frame buffer length mismatch"))
    }
}

/// The single drawable target, backed by a CPU pixmap.
pub struct RenderSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl RenderSurface {
    pub fn new(viewport: Viewport) -> ScrollreelResult<Self> {
        if viewport.is_empty() {
            return Err(ScrollreelError::render("render surface needs a non-empty viewport"));
        }
        let (width, height) = viewport.to_u16()?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(u32::from(self.width), u32::from(self.height))
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba8Premul) {
        let rgba = color.to_array();
        for px in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Clear, then draw the fitted source region of `paint`.
    pub(crate) fn paint(
        &mut self,
        paint: &vello_cpu::Image,
        fit: &ContainFit,
        background: Option<[u8; 4]>,
    ) {
        let clear = background
            .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
            .unwrap_or_else(Rgba8Premul::transparent);
        self.clear(clear);

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        if let Some([r, g, b, a]) = background
            && a > 0
        {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }

        ctx.set_transform(affine_to_cpu(fit.transform()));
        ctx.set_paint(paint.clone());
        ctx.fill_rect(&rect_to_cpu(fit.source));
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
    }

    pub fn readback(&self) -> FrameRgba {
        FrameRgba {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}
