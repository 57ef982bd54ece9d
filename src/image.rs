use crate::domain::*;

/// Interior of `view` on the TURBO gradient, `[-scale, scale]` end to end.
pub fn field_image(view: &FieldView, scale: f32) -> ::image::RgbImage {
    let layout = view.layout();
    let gradient = colorous::TURBO;
    let mut img =
        ::image::RgbImage::new(layout.nxi() as u32, layout.nyi() as u32);
    let inv = if scale > 0.0 { 0.5 / scale } else { 0.0 };
    for (y, row) in view.interior_rows().enumerate() {
        for (x, v) in row.iter().enumerate() {
            let r = (0.5 + v * inv).clamp(0.0, 1.0);
            let c = gradient.eval_continuous(r as f64);
            img.put_pixel(x as u32, y as u32, ::image::Rgb(c.as_array()));
        }
    }
    img
}

pub fn write_field_image<F: AsRef<std::path::Path>>(
    view: &FieldView,
    scale: f32,
    s: &F,
) -> ::image::ImageResult<()> {
    profiling::scope!("image::write");
    field_image(view, scale).save(s)
}
