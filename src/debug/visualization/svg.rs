// src/debug/visualization/svg.rs
use crate::math::types::Bounds2D;
use crate::physics::wave::Field;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

/// Ein Helfer zum Erstellen einer SVG-Datei.
struct SvgBuilder {
    content: String,
}

impl SvgBuilder {
    /// Erstellt ein neues SVG-Grundgerüst mit Header und Hintergrund.
    fn new(display_bounds: &Bounds2D, svg_pixel_size: f64) -> Self {
        let viewbox_min_x = display_bounds.min.x;
        let viewbox_min_y = display_bounds.min.y;
        let viewbox_width = display_bounds.width();
        let viewbox_height = display_bounds.height();

        let content = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{svg_pixel_size}" height="{svg_pixel_size}" viewBox="{viewbox_min_x} {viewbox_min_y} {viewbox_width} {viewbox_height}" xmlns="http://www.w3.org/2000/svg">
  <rect x="{viewbox_min_x}" y="{viewbox_min_y}" width="{viewbox_width}" height="{viewbox_height}" fill="#f0f0f0" />
"##,
        );

        Self { content }
    }

    /// Zeichnet eine Gitterzelle als gefülltes Rechteck.
    fn draw_cell(&mut self, x: f64, y: f64, size: f64, gray: u8) {
        self.content.push_str(&format!(
            r#"  <rect x="{x:.4}" y="{y:.4}" width="{size:.4}" height="{size:.4}" fill="rgb({gray},{gray},{gray})" />
"#,
        ));
    }

    fn finish(mut self) -> String {
        self.content.push_str("</svg>\n");
        self.content
    }
}

/// Rendert die Auslenkung des Feldes als Graustufen-Raster.
///
/// `amplitude` legt fest, welcher Betrag auf Schwarz bzw. Weiß abgebildet
/// wird; die Nulllage liegt bei Mittelgrau. Werte jenseits der Amplitude
/// werden gesättigt.
pub fn field_to_svg(field: &Field, amplitude: f64, svg_pixel_size: f64) -> String {
    let amplitude = if amplitude > 0.0 { amplitude } else { 1.0 };
    let mut builder = SvgBuilder::new(field.bounds(), svg_pixel_size);

    let min = field.min();
    let step = field.step();
    for i in 0..field.nx() {
        for j in 0..field.ny() {
            let v = field.values().get(i, j);
            let t = ((v / amplitude).clamp(-1.0, 1.0) + 1.0) * 0.5;
            let gray = (t * 255.0).round() as u8;
            builder.draw_cell(
                min.x + step * i as f64,
                min.y + step * j as f64,
                step,
                gray,
            );
        }
    }

    builder.finish()
}

/// Schreibt einen Schnappschuss des Feldes als SVG-Datei.
pub fn write_field_svg(field: &Field, amplitude: f64, path: &Path) -> std::io::Result<()> {
    let svg = field_to_svg(field, amplitude, 800.0);
    let mut file = File::create(path)?;
    file.write_all(svg.as_bytes())?;
    info!("SVG snapshot written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Point2D;
    use crate::physics::wave::ScalarGrid;

    #[test]
    fn test_svg_contains_one_rect_per_cell() {
        let mut field =
            Field::new(Point2D::new(0.0, 0.0), Point2D::new(4.0, 4.0), 1.0, 0.2).unwrap();
        field
            .set_field(ScalarGrid::from_fn(4, 4, |i, _| i as f64))
            .unwrap();

        let svg = field_to_svg(&field, 1.0, 400.0);

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        // Hintergrund + 4x4 Zellen
        assert_eq!(svg.matches("<rect").count(), 17);
    }

    #[test]
    fn test_zero_field_is_mid_gray() {
        let field =
            Field::new(Point2D::new(0.0, 0.0), Point2D::new(4.0, 4.0), 1.0, 0.2).unwrap();

        let svg = field_to_svg(&field, 1.0, 400.0);
        assert!(svg.contains("rgb(128,128,128)"));
    }
}
