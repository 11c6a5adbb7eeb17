// src/rendering/painter.rs
//
// Cairo back end for the scene viewport.

use super::camera::DrawItem;
use super::view::SceneViewport;
use cairo::{Context, LineCap, RadialGradient};
use std::f64::consts::PI;

pub fn draw(
  cr: &Context,
  viewport: &SceneViewport,
  background: (f64, f64, f64),
  width: f64,
  height: f64,
) -> Result<(), cairo::Error> {
  let (bg_r, bg_g, bg_b) = background;
  cr.set_source_rgb(bg_r, bg_g, bg_b);
  cr.paint()?;

  for item in viewport.draw_items(width, height) {
    match item {
      DrawItem::Disc {
        x,
        y,
        radius,
        color,
        ..
      } => draw_atom(cr, x, y, radius, color)?,
      DrawItem::Stroke {
        from,
        to,
        color,
        width,
        ..
      } => draw_edge(cr, from, to, color, width)?,
    }
  }
  Ok(())
}

/// Shaded sphere: radial gradient with the highlight offset to the top-left.
fn draw_atom(cr: &Context, x: f64, y: f64, radius: f64, color: [f64; 4]) -> Result<(), cairo::Error> {
  if !(radius.is_finite() && radius > 0.1) {
    return Ok(());
  }
  let [r, g, b, a] = color;

  let gradient = RadialGradient::new(
    x - radius * 0.3,
    y - radius * 0.3,
    radius * 0.1,
    x,
    y,
    radius,
  );
  gradient.add_color_stop_rgba(0.0, 1.0, 1.0, 1.0, a);
  gradient.add_color_stop_rgba(0.2, (r + 0.2).min(1.0), (g + 0.2).min(1.0), (b + 0.2).min(1.0), a);
  gradient.add_color_stop_rgba(1.0, r * 0.6, g * 0.6, b * 0.6, a);

  cr.set_source(&gradient)?;
  cr.new_path();
  cr.arc(x, y, radius, 0.0, 2.0 * PI);
  cr.fill()?;

  cr.set_source_rgba(0.0, 0.0, 0.0, 0.3 * a);
  cr.set_line_width((radius * 0.05).max(0.5));
  cr.arc(x, y, radius, 0.0, 2.0 * PI);
  cr.stroke()
}

fn draw_edge(
  cr: &Context,
  from: (f64, f64),
  to: (f64, f64),
  color: [f64; 4],
  width: f64,
) -> Result<(), cairo::Error> {
  let [r, g, b, a] = color;
  cr.set_source_rgba(r, g, b, a);
  cr.set_line_width(width);
  cr.set_line_cap(LineCap::Round);
  cr.new_path();
  cr.move_to(from.0, from.1);
  cr.line_to(to.0, to.1);
  cr.stroke()
}
