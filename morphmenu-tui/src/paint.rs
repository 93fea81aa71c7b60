//! Paints a visual node tree into a cell buffer.
//!
//! Layout is deliberately small: flow children stack vertically, `Absolute`
//! children sit at the parent origin plus margin, `Fill` children cover the
//! parent. Transforms never affect layout, only where a node is drawn.

use morphmenu::node::{Content, NodeKind, Position, VisualNode};
use morphmenu::Color;
use unicode_width::UnicodeWidthChar;

use crate::buffer::Buffer;

/// Layout units covered by one terminal column.
pub const UNITS_PER_COL: f32 = 5.0;
/// Layout units covered by one terminal row.
pub const UNITS_PER_ROW: f32 = 10.0;

/// A box in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Frame {
    fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Scale vertically around the center.
    fn scale_y(self, scale: f32) -> Self {
        let height = self.height * scale;
        Self {
            y: self.y + (self.height - height) / 2.0,
            height,
            ..self
        }
    }
}

/// A box in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    fn from_frame(frame: Frame) -> Self {
        let col = |units: f32| (units / UNITS_PER_COL).round().max(0.0) as u16;
        let row = |units: f32| (units / UNITS_PER_ROW).round().max(0.0) as u16;
        let (x0, x1) = (col(frame.x), col(frame.x + frame.width));
        let (y0, y1) = (row(frame.y), row(frame.y + frame.height));

        Self {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0),
            height: y1.saturating_sub(y0),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Painted tap targets, in paint order.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(CellRect, String)>,
}

impl HitMap {
    /// Topmost tap target containing the cell.
    pub fn hit(&self, x: u16, y: u16) -> Option<&str> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, id)| id.as_str())
    }
}

/// Paint `root` over whatever the buffer already holds.
pub fn paint(root: &VisualNode, buf: &mut Buffer) -> HitMap {
    let screen = Frame {
        x: 0.0,
        y: 0.0,
        width: buf.width() as f32 * UNITS_PER_COL,
        height: buf.height() as f32 * UNITS_PER_ROW,
    };
    let mut hits = HitMap::default();
    paint_node(root, screen, 1.0, buf, &mut hits);
    hits
}

fn paint_node(node: &VisualNode, frame: Frame, opacity: f32, buf: &mut Buffer, hits: &mut HitMap) {
    let opacity = opacity * node.style.opacity.clamp(0.0, 1.0);
    let visible = frame.scale_y(node.transform.scale_y);

    if let Some(bg) = node.style.background {
        fill(buf, CellRect::from_frame(visible), fade(bg, opacity));
    }
    if node.tap.is_some() {
        hits.regions
            .push((CellRect::from_frame(visible), node.id.clone()));
    }

    match (&node.content, node.kind) {
        (_, NodeKind::CloseBar) => {
            let color = node.style.background.unwrap_or(Color::WHITE);
            draw_bar(buf, frame, node.transform.rotate, fade(color, opacity));
        }
        (Content::Text(text), _) => {
            let color = node.style.foreground.unwrap_or(Color::WHITE);
            draw_text(buf, visible, text, fade(color, opacity));
        }
        (Content::Children(children), _) => {
            let mut cursor = frame.y;
            let mut placed: Vec<(&VisualNode, Frame)> = children
                .iter()
                .map(|child| (child, child_frame(child, frame, &mut cursor)))
                .collect();
            // Stable, so equal z keeps document order.
            placed.sort_by_key(|(child, _)| child.z_index);
            for (child, child_frame) in placed {
                paint_node(child, child_frame, opacity, buf, hits);
            }
        }
        (Content::None, _) => {}
    }
}

fn child_frame(child: &VisualNode, parent: Frame, cursor: &mut f32) -> Frame {
    let m = child.margin;
    let width = child
        .width
        .unwrap_or((parent.width - m.horizontal_total()).max(0.0));

    let frame = match child.position {
        Position::Fill => parent,
        Position::Absolute => Frame {
            x: parent.x + m.left,
            y: parent.y + m.top,
            width,
            height: child
                .height
                .unwrap_or((parent.height - m.vertical_total()).max(0.0)),
        },
        Position::Flow => {
            let height = child.height.unwrap_or_else(|| intrinsic_height(child));
            let frame = Frame {
                x: parent.x + m.left,
                y: *cursor + m.top,
                width,
                height,
            };
            *cursor += m.top + height + m.bottom;
            frame
        }
    };

    let shift = child.transform.translate;
    frame.translate(shift.x, shift.y)
}

fn intrinsic_height(node: &VisualNode) -> f32 {
    match &node.content {
        Content::Text(_) => UNITS_PER_ROW,
        Content::Children(children) => children
            .iter()
            .filter(|child| child.position == Position::Flow)
            .map(|child| {
                child.margin.vertical_total()
                    + child.height.unwrap_or_else(|| intrinsic_height(child))
            })
            .sum(),
        Content::None => 0.0,
    }
}

fn fade(color: Color, opacity: f32) -> Color {
    color.with_alpha(color.a * opacity)
}

fn fill(buf: &mut Buffer, rect: CellRect, color: Color) {
    if color.is_transparent() {
        return;
    }
    for y in rect.y..rect.y.saturating_add(rect.height) {
        for x in rect.x..rect.x.saturating_add(rect.width) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = color.over(cell.bg);
                cell.fg = color.over(cell.fg);
            }
        }
    }
}

fn draw_text(buf: &mut Buffer, frame: Frame, text: &str, color: Color) {
    // Barely visible glyphs read as noise in a terminal.
    if color.a < 0.1 || frame.height < UNITS_PER_ROW / 2.0 {
        return;
    }
    let rect = CellRect::from_frame(frame);
    let y = rect.y + rect.height.saturating_sub(1) / 2;
    let mut x = rect.x;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as u16;
        if x + w > rect.x + rect.width {
            break;
        }
        if let Some(cell) = buf.get_mut(x, y) {
            cell.char = ch;
            cell.fg = color.over(cell.bg);
            cell.bold = true;
        }
        x += w.max(1);
    }
}

/// A thin bar rotated by `degrees`, drawn as a diagonal of box glyphs.
fn draw_bar(buf: &mut Buffer, frame: Frame, degrees: f32, color: Color) {
    let glyph = if degrees >= 0.0 { '╲' } else { '╱' };
    let (sin, cos) = degrees.to_radians().sin_cos();
    let cx = frame.x + frame.width / 2.0;
    let cy = frame.y + frame.height / 2.0;
    let half = frame.width / 2.0;
    let steps = (frame.width / UNITS_PER_COL).ceil().max(1.0) as i32 * 2;

    for i in 0..=steps {
        let t = -half + frame.width * i as f32 / steps as f32;
        let x = ((cx + t * cos) / UNITS_PER_COL).floor();
        let y = ((cy + t * sin) / UNITS_PER_ROW).floor();
        if x < 0.0 || y < 0.0 {
            continue;
        }
        if let Some(cell) = buf.get_mut(x as u16, y as u16) {
            cell.char = glyph;
            cell.fg = color.over(cell.bg);
        }
    }
}

/// Page palette as OKLCH lightness, chroma and hue.
const STRIPE: (f32, f32, f32) = (0.60, 0.12, 20.0);
const CARD: (f32, f32, f32) = (0.85, 0.11, 67.0);
const CARD_LEFT: (f32, f32, f32) = (0.67, 0.07, 22.0);
const CARD_RIGHT: (f32, f32, f32) = (0.63, 0.04, 95.0);

fn page_color((l, c, h): (f32, f32, f32)) -> Color {
    Color::oklch(l, c, h)
}

/// Static page content behind the menu.
pub fn paint_page(buf: &mut Buffer, accent: Color) {
    let center = buf.width() as f32 * UNITS_PER_COL / 2.0;
    let top = 45.0;
    let block = |x: f32, y: f32, width: f32, height: f32| Frame {
        x,
        y,
        width,
        height,
    };

    let shapes = [
        (block(center - 37.5, top, 75.0, 75.0), accent),
        (block(center - 67.5, top + 90.0, 50.0, 10.0), page_color(STRIPE)),
        (block(center - 7.5, top + 90.0, 80.0, 10.0), page_color(STRIPE)),
        (block(center - 100.0, top + 130.0, 200.0, 300.0), page_color(CARD)),
        (block(center - 125.0, top + 174.0, 125.0, 210.0), page_color(CARD_LEFT)),
        (block(center, top + 174.0, 125.0, 210.0), page_color(CARD_RIGHT)),
    ];
    for (frame, color) in shapes {
        fill(buf, CellRect::from_frame(frame), color);
    }
}
