//! Draw-command types consumed by the platform's drawing surface

/// RGBA color, 0..1 per channel
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// One drawing-surface primitive. A frame is a full repaint: the surface
/// executes the whole list in order, starting from the clear rect.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        r: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Color,
        /// Font size in pixels
        size: f32,
    },
}

impl DrawCmd {
    pub fn rect(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        DrawCmd::Rect { x, y, w, h, color }
    }

    pub fn circle(x: f32, y: f32, r: f32, color: Color) -> Self {
        DrawCmd::Circle { x, y, r, color }
    }

    pub fn text(text: impl Into<String>, x: f32, y: f32, color: Color, size: f32) -> Self {
        DrawCmd::Text {
            text: text.into(),
            x,
            y,
            color,
            size,
        }
    }
}
