use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{
    CandleRenderTarget, CandleShape, Color, LinePrimitive, RectPrimitive, WickShape,
};

/// Stroke width used when a shape's style does not set one.
const DEFAULT_STROKE_WIDTH_PX: f64 = 1.0;

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty()
    }
}

impl CandleRenderTarget for RenderFrame {
    fn render_wick(&mut self, wick: &WickShape) -> ChartResult<()> {
        let stroke_width = wick.style.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH_PX);
        self.lines.push(LinePrimitive::new(
            wick.x1,
            wick.y1,
            wick.x2,
            wick.y2,
            stroke_width,
            wick.style.stroke,
        ));
        Ok(())
    }

    fn render_candle(&mut self, candle: &CandleShape) -> ChartResult<()> {
        let border_width = candle.style.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH_PX);
        self.rects.push(
            RectPrimitive::new(
                candle.x,
                candle.y,
                candle.width,
                candle.height,
                candle.style.fill.unwrap_or(Color::BLACK),
            )
            .with_border(border_width, candle.style.stroke),
        );
        Ok(())
    }
}
