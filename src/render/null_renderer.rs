use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that draws nothing and only records what it was given.
///
/// Frames are still validated, so tests catch bad candle geometry without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        Ok(())
    }
}
