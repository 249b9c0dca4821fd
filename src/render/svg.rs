use crate::error::ChartResult;
use crate::render::{CandleRenderTarget, CandleShape, WickShape};

/// SVG `<g>` element collecting the shapes rendered into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgGroup {
    elements: Vec<String>,
}

impl SvgGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Child elements in render order.
    #[must_use]
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    #[must_use]
    pub fn to_svg_string(&self) -> String {
        format!("<g>{}</g>", self.elements.concat())
    }
}

impl CandleRenderTarget for SvgGroup {
    fn render_wick(&mut self, wick: &WickShape) -> ChartResult<()> {
        let mut element = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" role="{}" shape-rendering="{}""#,
            wick.x1,
            wick.y1,
            wick.x2,
            wick.y2,
            escape_attribute(&wick.role),
            escape_attribute(&wick.shape_rendering),
        );
        push_class(&mut element, wick.class_name.as_deref());
        element.push_str(&format!(r#" style="{}"/>"#, wick.style.to_css()));
        self.elements.push(element);
        Ok(())
    }

    fn render_candle(&mut self, candle: &CandleShape) -> ChartResult<()> {
        let mut element = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            candle.x, candle.y, candle.width, candle.height,
        );
        if let Some(role) = &candle.role {
            element.push_str(&format!(r#" role="{}""#, escape_attribute(role)));
        }
        element.push_str(&format!(
            r#" shape-rendering="{}""#,
            escape_attribute(&candle.shape_rendering)
        ));
        push_class(&mut element, candle.class_name.as_deref());
        element.push_str(&format!(r#" style="{}"/>"#, candle.style.to_css()));
        self.elements.push(element);
        Ok(())
    }
}

fn push_class(element: &mut String, class_name: Option<&str>) {
    if let Some(class_name) = class_name {
        element.push_str(&format!(r#" class="{}""#, escape_attribute(class_name)));
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::escape_attribute;

    #[test]
    fn attribute_escaping_covers_quotes_and_markup() {
        assert_eq!(
            escape_attribute(r#"a "b" <c> & d"#),
            "a &quot;b&quot; &lt;c&gt; &amp; d"
        );
    }
}
