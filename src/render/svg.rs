//! SVG backend

use glam::DVec2;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::surface::Surface;
use super::types::FontSpec;
use crate::errors::RenderError;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One `<text>` element, kept typed until `finish`
#[derive(Debug, Clone, PartialEq)]
struct SvgText {
    x: f64,
    y: f64,
    font: String,
    ch: char,
}

/// Collects glyphs as SVG `<text>` elements
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    size: DVec2,
    font: FontSpec,
    texts: Vec<SvgText>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Number of glyphs drawn since the last resize
    pub fn glyph_count(&self) -> usize {
        self.texts.len()
    }

    /// Serialize everything drawn so far into a standalone SVG document,
    /// one element per line.
    pub fn finish(&self) -> Result<String, RenderError> {
        let mut writer = Writer::new(Vec::new());
        let width = self.size.x.to_string();
        let height = self.size.y.to_string();
        let view_box = format!("0 0 {width} {height}");

        emit(
            &mut writer,
            Event::Start(BytesStart::new("svg").with_attributes([
                ("xmlns", SVG_NS),
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("viewBox", view_box.as_str()),
            ])),
        )?;
        emit(&mut writer, Event::Text(BytesText::new("\n")))?;

        for text in &self.texts {
            let x = text.x.to_string();
            let y = text.y.to_string();
            let style = format!("font: {}", text.font);
            emit(
                &mut writer,
                Event::Start(BytesStart::new("text").with_attributes([
                    ("x", x.as_str()),
                    ("y", y.as_str()),
                    ("text-anchor", "middle"),
                    ("style", style.as_str()),
                ])),
            )?;
            let content = glyph_content(text.ch);
            emit(&mut writer, Event::Text(BytesText::new(&content)))?;
            emit(&mut writer, Event::End(BytesEnd::new("text")))?;
            emit(&mut writer, Event::Text(BytesText::new("\n")))?;
        }

        emit(&mut writer, Event::End(BytesEnd::new("svg")))?;

        let mut out = String::from_utf8(writer.into_inner()).map_err(|e| RenderError::Svg {
            message: e.to_string(),
        })?;
        out.push('\n');
        Ok(out)
    }
}

impl Surface for SvgSurface {
    fn resize(&mut self, size: DVec2) {
        self.size = size;
        self.texts.clear();
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }

    fn draw_glyph(&mut self, ch: char, at: DVec2) {
        self.texts.push(SvgText {
            x: at.x,
            y: at.y,
            font: self.font.to_string(),
            ch,
        });
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), RenderError> {
    writer.write_event(event).map_err(|e| RenderError::Svg {
        message: e.to_string(),
    })
}

/// Spaces would collapse under XML whitespace rules, so they become NBSP
fn glyph_content(ch: char) -> String {
    match ch {
        ' ' => "\u{00A0}".to_string(),
        _ => ch.to_string(),
    }
}
