//! Append-only HTML page builder
//!
//! Content is appended in reading order and the document is closed with
//! [`PageBuilder::finish`]. Element markup goes through `quick_xml`'s
//! writer so every text node and attribute is escaped.

use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::errors::{StudioError, StudioResult};
use crate::page::manifest::Hero;
use crate::page::markdown;
use crate::page::style::{Layout, STYLESHEET};

/// A captioned image placed in a column
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Image URL relative to the page
    pub src: String,
    pub caption: String,
}

/// Builds one HTML page
pub struct PageBuilder {
    writer: Writer<Vec<u8>>,
    title: String,
    layout: Layout,
    lang: String,
}

impl PageBuilder {
    pub fn new(title: &str, layout: Layout, lang: &str) -> Self {
        PageBuilder {
            writer: Writer::new(Vec::new()),
            title: title.to_string(),
            layout,
            lang: lang.to_string(),
        }
    }

    /// Centred title, subtitle and tagline
    pub fn hero(&mut self, hero: &Hero) -> StudioResult<&mut Self> {
        let title_style = color_style(&hero.title_color);
        self.text_element("h1", &[("class", "centered"), ("style", title_style.as_str())], &hero.title)?;

        if let Some(subtitle) = &hero.subtitle {
            let subtitle_style = color_style(&hero.subtitle_color);
            self.text_element("h4", &[("class", "centered"), ("style", subtitle_style.as_str())], subtitle)?;
        }
        if let Some(tagline) = &hero.tagline {
            self.text_element("p", &[("class", "centered"), ("style", "color:#666;")], tagline)?;
        }
        Ok(self)
    }

    /// Second-level heading in the given colour
    pub fn section_heading(&mut self, text: &str, color: &str) -> StudioResult<&mut Self> {
        let style = color_style(color);
        self.start("h2", &[])?;
        self.text_element("span", &[("style", style.as_str())], text)?;
        self.end("h2")?;
        Ok(self)
    }

    /// Markdown body rendered to HTML
    pub fn markdown(&mut self, body: &str) -> StudioResult<&mut Self> {
        let html = markdown::render_blocks(body);
        if !html.is_empty() {
            self.start("div", &[("class", "markdown")])?;
            self.raw(&html)?;
            self.end("div")?;
        }
        Ok(self)
    }

    /// Equal-width columns; `None` leaves a column empty
    pub fn columns(&mut self, figures: &[Option<Figure>]) -> StudioResult<&mut Self> {
        self.start("div", &[("class", "columns")])?;
        for figure in figures {
            match figure {
                Some(figure) => {
                    self.start("figure", &[("class", "column")])?;
                    self.emit(Event::Empty(
                        BytesStart::new("img").with_attributes([
                            ("src", figure.src.as_str()),
                            ("alt", figure.caption.as_str()),
                        ]),
                    ))?;
                    if !figure.caption.is_empty() {
                        self.text_element("figcaption", &[], &figure.caption)?;
                    }
                    self.end("figure")?;
                }
                None => {
                    self.start("div", &[("class", "column")])?;
                    self.end("div")?;
                }
            }
        }
        self.end("div")?;
        Ok(self)
    }

    /// Highlighted warning box
    pub fn notice(&mut self, message: &str) -> StudioResult<&mut Self> {
        self.text_element("div", &[("class", "notice"), ("role", "alert")], message)?;
        Ok(self)
    }

    /// Small grey caption line
    pub fn caption(&mut self, text: &str) -> StudioResult<&mut Self> {
        self.text_element("p", &[("class", "caption")], text)?;
        Ok(self)
    }

    /// Close the document and return the complete HTML
    pub fn finish(self) -> StudioResult<String> {
        let body = String::from_utf8(self.writer.into_inner())
            .map_err(|e| StudioError::RenderError(format!("Page body is not UTF-8: {}", e)))?;

        let mut html = String::with_capacity(body.len() + STYLESHEET.len() + 512);
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape(self.lang.as_str())));
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(self.title.as_str())));
        html.push_str("<style>");
        html.push_str(STYLESHEET);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(&format!("<main class=\"{}\">\n", self.layout.css_class()));
        html.push_str(&body);
        html.push_str("\n</main>\n</body>\n</html>\n");
        Ok(html)
    }

    fn text_element(&mut self, tag: &str, attributes: &[(&str, &str)], text: &str) -> StudioResult<()> {
        self.start(tag, attributes)?;
        self.emit(Event::Text(BytesText::new(text)))?;
        self.end(tag)
    }

    fn start(&mut self, tag: &str, attributes: &[(&str, &str)]) -> StudioResult<()> {
        let element = BytesStart::new(tag).with_attributes(attributes.iter().copied());
        self.emit(Event::Start(element))
    }

    fn end(&mut self, tag: &str) -> StudioResult<()> {
        self.emit(Event::End(BytesEnd::new(tag)))
    }

    fn raw(&mut self, html: &str) -> StudioResult<()> {
        self.emit(Event::Text(BytesText::from_escaped(html)))
    }

    fn emit(&mut self, event: Event<'_>) -> StudioResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| StudioError::RenderError(e.to_string()))
    }
}

fn color_style(color: &str) -> String {
    format!("color:{};", color)
}
