//! Streaming markup writer
//!
//! Writes straight through to the underlying sink. A start tag stays open
//! until the next child element, text or end tag, so attributes can be
//! added one call at a time.

use std::io::Write;

use menu_shared::utils::escape_html;

use crate::error::{RenderError, Result};

pub struct ResponseWriter<W: Write> {
    out: W,
    open_tags: Vec<String>,
    start_tag_open: bool,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            open_tags: Vec::new(),
            start_tag_open: false,
        }
    }

    pub fn start_element(&mut self, name: &str) -> Result<()> {
        self.close_start_tag()?;
        write!(self.out, "<{}", name)?;
        self.open_tags.push(name.to_string());
        self.start_tag_open = true;
        Ok(())
    }

    pub fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        if !self.start_tag_open {
            return Err(RenderError::Markup(format!(
                "attribute '{}' written outside of a start tag",
                name
            )));
        }
        write!(self.out, " {}=\"{}\"", name, escape_html(value))?;
        Ok(())
    }

    /// Writes escaped character data.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.close_start_tag()?;
        self.out.write_all(escape_html(text).as_bytes())?;
        Ok(())
    }

    /// Writes character data as-is.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.close_start_tag()?;
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn end_element(&mut self, name: &str) -> Result<()> {
        match self.open_tags.pop() {
            Some(open) if open == name => {}
            Some(open) => {
                return Err(RenderError::Markup(format!(
                    "end tag '{}' does not match open tag '{}'",
                    name, open
                )))
            }
            None => {
                return Err(RenderError::Markup(format!(
                    "end tag '{}' without an open element",
                    name
                )))
            }
        }
        self.close_start_tag()?;
        write!(self.out, "</{}>", name)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn close_start_tag(&mut self) -> Result<()> {
        if self.start_tag_open {
            self.out.write_all(b">")?;
            self.start_tag_open = false;
        }
        Ok(())
    }
}

impl ResponseWriter<Vec<u8>> {
    /// Writer over an in-memory buffer.
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.out).unwrap_or_default()
    }
}
