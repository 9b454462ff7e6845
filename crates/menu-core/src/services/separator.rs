//! Separator presenter

use std::io::Write;

use menu_shared::utils::join_classes;

use crate::domain::Separator;
use crate::error::Result;
use crate::markup::ResponseWriter;

pub struct SeparatorPresenter {
    separator_class: String,
}

impl SeparatorPresenter {
    pub fn new(separator_class: impl Into<String>) -> Self {
        Self {
            separator_class: separator_class.into(),
        }
    }

    /// Emits a single divider, or nothing for a hidden separator.
    pub fn encode<W: Write>(&self, writer: &mut ResponseWriter<W>, separator: &Separator) -> Result<()> {
        if !separator.rendered {
            return Ok(());
        }

        let class = join_classes(&self.separator_class, separator.style_class.as_deref());
        writer.start_element("li")?;
        writer.write_attribute("class", &class)?;
        if let Some(style) = &separator.style {
            writer.write_attribute("style", style)?;
        }
        writer.end_element("li")
    }
}
