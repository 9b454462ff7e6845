// ============================================================================
// Menu Core - Menu Renderer
// File: crates/menu-core/src/services/menu_renderer.rs
// Description: Markup for a menu item holder (items, groups, separators)
// ============================================================================

use std::io::Write;

use menu_shared::constants::{COMMAND_HREF, DISABLED_ONCLICK};
use menu_shared::utils::join_classes;
use menu_shared::MenuSettings;
use tracing::debug;

use crate::domain::{MenuElement, MenuGroup, MenuItem, MenuItemHolder, Separator};
use crate::error::Result;
use crate::markup::ResponseWriter;
use super::action_encoder::{ActionEncoder, RenderCollaborators};
use super::separator::SeparatorPresenter;

pub struct MenuRenderer {
    settings: MenuSettings,
    encoder: ActionEncoder,
    separators: SeparatorPresenter,
}

impl MenuRenderer {
    pub fn new(settings: MenuSettings, collaborators: RenderCollaborators) -> Self {
        let separators = SeparatorPresenter::new(settings.separator_class.clone());
        Self {
            settings,
            encoder: ActionEncoder::new(collaborators),
            separators,
        }
    }

    pub fn encoder(&self) -> &ActionEncoder {
        &self.encoder
    }

    /// Renders the holder's whole tree as one list.
    pub fn encode_menu<W, H>(&self, writer: &mut ResponseWriter<W>, holder: &H) -> Result<()>
    where
        W: Write,
        H: MenuItemHolder + ?Sized,
    {
        debug!("Rendering menu {}", holder.client_id());
        writer.start_element("ul")?;
        writer.write_attribute("class", &self.settings.list_class)?;
        self.encode_elements(writer, holder.client_id(), holder.elements())?;
        writer.end_element("ul")
    }

    /// Renders `elements` in order. A group contributes a header followed by
    /// its children.
    pub fn encode_elements<W: Write>(
        &self,
        writer: &mut ResponseWriter<W>,
        holder_client_id: &str,
        elements: &[MenuElement],
    ) -> Result<()> {
        for element in elements {
            match element {
                MenuElement::Item(item) if item.rendered => {
                    self.encode_menu_item(writer, holder_client_id, item)?
                }
                MenuElement::Group(group) if group.rendered => {
                    self.encode_group(writer, holder_client_id, group)?
                }
                MenuElement::Separator(separator) => self.encode_separator(writer, separator)?,
                _ => {}
            }
        }
        Ok(())
    }

    pub fn encode_menu_item<W: Write>(
        &self,
        writer: &mut ResponseWriter<W>,
        holder_client_id: &str,
        item: &MenuItem,
    ) -> Result<()> {
        writer.start_element("li")?;
        writer.write_attribute("class", &self.settings.item_class)?;
        writer.write_attribute("role", "menuitem")?;

        let mut link_class = join_classes(&self.settings.link_class, item.style_class.as_deref());
        if item.disabled {
            link_class = join_classes(&link_class, Some(&self.settings.disabled_class));
        }

        writer.start_element("a")?;
        writer.write_attribute("class", &link_class)?;
        if let Some(style) = &item.style {
            writer.write_attribute("style", style)?;
        }
        if let Some(title) = &item.title {
            writer.write_attribute("title", title)?;
        }

        if item.disabled {
            writer.write_attribute("href", COMMAND_HREF)?;
            writer.write_attribute("onclick", DISABLED_ONCLICK)?;
        } else {
            self.encoder.encode_on_click(writer, holder_client_id, item)?;
        }

        if let Some(icon) = &item.icon {
            writer.start_element("span")?;
            writer.write_attribute("class", &join_classes(&self.settings.icon_class, Some(icon)))?;
            writer.end_element("span")?;
        }

        if let Some(value) = &item.value {
            writer.start_element("span")?;
            writer.write_attribute("class", &self.settings.text_class)?;
            if item.escape {
                writer.write_text(value)?;
            } else {
                writer.write_raw(value)?;
            }
            writer.end_element("span")?;
        }

        writer.end_element("a")?;
        writer.end_element("li")
    }

    pub fn encode_separator<W: Write>(&self, writer: &mut ResponseWriter<W>, separator: &Separator) -> Result<()> {
        self.separators.encode(writer, separator)
    }

    fn encode_group<W: Write>(
        &self,
        writer: &mut ResponseWriter<W>,
        holder_client_id: &str,
        group: &MenuGroup,
    ) -> Result<()> {
        writer.start_element("li")?;
        writer.write_attribute("class", &self.settings.header_class)?;
        writer.start_element("h3")?;
        if let Some(label) = &group.label {
            writer.write_text(label)?;
        }
        writer.end_element("h3")?;
        writer.end_element("li")?;

        self.encode_elements(writer, holder_client_id, &group.elements)
    }
}
