// ============================================================================
// Menu Core - Action Encoder
// File: crates/menu-core/src/services/action_encoder.rs
// Description: Client-side trigger attributes for menu items
// ============================================================================
//! Produces the `href`/`target`/`onclick` attributes that fire a menu
//! item's action on the client, applying confirmation interception.

use std::io::Write;
use std::sync::Arc;

use menu_shared::constants::{menu_id_param, COMMAND_HREF, CONFIRM_COMMAND_ATTR};
use tracing::{debug, warn};

use crate::domain::{ItemKind, MenuItem, MenuParams};
use crate::error::{RenderError, Result};
use crate::markup::ResponseWriter;
use crate::ports::{
    AjaxCommandBuilder, ConfirmationScriptProvider, Form, FormLocator, NavigationResolver,
    SubmitCommandBuilder,
};
use super::confirmation::resolve_confirmation;

/// Collaborators the render path consults.
#[derive(Clone)]
pub struct RenderCollaborators {
    pub navigation: Arc<dyn NavigationResolver>,
    pub forms: Arc<dyn FormLocator>,
    pub ajax: Arc<dyn AjaxCommandBuilder>,
    pub submit: Arc<dyn SubmitCommandBuilder>,
    pub confirmation: Arc<dyn ConfirmationScriptProvider>,
}

/// Attributes emitted on an item's anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionAttributes {
    pub href: String,
    pub target: Option<String>,
    pub onclick: Option<String>,
    /// Pre-confirmation trigger, re-invoked when the dialog is accepted.
    pub confirm_command: Option<String>,
}

impl ActionAttributes {
    pub fn write_to<W: Write>(&self, writer: &mut ResponseWriter<W>) -> Result<()> {
        writer.write_attribute("href", &self.href)?;
        if let Some(target) = &self.target {
            writer.write_attribute("target", target)?;
        }
        if let Some(command) = &self.confirm_command {
            writer.write_attribute(CONFIRM_COMMAND_ATTR, command)?;
        }
        if let Some(onclick) = &self.onclick {
            writer.write_attribute("onclick", onclick)?;
        }
        Ok(())
    }
}

pub struct ActionEncoder {
    collaborators: RenderCollaborators,
}

impl ActionEncoder {
    pub fn new(collaborators: RenderCollaborators) -> Self {
        Self { collaborators }
    }

    /// Writes the action attributes of `item` onto the currently open tag.
    pub fn encode_on_click<W: Write>(
        &self,
        writer: &mut ResponseWriter<W>,
        holder_client_id: &str,
        item: &MenuItem,
    ) -> Result<()> {
        self.action_attributes(holder_client_id, item)?.write_to(writer)
    }

    pub fn action_attributes(&self, holder_client_id: &str, item: &MenuItem) -> Result<ActionAttributes> {
        let confirmation = resolve_confirmation(self.collaborators.confirmation.as_ref(), item)?;
        let mut attrs = ActionAttributes::default();
        let mut onclick = item.onclick.clone();

        match item.kind() {
            ItemKind::Navigation => {
                attrs.href = self.collaborators.navigation.target_url(item)?;
                attrs.target = item.target.clone();
            }
            ItemKind::Command => {
                attrs.href = COMMAND_HREF.to_string();

                let form = self
                    .collaborators
                    .forms
                    .closest_form(holder_client_id)
                    .ok_or_else(|| {
                        warn!("Menu item {} of {} has no enclosing form", item.id, holder_client_id);
                        RenderError::MissingForm {
                            item: item.id.clone(),
                        }
                    })?;

                let command = self.command(holder_client_id, item, &form)?;
                debug!("Menu item {} encoded command: {}", item.id, command);

                onclick = Some(match onclick {
                    Some(user) => format!("{};{}", user, command),
                    None => command,
                });
            }
        }

        if let Some(onclick) = onclick {
            match confirmation {
                Some(script) => {
                    attrs.confirm_command = Some(onclick);
                    attrs.onclick = Some(script);
                }
                None => attrs.onclick = Some(onclick),
            }
        }

        Ok(attrs)
    }

    fn command(&self, holder_client_id: &str, item: &MenuItem, form: &Form) -> Result<String> {
        if item.dynamic {
            let params = with_menu_id(&item.params, holder_client_id, &item.id);
            if item.ajax {
                self.collaborators
                    .ajax
                    .ajax_request(holder_client_id, item, form, &params)
            } else {
                self.collaborators
                    .submit
                    .submit_request(holder_client_id, form, &params)
            }
        } else {
            let source = item.client_id();
            if item.ajax {
                self.collaborators
                    .ajax
                    .ajax_request(source, item, form, &item.params)
            } else {
                self.collaborators
                    .submit
                    .submit_request(source, form, &item.params)
            }
        }
    }
}

/// Copy of `params` carrying `{holder}_menuid = [item_id]`, replacing any
/// earlier value under that key.
fn with_menu_id(params: &MenuParams, holder_client_id: &str, item_id: &str) -> MenuParams {
    let mut params = params.clone();
    params.insert(menu_id_param(holder_client_id), vec![item_id.to_string()]);
    params
}
