//! Wire-level constants shared by the render and decode paths

/// Separator between sibling indices in a menu address.
pub const PATH_SEPARATOR: &str = "_";

/// Suffix appended to the holder client id to form the request parameter
/// carrying the activated menu address.
pub const MENU_ID_PARAM_SUFFIX: &str = "_menuid";

/// Placeholder href for command items.
pub const COMMAND_HREF: &str = "#";

/// Attribute holding the pre-confirmation command.
pub const CONFIRM_COMMAND_ATTR: &str = "data-pfconfirmcommand";

/// Onclick for disabled items.
pub const DISABLED_ONCLICK: &str = "return false;";

pub const DEFAULT_SEPARATOR_CLASS: &str = "ui-separator ui-state-default";
pub const DEFAULT_ITEM_CLASS: &str = "ui-menuitem ui-widget ui-corner-all";
pub const DEFAULT_LINK_CLASS: &str = "ui-menuitem-link ui-corner-all";
pub const DEFAULT_ICON_CLASS: &str = "ui-menuitem-icon ui-icon";
pub const DEFAULT_TEXT_CLASS: &str = "ui-menuitem-text";
pub const DEFAULT_LIST_CLASS: &str = "ui-menu-list ui-helper-reset";
pub const DEFAULT_HEADER_CLASS: &str = "ui-widget-header ui-corner-all";
pub const DEFAULT_DISABLED_CLASS: &str = "ui-state-disabled";

/// Builds the `{client_id}_menuid` request parameter name.
pub fn menu_id_param(client_id: &str) -> String {
    format!("{}{}", client_id, MENU_ID_PARAM_SUFFIX)
}
