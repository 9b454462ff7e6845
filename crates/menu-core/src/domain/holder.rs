//! Components that own a menu tree

use super::menu_element::{MenuElement, MenuModel};

/// A component rendering menu elements and decoding their activation.
pub trait MenuItemHolder {
    fn client_id(&self) -> &str;
    fn elements(&self) -> &[MenuElement];
}

/// Plain holder pairing a client id with a model.
#[derive(Debug, Clone)]
pub struct MenuComponent {
    pub client_id: String,
    pub model: MenuModel,
}

impl MenuComponent {
    pub fn new(client_id: impl Into<String>, model: MenuModel) -> Self {
        Self {
            client_id: client_id.into(),
            model,
        }
    }
}

impl MenuItemHolder for MenuComponent {
    fn client_id(&self) -> &str {
        &self.client_id
    }

    fn elements(&self) -> &[MenuElement] {
        self.model.elements()
    }
}
