// ============================================================================
// Menu Core - Menu Element Entities
// File: crates/menu-core/src/domain/menu_element.rs
// Description: Menu tree (items, groups, separators)
// ============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::addressing::MenuPath;
use super::behavior::{BehaviorBinding, ClientBehavior};

/// Request parameters declared on an item, in declaration order.
pub type MenuParams = IndexMap<String, Vec<String>>;

/// A node of the menu tree. Sibling order defines addressing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuElement {
    Item(MenuItem),
    Group(MenuGroup),
    Separator(Separator),
}

impl MenuElement {
    pub fn as_item(&self) -> Option<&MenuItem> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&MenuGroup> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }
}

impl From<MenuItem> for MenuElement {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<MenuGroup> for MenuElement {
    fn from(group: MenuGroup) -> Self {
        Self::Group(group)
    }
}

impl From<Separator> for MenuElement {
    fn from(separator: Separator) -> Self {
        Self::Separator(separator)
    }
}

/// How an item triggers its action on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Plain link to a url or a resolved outcome.
    Navigation,
    /// Form submission or ajax request back to the holder.
    Command,
}

/// Menu item entity.
///
/// An item is either a navigation item (`url` or `outcome` set) or a command
/// item (neither set). Setting both kinds of target is an authoring error
/// the renderer does not check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    /// Unique among siblings only.
    pub id: String,
    /// Client-assigned identity of a statically declared item.
    pub client_id: Option<String>,
    pub value: Option<String>,
    pub url: Option<String>,
    pub outcome: Option<String>,
    pub onclick: Option<String>,
    pub target: Option<String>,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub style: Option<String>,
    pub style_class: Option<String>,
    pub process: Option<String>,
    pub update: Option<String>,
    pub ajax: bool,
    pub dynamic: bool,
    pub immediate: bool,
    pub disabled: bool,
    pub escape: bool,
    pub rendered: bool,
    pub params: MenuParams,
    pub behaviors: Vec<BehaviorBinding>,
}

impl Default for MenuItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            client_id: None,
            value: None,
            url: None,
            outcome: None,
            onclick: None,
            target: None,
            icon: None,
            title: None,
            style: None,
            style_class: None,
            process: None,
            update: None,
            ajax: true,
            dynamic: false,
            immediate: false,
            disabled: false,
            escape: true,
            rendered: true,
            params: MenuParams::new(),
            behaviors: Vec::new(),
        }
    }
}

impl MenuItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> ItemKind {
        if self.url.is_some() || self.outcome.is_some() {
            ItemKind::Navigation
        } else {
            ItemKind::Command
        }
    }

    /// Identity used as the source of client scripts.
    pub fn client_id(&self) -> &str {
        self.client_id.as_deref().unwrap_or(&self.id)
    }

    pub fn label(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    pub fn onclick(mut self, script: impl Into<String>) -> Self {
        self.onclick = Some(script.into());
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn ajax(mut self, ajax: bool) -> Self {
        self.ajax = ajax;
        self
    }

    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Appends a value to the parameter `key`.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.entry(key.into()).or_default().push(value.into());
        self
    }

    pub fn on_click(mut self, behavior: ClientBehavior) -> Self {
        self.behaviors.push(BehaviorBinding::click(behavior));
        self
    }

    pub fn bind(mut self, binding: BehaviorBinding) -> Self {
        self.behaviors.push(binding);
        self
    }
}

/// Menu group entity (submenu).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuGroup {
    pub id: String,
    pub label: Option<String>,
    pub rendered: bool,
    pub elements: Vec<MenuElement>,
}

impl Default for MenuGroup {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: None,
            rendered: true,
            elements: Vec::new(),
        }
    }
}

impl MenuGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn child(mut self, element: impl Into<MenuElement>) -> Self {
        self.elements.push(element.into());
        self
    }
}

/// Visual divider between items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Separator {
    pub rendered: bool,
    pub style: Option<String>,
    pub style_class: Option<String>,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            rendered: true,
            style: None,
            style_class: None,
        }
    }
}

impl Separator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden() -> Self {
        Self {
            rendered: false,
            ..Self::default()
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn style_class(mut self, style_class: impl Into<String>) -> Self {
        self.style_class = Some(style_class.into());
        self
    }
}

/// Top-level ordered element sequence of a menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuModel {
    elements: Vec<MenuElement>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: impl Into<MenuElement>) {
        self.elements.push(element.into());
    }

    pub fn with(mut self, element: impl Into<MenuElement>) -> Self {
        self.add(element);
        self
    }

    pub fn elements(&self) -> &[MenuElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Replaces every item and group id with its path address, so a menu
    /// built at runtime gets ids the decode path can resolve.
    pub fn generate_unique_ids(&mut self) {
        assign_path_ids(&mut self.elements, &MenuPath::default());
    }

    /// All items in render order, paired with their paths.
    pub fn items(&self) -> Vec<(MenuPath, &MenuItem)> {
        let mut out = Vec::new();
        collect_items(&self.elements, &MenuPath::default(), &mut out);
        out
    }
}

fn assign_path_ids(elements: &mut [MenuElement], parent: &MenuPath) {
    for (index, element) in elements.iter_mut().enumerate() {
        let path = parent.child(index);
        match element {
            MenuElement::Item(item) => item.id = path.encode(),
            MenuElement::Group(group) => {
                group.id = path.encode();
                assign_path_ids(&mut group.elements, &path);
            }
            MenuElement::Separator(_) => {}
        }
    }
}

fn collect_items<'a>(
    elements: &'a [MenuElement],
    parent: &MenuPath,
    out: &mut Vec<(MenuPath, &'a MenuItem)>,
) {
    for (index, element) in elements.iter().enumerate() {
        let path = parent.child(index);
        match element {
            MenuElement::Item(item) => out.push((path, item)),
            MenuElement::Group(group) => collect_items(&group.elements, &path, out),
            MenuElement::Separator(_) => {}
        }
    }
}
