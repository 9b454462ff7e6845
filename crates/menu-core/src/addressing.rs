// ============================================================================
// Menu Core - Path Addressing
// File: crates/menu-core/src/addressing.rs
// Description: Encode/decode a node position as an underscore-joined address
// ============================================================================
//! Menu addresses: `"1_0_2"` is the third child of the first child of the
//! second top-level element. Each index is the 0-based position of a node
//! within its parent's ordered sequence.

use std::fmt;
use std::str::FromStr;

use menu_shared::constants::PATH_SEPARATOR;

use crate::domain::{MenuElement, MenuItem};
use crate::error::{RenderError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MenuPath(Vec<usize>);

impl MenuPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn encode(&self) -> String {
        encode(&self.0)
    }

    /// Parses an address, rejecting any token that is not a non-negative
    /// decimal integer.
    pub fn parse(address: &str) -> Result<Self> {
        address
            .split(PATH_SEPARATOR)
            .map(|token| parse_index(address, token))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl fmt::Display for MenuPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for MenuPath {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

pub fn encode(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// Resolves `address` against a top-level element sequence.
///
/// `Ok(None)` means no match (out of range index, or a path that runs into
/// a separator or through a non-group), which happens with addresses from a
/// differently shaped earlier render. A non-numeric token, or a terminal
/// index that lands on a group, is a malformed address.
pub fn decode<'a>(elements: &'a [MenuElement], address: &str) -> Result<Option<&'a MenuItem>> {
    let path = MenuPath::parse(address)?;
    descend(elements, path.indices(), address)
}

fn descend<'a>(
    elements: &'a [MenuElement],
    indices: &[usize],
    address: &str,
) -> Result<Option<&'a MenuItem>> {
    let Some((&index, rest)) = indices.split_first() else {
        return Ok(None);
    };
    let Some(element) = elements.get(index) else {
        return Ok(None);
    };

    match (element, rest.is_empty()) {
        (MenuElement::Item(item), true) => Ok(Some(item)),
        (MenuElement::Group(_), true) => Err(RenderError::malformed(
            address,
            format!("index {} designates a group, not an item", index),
        )),
        (MenuElement::Separator(_), true) => Ok(None),
        (MenuElement::Group(group), false) => descend(&group.elements, rest, address),
        (_, false) => Ok(None),
    }
}

fn parse_index(address: &str, token: &str) -> Result<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RenderError::malformed(
            address,
            format!("'{}' is not a non-negative integer", token),
        ));
    }
    token
        .parse::<usize>()
        .map_err(|e| RenderError::malformed(address, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuGroup, MenuModel, Separator};

    fn tree() -> MenuModel {
        MenuModel::new()
            .with(MenuItem::new("a"))
            .with(
                MenuGroup::new("1")
                    .child(MenuItem::new("b"))
                    .child(MenuItem::new("c")),
            )
    }

    fn deep_tree() -> MenuModel {
        MenuModel::new()
            .with(MenuItem::new("top"))
            .with(Separator::new())
            .with(
                MenuGroup::new("g")
                    .child(MenuItem::new("g0"))
                    .child(
                        MenuGroup::new("h")
                            .child(Separator::new())
                            .child(MenuItem::new("h1"))
                            .child(MenuGroup::new("i").child(MenuItem::new("i0"))),
                    ),
            )
    }

    #[test]
    fn test_encode_joins_with_underscore() {
        assert_eq!(encode(&[1, 1]), "1_1");
        assert_eq!(encode(&[0]), "0");
        assert_eq!(MenuPath::new(vec![2, 0, 13]).to_string(), "2_0_13");
    }

    #[test]
    fn test_decode_nested_item() {
        let model = tree();
        let item = decode(model.elements(), "1_1").unwrap().unwrap();
        assert_eq!(item.id, "c");
    }

    #[test]
    fn test_decode_out_of_range_is_absent() {
        let model = tree();
        assert!(decode(model.elements(), "5").unwrap().is_none());
        assert!(decode(model.elements(), "1_9").unwrap().is_none());
    }

    #[test]
    fn test_decode_empty_tree_is_absent() {
        assert!(decode(&[], "0").unwrap().is_none());
    }

    #[test]
    fn test_decode_non_numeric_is_malformed() {
        let model = tree();
        for address in ["x", "1_a", "", "1__0", "-1", "+1", "1_"] {
            let err = decode(model.elements(), address).unwrap_err();
            assert!(
                matches!(err, RenderError::MalformedAddress { .. }),
                "address {:?} should be malformed, got {:?}",
                address,
                err
            );
        }
    }

    #[test]
    fn test_decode_terminal_group_is_malformed() {
        let model = tree();
        let err = decode(model.elements(), "1").unwrap_err();
        assert!(matches!(err, RenderError::MalformedAddress { .. }));
    }

    #[test]
    fn test_decode_through_item_or_separator_is_absent() {
        let model = deep_tree();
        assert!(decode(model.elements(), "0_0").unwrap().is_none());
        assert!(decode(model.elements(), "1").unwrap().is_none());
        assert!(decode(model.elements(), "2_1_0").unwrap().is_none());
    }

    #[test]
    fn test_round_trip_every_item() {
        let model = deep_tree();
        let items = model.items();
        assert_eq!(items.len(), 4);

        for (path, item) in items {
            let resolved = decode(model.elements(), &path.encode()).unwrap().unwrap();
            assert_eq!(resolved.id, item.id);
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let err = MenuPath::parse("99999999999999999999999999").unwrap_err();
        assert!(matches!(err, RenderError::MalformedAddress { .. }));
    }

    #[test]
    fn test_from_str() {
        let path: MenuPath = "3_1".parse().unwrap();
        assert_eq!(path.indices(), &[3, 1]);
    }
}
