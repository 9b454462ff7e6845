//! Form lookup by naming-container client ids

use std::collections::HashSet;

use crate::ports::{Form, FormLocator};

/// Finds the closest registered form among the `:`-separated ancestors of a
/// client id (`main:form:menu` checks `main:form`, then `main`).
#[derive(Debug, Clone, Default)]
pub struct NamingFormLocator {
    forms: HashSet<String>,
}

impl NamingFormLocator {
    pub fn new<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            forms: forms.into_iter().map(Into::into).collect(),
        }
    }
}

impl FormLocator for NamingFormLocator {
    fn closest_form(&self, source_client_id: &str) -> Option<Form> {
        let mut candidate = source_client_id;
        while let Some(pos) = candidate.rfind(':') {
            candidate = &candidate[..pos];
            if self.forms.contains(candidate) {
                return Some(Form::new(candidate));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_ancestor_wins() {
        let locator = NamingFormLocator::new(["main", "main:form"]);
        assert_eq!(
            locator.closest_form("main:form:menu"),
            Some(Form::new("main:form"))
        );
        assert_eq!(locator.closest_form("main:menu"), Some(Form::new("main")));
    }

    #[test]
    fn test_source_itself_is_not_its_form() {
        let locator = NamingFormLocator::new(["menu"]);
        assert_eq!(locator.closest_form("menu"), None);
    }

    #[test]
    fn test_no_form() {
        assert_eq!(NamingFormLocator::default().closest_form("a:b"), None);
    }
}
