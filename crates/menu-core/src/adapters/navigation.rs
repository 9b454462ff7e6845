//! Url and outcome navigation

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::{MenuItem, MenuParams};
use crate::error::{RenderError, Result};
use crate::ports::NavigationResolver;

const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Passes urls through and maps outcomes to `{context_path}/{outcome}{suffix}`
/// with the item's parameters as query string.
#[derive(Debug, Clone)]
pub struct OutcomeNavigationResolver {
    context_path: String,
    suffix: String,
}

impl OutcomeNavigationResolver {
    pub fn new(context_path: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            context_path: context_path.into(),
            suffix: suffix.into(),
        }
    }
}

impl NavigationResolver for OutcomeNavigationResolver {
    fn target_url(&self, item: &MenuItem) -> Result<String> {
        if let Some(url) = &item.url {
            return Ok(url.clone());
        }

        let outcome = item.outcome.as_deref().ok_or_else(|| {
            RenderError::Navigation(format!("menu item {} has neither url nor outcome", item.id))
        })?;

        let base = format!(
            "{}/{}{}",
            self.context_path.trim_end_matches('/'),
            outcome.trim_start_matches('/'),
            self.suffix
        );
        Ok(append_query(base, &item.params))
    }
}

fn append_query(mut url: String, params: &MenuParams) -> String {
    let pairs: Vec<String> = params
        .iter()
        .flat_map(|(name, values)| {
            values.iter().map(move |value| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, QUERY),
                    utf8_percent_encode(value, QUERY)
                )
            })
        })
        .collect();

    if !pairs.is_empty() {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&pairs.join("&"));
    }
    url
}
