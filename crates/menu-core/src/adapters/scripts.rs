//! PrimeFaces-style client scripts
//!
//! String literals go through `serde_json`, so every value lands in the
//! script as a valid JS literal.

use serde_json::{json, Map, Value};

use crate::domain::{BehaviorContext, ConfirmBehavior, MenuItem, MenuParams};
use crate::error::{RenderError, Result};
use crate::ports::{AjaxCommandBuilder, ConfirmationScriptProvider, Form, SubmitCommandBuilder};

#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeScripts;

impl AjaxCommandBuilder for PrimeScripts {
    fn ajax_request(
        &self,
        source_client_id: &str,
        item: &MenuItem,
        form: &Form,
        params: &MenuParams,
    ) -> Result<String> {
        let mut options = Map::new();
        options.insert("s".into(), json!(source_client_id));
        options.insert("f".into(), json!(form.client_id));
        if let Some(process) = &item.process {
            options.insert("p".into(), json!(process));
        }
        if let Some(update) = &item.update {
            options.insert("u".into(), json!(update));
        }
        if !params.is_empty() {
            let pairs: Vec<Value> = params
                .iter()
                .flat_map(|(name, values)| {
                    values
                        .iter()
                        .map(move |value| json!({ "name": name, "value": value }))
                })
                .collect();
            options.insert("pa".into(), Value::Array(pairs));
        }

        Ok(format!("PrimeFaces.ab({});return false;", Value::Object(options)))
    }
}

impl SubmitCommandBuilder for PrimeScripts {
    fn submit_request(&self, decode_id: &str, form: &Form, params: &MenuParams) -> Result<String> {
        let mut payload = Map::new();
        payload.insert(decode_id.to_string(), json!(decode_id));
        for (name, values) in params {
            let value = match values.as_slice() {
                [single] => json!(single),
                many => json!(many),
            };
            payload.insert(name.clone(), value);
        }

        let form_id = json!(form.client_id);
        Ok(format!(
            "PrimeFaces.addSubmitParam({},{}).submit({});return false;",
            form_id,
            Value::Object(payload),
            form_id
        ))
    }
}

impl ConfirmationScriptProvider for PrimeScripts {
    fn script(&self, behavior: &ConfirmBehavior, context: &BehaviorContext) -> Result<String> {
        if behavior.header.is_none() && behavior.message.is_none() {
            return Err(RenderError::Confirmation(format!(
                "confirm behavior on {} has neither header nor message",
                context.source_client_id
            )));
        }

        let mut options = Map::new();
        options.insert("source".into(), json!(context.source_client_id));
        if let Some(header) = &behavior.header {
            options.insert("header".into(), json!(header));
        }
        if let Some(message) = &behavior.message {
            options.insert("message".into(), json!(message));
        }
        if let Some(icon) = &behavior.icon {
            options.insert("icon".into(), json!(icon));
        }
        options.insert("escape".into(), json!(behavior.escape));

        Ok(format!("PrimeFaces.confirm({});return false;", Value::Object(options)))
    }
}
