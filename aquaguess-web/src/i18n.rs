//! Slim string table: a single English bundle with nested keys and
//! `{placeholder}` substitution.
use once_cell::sync::Lazy;
use serde_json::Value;

static BUNDLE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../i18n/en.json"))
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
});

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        match current.get(k) {
            Some(value) => current = value,
            None => return None,
        }
    }
    Some(current)
}

fn resolve(key: &str, args: &[(&str, &str)]) -> Option<String> {
    let value = get_nested_value(&BUNDLE, key)?;
    let mut text = value.as_str()?.to_string();
    for (k, v) in args {
        let placeholder = format!("{{{k}}}");
        text = text.replace(&placeholder, v);
    }
    Some(text)
}

/// Translate a key.
///
/// Falls back to the key itself when the bundle has no entry for it.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, &[])
}

/// Translate a key with variable substitution
///
/// Variables in the bundle string use the format {key}.
#[must_use]
pub fn tr(key: &str, args: &[(&str, &str)]) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}
