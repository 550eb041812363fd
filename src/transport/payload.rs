use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
/// Request payload (JSON body or query string) built field by field.
///
/// Every field is either set or unset. Unset fields are pruned when the payload
/// is rendered; set fields are always sent, including `0`, `false` and empty
/// lists.
pub struct Payload {
    fields: Vec<(String, Option<Value>)>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field.
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.push((key.to_owned(), Some(value.into())));
        self
    }

    /// Set a field when `value` is `Some`, keep it unset otherwise.
    pub fn opt<T: Into<Value>>(mut self, key: &str, value: Option<T>) -> Self {
        self.fields.push((key.to_owned(), value.map(Into::into)));
        self
    }

    /// Set a boolean that the API expects as `0`/`1`.
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.set(key, u8::from(value))
    }

    /// Optional variant of [`Payload::flag`].
    pub fn opt_flag(self, key: &str, value: Option<bool>) -> Self {
        self.opt(key, value.map(u8::from))
    }

    /// Names of the fields that will be transmitted, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, value)| value.is_some())
            .map(|(key, _)| key.as_str())
    }

    /// Value that will be transmitted for `key`: the latest set write.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .rev()
            .filter(|(name, _)| name == key)
            .find_map(|(_, value)| value.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }

    /// Render as a JSON object without unset fields. Later writes of the same key win.
    pub fn into_json(self) -> Value {
        let map = self
            .fields
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect::<Map<String, Value>>();
        Value::Object(map)
    }

    /// Render as query parameters without unset fields.
    ///
    /// Strings are sent verbatim, everything else in its JSON form.
    pub fn into_query(self) -> Vec<(String, String)> {
        self.fields
            .into_iter()
            .filter_map(|(key, value)| {
                value.map(|value| {
                    let value = match value {
                        Value::String(text) => text,
                        other => other.to_string(),
                    };
                    (key, value)
                })
            })
            .collect()
    }
}

/// Same as [`Payload::into_json`]: renders the pruned JSON object.
impl From<Payload> for Value {
    fn from(value: Payload) -> Self {
        value.into_json()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_fields_are_pruned_but_falsy_values_are_kept() {
        let payload = Payload::new()
            .set("link", "https://t.me/channel")
            .flag("is_on", false)
            .set("track_unsubscriptions", false)
            .set("forbidden_themes", Vec::<String>::new())
            .opt("price", None::<f64>)
            .opt_flag("get_links", None);

        assert_eq!(
            payload.keys().collect::<Vec<_>>(),
            vec!["link", "is_on", "track_unsubscriptions", "forbidden_themes"]
        );
        assert_eq!(
            payload.into_json(),
            json!({
                "link": "https://t.me/channel",
                "is_on": 0,
                "track_unsubscriptions": false,
                "forbidden_themes": []
            })
        );
    }

    #[test]
    fn flags_encode_as_integers() {
        let payload = Payload::new()
            .flag("show_quiz", true)
            .opt_flag("get_links", Some(false));
        assert_eq!(payload.get("show_quiz"), Some(&json!(1)));
        assert_eq!(payload.get("get_links"), Some(&json!(0)));
    }

    #[test]
    fn query_rendering_keeps_strings_verbatim() {
        let query = Payload::new()
            .set("action", "allads")
            .set("bot_id", 42)
            .opt("ads_id", None::<i64>)
            .into_query();

        assert_eq!(
            query,
            vec![
                ("action".to_owned(), "allads".to_owned()),
                ("bot_id".to_owned(), "42".to_owned()),
            ]
        );
    }

    #[test]
    fn unset_write_does_not_hide_earlier_value() {
        let payload = Payload::new().set("k", 1).opt("k", None::<i64>);
        assert_eq!(payload.get("k"), Some(&json!(1)));
        assert_eq!(payload.get("missing"), None);
        assert_eq!(payload.into_json(), json!({"k": 1}));
    }

    #[test]
    fn value_conversion_prunes_unset_fields() {
        let nested = Payload::new().set("gender", "male").opt("age", None::<u8>);
        let outer = Payload::new().opt("user_parameters", Some(nested));
        assert_eq!(
            Value::from(outer),
            json!({"user_parameters": {"gender": "male"}})
        );
    }

    #[test]
    fn empty_when_everything_is_unset() {
        let payload = Payload::new().opt("name", None::<String>);
        assert!(payload.is_empty());
        assert_eq!(payload.into_json(), json!({}));
    }
}
