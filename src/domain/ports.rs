use serde_json::Value;
use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};

/// A mapping of raw, not yet parsed field values, keyed by field name.
///
/// The validator only ever asks for a field by name, so any request shape
/// (a JSON object, a CSV row, CLI flags) can feed it.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<K, V> FieldSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<V: AsRef<str>> FieldSource for HashMap<String, V> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

/// JSON strings are taken as-is and numbers by their literal text.
/// Any other JSON type counts as absent.
impl FieldSource for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_fields() {
        let value = json!({ "a": "1,5", "b": 2, "c": true, "d": null });
        let map = value.as_object().unwrap();

        assert_eq!(map.field("a").as_deref(), Some("1,5"));
        assert_eq!(map.field("b").as_deref(), Some("2"));
        assert_eq!(map.field("c"), None);
        assert_eq!(map.field("d"), None);
        assert_eq!(map.field("missing"), None);
    }

    #[test]
    fn test_std_maps() {
        let btree = BTreeMap::from([("principal", "100")]);
        assert_eq!(btree.field("principal").as_deref(), Some("100"));

        let hash = HashMap::from([("rate".to_string(), "2".to_string())]);
        assert_eq!(hash.field("rate").as_deref(), Some("2"));
        assert_eq!(hash.field("months"), None);
    }
}
