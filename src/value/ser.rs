//! `serde::Serialize` for [`Value`]

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Char(c) => serializer.serialize_char(*c),
            Value::SignedInt(v) => serializer.serialize_i64(*v),
            Value::UnsignedInt(v) => serializer.serialize_u64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(s) => serializer.serialize_str(s),
            Value::Binary(bytes) => serializer.serialize_bytes(bytes.as_slice()),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn value_tree_to_json() {
        let mut v = Value::Null;
        v["name"] = Value::from("Ibrahim");
        v["id"] = Value::from(34);

        let text = serde_json::to_string(&v).unwrap();
        assert_eq!(text, r#"{"name":"Ibrahim","id":34}"#);
    }

    #[test]
    fn char_crosses_as_string() {
        let text = serde_json::to_string(&Value::from('@')).unwrap();
        assert_eq!(text, r#""@""#);
    }
}
