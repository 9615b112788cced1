//! Serializing arbitrary values into template dictionaries.
//!
//! [`Flattener`] is a serde serializer producing `serde_json::Value`s. Unlike
//! `serde_json::to_value` it isolates failures: a struct field, map entry or
//! list element that fails to serialize becomes an empty object and the rest
//! of the value survives.

use std::fmt::Display;

use serde::{Serialize, ser};
use serde_json::{Map, Value};
use weave_core::Inflector;

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub(crate) struct FlattenError(String);

impl ser::Error for FlattenError {
    fn custom<T: Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

impl From<serde_json::Error> for FlattenError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// Serialize `value`, degrading per member instead of failing outright.
pub(crate) fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, FlattenError> {
    value.serialize(Flattener)
}

/// Serialize one member, substituting an empty object on failure.
fn degrade<T: Serialize + ?Sized>(member: &str, value: &T) -> Value {
    match value.serialize(Flattener) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(member, error = %err, "could not flatten value, using empty object");
            Value::Object(Map::new())
        }
    }
}

/// Add case and plural variants for every string leaf of `value`.
///
/// A string at key `name` contributes `namePascalCase`, `nameCamelCase`,
/// and so on to the object holding it. Nested objects and objects inside
/// lists are expanded recursively; other list items pass through.
pub(crate) fn expand(inflector: &Inflector, value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(expand_object(inflector, map)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Value::Object(expand_object(inflector, map)),
                    Value::Array(_) => expand(inflector, item),
                    scalar => scalar,
                })
                .collect(),
        ),
        scalar => scalar,
    }
}

fn expand_object(inflector: &Inflector, map: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::String(s) => {
                let derived = derived_keys(inflector, &key, &s);
                out.insert(key, Value::String(s));
                for (k, v) in derived {
                    out.entry(k).or_insert(Value::String(v));
                }
            }
            other => {
                out.insert(key, expand(inflector, other));
            }
        }
    }
    out
}

/// `(camelKey + suffix, variant)` for each named variant of `value`.
pub(crate) fn derived_keys(inflector: &Inflector, key: &str, value: &str) -> Vec<(String, String)> {
    let prefix = inflector.variants(key).camel.clone();
    let variants = inflector.variants(value);
    variants
        .named()
        .iter()
        .map(|(suffix, v)| (format!("{}{}", prefix, suffix), v.to_string()))
        .collect()
}

fn key_string<T: Serialize + ?Sized>(key: &T) -> Result<String, FlattenError> {
    match key.serialize(serde_json::value::Serializer)? {
        Value::String(s) => Ok(s),
        other => Ok(other.to_string()),
    }
}

struct Flattener;

macro_rules! leaf {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<Value, FlattenError> {
                Ok(ser::Serializer::$method(serde_json::value::Serializer, v)?)
            }
        )*
    };
}

impl ser::Serializer for Flattener {
    type Ok = Value;
    type Error = FlattenError;
    type SerializeSeq = SeqFlattener;
    type SerializeTuple = SeqFlattener;
    type SerializeTupleStruct = SeqFlattener;
    type SerializeTupleVariant = VariantFlattener<SeqFlattener>;
    type SerializeMap = MapFlattener;
    type SerializeStruct = MapFlattener;
    type SerializeStructVariant = VariantFlattener<MapFlattener>;

    leaf!(
        serialize_bool(bool),
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_f32(f32),
        serialize_f64(f64),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
    );

    fn serialize_none(self) -> Result<Value, FlattenError> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, FlattenError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, FlattenError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, FlattenError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value, FlattenError> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, FlattenError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, FlattenError> {
        let mut map = Map::new();
        map.insert(variant.to_string(), degrade(variant, value));
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqFlattener, FlattenError> {
        Ok(SeqFlattener {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqFlattener, FlattenError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqFlattener, FlattenError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantFlattener<SeqFlattener>, FlattenError> {
        Ok(VariantFlattener {
            variant,
            inner: self.serialize_seq(Some(len))?,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapFlattener, FlattenError> {
        Ok(MapFlattener::default())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<MapFlattener, FlattenError> {
        Ok(MapFlattener::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<VariantFlattener<MapFlattener>, FlattenError> {
        Ok(VariantFlattener {
            variant,
            inner: MapFlattener::default(),
        })
    }
}

struct SeqFlattener {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqFlattener {
    type Ok = Value;
    type Error = FlattenError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FlattenError> {
        let index = self.items.len().to_string();
        self.items.push(degrade(&index, value));
        Ok(())
    }

    fn end(self) -> Result<Value, FlattenError> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SeqFlattener {
    type Ok = Value;
    type Error = FlattenError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FlattenError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, FlattenError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqFlattener {
    type Ok = Value;
    type Error = FlattenError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FlattenError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, FlattenError> {
        ser::SerializeSeq::end(self)
    }
}

#[derive(Default)]
struct MapFlattener {
    map: Map<String, Value>,
    next_key: Option<String>,
}

impl ser::SerializeMap for MapFlattener {
    type Ok = Value;
    type Error = FlattenError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), FlattenError> {
        self.next_key = Some(key_string(key)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FlattenError> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| FlattenError("map value without a key".to_string()))?;
        let value = degrade(&key, value);
        self.map.insert(key, value);
        Ok(())
    }

    fn end(self) -> Result<Value, FlattenError> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for MapFlattener {
    type Ok = Value;
    type Error = FlattenError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), FlattenError> {
        self.map.insert(key.to_string(), degrade(key, value));
        Ok(())
    }

    fn end(self) -> Result<Value, FlattenError> {
        Ok(Value::Object(self.map))
    }
}

/// Wraps an enum variant's payload as `{ "Variant": payload }`.
struct VariantFlattener<S> {
    variant: &'static str,
    inner: S,
}

impl<S> VariantFlattener<S> {
    fn wrap(variant: &str, payload: Value) -> Value {
        let mut map = Map::new();
        map.insert(variant.to_string(), payload);
        Value::Object(map)
    }
}

impl ser::SerializeTupleVariant for VariantFlattener<SeqFlattener> {
    type Ok = Value;
    type Error = FlattenError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FlattenError> {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Value, FlattenError> {
        let payload = ser::SerializeSeq::end(self.inner)?;
        Ok(Self::wrap(self.variant, payload))
    }
}

impl ser::SerializeStructVariant for VariantFlattener<MapFlattener> {
    type Ok = Value;
    type Error = FlattenError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), FlattenError> {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Value, FlattenError> {
        let payload = ser::SerializeStruct::end(self.inner)?;
        Ok(Self::wrap(self.variant, payload))
    }
}

#[cfg(test)]
mod tests {
    use serde::Serializer;
    use serde_json::json;

    use super::*;

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(ser::Error::custom("requires arguments"))
        }
    }

    #[derive(Serialize)]
    struct Order {
        id: u32,
        note: Broken,
        lines: Vec<Line>,
        tags: Vec<&'static str>,
    }

    #[derive(Serialize)]
    struct Line {
        product: &'static str,
        quantity: u32,
    }

    #[test]
    fn test_failed_field_becomes_empty_object() {
        let order = Order {
            id: 7,
            note: Broken,
            lines: vec![Line {
                product: "Widget",
                quantity: 2,
            }],
            tags: vec!["rush"],
        };

        let value = to_value(&order).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "note": {},
                "lines": [{ "product": "Widget", "quantity": 2 }],
                "tags": ["rush"],
            })
        );
    }

    #[test]
    fn test_failed_top_level_value_is_an_error() {
        assert!(to_value(&Broken).is_err());
    }

    #[test]
    fn test_enum_shapes() {
        #[derive(Serialize)]
        enum Shape {
            Unit,
            Newtype(u8),
            Struct { side: u8 },
        }
        assert_eq!(to_value(&Shape::Unit).unwrap(), json!("Unit"));
        assert_eq!(to_value(&Shape::Newtype(3)).unwrap(), json!({ "Newtype": 3 }));
        assert_eq!(
            to_value(&Shape::Struct { side: 4 }).unwrap(),
            json!({ "Struct": { "side": 4 } })
        );
    }

    #[test]
    fn test_expand_adds_derived_keys() {
        let inflector = Inflector::new();
        let value = expand(
            &inflector,
            json!({ "Name": "customer_address", "count": 2 }),
        );
        assert_eq!(value["Name"], "customer_address");
        assert_eq!(value["namePascalCase"], "CustomerAddress");
        assert_eq!(value["nameCamelCasePlural"], "customerAddresses");
        assert_eq!(value["nameKebabCase"], "customer-address");
        assert_eq!(value["nameTitleCase"], "Customer Address");
        assert_eq!(value["count"], 2);
        assert!(value.get("countPascalCase").is_none());
    }

    #[test]
    fn test_expand_recurses_into_lists_of_objects() {
        let inflector = Inflector::new();
        let value = expand(
            &inflector,
            json!({ "items": [{ "name": "line_item" }, "raw"] }),
        );
        assert_eq!(value["items"][0]["namePascalCase"], "LineItem");
        assert_eq!(value["items"][1], "raw");
    }
}
