//! Lenient JSON decoding.
//!
//! The upstream API sends `null` for many absent numbers and strings, and
//! some stat fields arrive as a number in one response and a string in the
//! next. Nulls are pruned before the typed decode so every field falls back
//! to its `Default`. Loosely typed scalars decode into [`Tolerant`].
use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// Decode `bytes` into `T`, treating JSON `null` as "absent".
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    let mut value: Value = serde_json::from_slice(bytes)?;
    prune_nulls(&mut value);
    T::deserialize(value)
}

/// Drop every object member whose value is `null`, recursively. Nulls inside
/// arrays are left in place.
pub fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(prune_nulls),
        _ => {}
    }
}

/// A scalar the API types inconsistently.
///
/// Numbers and strings are kept as sent; booleans, objects and arrays are
/// dropped to `Absent`. [`Tolerant::normalized`] gives a single text form so
/// `"5"`, `5` and `5.0` compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Tolerant {
    Str(String),
    Num(Number),
    #[default]
    Absent,
}

impl Tolerant {
    pub fn is_absent(&self) -> bool {
        matches!(self, Tolerant::Absent)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Tolerant::Num(n) => n.as_f64(),
            Tolerant::Str(s) => s.trim().trim_end_matches('%').parse().ok(),
            Tolerant::Absent => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Tolerant::Num(n) => n.as_i64().or_else(|| whole(n.as_f64()?)),
            Tolerant::Str(s) => s.trim().parse().ok(),
            Tolerant::Absent => None,
        }
    }

    pub fn normalized(&self) -> String {
        match self {
            Tolerant::Str(s) => s.clone(),
            Tolerant::Num(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => i.to_string(),
                (None, Some(u), _) => u.to_string(),
                // f64 Display prints 5.0 as "5".
                (None, None, Some(f)) => f.to_string(),
                (None, None, None) => n.to_string(),
            },
            Tolerant::Absent => String::new(),
        }
    }
}

fn whole(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15).then_some(f as i64)
}

impl fmt::Display for Tolerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized())
    }
}

impl<'de> Deserialize<'de> for Tolerant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TolerantVisitor)
    }
}

struct TolerantVisitor;

impl<'de> Visitor<'de> for TolerantVisitor {
    type Value = Tolerant;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Tolerant, E> {
        Ok(Tolerant::Num(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Tolerant, E> {
        Ok(Tolerant::Num(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Tolerant, E> {
        Ok(Number::from_f64(v).map_or(Tolerant::Absent, Tolerant::Num))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Tolerant, E> {
        Ok(Tolerant::Str(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Tolerant, E> {
        Ok(Tolerant::Str(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Tolerant, E> {
        Ok(Tolerant::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Tolerant, E> {
        Ok(Tolerant::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Tolerant, E> {
        Ok(Tolerant::Absent)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Tolerant, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Tolerant::Absent)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Tolerant, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Tolerant::Absent)
    }
}

impl Serialize for Tolerant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tolerant::Str(s) => serializer.serialize_str(s),
            Tolerant::Num(n) => n.serialize(serializer),
            Tolerant::Absent => serializer.serialize_none(),
        }
    }
}
