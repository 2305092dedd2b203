// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`SimpleVector`](crate::SimpleVector).
//!
//! - **Serialize**: as a sequence of the live elements (length `size`).
//! - **Deserialize**: from any sequence. The sequence's size hint, when
//!   present, is reserved up front; elements are appended with `push_back`.
//!
//! Deserialization requires `T: Default`, because every slot of the backing
//! buffer holds a value.

// Crate imports
use crate::{reserve::ReserveProxy, vec::SimpleVector};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Default,
{
    type Value = SimpleVector<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        // Size hints are capped at 4096 slots; growth covers the rest.
        let hint = a.size_hint().unwrap_or(0).min(4096);
        let mut out = SimpleVector::with_reserve(ReserveProxy::new(hint));
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for SimpleVector<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::SimpleVector;

    #[test]
    fn test_serde_roundtrip_json() {
        let v = SimpleVector::from([1, 2, 3]);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: SimpleVector<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, [1, 2, 3]);
    }

    #[test]
    fn test_serialize_skips_placeholders() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.pop_back();
        v.reserve(8);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2]");
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: SimpleVector<i32> = SimpleVector::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: SimpleVector<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_vecvisitor_expecting_message() {
        let err = serde_json::from_str::<SimpleVector<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a sequence"), "unexpected error message: {msg}");
    }
}
