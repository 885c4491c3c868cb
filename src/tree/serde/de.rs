use core::iter;

use serde::de::value::BorrowedStrDeserializer;
use serde::de::{self, IntoDeserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserializer;

use crate::tree::serde::Error;
use crate::tree::{mapping, Document, Mapping, Sequence, Value};

impl<'de, 'a: 'de> IntoDeserializer<'de, Error> for &'a Document {
    type Deserializer = Value<'de>;

    #[inline]
    fn into_deserializer(self) -> Self::Deserializer {
        Value::Mapping(self.root())
    }
}

impl<'de, 'a: 'de> IntoDeserializer<'de, Error> for Value<'a> {
    type Deserializer = Value<'de>;

    #[inline]
    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de, 'a: 'de> IntoDeserializer<'de, Error> for Mapping<'a> {
    type Deserializer = Value<'de>;

    #[inline]
    fn into_deserializer(self) -> Self::Deserializer {
        Value::Mapping(self)
    }
}

impl<'de, 'a: 'de> IntoDeserializer<'de, Error> for Sequence<'a> {
    type Deserializer = Value<'de>;

    #[inline]
    fn into_deserializer(self) -> Self::Deserializer {
        Value::Sequence(self)
    }
}

/// [`Deserializer`] implementation for [`Value`].
///
/// This allows any part of a [`Document`] to be deserialized into a
/// compatible type.
impl<'de> Deserializer<'de> for Value<'de> {
    type Error = Error;

    #[inline]
    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Mapping(mapping) => visitor.visit_map(MappingIter::new(mapping.iter())),
            Value::Sequence(sequence) => visitor.visit_seq(ListIter::new(sequence.iter())),
            Value::Integer(value) => visitor.visit_i64(value),
            Value::Float(value) => visitor.visit_f64(value),
            Value::String(string) => visitor.visit_borrowed_str(string),
        }
    }

    #[inline]
    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.as_str().and_then(|s| s.parse::<bool>().ok()) {
            Some(value) => visitor.visit_bool(value),
            None => self.deserialize_any(visitor),
        }
    }

    #[inline]
    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Integer(value) => visitor.visit_str(itoa::Buffer::new().format(value)),
            Value::Float(value) => visitor.visit_str(ryu::Buffer::new().format(value)),
            value => value.deserialize_any(visitor),
        }
    }

    #[inline]
    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    #[inline]
    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    #[inline]
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    #[inline]
    fn deserialize_newtype_struct<V>(
        self,
        _: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    #[inline]
    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Sequence(sequence) => visitor.visit_seq(ListIter::new(sequence.iter())),
            value => visitor.visit_seq(ListIter::new(iter::once(value))),
        }
    }

    #[inline]
    fn deserialize_tuple<V>(self, _: usize, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    #[inline]
    fn deserialize_tuple_struct<V>(
        self,
        _: &'static str,
        _: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    #[inline]
    fn deserialize_enum<V>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(string) => visitor.visit_enum(BorrowedStrDeserializer::new(string)),
            value => value.deserialize_any(visitor),
        }
    }

    serde::forward_to_deserialize_any! {
        i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 bytes byte_buf unit
        unit_struct map struct identifier ignored_any
    }
}

struct MappingIter<'de> {
    iter: mapping::Iter<'de>,
    value: Option<Value<'de>>,
}

impl<'de> MappingIter<'de> {
    #[inline]
    fn new(iter: mapping::Iter<'de>) -> Self {
        Self { iter, value: None }
    }
}

impl<'de> MapAccess<'de> for MappingIter<'de> {
    type Error = Error;

    #[inline]
    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: de::DeserializeSeed<'de>,
    {
        let Some((key, value)) = self.iter.next() else {
            return Ok(None);
        };

        self.value = Some(value);
        seed.deserialize(BorrowedStrDeserializer::new(key)).map(Some)
    }

    #[inline]
    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: de::DeserializeSeed<'de>,
    {
        let Some(value) = self.value.take() else {
            return Err(Error::MissingValue);
        };

        seed.deserialize(value)
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct ListIter<I> {
    iter: I,
}

impl<I> ListIter<I> {
    #[inline]
    fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<'de, I> SeqAccess<'de> for ListIter<I>
where
    I: ExactSizeIterator<Item = Value<'de>>,
{
    type Error = Error;

    #[inline]
    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: de::DeserializeSeed<'de>,
    {
        let Some(value) = self.iter.next() else {
            return Ok(None);
        };

        Ok(Some(seed.deserialize(value)?))
    }

    #[inline]
    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

#[cfg(test)]
mod tests {
    use serde::de::{IgnoredAny, MapAccess};

    use super::MappingIter;
    use crate::node::NodeMap;
    use crate::tree::serde::Error;
    use crate::tree::Document;

    #[test]
    fn value_before_key() {
        let mut root = NodeMap::new();
        root.insert("size_x", 512);

        let doc = Document::new(root);
        let mut access = MappingIter::new(doc.root().iter());

        assert!(matches!(
            access.next_value::<IgnoredAny>(),
            Err(Error::MissingValue)
        ));
        assert!(matches!(access.next_key::<&str>(), Ok(Some("size_x"))));
        assert!(access.next_value::<IgnoredAny>().is_ok());
        assert!(matches!(access.next_key::<&str>(), Ok(None)));
    }
}
