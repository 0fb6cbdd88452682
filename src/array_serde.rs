// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::{Array, Dim, Element, ElementType, Ix};

/// Version of the serialized array layout.
pub const ARRAY_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
pub fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

fn verify_type<A: Element, E: de::Error>(ty: ElementType) -> Result<(), E> {
    if ty != A::TYPE {
        Err(de::Error::custom(format_args!(
            "element type mismatch: expected {}, found {}",
            A::TYPE,
            ty
        )))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for Dim {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        self.slice().serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Dim {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let shape = Vec::<Ix>::deserialize(deserializer)?;
        Dim::new(&shape).map_err(de::Error::custom)
    }
}

/// **Requires crate feature `"serde"`**
impl<A> Serialize for Array<A>
where
    A: Element + Serialize,
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        let mut state = serializer.serialize_struct("Array", 6)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("type", &A::TYPE)?;
        state.serialize_field("dim", self.raw_dim())?;
        state.serialize_field("res", self.res())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

struct ArrayVisitor<A> {
    _marker: PhantomData<A>,
}

enum ArrayField {
    Version,
    Type,
    Dim,
    Res,
    Name,
    Data,
}

impl<A> ArrayVisitor<A> {
    pub fn new() -> Self {
        ArrayVisitor { _marker: PhantomData }
    }
}

static ARRAY_FIELDS: &[&str] = &["v", "type", "dim", "res", "name", "data"];

/// **Requires crate feature `"serde"`**
///
/// The element type tag and the element count must match; a missing `res`
/// is all ones and a missing `name` is empty.
impl<'de, A> Deserialize<'de> for Array<A>
where
    A: Element + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Array<A>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Array", ARRAY_FIELDS, ArrayVisitor::new())
    }
}

impl<'de> Deserialize<'de> for ArrayField {
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(r#""v", "type", "dim", "res", "name" or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "type" => Ok(ArrayField::Type),
                    "dim" => Ok(ArrayField::Dim),
                    "res" => Ok(ArrayField::Res),
                    "name" => Ok(ArrayField::Name),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"type" => Ok(ArrayField::Type),
                    b"dim" => Ok(ArrayField::Dim),
                    b"res" => Ok(ArrayField::Res),
                    b"name" => Ok(ArrayField::Name),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(
                        &String::from_utf8_lossy(other),
                        ARRAY_FIELDS,
                    )),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

fn assemble<A, E>(dim: Dim, res: Option<Vec<f32>>, name: Option<String>, data: Vec<A>) -> Result<Array<A>, E>
where
    A: Element,
    E: de::Error,
{
    let mut array = Array::from_shape_vec(dim, data)
        .map_err(|_| de::Error::custom("data and dimension must match in size"))?;
    if let Some(res) = res {
        array.set_resolution(&res).map_err(de::Error::custom)?;
    }
    if let Some(name) = name {
        array.set_name(name);
    }
    Ok(array)
}

impl<'de, A> Visitor<'de> for ArrayVisitor<A>
where
    A: Element + Deserialize<'de>,
{
    type Value = Array<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("mrarray representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Array<A>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(0, &self)),
        };
        verify_version(v)?;

        let ty: ElementType = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(1, &self)),
        };
        verify_type::<A, _>(ty)?;

        let dim: Dim = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(2, &self)),
        };

        let res: Vec<f32> = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(3, &self)),
        };

        let name: String = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(4, &self)),
        };

        let data: Vec<A> = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(5, &self)),
        };

        assemble(dim, Some(res), Some(name), data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Array<A>, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut ty: Option<ElementType> = None;
        let mut dim: Option<Dim> = None;
        let mut res: Option<Vec<f32>> = None;
        let mut name: Option<String> = None;
        let mut data: Option<Vec<A>> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::Type => {
                    let val = visitor.next_value()?;
                    verify_type::<A, _>(val)?;
                    ty = Some(val);
                }
                ArrayField::Dim => {
                    dim = Some(visitor.next_value()?);
                }
                ArrayField::Res => {
                    res = Some(visitor.next_value()?);
                }
                ArrayField::Name => {
                    name = Some(visitor.next_value()?);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }
        if ty.is_none() {
            return Err(de::Error::missing_field("type"));
        }
        let dim = match dim {
            Some(dim) => dim,
            None => return Err(de::Error::missing_field("dim")),
        };
        let data = match data {
            Some(data) => data,
            None => return Err(de::Error::missing_field("data")),
        };

        assemble(dim, res, name, data)
    }
}
