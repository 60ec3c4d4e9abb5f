//! Cat — the single record type managed by the API.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::id::CatId;

/// A cat record.
///
/// Only `name` is always emitted in JSON; `id`, `birthDate` and `color` are
/// left out entirely when empty. None of the fields is validated beyond being
/// a JSON string.
///
/// Decoding is lenient: keys match their field case-insensitively, a `null`
/// value leaves the field empty, and unknown keys are skipped. When a key
/// appears twice the last non-null value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cat {
    pub name: String,
    /// Assigned by the store at creation. Client-supplied values are discarded.
    #[serde(skip_serializing_if = "is_blank_id")]
    pub id: Option<CatId>,
    #[serde(rename = "birthDate", skip_serializing_if = "String::is_empty")]
    pub birth_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
}

#[allow(clippy::ref_option)]
fn is_blank_id(id: &Option<CatId>) -> bool {
    id.as_ref().is_none_or(CatId::is_empty)
}

enum Field {
    Name,
    Id,
    BirthDate,
    Color,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        [
            ("name", Self::Name),
            ("id", Self::Id),
            ("birthDate", Self::BirthDate),
            ("color", Self::Color),
        ]
        .into_iter()
        .find_map(|(name, field)| key.eq_ignore_ascii_case(name).then_some(field))
    }
}

struct CatVisitor;

impl<'de> Visitor<'de> for CatVisitor {
    type Value = Cat;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a cat object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Cat, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut cat = Cat::default();
        while let Some(key) = map.next_key::<String>()? {
            let Some(field) = Field::from_key(&key) else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            let Some(value) = map.next_value::<Option<String>>()? else {
                continue;
            };
            match field {
                Field::Name => cat.name = value,
                Field::Id => cat.id = Some(CatId::new(value)),
                Field::BirthDate => cat.birth_date = value,
                Field::Color => cat.color = value,
            }
        }
        Ok(cat)
    }
}

impl<'de> Deserialize<'de> for Cat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatVisitor)
    }
}

impl Cat {
    /// Create a builder for constructing a [`Cat`].
    #[must_use]
    pub fn builder() -> CatBuilder {
        CatBuilder::default()
    }

    /// Return a copy of this record stamped with `id`.
    #[must_use]
    pub fn with_id(mut self, id: CatId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Step-by-step builder for [`Cat`].
#[derive(Debug, Default)]
pub struct CatBuilder {
    id: Option<CatId>,
    name: Option<String>,
    birth_date: Option<String>,
    color: Option<String>,
}

impl CatBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<CatId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = Some(birth_date.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Consume the builder and return a [`Cat`]. Missing fields stay empty.
    #[must_use]
    pub fn build(self) -> Cat {
        Cat {
            name: self.name.unwrap_or_default(),
            id: self.id,
            birth_date: self.birth_date.unwrap_or_default(),
            color: self.color.unwrap_or_default(),
        }
    }
}
