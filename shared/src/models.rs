use serde::{Serialize, Deserialize, Deserializer};
use std::cmp::Ordering;
use std::fmt;
use time::OffsetDateTime;
use uuid::Uuid;

/// Identifier of a product as it travels through the vote store.
///
/// The store may hand back numbers or strings, so both are accepted and kept
/// in their textual form. Canonical non-negative integers order numerically
/// ahead of every other identifier, which order lexically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn as_index(&self) -> Option<u64> {
        self.0
            .parse::<u64>()
            .ok()
            .filter(|n| n.to_string() == self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Ord for ProductId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_index(), other.as_index()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for ProductId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Integer(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Integer(n) => Self(n.to_string()),
            Raw::Float(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub title: String,
    pub price: f64,
    #[serde(rename = "imgUrl")]
    pub img_url: String,
    #[serde(rename = "productURL")]
    pub product_url: String,
    #[serde(rename = "category_id", alias = "categoryId", default)]
    pub category_id: Option<ProductId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub product_id: ProductId,
}

impl Vote {
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self { product_id: product_id.into() }
    }
}

/// Body of a `recordVote` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewVote {
    #[serde(default)]
    pub product_id: Option<ProductId>,
}

/// A vote as the store keeps it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub id: Uuid,
    pub product_id: String,
    pub cast_at: OffsetDateTime,
}

impl From<VoteRecord> for Vote {
    fn from(record: VoteRecord) -> Self {
        Self { product_id: ProductId(record.product_id) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteReceipt {
    pub status: bool,
    pub message: String,
}

impl VoteReceipt {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self { status: true, message: message.into() }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { status: false, message: message.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteListing {
    pub status: bool,
    #[serde(default)]
    pub data: Vec<Vote>,
}

impl VoteListing {
    pub fn unavailable() -> Self {
        Self { status: false, data: Vec::new() }
    }
}

impl FromIterator<Vote> for VoteListing {
    fn from_iter<I: IntoIterator<Item = Vote>>(iter: I) -> Self {
        Self { status: true, data: iter.into_iter().collect() }
    }
}
