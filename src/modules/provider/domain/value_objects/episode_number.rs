use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Episode number as reported upstream
///
/// Upstreams disagree on the JSON type (integer, float, numeric string), so the
/// value is held as `f64` and whole numbers serialize back as integers.
#[derive(Debug, Clone, Copy)]
pub struct EpisodeNumber(f64);

impl EpisodeNumber {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_whole(&self) -> bool {
        self.0.fract() == 0.0 && self.0.is_finite()
    }

    /// Parse a number from its textual form, e.g. a metadata map key
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()).map(Self)
    }

    /// `deserialize_with` helper: an unusable number (`"Special"`, `null`,
    /// missing) decodes as `None` instead of failing the enclosing record
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(EpisodeNumber::deserialize(&raw).ok())
    }
}

impl PartialEq for EpisodeNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EpisodeNumber {}

impl PartialOrd for EpisodeNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EpisodeNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for EpisodeNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // -0.0 and 0.0 must land in the same bucket
        let normalized = if self.0 == 0.0 { 0.0 } else { self.0 };
        normalized.to_bits().hash(state);
    }
}

impl From<u32> for EpisodeNumber {
    fn from(value: u32) -> Self {
        Self(value as f64)
    }
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for EpisodeNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for EpisodeNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumberVisitor;

        impl<'de> Visitor<'de> for NumberVisitor {
            type Value = EpisodeNumber;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an episode number or numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(EpisodeNumber(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(EpisodeNumber(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(EpisodeNumber(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                EpisodeNumber::parse(v)
                    .ok_or_else(|| E::custom(format!("invalid episode number: {}", v)))
            }
        }

        deserializer.deserialize_any(NumberVisitor)
    }
}
