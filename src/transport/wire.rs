use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{Sponsor, SponsorsResponse, Status};

/// Boolean as sent by SubGram: JSON bool, `0`/`1`, or their string forms.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportFlag {
    Bool(bool),
    Int(i64),
    String(String),
}

impl TransportFlag {
    fn into_bool<E: DeError>(self) -> Result<bool, E> {
        match self {
            Self::Bool(value) => Ok(value),
            Self::Int(0) => Ok(false),
            Self::Int(1) => Ok(true),
            Self::Int(other) => Err(E::custom(format!("expected 0 or 1, got {other}"))),
            Self::String(text) => match text.trim() {
                "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                other => Err(E::custom(format!("expected boolean flag, got {other:?}"))),
            },
        }
    }
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    TransportFlag::deserialize(deserializer)?.into_bool()
}

pub fn opt_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<TransportFlag>::deserialize(deserializer)?
        .map(TransportFlag::into_bool)
        .transpose()
}

/// Wire shape of sponsor lists. Newer responses nest the list under
/// `additional.sponsors`, which then takes precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct SponsorsJsonResponse {
    status: Status,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    sponsors: Vec<Sponsor>,
    #[serde(default)]
    additional: Option<Value>,
}

impl TryFrom<SponsorsJsonResponse> for SponsorsResponse {
    type Error = serde_json::Error;

    fn try_from(value: SponsorsJsonResponse) -> Result<Self, Self::Error> {
        let sponsors = match value.additional {
            Some(Value::Object(mut additional)) => match additional.remove("sponsors") {
                Some(nested) => serde_json::from_value(nested)?,
                None => value.sponsors,
            },
            _ => value.sponsors,
        };

        Ok(Self {
            status: value.status,
            message: value.message,
            sponsors,
        })
    }
}
