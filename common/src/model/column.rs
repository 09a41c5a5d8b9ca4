use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Describes one column discovered in the header of an uploaded CSV file,
/// together with the classification the user assigned to it.
///
/// A list of descriptors, `Vec<ColumnDescriptor>`, is produced on the frontend
/// as soon as a file is selected (one entry per header token, classification
/// unset). The user then fills in `data_type` and `sensitivity_type` in the
/// metadata grid, and the list is serialized as the `column_metadata` part of
/// the multipart request sent to the anonymization service.
///
/// On the wire the keys are camelCase (`name`, `dataType`, `sensitivityType`)
/// and an unset classification is sent as the empty string.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Header token exactly as it appears in the file. Unique within a list
    /// and used as the lookup key for edits, so it never changes.
    pub name: String,
    /// How the service should interpret the values of this column.
    #[serde(default, with = "unset")]
    pub data_type: Option<DataType>,
    /// How the service should treat the column when anonymizing.
    #[serde(default, with = "unset")]
    pub sensitivity_type: Option<SensitivityType>,
}

impl ColumnDescriptor {
    /// Creates a descriptor with both classifications unset.
    pub fn unclassified(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
            sensitivity_type: None,
        }
    }

    pub fn is_classified(&self) -> bool {
        self.data_type.is_some() && self.sensitivity_type.is_some()
    }
}

/// Common surface of the two classification enums, used by the grid to list
/// options and by the `unset` codec.
pub trait Classification: Copy + FromStr + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Date,
    Number,
    String,
}

impl Classification for DataType {
    const ALL: &'static [Self] = &[DataType::Date, DataType::Number, DataType::String];

    fn as_str(&self) -> &'static str {
        match self {
            DataType::Date => "date",
            DataType::Number => "number",
            DataType::String => "string",
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SensitivityType {
    Identifier,
    Insensitive,
    QuasiIdentifier,
    Sensitive,
}

impl Classification for SensitivityType {
    const ALL: &'static [Self] = &[
        SensitivityType::Identifier,
        SensitivityType::Insensitive,
        SensitivityType::QuasiIdentifier,
        SensitivityType::Sensitive,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SensitivityType::Identifier => "identifier",
            SensitivityType::Insensitive => "insensitive",
            SensitivityType::QuasiIdentifier => "quasi-identifier",
            SensitivityType::Sensitive => "sensitive",
        }
    }
}

/// Returned when a string is not one of the known classification values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownClassification {
    pub kind: &'static str,
    pub value: String,
}

fn parse_classification<T: Classification>(
    kind: &'static str,
    value: &str,
) -> Result<T, UnknownClassification> {
    T::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == value)
        .ok_or_else(|| UnknownClassification {
            kind,
            value: value.to_string(),
        })
}

impl FromStr for DataType {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_classification("data type", s)
    }
}

impl FromStr for SensitivityType {
    type Err = UnknownClassification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_classification("sensitivity type", s)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SensitivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serde codec for optional classifications: `None` <-> `""`.
mod unset {
    use super::Classification;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt::Display;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Classification,
        S: Serializer,
    {
        serializer.serialize_str(value.as_ref().map(|v| v.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Classification,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse::<T>().map(Some).map_err(D::Error::custom),
        }
    }
}
