use {
    crate::models::{CpiImpact, PercentRange},
    serde::{
        Deserialize, Deserializer, Serialize, Serializer,
        de::{self, MapAccess, Visitor},
        ser::SerializeMap,
    },
    std::{collections::HashSet, fmt},
    strum_macros::Display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

/// One observed market reaction for an index or ETF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketImpact {
    pub index: String,
    pub movement: PercentRange,
    pub direction: Direction,
    pub timing: String,
    pub volume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub title: String,
    pub impacts: Vec<MarketImpact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpi_impacts: Option<CpiImpact>,
}

/// A range in the document whose minimum exceeds its maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeAnomaly {
    pub category: String,
    pub field: String,
    pub range: PercentRange,
}

impl fmt::Display for RangeAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {}: min {} > max {}",
            self.category, self.field, self.range.min, self.range.max
        )
    }
}

/// Category key -> record, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegulatoryDataset {
    categories: Vec<(String, CategoryRecord)>,
}

impl RegulatoryDataset {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn get(&self, key: &str) -> Option<&CategoryRecord> {
        self.categories
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryRecord)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Every inverted range in the document. Nothing is corrected.
    pub fn inverted_ranges(&self) -> Vec<RangeAnomaly> {
        let mut found = Vec::new();
        for (key, record) in self.iter() {
            let mut check = |field: String, range: PercentRange| {
                if range.is_inverted() {
                    found.push(RangeAnomaly {
                        category: key.to_string(),
                        field,
                        range,
                    });
                }
            };
            for impact in &record.impacts {
                check(format!("{} movement", impact.index), impact.movement);
            }
            if let Some(cpi) = &record.cpi_impacts {
                for sector in &cpi.primary_sectors {
                    check(format!("{} range", sector.name), sector.range);
                }
                check("net contribution".to_string(), cpi.net_contribution);
            }
        }
        found
    }
}

// Plain JSON object on the wire (or `null`). Key order is kept for the selector.
impl<'de> Deserialize<'de> for RegulatoryDataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = RegulatoryDataset;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category keys to category records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut seen = HashSet::new();
                let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, record)) = map.next_entry::<String, CategoryRecord>()? {
                    if !seen.insert(key.clone()) {
                        return Err(de::Error::custom(format!(
                            "duplicate category key `{}`",
                            key
                        )));
                    }
                    categories.push((key, record));
                }
                Ok(RegulatoryDataset { categories })
            }

            // A `null` document carries no categories.
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RegulatoryDataset::default())
            }
        }

        deserializer.deserialize_any(DatasetVisitor)
    }
}

impl Serialize for RegulatoryDataset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (key, record) in &self.categories {
            map.serialize_entry(key, record)?;
        }
        map.end()
    }
}
