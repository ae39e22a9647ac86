//! Human-readable record timestamps.
//!
//! Ledger records are stamped with `DateTime<Utc>` and serialized in the
//! day-first form `d.m.YYYY HH:MM:SS`, e.g. `16.10.2026 14:05:09`.
//! Sub-second precision is not kept in the serialized form.

use chrono::{DateTime, NaiveDateTime, ParseError, TimeZone, Utc};

const FORMAT: &str = "%-d.%-m.%Y %H:%M:%S";

/// Renders a timestamp as `d.m.YYYY HH:MM:SS`.
pub fn humanize(ts: &DateTime<Utc>) -> String {
    ts.format(FORMAT).to_string()
}

/// Parses the output of [`humanize`].
pub fn parse_humanized(value: &str) -> Result<DateTime<Utc>, ParseError> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Serde adapter for `#[serde(with = "humanized")]`.
pub(crate) mod humanized {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::humanize(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_humanized(&value).map_err(de::Error::custom)
    }

    /// The same adapter for optional timestamps.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            ts: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => serializer.serialize_some(&super::super::humanize(ts)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|value| super::super::parse_humanized(&value).map_err(de::Error::custom))
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(humanize(&ts), "7.3.2026 09:05:01");
    }

    #[test]
    fn test_parse_humanized() {
        let ts = Utc.with_ymd_and_hms(2026, 12, 24, 18, 0, 0).unwrap();
        assert_eq!(parse_humanized(&humanize(&ts)).unwrap(), ts);
        assert_eq!(parse_humanized("7.3.2026 09:05:01").unwrap().to_string(), "2026-03-07 09:05:01 UTC");
        assert!(parse_humanized("2026-03-07T09:05:01Z").is_err());
    }
}
