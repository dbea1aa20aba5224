//! Wire rows and the validation boundary into [`Fighter`].
//!
//! PostgREST hands back whatever the table holds. Rows are decoded loosely
//! here and then checked once, so nothing past this module sees an
//! unvalidated record.

use client_store_core::TransportError;
use roster_core::{Fighter, FighterClass, FighterId, Stat};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Number;

/// Identifier as stored: an `int8` identity column or a text/uuid column.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl From<RawId> for FighterId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(id) => FighterId::new(id.to_string()),
            RawId::Text(id) => FighterId::new(id),
        }
    }
}

/// One row of the roster table as returned by PostgREST.
///
/// Extra columns (e.g. `created_at`) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct FighterRow {
    pub id: Option<RawId>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub strength: Option<Number>,
    pub speed: Option<Number>,
    pub magic: Option<Number>,
    pub description: Option<String>,
}

impl TryFrom<FighterRow> for Fighter {
    type Error = TransportError;

    /// Missing `id`, `name` or stats reject the row. Out-of-range stats are
    /// clamped, a null description becomes empty, and an unknown class is
    /// kept as [`FighterClass::Other`].
    fn try_from(row: FighterRow) -> Result<Self, Self::Error> {
        let id: FighterId = row
            .id
            .ok_or_else(|| invalid("row has no id"))?
            .into();
        let name = row
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| invalid(format!("fighter {id} has no name")))?;

        let strength = stat(&id, "strength", row.strength)?;
        let speed = stat(&id, "speed", row.speed)?;
        let magic = stat(&id, "magic", row.magic)?;

        Ok(Fighter {
            id,
            name,
            class: FighterClass::from(row.class.unwrap_or_default()),
            stats: roster_core::StatLine::new(strength, speed, magic),
            description: row.description.unwrap_or_default(),
        })
    }
}

/// Decodes a PostgREST JSON array into validated fighters.
///
/// Any invalid row fails the whole body.
pub fn decode_rows(body: &str) -> Result<Vec<Fighter>, TransportError> {
    parse_rows::<FighterRow>(body)?
        .into_iter()
        .map(Fighter::try_from)
        .collect()
}

/// Like [`decode_rows`], but drops invalid rows with a warning.
///
/// Only a body that is not a row array is an error.
pub fn decode_valid_rows(body: &str) -> Result<Vec<Fighter>, TransportError> {
    let fighters = parse_rows::<FighterRow>(body)?
        .into_iter()
        .filter_map(|row| {
            Fighter::try_from(row)
                .inspect_err(|error| tracing::warn!(%error, "skipping invalid fighter row"))
                .ok()
        })
        .collect();
    Ok(fighters)
}

/// Number of rows in a PostgREST JSON array, without validating them.
pub fn count_rows(body: &str) -> Result<usize, TransportError> {
    Ok(parse_rows::<serde_json::Value>(body)?.len())
}

fn parse_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
}

fn stat(id: &FighterId, field: &str, raw: Option<Number>) -> Result<Stat, TransportError> {
    let raw = raw.ok_or_else(|| invalid(format!("fighter {id} has no {field}")))?;

    let (stat, exact) = match raw.as_i64() {
        Some(value) => (Stat::new(value), i64::from(Stat::new(value)) == value),
        None => {
            let value = raw
                .as_f64()
                .ok_or_else(|| invalid(format!("fighter {id} has unreadable {field}")))?;
            let stat = Stat::from_f64(value)
                .map_err(|e| invalid(format!("fighter {id} {field}: {e}")))?;
            // `6.0` is an exact stat; `6.5` or `12.0` is not.
            (stat, f64::from(stat.get()) == value)
        }
    };

    if !exact {
        tracing::warn!(%id, field, raw = %raw, clamped = %stat, "stat outside range; clamped");
    }
    Ok(stat)
}

fn invalid(reason: impl Into<String>) -> TransportError {
    TransportError::InvalidRecord(reason.into())
}
