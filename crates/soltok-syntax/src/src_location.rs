//! Decoding of solc `src` attributes (`"start:length:sourceIndex"`).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use text_size::{TextRange, TextSize};

/// Parses a `src` value into a byte range.
///
/// Synthetic nodes carry a negative start or length (`"-1:-1:-1"`) and decode
/// to `None`.
pub fn parse_src(raw: &str) -> Result<Option<TextRange>, String> {
    let mut parts = raw.split(':');
    let (Some(start), Some(length)) = (parts.next(), parts.next()) else {
        return Err(format!("malformed src location `{raw}`"));
    };

    let start: i64 = start.parse().map_err(|_| format!("malformed src start in `{raw}`"))?;
    let length: i64 = length.parse().map_err(|_| format!("malformed src length in `{raw}`"))?;
    if start < 0 || length < 0 {
        return Ok(None);
    }

    let start = u32::try_from(start).map_err(|_| format!("src start out of range in `{raw}`"))?;
    let length = u32::try_from(length).map_err(|_| format!("src length out of range in `{raw}`"))?;
    start
        .checked_add(length)
        .ok_or_else(|| format!("src end overflows in `{raw}`"))?;

    Ok(Some(TextRange::at(TextSize::from(start), TextSize::from(length))))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<TextRange>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_src(&raw).map_err(D::Error::custom),
        None => Ok(None),
    }
}

pub(crate) fn deserialize_many<'de, D>(deserializer: D) -> Result<Vec<Option<TextRange>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|raw| parse_src(raw).map_err(D::Error::custom))
        .collect()
}

/// Splits a dotted name into per-segment ranges.
///
/// Explicit `locations` win when there is one per segment; otherwise the
/// segments are laid out contiguously from the start of `range`.
pub(crate) fn path_segments<'a>(
    name: &'a str,
    range: Option<TextRange>,
    locations: &[Option<TextRange>],
) -> Vec<(TextRange, &'a str)> {
    let names = name.split('.').collect::<Vec<_>>();

    if locations.len() == names.len() && locations.iter().all(Option::is_some) {
        return locations.iter().flatten().copied().zip(names).collect();
    }

    let Some(range) = range else { return Vec::new() };
    if TextSize::of(name) > range.len() {
        return Vec::new();
    }

    let mut offset = range.start();
    let mut segments = Vec::with_capacity(names.len());
    for segment in names {
        let len = TextSize::of(segment);
        segments.push((TextRange::at(offset, len), segment));
        offset += len + TextSize::of('.');
    }
    segments
}
