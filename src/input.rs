//! Route input: the inline graph description (`"AB5, BC4"`) and CSV route files.

use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::data::Distance;
use crate::error::InputError;
use crate::network::Network;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub from: char,
    pub to: char,
    pub distance: Distance,
}

impl RouteRecord {
    fn validate(self, source: &str) -> Result<Self, InputError> {
        for name in [self.from, self.to] {
            if !name.is_ascii_uppercase() {
                return Err(InputError::InvalidStopName(name.to_string()));
            }
        }
        if self.distance == 0 {
            return Err(InputError::ZeroDistance(source.to_owned()));
        }
        Ok(self)
    }
}

impl FromStr for RouteRecord {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InputError::MalformedRoute(s.to_owned());

        let mut chars = s.chars();
        let (Some(from), Some(to)) = (chars.next(), chars.next()) else {
            return Err(malformed());
        };

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let distance = digits.parse().map_err(|_| malformed())?;

        RouteRecord { from, to, distance }.validate(s)
    }
}

/// Parses a comma separated list of `<source><destination><distance>` triples.
pub fn parse_routes(description: &str) -> Result<Vec<RouteRecord>, InputError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(InputError::Empty);
    }

    description
        .split(',')
        .map(|token| token.trim().parse())
        .collect()
}

/// Reads routes from a CSV file with a `from,to,distance` header.
pub fn read_routes_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RouteRecord>, InputError> {
    let path = path.as_ref();
    debug!("Reading routes from {}", path.display());

    let records = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .deserialize::<RouteRecord>()
        .map(|parse_result| {
            let record = parse_result?;
            record.validate(&format!("{}{}{}", record.from, record.to, record.distance))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(InputError::Empty);
    }

    debug!("Read {} routes from {}", records.len(), path.display());
    Ok(records)
}

impl FromStr for Network {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_routes(s)?.into_iter().collect())
    }
}
