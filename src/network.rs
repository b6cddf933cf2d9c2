use std::collections::HashMap;

use itertools::Itertools;

use crate::data::*;
use crate::error::NetworkError;
use crate::input::RouteRecord;

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Directed, weighted network of single-letter stops.
///
/// Stops live in an arena and refer to each other by [`StopId`], so cycles in
/// the network never become cycles in ownership.
#[derive(Debug, Default, Clone)]
pub struct Network {
    stops: Vec<Stop>,
    index: HashMap<char, StopId>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the route `source -> destination`, creating either stop if absent.
    ///
    /// A second route between the same ordered pair replaces the first.
    pub fn add_route(&mut self, source: char, destination: char, distance: Distance) {
        let from = self.add_stop(source);
        let to = self.add_stop(destination);
        self.stops[from.0].connect(to, distance);
    }

    pub fn has_stop(&self, name: char) -> bool {
        self.index.contains_key(&name)
    }

    pub fn stop_id(&self, name: char) -> Option<StopId> {
        self.index.get(&name).copied()
    }

    pub fn stop(&self, name: char) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.0])
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sums the route distances along `route`, which must name at least two stops.
    pub fn find_direct_distance(&self, route: &[char]) -> Result<Distance> {
        if route.len() < 2 {
            return Err(NetworkError::InvalidArgument {
                reason: "a route needs at least two stops",
            });
        }

        route
            .iter()
            .tuple_windows()
            .try_fold(0, |total: Distance, (&from, &to)| {
                total
                    .checked_add(self.distance_between(from, to)?)
                    .ok_or(NetworkError::DistanceOverflow { from, to })
            })
    }

    fn distance_between(&self, from: char, to: char) -> Result<Distance> {
        self.stop(from)
            .zip(self.stop_id(to))
            .and_then(|(stop, to_id)| stop.distance_to(to_id))
            .ok_or(NetworkError::PathNotFound { from, to })
    }

    pub(crate) fn resolve(&self, name: char) -> Result<StopId> {
        self.stop_id(name).ok_or(NetworkError::UnknownStop(name))
    }

    pub(crate) fn get(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    fn add_stop(&mut self, name: char) -> StopId {
        if let Some(&id) = self.index.get(&name) {
            return id;
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(name));
        self.index.insert(name, id);
        id
    }
}

impl Extend<RouteRecord> for Network {
    fn extend<T: IntoIterator<Item = RouteRecord>>(&mut self, iter: T) {
        for record in iter {
            self.add_route(record.from, record.to, record.distance);
        }
    }
}

impl FromIterator<RouteRecord> for Network {
    fn from_iter<T: IntoIterator<Item = RouteRecord>>(iter: T) -> Self {
        let mut network = Network::new();
        network.extend(iter);
        network
    }
}
