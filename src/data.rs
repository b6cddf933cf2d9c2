use std::fmt;

use itertools::Itertools;

pub type Distance = u64;

/// Index of a [`Stop`] inside the [`Network`](crate::network::Network) that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

impl StopId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed, weighted edge leaving a [`Stop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub to: StopId,
    pub distance: Distance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub name: char,
    pub(crate) routes: Vec<Route>,
}

impl Stop {
    pub(crate) fn new(name: char) -> Self {
        Self {
            name,
            routes: Vec::new(),
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn distance_to(&self, to: StopId) -> Option<Distance> {
        self.routes
            .iter()
            .find(|route| route.to == to)
            .map(|route| route.distance)
    }

    /// Records `distance` for the edge to `to`, replacing any previous weight.
    pub(crate) fn connect(&mut self, to: StopId, distance: Distance) {
        match self.routes.iter_mut().find(|route| route.to == to) {
            Some(route) => route.distance = distance,
            None => self.routes.push(Route { to, distance }),
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.routes.len() {
            1 => write!(f, "Stop {}: 1 route", self.name),
            n => write!(f, "Stop {}: {} routes", self.name, n),
        }
    }
}

/// A walk through the network together with its total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub stops: Vec<char>,
    pub distance: Distance,
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.stops.iter().join("-"), self.distance)
    }
}
