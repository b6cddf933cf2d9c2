use crate::data::*;
use crate::error::NetworkError;
use crate::network::{Network, Result};

#[derive(Debug, Clone, Copy, Default)]
struct Label {
    distance: Option<Distance>,
    previous: Option<StopId>,
    visited: bool,
}

impl Network {
    /// Distance of the cheapest walk from `start` to `end`.
    ///
    /// When `start == end` this is the cheapest cycle of at least one route.
    pub fn shortest_route(&self, start: char, end: char) -> Result<Distance> {
        Ok(self.shortest_path(start, end)?.distance)
    }

    /// Cheapest walk from `start` to `end`, found with Dijkstra's algorithm.
    pub fn shortest_path(&self, start: char, end: char) -> Result<Trip> {
        let source = self.resolve(start)?;
        let target = self.resolve(end)?;

        let mut labels = vec![Label::default(); self.len()];
        labels[source.0].distance = Some(0);
        let mut skip_source = source == target;

        while let Some((current, base)) = Self::closest_unvisited(&labels) {
            if skip_source && current == source {
                // The zero-length seed must not satisfy a same-stop query, so the
                // source stays open until a route leads back into it.
                skip_source = false;
                labels[current.0].distance = None;
            } else if current == target {
                let stops = self.trace_back(&labels, source, target);
                let distance = self.find_direct_distance(&stops)?;
                return Ok(Trip { stops, distance });
            } else {
                labels[current.0].visited = true;
            }

            for route in self.get(current).routes() {
                let label = &mut labels[route.to.0];
                if label.visited {
                    continue;
                }

                let candidate = base.saturating_add(route.distance);
                if label.distance.map_or(true, |known| candidate < known) {
                    label.distance = Some(candidate);
                    label.previous = Some(current);
                }
            }
        }

        Err(NetworkError::PathNotFound { from: start, to: end })
    }

    /// First unvisited stop, in network order, with the smallest finite distance.
    fn closest_unvisited(labels: &[Label]) -> Option<(StopId, Distance)> {
        labels
            .iter()
            .enumerate()
            .filter(|(_, label)| !label.visited)
            .filter_map(|(index, label)| label.distance.map(|distance| (index, distance)))
            .min_by_key(|&(_, distance)| distance)
            .map(|(index, distance)| (StopId(index), distance))
    }

    /// Follows predecessors from `target` back to `source`, always taking at least one step.
    fn trace_back(&self, labels: &[Label], source: StopId, target: StopId) -> Vec<char> {
        let mut chain = vec![self.get(target).name];
        let mut current = target;

        while let Some(previous) = labels[current.0].previous {
            chain.push(self.get(previous).name);
            if previous == source {
                break;
            }
            current = previous;
        }

        chain.reverse();
        chain
    }
}
