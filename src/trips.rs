//! Trip counting over walks.
//!
//! Every distinct walk is enumerated, revisits included, so these searches are
//! exponential in the bound. Walks cannot be memoised by stop because two walks
//! reaching the same stop with the same budget are still counted separately.

use crate::data::*;
use crate::network::{Network, Result};

impl Network {
    /// Counts walks from `start` to `end` using between 1 and `max_stops` routes.
    pub fn num_trips_with_max_n_stops(
        &self,
        max_stops: usize,
        start: char,
        end: char,
    ) -> Result<usize> {
        self.count_walks(
            start,
            end,
            0usize,
            |stops, _| (stops < max_stops).then_some(stops + 1),
            |_| true,
        )
    }

    /// Counts walks from `start` to `end` using exactly `stops` routes.
    pub fn num_trips_with_exactly_n_stops(
        &self,
        stops: usize,
        start: char,
        end: char,
    ) -> Result<usize> {
        self.count_walks(
            start,
            end,
            0usize,
            |taken, _| (taken < stops).then_some(taken + 1),
            |taken| taken == stops,
        )
    }

    /// Counts walks from `start` to `end` whose total distance is below `max_distance`.
    ///
    /// Routes of zero distance that form a cycle make this search unbounded.
    pub fn num_trips_with_distance_less_than_n(
        &self,
        max_distance: Distance,
        start: char,
        end: char,
    ) -> Result<usize> {
        self.count_walks(
            start,
            end,
            0 as Distance,
            |travelled, distance| {
                travelled
                    .checked_add(distance)
                    .filter(|&total| total < max_distance)
            },
            |_| true,
        )
    }

    /// Depth-first enumeration of walks from `start`.
    ///
    /// `extend` maps the budget state of a walk and the next route's distance to
    /// the state after taking it, or `None` when the route is over budget.
    /// Arriving at `end` counts when `counts` accepts the new state, and the walk
    /// carries on past `end` either way.
    fn count_walks<S, E, C>(
        &self,
        start: char,
        end: char,
        initial: S,
        extend: E,
        counts: C,
    ) -> Result<usize>
    where
        S: Copy,
        E: Fn(S, Distance) -> Option<S>,
        C: Fn(S) -> bool,
    {
        let start = self.resolve(start)?;
        let end = self.stop_id(end);

        let mut count = 0;
        let mut stack = vec![(start, initial)];

        while let Some((current, state)) = stack.pop() {
            for route in self.get(current).routes() {
                let Some(next) = extend(state, route.distance) else {
                    continue;
                };

                if Some(route.to) == end && counts(next) {
                    count += 1;
                }
                stack.push((route.to, next));
            }
        }

        Ok(count)
    }
}
