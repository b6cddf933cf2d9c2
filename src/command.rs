//! Typed console commands.

use std::fmt::Display;
use std::str::FromStr;

use crate::data::Distance;
use crate::error::{CommandError, NetworkError};
use crate::network::Network;

pub const HELP: &str = "
    dp [PATH]                               -- Finds the distance of a direct path. EX: dp ABC follows A, B then C.
    maxstops [STOPS] [START] [END]          -- Finds the number of trips with at most [STOPS] stops. EX: maxstops 3 C C
    exactstops [STOPS] [START] [END]        -- Finds the number of trips with exactly [STOPS] stops. EX: exactstops 4 A C
    shortest [START] [END]                  -- Finds the length of the shortest route. EX: shortest A C
    shorterthan [DISTANCE] [START] [END]    -- Finds the number of trips shorter than [DISTANCE]. EX: shorterthan 30 C C
    help                                    -- Shows this help menu.
    q                                       -- Exits the application.
";

pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

pub const COMMAND_NOT_RECOGNIZED: &str =
    "Command not recognized or in wrong format.  Enter 'help' to view a list of commands.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    DirectPath(Vec<char>),
    MaxStops {
        stops: usize,
        start: char,
        end: char,
    },
    ExactStops {
        stops: usize,
        start: char,
        end: char,
    },
    Shortest {
        start: char,
        end: char,
    },
    ShorterThan {
        distance: Distance,
        start: char,
        end: char,
    },
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (keyword, arguments) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let arguments = arguments.trim();

        match keyword.to_ascii_lowercase().as_str() {
            "dp" => parse_path(arguments).map(Command::DirectPath),
            "maxstops" => {
                let (stops, start, end) = parse_bounded("maxstops", arguments)?;
                Ok(Command::MaxStops { stops, start, end })
            }
            "exactstops" => {
                let (stops, start, end) = parse_bounded("exactstops", arguments)?;
                Ok(Command::ExactStops { stops, start, end })
            }
            "shorterthan" => {
                let (distance, start, end) = parse_bounded("shorterthan", arguments)?;
                Ok(Command::ShorterThan { distance, start, end })
            }
            "shortest" => match arguments.split_whitespace().collect::<Vec<_>>().as_slice() {
                [start, end] => Ok(Command::Shortest {
                    start: parse_stop("shortest", arguments, start)?,
                    end: parse_stop("shortest", arguments, end)?,
                }),
                _ => Err(malformed("shortest", arguments)),
            },
            "help" if arguments.is_empty() => Ok(Command::Help),
            "q" if arguments.is_empty() => Ok(Command::Quit),
            _ => Err(CommandError::UnknownCommand(s.to_owned())),
        }
    }
}

impl Command {
    /// Runs the query against `network` and renders the line to show the user.
    ///
    /// Returns `None` for commands that produce no query output.
    pub fn execute(&self, network: &Network) -> Option<String> {
        let line = match *self {
            Command::DirectPath(ref path) => render(network.find_direct_distance(path)),
            Command::MaxStops { stops, start, end } => {
                render(network.num_trips_with_max_n_stops(stops, start, end))
            }
            Command::ExactStops { stops, start, end } => {
                render(network.num_trips_with_exactly_n_stops(stops, start, end))
            }
            Command::Shortest { start, end } => render(network.shortest_route(start, end)),
            Command::ShorterThan {
                distance,
                start,
                end,
            } => render(network.num_trips_with_distance_less_than_n(distance, start, end)),
            Command::Help => HELP.to_owned(),
            Command::Quit => return None,
        };

        Some(line)
    }
}

fn render<T: Display>(result: Result<T, NetworkError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(NetworkError::PathNotFound { .. }) => NO_SUCH_ROUTE.to_owned(),
        Err(_) => COMMAND_NOT_RECOGNIZED.to_owned(),
    }
}

fn malformed(command: &'static str, arguments: &str) -> CommandError {
    CommandError::MalformedArguments {
        command,
        arguments: arguments.to_owned(),
    }
}

fn parse_stop(command: &'static str, arguments: &str, token: &str) -> Result<char, CommandError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(name), None) if name.is_ascii_uppercase() => Ok(name),
        _ => Err(malformed(command, arguments)),
    }
}

fn parse_path(arguments: &str) -> Result<Vec<char>, CommandError> {
    if arguments.is_empty() || !arguments.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(malformed("dp", arguments));
    }
    Ok(arguments.chars().collect())
}

/// Parses `<bound> <start> <end>`.
fn parse_bounded<N: FromStr>(
    command: &'static str,
    arguments: &str,
) -> Result<(N, char, char), CommandError> {
    match arguments.split_whitespace().collect::<Vec<_>>().as_slice() {
        [bound, start, end] if bound.bytes().all(|b| b.is_ascii_digit()) => Ok((
            bound.parse().map_err(|_| malformed(command, arguments))?,
            parse_stop(command, arguments, start)?,
            parse_stop(command, arguments, end)?,
        )),
        _ => Err(malformed(command, arguments)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            "dp ABC".parse::<Command>(),
            Ok(Command::DirectPath(vec!['A', 'B', 'C']))
        );
        assert_eq!(
            "maxstops 3 C C".parse::<Command>(),
            Ok(Command::MaxStops {
                stops: 3,
                start: 'C',
                end: 'C',
            })
        );
        assert_eq!(
            "ExactStops 4 A C".parse::<Command>(),
            Ok(Command::ExactStops {
                stops: 4,
                start: 'A',
                end: 'C',
            })
        );
        assert_eq!(
            "shortest A C".parse::<Command>(),
            Ok(Command::Shortest {
                start: 'A',
                end: 'C',
            })
        );
        assert_eq!(
            "  shorterthan 30   C C ".parse::<Command>(),
            Ok(Command::ShorterThan {
                distance: 30,
                start: 'C',
                end: 'C',
            })
        );
        assert_eq!("help".parse::<Command>(), Ok(Command::Help));
        assert_eq!("Q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert_eq!(
            "fly A B".parse::<Command>(),
            Err(CommandError::UnknownCommand("fly A B".into()))
        );
        assert!(matches!(
            "dp A-B".parse::<Command>(),
            Err(CommandError::MalformedArguments { command: "dp", .. })
        ));
        assert!(matches!(
            "maxstops -1 A B".parse::<Command>(),
            Err(CommandError::MalformedArguments { command: "maxstops", .. })
        ));
        assert!(matches!(
            "shortest AB C".parse::<Command>(),
            Err(CommandError::MalformedArguments { command: "shortest", .. })
        ));
        assert!(matches!(
            "shorterthan 30 C".parse::<Command>(),
            Err(CommandError::MalformedArguments { command: "shorterthan", .. })
        ));
        assert!("q now".parse::<Command>().is_err());
    }

    #[test]
    fn renders_query_results() {
        let network: Network = "AB5, BC4, CA1".parse().unwrap();

        assert_eq!(
            Command::DirectPath(vec!['A', 'B', 'C']).execute(&network),
            Some("9".to_owned())
        );
        assert_eq!(
            Command::DirectPath(vec!['A', 'C']).execute(&network),
            Some(NO_SUCH_ROUTE.to_owned())
        );
        assert_eq!(
            Command::DirectPath(vec!['A']).execute(&network),
            Some(COMMAND_NOT_RECOGNIZED.to_owned())
        );
        assert_eq!(
            Command::Shortest {
                start: 'A',
                end: 'A',
            }
            .execute(&network),
            Some("10".to_owned())
        );
        assert_eq!(
            Command::MaxStops {
                stops: 2,
                start: 'Z',
                end: 'A',
            }
            .execute(&network),
            Some(COMMAND_NOT_RECOGNIZED.to_owned())
        );
        assert_eq!(Command::Help.execute(&network), Some(HELP.to_owned()));
        assert_eq!(Command::Quit.execute(&network), None);
    }

    #[test]
    fn overflowing_distance_is_reported() {
        let network: Network = "AB18446744073709551615, BA18446744073709551615"
            .parse()
            .unwrap();

        assert_eq!(
            "dp ABA".parse::<Command>().unwrap().execute(&network),
            Some(COMMAND_NOT_RECOGNIZED.to_owned())
        );
        assert_eq!(
            "dp AB".parse::<Command>().unwrap().execute(&network),
            Some("18446744073709551615".to_owned())
        );
    }
}
