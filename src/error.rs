use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    #[error("No such Stop {0:?} in the network")]
    UnknownStop(char),

    #[error("No route from Stop {from:?} to Stop {to:?}")]
    PathNotFound { from: char, to: char },

    #[error("Distance overflows at the route from Stop {from:?} to Stop {to:?}")]
    DistanceOverflow { from: char, to: char },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("The graph description is empty")]
    Empty,

    #[error("Malformed route {0:?}, expected <source><destination><distance> such as \"AB5\"")]
    MalformedRoute(String),

    #[error("Route {0:?} has a zero distance")]
    ZeroDistance(String),

    #[error("Stop name {0:?} is not a single uppercase letter")]
    InvalidStopName(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command {0:?}")]
    UnknownCommand(String),

    #[error("Malformed arguments for {command}: {arguments:?}")]
    MalformedArguments {
        command: &'static str,
        arguments: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::UnknownStop('Z');
        assert_eq!(err.to_string(), "No such Stop 'Z' in the network");

        let err = NetworkError::PathNotFound { from: 'E', to: 'D' };
        assert_eq!(err.to_string(), "No route from Stop 'E' to Stop 'D'");

        let err = InputError::MalformedRoute("A5".into());
        assert_eq!(
            err.to_string(),
            "Malformed route \"A5\", expected <source><destination><distance> such as \"AB5\""
        );

        let err = CommandError::UnknownCommand("fly".into());
        assert_eq!(err.to_string(), "Unknown command \"fly\"");
    }
}
