use serde::Serialize;

/// Outcome of a call to the rating service.
///
/// Both variants carry usable data; `Fallback` means the service could not
/// be reached and the data is the built-in sample set or a synthetic record.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Fallback(T),
}

impl<T> Fetched<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) | Fetched::Fallback(data) => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(data) | Fetched::Fallback(data) => data,
        }
    }

    pub fn connection(&self) -> ConnectionStatus {
        if self.is_live() {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Fetched::Live(data) => Fetched::Live(f(data)),
            Fetched::Fallback(data) => Fetched::Fallback(f(data)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    /// Disconnected if any of the inputs is
    pub fn combine(self, other: ConnectionStatus) -> ConnectionStatus {
        if self == ConnectionStatus::Connected && other == ConnectionStatus::Connected {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_survives_map() {
        let fetched = Fetched::Fallback(vec![1, 2, 3]).map(|v| v.len());

        assert_eq!(fetched, Fetched::Fallback(3));
        assert_eq!(fetched.connection(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_combine_is_disconnected_when_any_side_is() {
        use ConnectionStatus::*;

        assert_eq!(Connected.combine(Connected), Connected);
        assert_eq!(Connected.combine(Disconnected), Disconnected);
        assert_eq!(Disconnected.combine(Connected), Disconnected);
    }
}
