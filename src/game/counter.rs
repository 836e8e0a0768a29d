#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Red,
    Yellow,
}

impl Counter {
    /// Get the other player's counter
    pub fn other(self) -> Counter {
        match self {
            Counter::Red => Counter::Yellow,
            Counter::Yellow => Counter::Red,
        }
    }

    /// Get counter name for display
    pub fn name(self) -> &'static str {
        match self {
            Counter::Red => "Red",
            Counter::Yellow => "Yellow",
        }
    }

    /// Single-character form used by the textual board rendering
    pub fn to_char(self) -> char {
        match self {
            Counter::Red => 'R',
            Counter::Yellow => 'Y',
        }
    }
}
