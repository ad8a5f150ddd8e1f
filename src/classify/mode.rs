/// Which evaluation semantics a census runs under.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// one best category per hand
    Exclusive,
    /// every satisfied category per hand
    Inclusive,
}

impl Mode {
    pub const fn all() -> [Mode; 2] {
        [Mode::Inclusive, Mode::Exclusive]
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Exclusive => write!(f, "exclusive"),
            Mode::Inclusive => write!(f, "inclusive"),
        }
    }
}
