use core::fmt;

use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Brand {
    Supercharger,
    InNOut,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Brand {
    pub fn all() -> Vec<Self> {
        vec![Brand::Supercharger, Brand::InNOut]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Supercharger => "Tesla Supercharger",
            Self::InNOut => "In-N-Out Burger",
        }
    }

    /// File stem of the stored location collection.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Supercharger => "superchargers",
            Self::InNOut => "in_n_out",
        }
    }
}
