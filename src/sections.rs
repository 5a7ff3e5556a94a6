use std::fmt;

/// The fixed set of sections aggregated by `/nytimes/topstories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Arts,
    Food,
    Movies,
    Travel,
    Science,
}

impl Section {
    /// Every section, in the order they appear in the aggregate response.
    pub const ALL: [Section; 5] = [
        Self::Arts,
        Self::Food,
        Self::Movies,
        Self::Travel,
        Self::Science,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Arts => "arts",
            Self::Food => "food",
            Self::Movies => "movies",
            Self::Travel => "travel",
            Self::Science => "science",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
