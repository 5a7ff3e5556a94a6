use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// A rejected search parameter. The `Display` text is shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Begin date cannot be in the future")]
    BeginDateInFuture,

    #[error("End date cannot be in the future")]
    EndDateInFuture,

    #[error("End date ({end}) cannot be before begin date ({begin})")]
    EndBeforeBegin { begin: NaiveDate, end: NaiveDate },

    #[error("Sort parameter must be one of: {}", SortOrder::NAMES.join(", "))]
    InvalidSort,
}

pub fn validate_date_range(
    begin: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if begin.is_some_and(|b| b > today) {
        return Err(ValidationError::BeginDateInFuture);
    }

    if end.is_some_and(|e| e > today) {
        return Err(ValidationError::EndDateInFuture);
    }

    if let (Some(begin), Some(end)) = (begin, end) {
        if end < begin {
            return Err(ValidationError::EndBeforeBegin { begin, end });
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Relevance,
    Newest,
    Oldest,
}

impl SortOrder {
    pub const NAMES: [&'static str; 3] = ["relevance", "newest", "oldest"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            _ => Err(ValidationError::InvalidSort),
        }
    }
}
