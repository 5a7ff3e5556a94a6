use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use futures_util::future::join_all;
use serde::Serialize;

use crate::nytimes::{NewsSource, RawArticle, UpstreamError};
use crate::sections::Section;


pub const STORIES_PER_SECTION: usize = 2;

/// Always exactly [`STORIES_PER_SECTION`] entries, real or placeholder.
pub type SectionStories = [TopStoryArticle; STORIES_PER_SECTION];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopStoryArticle {
    pub title: String,
    pub section: String,
    pub url: String,
    pub r#abstract: String,
    pub published_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopStoriesResponse {
    pub arts: SectionStories,
    pub food: SectionStories,
    pub movies: SectionStories,
    pub travel: SectionStories,
    pub science: SectionStories,
}

impl TopStoriesResponse {
    pub fn section(&self, section: Section) -> &SectionStories {
        match section {
            Section::Arts => &self.arts,
            Section::Food => &self.food,
            Section::Movies => &self.movies,
            Section::Travel => &self.travel,
            Section::Science => &self.science,
        }
    }
}

/// Fetches every section concurrently and reduces each one to its two most
/// recent valid articles. Upstream failures only ever degrade the affected
/// section to placeholders; this never fails as a whole.
///
/// `now` stamps every placeholder produced for this request.
#[tracing::instrument(skip_all)]
pub async fn collect_top_stories(source: &dyn NewsSource, now: DateTime<Utc>) -> TopStoriesResponse {
    let fetches = Section::ALL.map(|section| async move {
        let result = source.fetch_top_stories(section).await;
        (section, result)
    });

    let mut ranked: HashMap<Section, SectionStories> = join_all(fetches)
        .await
        .into_iter()
        .map(|(section, result)| (section, rank_section(section, result, now)))
        .collect();

    let mut take = |section: Section| {
        ranked.remove(&section).unwrap_or_else(|| {
            tracing::error!(%section, "section missing at assembly, filling with placeholders");
            placeholders(section, now)
        })
    };

    TopStoriesResponse {
        arts: take(Section::Arts),
        food: take(Section::Food),
        movies: take(Section::Movies),
        travel: take(Section::Travel),
        science: take(Section::Science),
    }
}

/// Validates, ranks newest first, and pads one section's fetch result.
pub fn rank_section(
    section: Section,
    fetched: Result<Vec<RawArticle>, UpstreamError>,
    now: DateTime<Utc>,
) -> SectionStories {
    let articles = match fetched {
        Ok(articles) => articles,
        Err(e) => {
            tracing::warn!(error = %e, %section, "top stories fetch failed, using placeholders");
            Vec::new()
        }
    };

    let received = articles.len();
    let mut ranked: Vec<(DateTime<FixedOffset>, TopStoryArticle)> = articles
        .into_iter()
        .filter_map(|raw| validate(section, raw))
        .collect();

    // stable: equal timestamps keep upstream order
    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));

    tracing::debug!(%section, received, valid = ranked.len(), "ranked section");

    let mut stories = ranked.into_iter().map(|(_, article)| article);
    std::array::from_fn(|_| stories.next().unwrap_or_else(|| placeholder(section, now)))
}

fn validate(section: Section, raw: RawArticle) -> Option<(DateTime<FixedOffset>, TopStoryArticle)> {
    let (Some(title), Some(url), Some(summary), Some(published_date)) = (
        non_empty(raw.title),
        non_empty(raw.url),
        non_empty(raw.r#abstract),
        non_empty(raw.published_date),
    ) else {
        tracing::debug!(%section, "dropping article with missing fields");
        return None;
    };

    let Some(published_at) = parse_published_date(&published_date) else {
        tracing::debug!(%section, %published_date, "dropping article with unparsable date");
        return None;
    };

    let article = TopStoryArticle {
        title,
        section: raw.section.unwrap_or_default(),
        url,
        r#abstract: summary,
        published_date,
    };

    Some((published_at, article))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses an ISO-8601 style timestamp. A trailing `Z` is read as `+00:00`,
/// the date and time may be separated by a space, and minutes and seconds
/// may be omitted. Values without an offset, including bare dates, are
/// taken as UTC.
pub fn parse_published_date(value: &str) -> Option<DateTime<FixedOffset>> {
    let normalized = normalize_timestamp(value);

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(parsed);
    }

    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
    {
        return Some(parsed);
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
    {
        return Some(naive.and_utc().fixed_offset());
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Rewrites the accepted ISO-8601 variants into `YYYY-MM-DDTHH:MM[...]`
/// with an explicit numeric offset where one was given.
fn normalize_timestamp(value: &str) -> String {
    let value = value.trim();
    let mut normalized = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };

    if normalized.as_bytes().get(10) == Some(&b' ') {
        normalized.replace_range(10..11, "T");
    }

    // `T12` or `T12+05:00`: hour without minutes
    if normalized.as_bytes().get(10) == Some(&b'T') {
        let time = &normalized.as_bytes()[11..];
        let hour_only = time.len() >= 2
            && time[..2].iter().all(u8::is_ascii_digit)
            && time.get(2) != Some(&b':');
        if hour_only {
            normalized.insert_str(13, ":00");
        }
    }

    normalized
}

pub fn placeholder(section: Section, now: DateTime<Utc>) -> TopStoryArticle {
    TopStoryArticle {
        title: format!("No recent {section} story available"),
        section: section.slug().to_string(),
        url: String::new(),
        r#abstract: format!("No recent content available for the {section} section."),
        published_date: now.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

fn placeholders(section: Section, now: DateTime<Utc>) -> SectionStories {
    std::array::from_fn(|_| placeholder(section, now))
}
