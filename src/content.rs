//! Media content model
//!
//! This module provides the polymorphic content model of the catalog: the
//! common record shared by every media kind, the closed set of kind-specific
//! variants (movie, TV show, music track, podcast episode), and the
//! capability surface built on top of them (streaming availability,
//! streaming URLs, metadata projection, search predicates).

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;
use thiserror::Error;

/// Errors raised when constructing or mutating content with invalid input
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required string field was empty (after trimming)
    #[error("{0} must be a non-empty string")]
    EmptyField(&'static str),

    /// A numeric field that must be positive was zero
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),

    /// The genre list contained no usable entries
    #[error("genres must contain at least one non-empty entry")]
    EmptyGenres,

    /// A rating value was outside the accepted range
    #[error("rating must be between 1.0 and 5.0, got {0}")]
    RatingOutOfRange(f64),
}

/// Errors raised when requesting a streaming URL
#[derive(Debug, Error, PartialEq)]
pub enum StreamingError {
    /// The content exists but is not yet eligible for streaming
    #[error("'{title}' is not yet available for streaming")]
    NotYetAvailable { title: String },
}

/// The closed set of media kinds supported by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Movie,
    TvShow,
    Music,
    Podcast,
}

impl MediaType {
    /// All supported media kinds, in canonical order
    pub const ALL: [MediaType; 4] = [
        MediaType::Movie,
        MediaType::TvShow,
        MediaType::Music,
        MediaType::Podcast,
    ];

    /// Returns the canonical tag used in metadata projections and statistics
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::TvShow => "tv_show",
            MediaType::Music => "music",
            MediaType::Podcast => "podcast",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content rating classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentRating {
    /// General audiences
    G,
    /// Parental guidance suggested
    Pg,
    /// Parents strongly cautioned
    Pg13,
    /// Restricted
    R,
    /// Adults only
    Nc17,
    /// No rating assigned
    Unrated,
}

impl ContentRating {
    /// Returns the display form of the rating (e.g. "PG-13")
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRating::G => "G",
            ContentRating::Pg => "PG",
            ContentRating::Pg13 => "PG-13",
            ContentRating::R => "R",
            ContentRating::Nc17 => "NC-17",
            ContentRating::Unrated => "Unrated",
        }
    }
}

impl fmt::Display for ContentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Production status of a TV show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShowStatus {
    #[default]
    Ongoing,
    Completed,
    Cancelled,
}

impl ShowStatus {
    /// Returns the lowercase tag used in metadata projections
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowStatus::Ongoing => "ongoing",
            ShowStatus::Completed => "completed",
            ShowStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ShowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific fields of a content record
///
/// Exactly one variant exists per supported media kind. Construct variants
/// through the validating constructors ([`MediaDetails::movie`] and friends)
/// rather than building the enum directly, so the per-kind field invariants
/// hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaDetails {
    Movie {
        director: String,
        cast: Vec<String>,
        budget: Option<f64>,
        box_office: Option<f64>,
    },
    TvShow {
        seasons: u32,
        total_episodes: u32,
        status: ShowStatus,
    },
    Music {
        artist: String,
        album: String,
        track_number: u32,
        is_explicit: bool,
    },
    Podcast {
        host: String,
        episode_number: u32,
        season_number: u32,
        transcript_available: bool,
    },
}

impl MediaDetails {
    /// Creates validated movie details
    ///
    /// The director must be non-empty after trimming. Cast entries are
    /// trimmed and blank entries are dropped; an empty cast is allowed.
    pub fn movie(
        director: &str,
        cast: &[&str],
        budget: Option<f64>,
        box_office: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let director = non_empty(director, "director")?;
        let cast = cast
            .iter()
            .map(|actor| actor.trim())
            .filter(|actor| !actor.is_empty())
            .map(str::to_string)
            .collect();

        Ok(MediaDetails::Movie {
            director,
            cast,
            budget,
            box_office,
        })
    }

    /// Creates validated TV show details
    pub fn tv_show(
        seasons: u32,
        total_episodes: u32,
        status: ShowStatus,
    ) -> Result<Self, ValidationError> {
        let seasons = positive(seasons, "seasons")?;
        let total_episodes = positive(total_episodes, "total episodes")?;

        Ok(MediaDetails::TvShow {
            seasons,
            total_episodes,
            status,
        })
    }

    /// Creates validated music track details
    pub fn music(
        artist: &str,
        album: &str,
        track_number: u32,
        is_explicit: bool,
    ) -> Result<Self, ValidationError> {
        let artist = non_empty(artist, "artist")?;
        let album = non_empty(album, "album")?;
        let track_number = positive(track_number, "track number")?;

        Ok(MediaDetails::Music {
            artist,
            album,
            track_number,
            is_explicit,
        })
    }

    /// Creates validated podcast episode details
    pub fn podcast(
        host: &str,
        episode_number: u32,
        season_number: u32,
        transcript_available: bool,
    ) -> Result<Self, ValidationError> {
        let host = non_empty(host, "host")?;
        let episode_number = positive(episode_number, "episode number")?;
        let season_number = positive(season_number, "season number")?;

        Ok(MediaDetails::Podcast {
            host,
            episode_number,
            season_number,
            transcript_available,
        })
    }

    /// Returns the media kind of these details
    pub fn media_type(&self) -> MediaType {
        match self {
            MediaDetails::Movie { .. } => MediaType::Movie,
            MediaDetails::TvShow { .. } => MediaType::TvShow,
            MediaDetails::Music { .. } => MediaType::Music,
            MediaDetails::Podcast { .. } => MediaType::Podcast,
        }
    }
}

/// A single entry in the media catalog
///
/// Holds the descriptive fields shared by every media kind together with the
/// kind-specific [`MediaDetails`]. Descriptive fields are validated and
/// normalized at construction and immutable afterwards; only the view
/// counter and the rating history mutate, through [`ContentRecord::record_view`]
/// and [`ContentRecord::add_rating`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    title: String,
    duration_minutes: u32,
    release_date: DateTime<Utc>,
    content_rating: ContentRating,
    genres: Vec<String>,
    description: String,
    view_count: u64,
    ratings: Vec<f64>,
    average_rating: f64,
    created_at: DateTime<Utc>,
    details: MediaDetails,
}

impl ContentRecord {
    /// Creates a new content record stamped with the current wall-clock time
    ///
    /// The title and description are trimmed, genres are trimmed and
    /// lowercased with blank entries dropped.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the offending field when the title
    /// is empty after trimming, the duration is zero, or no usable genre
    /// remains after normalization.
    pub fn new(
        title: &str,
        duration_minutes: u32,
        release_date: DateTime<Utc>,
        content_rating: ContentRating,
        genres: &[&str],
        description: &str,
        details: MediaDetails,
    ) -> Result<Self, ValidationError> {
        Self::new_at(
            title,
            duration_minutes,
            release_date,
            content_rating,
            genres,
            description,
            details,
            Utc::now(),
        )
    }

    /// Creates a new content record with an explicit creation timestamp
    ///
    /// Identical to [`ContentRecord::new`] except that `created_at` is
    /// supplied by the caller, which keeps recency-based behavior
    /// deterministic when driven by an injected clock.
    #[allow(clippy::too_many_arguments)]
    pub fn new_at(
        title: &str,
        duration_minutes: u32,
        release_date: DateTime<Utc>,
        content_rating: ContentRating,
        genres: &[&str],
        description: &str,
        details: MediaDetails,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let title = non_empty(title, "title")?;
        let duration_minutes = positive(duration_minutes, "duration")?;

        let genres: Vec<String> = genres
            .iter()
            .map(|genre| genre.trim().to_lowercase())
            .filter(|genre| !genre.is_empty())
            .collect();

        if genres.is_empty() {
            return Err(ValidationError::EmptyGenres);
        }

        Ok(Self {
            title,
            duration_minutes,
            release_date,
            content_rating,
            genres,
            description: description.trim().to_string(),
            view_count: 0,
            ratings: Vec::new(),
            average_rating: 0.0,
            created_at,
            details,
        })
    }

    /// Returns the title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the duration in minutes
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the release date
    pub fn release_date(&self) -> DateTime<Utc> {
        self.release_date
    }

    /// Returns the content rating
    pub fn content_rating(&self) -> ContentRating {
        self.content_rating
    }

    /// Returns the normalized genre list
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Returns the description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the total view count
    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    /// Returns the recorded ratings, in the order they were added
    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    /// Returns the number of recorded ratings
    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    /// Returns the arithmetic mean of all recorded ratings, or 0.0 if none
    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    /// Returns the instant this record was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the kind-specific details
    pub fn details(&self) -> &MediaDetails {
        &self.details
    }

    /// Returns the media kind of this record
    pub fn media_type(&self) -> MediaType {
        self.details.media_type()
    }

    /// Records a single view of this content
    pub fn record_view(&mut self) {
        self.view_count += 1;
    }

    /// Adds a user rating and recomputes the average
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RatingOutOfRange` if the value is outside
    /// [1.0, 5.0]; the rating history is left untouched in that case.
    pub fn add_rating(&mut self, rating: f64) -> Result<(), ValidationError> {
        if !(1.0..=5.0).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }

        self.ratings.push(rating);
        self.average_rating = self.ratings.iter().sum::<f64>() / self.ratings.len() as f64;
        Ok(())
    }

    /// Checks whether this content carries the given genre
    ///
    /// The query is trimmed and lowercased before the membership test, so
    /// matching is case- and whitespace-insensitive.
    pub fn matches_genre(&self, genre: &str) -> bool {
        let normalized = genre.trim().to_lowercase();
        self.genres.iter().any(|g| *g == normalized)
    }

    /// Checks whether this content was released within the given number of days
    pub fn is_recently_released(&self, days: u32, now: DateTime<Utc>) -> bool {
        self.release_date >= now - Duration::days(i64::from(days))
    }

    /// Checks whether this content is appropriate for a viewer of the given age
    pub fn is_age_appropriate(&self, age: u32) -> bool {
        match self.content_rating {
            ContentRating::G | ContentRating::Pg | ContentRating::Unrated => true,
            ContentRating::Pg13 => age >= 13,
            ContentRating::R => age >= 17,
            ContentRating::Nc17 => age >= 18,
        }
    }

    /// Checks whether this content matches a free-text search query
    ///
    /// The query is trimmed and lowercased, then tested as a substring of
    /// the title, the description, and each genre.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        self.title.to_lowercase().contains(&q)
            || self.description.to_lowercase().contains(&q)
            || self.genres.iter().any(|genre| genre.contains(&q))
    }

    /// Renders the duration as "Xh Ym" (or "Ym" below one hour)
    pub fn duration_formatted(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        if hours > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}m", minutes)
        }
    }

    /// Checks whether this content is currently eligible for streaming
    ///
    /// Movies are gated for the first 90 days after release; every other
    /// kind streams immediately.
    pub fn can_stream(&self, now: DateTime<Utc>) -> bool {
        match self.details {
            MediaDetails::Movie { .. } => !self.is_recently_released(90, now),
            _ => true,
        }
    }

    /// Builds the deterministic streaming URL for this content
    ///
    /// # Errors
    ///
    /// Returns `StreamingError::NotYetAvailable` for a movie still inside
    /// its 90-day release window.
    pub fn streaming_url(&self, now: DateTime<Utc>) -> Result<String, StreamingError> {
        match &self.details {
            MediaDetails::Movie { .. } => {
                if !self.can_stream(now) {
                    return Err(StreamingError::NotYetAvailable {
                        title: self.title.clone(),
                    });
                }
                Ok(format!(
                    "https://stream.example.com/movies/{}",
                    slug(&self.title)
                ))
            }
            MediaDetails::TvShow { .. } => Ok(format!(
                "https://stream.example.com/shows/{}",
                slug(&self.title)
            )),
            MediaDetails::Music { .. } => Ok(format!(
                "https://stream.example.com/music/{}",
                slug(&self.title)
            )),
            MediaDetails::Podcast {
                host,
                episode_number,
                season_number,
                ..
            } => Ok(format!(
                "https://stream.example.com/podcasts/{}/{}/s{}e{}",
                slug(host),
                slug(&self.title),
                season_number,
                episode_number
            )),
        }
    }

    /// Returns the kind tag and all kind-specific fields as a flat mapping
    ///
    /// Callers that need kind-specific display can consume this uniformly
    /// without inspecting [`MediaDetails`] themselves.
    pub fn metadata(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("type".to_string(), json!(self.media_type().as_str()));

        match &self.details {
            MediaDetails::Movie {
                director,
                cast,
                budget,
                box_office,
            } => {
                let is_blockbuster = match (budget, box_office) {
                    (Some(budget), Some(box_office)) => *box_office > budget * 3.0,
                    _ => false,
                };
                map.insert("director".to_string(), json!(director));
                map.insert("cast".to_string(), json!(cast));
                map.insert("budget".to_string(), json!(budget));
                map.insert("box_office".to_string(), json!(box_office));
                map.insert("is_blockbuster".to_string(), json!(is_blockbuster));
            }
            MediaDetails::TvShow {
                seasons,
                total_episodes,
                status,
            } => {
                let total_minutes = u64::from(self.duration_minutes) * u64::from(*total_episodes);
                map.insert("seasons".to_string(), json!(seasons));
                map.insert("total_episodes".to_string(), json!(total_episodes));
                map.insert("status".to_string(), json!(status.as_str()));
                map.insert(
                    "average_episode_duration".to_string(),
                    json!(self.duration_minutes),
                );
                map.insert(
                    "total_runtime_hours".to_string(),
                    json!(round_one_decimal(total_minutes as f64 / 60.0)),
                );
            }
            MediaDetails::Music {
                artist,
                album,
                track_number,
                is_explicit,
            } => {
                map.insert("artist".to_string(), json!(artist));
                map.insert("album".to_string(), json!(album));
                map.insert("track_number".to_string(), json!(track_number));
                map.insert("is_explicit".to_string(), json!(is_explicit));
            }
            MediaDetails::Podcast {
                host,
                episode_number,
                season_number,
                transcript_available,
            } => {
                map.insert("host".to_string(), json!(host));
                map.insert("episode_number".to_string(), json!(episode_number));
                map.insert("season_number".to_string(), json!(season_number));
                map.insert(
                    "transcript_available".to_string(),
                    json!(transcript_available),
                );
            }
        }

        map
    }
}

impl fmt::Display for ContentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}",
            self.title,
            self.release_date.year(),
            self.duration_formatted()
        )
    }
}

/// Validates and trims a required string field
fn non_empty(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Validates that a numeric field is positive
fn positive(value: u32, field: &'static str) -> Result<u32, ValidationError> {
    if value == 0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(value)
}

/// Builds a URL slug from a display name (lowercased, spaces to hyphens)
fn slug(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// Rounds a value to one decimal place
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn movie_record(title: &str, released_days_ago: u32) -> ContentRecord {
        let now = test_now();
        ContentRecord::new_at(
            title,
            142,
            now - Duration::days(i64::from(released_days_ago)),
            ContentRating::Pg13,
            &["Sci-Fi", "Thriller"],
            "A mind-bending heist inside dreams.",
            MediaDetails::movie("Christopher Nolan", &["Leonardo DiCaprio"], None, None).unwrap(),
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_construction_normalizes_fields() {
        let now = test_now();
        let record = ContentRecord::new_at(
            "  Inception  ",
            142,
            now - Duration::days(400),
            ContentRating::Pg13,
            &[" Sci-Fi ", "THRILLER"],
            "  A heist inside dreams.  ",
            MediaDetails::movie("  Christopher Nolan ", &[" Leonardo DiCaprio ", "  "], None, None)
                .unwrap(),
            now,
        )
        .unwrap();

        assert_eq!(record.title(), "Inception");
        assert_eq!(record.genres(), ["sci-fi", "thriller"]);
        assert_eq!(record.description(), "A heist inside dreams.");
        assert_eq!(record.view_count(), 0);
        assert_eq!(record.average_rating(), 0.0);
        assert_eq!(record.created_at(), now);

        match record.details() {
            MediaDetails::Movie { director, cast, .. } => {
                assert_eq!(director, "Christopher Nolan");
                // Blank cast entries are dropped
                assert_eq!(cast, &["Leonardo DiCaprio"]);
            }
            other => panic!("expected movie details, got {:?}", other),
        }
    }

    #[test]
    fn test_construction_rejects_invalid_fields() {
        let now = test_now();
        let details = MediaDetails::music("Artist", "Album", 1, false).unwrap();

        let empty_title = ContentRecord::new_at(
            "   ",
            3,
            now,
            ContentRating::G,
            &["pop"],
            "",
            details.clone(),
            now,
        );
        assert_eq!(empty_title.unwrap_err(), ValidationError::EmptyField("title"));

        let zero_duration = ContentRecord::new_at(
            "Song",
            0,
            now,
            ContentRating::G,
            &["pop"],
            "",
            details.clone(),
            now,
        );
        assert_eq!(
            zero_duration.unwrap_err(),
            ValidationError::NotPositive("duration")
        );

        let no_genres =
            ContentRecord::new_at("Song", 3, now, ContentRating::G, &[], "", details.clone(), now);
        assert_eq!(no_genres.unwrap_err(), ValidationError::EmptyGenres);

        // Genres that are blank after trimming do not count
        let blank_genres =
            ContentRecord::new_at("Song", 3, now, ContentRating::G, &["  ", ""], "", details, now);
        assert_eq!(blank_genres.unwrap_err(), ValidationError::EmptyGenres);
    }

    #[test]
    fn test_variant_constructors_reject_invalid_fields() {
        assert_eq!(
            MediaDetails::movie("", &[], None, None).unwrap_err(),
            ValidationError::EmptyField("director")
        );
        assert_eq!(
            MediaDetails::tv_show(0, 10, ShowStatus::Ongoing).unwrap_err(),
            ValidationError::NotPositive("seasons")
        );
        assert_eq!(
            MediaDetails::tv_show(2, 0, ShowStatus::Ongoing).unwrap_err(),
            ValidationError::NotPositive("total episodes")
        );
        assert_eq!(
            MediaDetails::music("Artist", "  ", 1, false).unwrap_err(),
            ValidationError::EmptyField("album")
        );
        assert_eq!(
            MediaDetails::music("Artist", "Album", 0, false).unwrap_err(),
            ValidationError::NotPositive("track number")
        );
        assert_eq!(
            MediaDetails::podcast(" ", 1, 1, false).unwrap_err(),
            ValidationError::EmptyField("host")
        );
        assert_eq!(
            MediaDetails::podcast("Host", 0, 1, false).unwrap_err(),
            ValidationError::NotPositive("episode number")
        );
    }

    #[test]
    fn test_record_view_increments() {
        let mut record = movie_record("Inception", 400);
        record.record_view();
        record.record_view();
        assert_eq!(record.view_count(), 2);
    }

    #[test]
    fn test_add_rating_computes_exact_mean() {
        let mut record = movie_record("Inception", 400);
        record.add_rating(4.0).unwrap();
        record.add_rating(5.0).unwrap();
        record.add_rating(3.5).unwrap();

        assert_eq!(record.rating_count(), 3);
        assert!((record.average_rating() - (4.0 + 5.0 + 3.5) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_rating_rejects_out_of_range() {
        let mut record = movie_record("Inception", 400);
        record.add_rating(4.0).unwrap();

        for bad in [0.9, 5.1, -1.0, f64::NAN] {
            let err = record.add_rating(bad).unwrap_err();
            assert!(matches!(err, ValidationError::RatingOutOfRange(_)));
        }

        // History and average are untouched by the failed calls
        assert_eq!(record.ratings(), [4.0]);
        assert_eq!(record.average_rating(), 4.0);
    }

    #[test]
    fn test_matches_genre_is_case_and_whitespace_insensitive() {
        let record = movie_record("Inception", 400);
        assert!(record.matches_genre("Sci-Fi"));
        assert!(record.matches_genre("  THRILLER "));
        assert!(!record.matches_genre("comedy"));
    }

    #[test]
    fn test_matches_search() {
        let record = movie_record("Inception", 400);
        assert!(record.matches_search("incep"));
        assert!(record.matches_search("  HEIST "));
        assert!(record.matches_search("thrill"));
        assert!(!record.matches_search("romance"));
    }

    #[test]
    fn test_is_age_appropriate_mapping() {
        let now = test_now();
        let record_with = |rating| {
            ContentRecord::new_at(
                "Title",
                30,
                now,
                rating,
                &["drama"],
                "",
                MediaDetails::tv_show(1, 10, ShowStatus::Ongoing).unwrap(),
                now,
            )
            .unwrap()
        };

        assert!(record_with(ContentRating::G).is_age_appropriate(5));
        assert!(record_with(ContentRating::Pg).is_age_appropriate(5));
        assert!(record_with(ContentRating::Unrated).is_age_appropriate(5));
        assert!(!record_with(ContentRating::Pg13).is_age_appropriate(12));
        assert!(record_with(ContentRating::Pg13).is_age_appropriate(13));
        assert!(!record_with(ContentRating::R).is_age_appropriate(16));
        assert!(record_with(ContentRating::R).is_age_appropriate(17));
        assert!(!record_with(ContentRating::Nc17).is_age_appropriate(17));
        assert!(record_with(ContentRating::Nc17).is_age_appropriate(18));
    }

    #[test]
    fn test_duration_formatted() {
        let record = movie_record("Inception", 400);
        assert_eq!(record.duration_formatted(), "2h 22m");

        let now = test_now();
        let short = ContentRecord::new_at(
            "Short",
            45,
            now,
            ContentRating::G,
            &["animation"],
            "",
            MediaDetails::movie("Someone", &[], None, None).unwrap(),
            now,
        )
        .unwrap();
        assert_eq!(short.duration_formatted(), "45m");
    }

    #[test]
    fn test_movie_streaming_gated_for_90_days() {
        let now = test_now();
        let recent = movie_record("Fresh Release", 10);
        let old = movie_record("Back Catalog", 120);

        assert!(!recent.can_stream(now));
        assert!(old.can_stream(now));

        assert_eq!(
            recent.streaming_url(now).unwrap_err(),
            StreamingError::NotYetAvailable {
                title: "Fresh Release".to_string()
            }
        );
        assert_eq!(
            old.streaming_url(now).unwrap(),
            "https://stream.example.com/movies/back-catalog"
        );
    }

    #[test]
    fn test_other_kinds_always_streamable() {
        let now = test_now();
        let show = ContentRecord::new_at(
            "Breaking Bad",
            47,
            now - Duration::days(1),
            ContentRating::R,
            &["crime", "drama"],
            "",
            MediaDetails::tv_show(5, 62, ShowStatus::Completed).unwrap(),
            now,
        )
        .unwrap();
        assert!(show.can_stream(now));
        assert_eq!(
            show.streaming_url(now).unwrap(),
            "https://stream.example.com/shows/breaking-bad"
        );

        let track = ContentRecord::new_at(
            "Paranoid Android",
            6,
            now - Duration::days(1),
            ContentRating::Unrated,
            &["rock"],
            "",
            MediaDetails::music("Radiohead", "OK Computer", 2, false).unwrap(),
            now,
        )
        .unwrap();
        assert_eq!(
            track.streaming_url(now).unwrap(),
            "https://stream.example.com/music/paranoid-android"
        );

        let episode = ContentRecord::new_at(
            "The Big Idea",
            55,
            now - Duration::days(1),
            ContentRating::Unrated,
            &["business"],
            "",
            MediaDetails::podcast("Guy Raz", 12, 3, true).unwrap(),
            now,
        )
        .unwrap();
        assert_eq!(
            episode.streaming_url(now).unwrap(),
            "https://stream.example.com/podcasts/guy-raz/the-big-idea/s3e12"
        );
    }

    #[test]
    fn test_movie_metadata_blockbuster_flag() {
        let now = test_now();
        let record_with = |budget, box_office| {
            ContentRecord::new_at(
                "Epic",
                120,
                now - Duration::days(200),
                ContentRating::Pg13,
                &["action"],
                "",
                MediaDetails::movie("Director", &[], budget, box_office).unwrap(),
                now,
            )
            .unwrap()
        };

        let hit = record_with(Some(100_000_000.0), Some(400_000_000.0)).metadata();
        assert_eq!(hit["is_blockbuster"], json!(true));

        let flop = record_with(Some(100_000_000.0), Some(150_000_000.0)).metadata();
        assert_eq!(flop["is_blockbuster"], json!(false));

        // Both figures must be present for the flag to apply
        let unknown = record_with(Some(100_000_000.0), None).metadata();
        assert_eq!(unknown["is_blockbuster"], json!(false));
        assert_eq!(unknown["box_office"], Value::Null);
    }

    #[test]
    fn test_tv_show_metadata_total_runtime() {
        let now = test_now();
        let show = ContentRecord::new_at(
            "Breaking Bad",
            47,
            now - Duration::days(1000),
            ContentRating::R,
            &["crime"],
            "",
            MediaDetails::tv_show(5, 62, ShowStatus::Completed).unwrap(),
            now,
        )
        .unwrap();

        let metadata = show.metadata();
        assert_eq!(metadata["type"], json!("tv_show"));
        assert_eq!(metadata["seasons"], json!(5));
        assert_eq!(metadata["total_episodes"], json!(62));
        assert_eq!(metadata["status"], json!("completed"));
        assert_eq!(metadata["average_episode_duration"], json!(47));
        // 47 * 62 = 2914 minutes = 48.56.. hours, rounded to one decimal
        assert_eq!(metadata["total_runtime_hours"], json!(48.6));
    }

    #[test]
    fn test_metadata_carries_kind_tag() {
        let now = test_now();
        let track = ContentRecord::new_at(
            "Song",
            4,
            now,
            ContentRating::Unrated,
            &["pop"],
            "",
            MediaDetails::music("Artist", "Album", 7, true).unwrap(),
            now,
        )
        .unwrap();

        let metadata = track.metadata();
        assert_eq!(metadata["type"], json!("music"));
        assert_eq!(metadata["artist"], json!("Artist"));
        assert_eq!(metadata["track_number"], json!(7));
        assert_eq!(metadata["is_explicit"], json!(true));
    }

    #[test]
    fn test_display_format() {
        let now = test_now();
        let record = ContentRecord::new_at(
            "Inception",
            142,
            Utc.with_ymd_and_hms(2010, 7, 16, 0, 0, 0).unwrap(),
            ContentRating::Pg13,
            &["sci-fi"],
            "",
            MediaDetails::movie("Christopher Nolan", &[], None, None).unwrap(),
            now,
        )
        .unwrap();

        assert_eq!(record.to_string(), "Inception (2010) - 2h 22m");
    }
}
