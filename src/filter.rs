//! Composable search filters
//!
//! This module provides [`SearchFilter`], a reusable predicate bundle that is
//! evaluated against content records. Filters are plain values built through
//! consuming fluent setters; evaluation is stateless and side-effect free.

use crate::content::{ContentRating, ContentRecord, MediaType, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A bundle of optional, independently configurable search predicates
///
/// Every condition left unset is vacuously true. For the set-valued
/// conditions (genres, media kinds, content ratings) a record matches if it
/// satisfies any member of the set; across conditions the filter is a pure
/// conjunction. Setters consume and return the filter, so conditions chain:
///
/// ```
/// use media_catalog::{MediaType, SearchFilter};
///
/// let filter = SearchFilter::new()
///     .with_genre("Drama")
///     .with_media_type(MediaType::Movie)
///     .with_min_rating(4.0)
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    genres: HashSet<String>,
    media_types: HashSet<MediaType>,
    content_ratings: HashSet<ContentRating>,
    min_rating: Option<f64>,
    max_duration_minutes: Option<u32>,
    released_within_days: Option<u32>,
}

impl SearchFilter {
    /// Creates an empty filter that matches every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a genre to the accepted set
    ///
    /// The genre is normalized (trimmed, lowercased) to match how records
    /// store theirs.
    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genres.insert(genre.trim().to_lowercase());
        self
    }

    /// Adds a media kind to the accepted set
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_types.insert(media_type);
        self
    }

    /// Adds a content rating to the accepted set
    pub fn with_content_rating(mut self, rating: ContentRating) -> Self {
        self.content_ratings.insert(rating);
        self
    }

    /// Requires a minimum average rating
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::RatingOutOfRange` if the threshold is
    /// outside [1.0, 5.0].
    pub fn with_min_rating(mut self, min_rating: f64) -> Result<Self, ValidationError> {
        if !(1.0..=5.0).contains(&min_rating) {
            return Err(ValidationError::RatingOutOfRange(min_rating));
        }
        self.min_rating = Some(min_rating);
        Ok(self)
    }

    /// Requires a maximum duration in minutes
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotPositive` if the limit is zero.
    pub fn with_max_duration(mut self, minutes: u32) -> Result<Self, ValidationError> {
        if minutes == 0 {
            return Err(ValidationError::NotPositive("maximum duration"));
        }
        self.max_duration_minutes = Some(minutes);
        Ok(self)
    }

    /// Requires the content to have been released within the given window
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotPositive` if the window is zero days.
    pub fn with_release_window(mut self, days: u32) -> Result<Self, ValidationError> {
        if days == 0 {
            return Err(ValidationError::NotPositive("release window"));
        }
        self.released_within_days = Some(days);
        Ok(self)
    }

    /// Evaluates all configured conditions against a record
    ///
    /// Conditions are tested in sequence and evaluation stops at the first
    /// failing one; the result is order-independent since the filter is a
    /// pure conjunction.
    pub fn matches(&self, record: &ContentRecord, now: DateTime<Utc>) -> bool {
        if !self.genres.is_empty() && !self.genres.iter().any(|g| record.matches_genre(g)) {
            return false;
        }

        if !self.media_types.is_empty() && !self.media_types.contains(&record.media_type()) {
            return false;
        }

        if !self.content_ratings.is_empty()
            && !self.content_ratings.contains(&record.content_rating())
        {
            return false;
        }

        if let Some(min_rating) = self.min_rating {
            if record.average_rating() < min_rating {
                return false;
            }
        }

        if let Some(max_duration) = self.max_duration_minutes {
            if record.duration_minutes() > max_duration {
                return false;
            }
        }

        if let Some(days) = self.released_within_days {
            if !record.is_recently_released(days, now) {
                return false;
            }
        }

        true
    }
}
