//! Media library management
//!
//! This module provides [`MediaLibrary`], the owning collection of content
//! records. The library keeps its records in insertion order, maintains a
//! per-kind index in lockstep with the primary collection, and builds the
//! search, ranking and statistics operations on top of the record model and
//! [`SearchFilter`].

use crate::clock::{Clock, SystemClock};
use crate::content::{ContentRecord, MediaType, round_one_decimal};
use crate::filter::SearchFilter;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during library operations
#[derive(Debug, Error, PartialEq)]
pub enum LibraryError {
    /// A record with the same title already exists in the library
    #[error("content '{0}' already exists in library")]
    DuplicateContent(String),
}

/// Aggregate snapshot of a library's contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryStatistics {
    /// Total number of records
    pub total_content: usize,
    /// Sum of every record's view count
    pub total_views: u64,
    /// Record count per media kind (every kind present, zero-filled)
    pub content_by_type: HashMap<MediaType, usize>,
    /// Mean average rating across records with at least one rating
    pub average_rating: f64,
    /// Sum of all durations in hours, rounded to one decimal
    pub total_runtime_hours: f64,
}

/// An owning, in-memory collection of content records
///
/// Records are stored in insertion order and addressed by title: titles are
/// unique within a library (case-sensitive on insert, matched
/// case-insensitively on lookup and removal). The library holds a [`Clock`]
/// so every recency-based operation reads "now" from an injectable source.
pub struct MediaLibrary {
    name: String,
    content: Vec<ContentRecord>,
    by_type: HashMap<MediaType, Vec<String>>,
    created_at: DateTime<Utc>,
    clock: Box<dyn Clock>,
}

impl MediaLibrary {
    /// Creates an empty library using the system clock
    pub fn new(name: &str) -> Self {
        Self::with_clock(name, Box::new(SystemClock))
    }

    /// Creates an empty library reading time from the given clock
    pub fn with_clock(name: &str, clock: Box<dyn Clock>) -> Self {
        let by_type = MediaType::ALL
            .iter()
            .map(|media_type| (*media_type, Vec::new()))
            .collect();

        Self {
            name: name.to_string(),
            content: Vec::new(),
            by_type,
            created_at: clock.now(),
            clock,
        }
    }

    /// Returns the library name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the instant this library was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the total number of records
    pub fn total_content(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the library holds no records
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the sum of every record's view count
    pub fn total_views(&self) -> u64 {
        self.content.iter().map(ContentRecord::view_count).sum()
    }

    /// Adds a record to the library
    ///
    /// The record is appended to the primary collection and to its kind
    /// index together.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::DuplicateContent` if a record with the same
    /// title (case-sensitive, regardless of kind) already exists; the
    /// library is unchanged in that case.
    pub fn add(&mut self, record: ContentRecord) -> Result<(), LibraryError> {
        if self.content.iter().any(|existing| existing.title() == record.title()) {
            return Err(LibraryError::DuplicateContent(record.title().to_string()));
        }

        self.by_type
            .entry(record.media_type())
            .or_default()
            .push(record.title().to_string());
        self.content.push(record);
        Ok(())
    }

    /// Removes the first record whose title matches, case-insensitively
    ///
    /// Returns whether a removal occurred; a missing title is a no-op, not
    /// an error. The record is dropped from the primary collection and its
    /// kind index together.
    pub fn remove(&mut self, title: &str) -> bool {
        let needle = title.to_lowercase();
        let Some(position) = self
            .content
            .iter()
            .position(|record| record.title().to_lowercase() == needle)
        else {
            return false;
        };

        let record = self.content.remove(position);
        if let Some(titles) = self.by_type.get_mut(&record.media_type()) {
            if let Some(index) = titles.iter().position(|t| t == record.title()) {
                titles.remove(index);
            }
        }
        true
    }

    /// Looks up a record by title, case-insensitively
    pub fn get(&self, title: &str) -> Option<&ContentRecord> {
        let needle = title.to_lowercase();
        self.content
            .iter()
            .find(|record| record.title().to_lowercase() == needle)
    }

    /// Looks up a record by title for mutation (views, ratings)
    pub fn get_mut(&mut self, title: &str) -> Option<&mut ContentRecord> {
        let needle = title.to_lowercase();
        self.content
            .iter_mut()
            .find(|record| record.title().to_lowercase() == needle)
    }

    /// Returns all records of the given kind, in insertion order
    pub fn content_by_type(&self, media_type: MediaType) -> Vec<&ContentRecord> {
        self.by_type
            .get(&media_type)
            .map(|titles| {
                titles
                    .iter()
                    .filter_map(|title| self.content.iter().find(|r| r.title() == title))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Searches the library with a free-text query and an optional filter
    ///
    /// A record is returned when the query is empty or matches its title,
    /// description or a genre, and when the filter (if any) accepts it.
    /// Results preserve insertion order.
    pub fn search(&self, query: &str, filter: Option<&SearchFilter>) -> Vec<&ContentRecord> {
        let now = self.clock.now();
        self.content
            .iter()
            .filter(|record| query.is_empty() || record.matches_search(query))
            .filter(|record| filter.is_none_or(|f| f.matches(record, now)))
            .collect()
    }

    /// Returns the highest-rated records, best first
    ///
    /// Only records with at least one rating are considered. Ties keep
    /// their original relative order.
    pub fn top_rated(&self, limit: usize) -> Vec<&ContentRecord> {
        let mut rated: Vec<&ContentRecord> = self
            .content
            .iter()
            .filter(|record| record.average_rating() > 0.0)
            .collect();
        rated.sort_by(|a, b| b.average_rating().total_cmp(&a.average_rating()));
        rated.truncate(limit);
        rated
    }

    /// Returns the most viewed records, highest first
    ///
    /// Ties keep their original relative order.
    pub fn most_viewed(&self, limit: usize) -> Vec<&ContentRecord> {
        let mut records: Vec<&ContentRecord> = self.content.iter().collect();
        records.sort_by(|a, b| b.view_count().cmp(&a.view_count()));
        records.truncate(limit);
        records
    }

    /// Returns records added to the library within the given number of days
    pub fn recently_added(&self, days: u32) -> Vec<&ContentRecord> {
        let cutoff = self.clock.now() - Duration::days(i64::from(days));
        self.content
            .iter()
            .filter(|record| record.created_at() >= cutoff)
            .collect()
    }

    /// Computes an aggregate snapshot of the library
    pub fn statistics(&self) -> LibraryStatistics {
        let content_by_type = MediaType::ALL
            .iter()
            .map(|media_type| {
                let count = self
                    .by_type
                    .get(media_type)
                    .map(Vec::len)
                    .unwrap_or_default();
                (*media_type, count)
            })
            .collect();

        let rated: Vec<f64> = self
            .content
            .iter()
            .map(ContentRecord::average_rating)
            .filter(|average| *average > 0.0)
            .collect();
        let average_rating = if rated.is_empty() {
            0.0
        } else {
            rated.iter().sum::<f64>() / rated.len() as f64
        };

        let total_minutes: u64 = self
            .content
            .iter()
            .map(|record| u64::from(record.duration_minutes()))
            .sum();

        LibraryStatistics {
            total_content: self.content.len(),
            total_views: self.total_views(),
            content_by_type,
            average_rating,
            total_runtime_hours: round_one_decimal(total_minutes as f64 / 60.0),
        }
    }
}
