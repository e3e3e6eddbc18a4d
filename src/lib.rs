//! media_catalog - In-memory digital media catalog
//!
//! This library provides a polymorphic content model for movies, TV shows,
//! music tracks and podcast episodes, and a library type that owns a
//! collection of such records and answers search, ranking and statistics
//! queries over them.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, Utc};
//! use media_catalog::{
//!     ContentRating, ContentRecord, MediaDetails, MediaLibrary, MediaType, SearchFilter,
//! };
//!
//! let movie = ContentRecord::new(
//!     "Inception",
//!     148,
//!     Utc::now() - Duration::days(400),
//!     ContentRating::Pg13,
//!     &["Sci-Fi", "Thriller"],
//!     "A thief steals corporate secrets through dream-sharing technology.",
//!     MediaDetails::movie(
//!         "Christopher Nolan",
//!         &["Leonardo DiCaprio", "Elliot Page"],
//!         Some(160_000_000.0),
//!         Some(836_000_000.0),
//!     )
//!     .unwrap(),
//! )
//! .unwrap();
//!
//! let mut library = MediaLibrary::new("Home Cinema");
//! library.add(movie).unwrap();
//! library.get_mut("inception").unwrap().add_rating(4.5).unwrap();
//!
//! let filter = SearchFilter::new()
//!     .with_media_type(MediaType::Movie)
//!     .with_min_rating(4.0)
//!     .unwrap();
//! let results = library.search("dream", Some(&filter));
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].title(), "Inception");
//! ```

mod clock;
mod content;
mod filter;
mod library;

// Re-export error types
pub use content::{StreamingError, ValidationError};
pub use library::LibraryError;

pub use clock::{Clock, FixedClock, SystemClock};
pub use content::{ContentRating, ContentRecord, MediaDetails, MediaType, ShowStatus};
pub use filter::SearchFilter;
pub use library::{LibraryStatistics, MediaLibrary};
