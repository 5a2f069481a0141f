//! Quran SDK
//!
//! Read-only access to the bundled Quran text database plus static
//! chapter/verse metadata: surah names and verse counts, hizb-quarter
//! numbering, and a small quote list with a random picker.
//!
//! The database accessor owns a single lazily-opened SQLite handle; see
//! [`QuranDatabase`] for the open/copy-on-first-use lifecycle.

pub mod database;
pub mod error;
pub mod hizb;
pub mod quotes;
pub mod surah;

pub use database::{bundled_database_path, internal_storage_dir, QuranDatabase, DATABASE_NAME};
pub use error::{ErrorCause, QuranError};
pub use hizb::{HizbQuarter, HIZB_COUNT, HIZB_QUARTER_COUNT, QUARTERS_PER_HIZB};
pub use quotes::{QuranQuotes, MAX_QUOTE_LENGTH};
pub use surah::{Surah, SURAH_COUNT, TOTAL_VERSE_COUNT};
