//! Accessor for the bundled Quran dataset.
//!
//! The dataset ships with the package as a pre-built, read-only SQLite file.
//! On first use it is copied once into the application's internal storage;
//! every later run finds the copy already in place and reuses it. A single
//! lazily-opened connection serves all point lookups.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, OpenFlags, Params};
use tracing::{debug, warn};

use crate::error::{ErrorCause, QuranError};

/// File name of the dataset, both in the package and in internal storage.
pub const DATABASE_NAME: &str = "quran.db";

/// Folder name for the SDK's internal storage under the platform data dir.
const STORAGE_DIR_NAME: &str = "QuranSdk";

/// Accessor for the bundled read-only Quran database.
///
/// Holds at most one live connection. Opening is lazy: the first read (or an
/// explicit [`open_database`](Self::open_database) call) materialises the
/// dataset in internal storage and opens a read-only handle to it, which is
/// then reused until [`close_database`](Self::close_database).
///
/// No internal locking; callers using an accessor from multiple threads must
/// serialize access themselves.
pub struct QuranDatabase {
    bundled_path: PathBuf,
    storage_dir: PathBuf,
    connection: Option<Connection>,
}

impl QuranDatabase {
    /// Create an accessor with the bundled dataset and internal storage
    /// resolved by platform convention.
    pub fn new() -> Result<Self, QuranError> {
        let storage_dir = internal_storage_dir().map_err(|e| QuranError::FailedOpeningDatabase {
            message: "could not resolve internal storage directory".to_string(),
            source: Some(ErrorCause::Message(format!("{e:#}"))),
        })?;
        Ok(Self::with_paths(bundled_database_path(), storage_dir))
    }

    /// Create an accessor with explicit locations for the bundled dataset
    /// and the internal storage directory.
    pub fn with_paths(bundled_path: impl Into<PathBuf>, storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundled_path: bundled_path.into(),
            storage_dir: storage_dir.into(),
            connection: None,
        }
    }

    /// Path of the writable copy inside internal storage.
    pub fn internal_database_path(&self) -> PathBuf {
        self.storage_dir.join(DATABASE_NAME)
    }

    /// Open the database, copying the bundled dataset into internal storage
    /// first if no copy exists yet. No-op if a handle is already open.
    pub fn open_database(&mut self) -> Result<(), QuranError> {
        if self.connection.is_some() {
            return Ok(());
        }

        if !self.is_database_exists_in_internal_storage() {
            self.copy_database_to_internal_storage()?;
        }

        let path = self.internal_database_path();
        let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
            |e| QuranError::FailedOpeningDatabase {
                message: format!("could not open {}", path.display()),
                source: Some(ErrorCause::Sqlite(e)),
            },
        )?;
        debug!(path = %path.display(), "opened Quran database");
        self.connection = Some(conn);
        Ok(())
    }

    /// Release the open handle. No-op if the database is not open.
    pub fn close_database(&mut self) -> Result<(), QuranError> {
        let Some(conn) = self.connection.take() else {
            return Ok(());
        };
        if let Err((conn, e)) = conn.close() {
            // Keep the handle so the accessor still reports open.
            self.connection = Some(conn);
            return Err(QuranError::FailedClosingDatabase { source: e });
        }
        debug!("closed Quran database");
        Ok(())
    }

    /// True iff a live handle is held.
    pub fn is_database_open(&self) -> bool {
        self.connection.is_some()
    }

    /// True iff the writable copy exists in internal storage. An existence
    /// check that itself fails reads as absent.
    pub fn is_database_exists_in_internal_storage(&self) -> bool {
        match fs::metadata(self.internal_database_path()) {
            Ok(metadata) => metadata.is_file(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                warn!("existence check failed, treating database as absent: {e}");
                false
            }
        }
    }

    /// All 114 chapter names, in chapter-number order.
    pub fn get_surah_names(&mut self) -> Result<Vec<String>, QuranError> {
        self.query_texts("SELECT name FROM surah_names ORDER BY sura", [])
            .map_err(|e| wrap_query_failure("could not read surah names", e))
    }

    /// The name of the given chapter (1..=114).
    pub fn get_surah_name(&mut self, surah_number: u16) -> Result<String, QuranError> {
        self.query_texts(
            "SELECT name FROM surah_names WHERE sura = ?1",
            params![surah_number],
        )
        .map_err(|e| wrap_query_failure("could not read surah name", e))?
        .into_iter()
        .next()
        .ok_or_else(|| QuranError::FailedExecutingQuery {
            message: format!("no surah name found for surah {surah_number}"),
            source: None,
        })
    }

    /// All verse texts of the given chapter, in verse-number order.
    pub fn get_ayahs_in_surah(&mut self, surah_number: u16) -> Result<Vec<String>, QuranError> {
        self.query_texts(
            "SELECT text FROM quran_text WHERE sura = ?1 ORDER BY aya",
            params![surah_number],
        )
        .map_err(|e| wrap_query_failure("could not read ayahs", e))
    }

    /// The text of a single verse, addressed by (chapter, verse).
    pub fn get_ayah(&mut self, surah_number: u16, ayah_number: u16) -> Result<String, QuranError> {
        self.query_texts(
            "SELECT text FROM quran_text WHERE sura = ?1 AND aya = ?2",
            params![surah_number, ayah_number],
        )
        .map_err(|e| wrap_query_failure("could not read ayah", e))?
        .into_iter()
        .next()
        .ok_or_else(|| QuranError::FailedExecutingQuery {
            message: format!("no ayah found at {surah_number}:{ayah_number}"),
            source: None,
        })
    }

    /// Run a statement and collect the first text column of every row.
    /// The prepared statement is dropped on every exit path.
    fn query_texts<P: Params>(&mut self, sql: &str, params: P) -> Result<Vec<String>, QuranError> {
        self.open_database()?;
        let conn = match &self.connection {
            Some(conn) => conn,
            None => {
                return Err(QuranError::FailedOpeningDatabase {
                    message: "no connection after open".to_string(),
                    source: None,
                })
            }
        };

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| QuranError::FailedPreparingQuery {
                sql: sql.to_string(),
                source: e,
            })?;
        let texts = stmt
            .query_map(params, |row| row.get::<_, String>(0))
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<String>>>())
            .map_err(|e| QuranError::FailedExecutingQuery {
                message: format!("query `{sql}` failed"),
                source: Some(ErrorCause::Sqlite(e)),
            })?;
        Ok(texts)
    }

    /// Copy the bundled dataset into internal storage.
    fn copy_database_to_internal_storage(&self) -> Result<(), QuranError> {
        if !self.bundled_path.is_file() {
            return Err(QuranError::FailedLocatingBundledResource {
                name: DATABASE_NAME.to_string(),
                path: self.bundled_path.clone(),
            });
        }

        fs::create_dir_all(&self.storage_dir).map_err(|e| QuranError::FailedOpeningDatabase {
            message: format!(
                "could not create storage directory {}",
                self.storage_dir.display()
            ),
            source: Some(ErrorCause::Io(e)),
        })?;

        let destination = self.internal_database_path();
        fs::copy(&self.bundled_path, &destination).map_err(|e| {
            QuranError::FailedOpeningDatabase {
                message: format!(
                    "could not copy {} to {}",
                    self.bundled_path.display(),
                    destination.display()
                ),
                source: Some(ErrorCause::Io(e)),
            }
        })?;
        debug!(
            from = %self.bundled_path.display(),
            to = %destination.display(),
            "copied bundled Quran database to internal storage"
        );
        Ok(())
    }
}

/// Surface read failures as `FailedExecutingQuery`, keeping the original
/// failure as the cause. Execution failures pass through untouched.
fn wrap_query_failure(message: &str, err: QuranError) -> QuranError {
    match err {
        e @ QuranError::FailedExecutingQuery { .. } => e,
        other => QuranError::FailedExecutingQuery {
            message: message.to_string(),
            source: Some(ErrorCause::from(other)),
        },
    }
}

/// Internal storage directory for the SDK's writable copy.
///
/// - macOS: `~/Library/Application Support/QuranSdk/`
/// - Windows/Linux: the platform data dir, falling back to a `data` folder
///   next to the executable (portable installs)
pub fn internal_storage_dir() -> Result<PathBuf> {
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join(STORAGE_DIR_NAME));
    }
    let exe_path = std::env::current_exe().context("could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .ok_or_else(|| anyhow!("executable path {:?} has no parent", exe_path))?;
    Ok(exe_dir.join("data"))
}

/// Locate the read-only dataset shipped with the package.
///
/// Checks a `resources` folder next to the executable first (installed
/// layout), then the executable's own directory, then a `resources` folder
/// relative to the working directory (dev builds). When nothing exists the
/// first candidate is returned and the open path reports it as missing.
pub fn bundled_database_path() -> PathBuf {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("resources").join(DATABASE_NAME));
            candidates.push(exe_dir.join(DATABASE_NAME));
        }
    }
    candidates.push(Path::new("resources").join(DATABASE_NAME));

    for candidate in &candidates {
        if candidate.is_file() {
            return candidate.clone();
        }
    }
    candidates
        .into_iter()
        .next()
        .unwrap_or_else(|| Path::new("resources").join(DATABASE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surah::Surah;
    use tempfile::TempDir;

    /// Build a bundled-dataset fixture: full surah_names table plus the
    /// verses of chapters 1 and 114.
    fn create_bundled_fixture(dir: &Path) -> PathBuf {
        let path = dir.join(DATABASE_NAME);
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE surah_names (sura INTEGER PRIMARY KEY, name TEXT NOT NULL);
            CREATE TABLE quran_text (
                sura INTEGER NOT NULL,
                aya INTEGER NOT NULL,
                text TEXT NOT NULL,
                PRIMARY KEY (sura, aya)
            );
            "#,
        )
        .unwrap();

        for surah in Surah::all() {
            conn.execute(
                "INSERT INTO surah_names (sura, name) VALUES (?1, ?2)",
                params![surah.number(), surah.name()],
            )
            .unwrap();
        }
        for surah_number in [1u16, 114] {
            let verse_count = Surah::from_number(surah_number).unwrap().verse_count();
            for aya in 1..=verse_count {
                conn.execute(
                    "INSERT INTO quran_text (sura, aya, text) VALUES (?1, ?2, ?3)",
                    params![surah_number, aya, format!("verse {surah_number}:{aya}")],
                )
                .unwrap();
            }
        }
        conn.close().unwrap();
        path
    }

    struct Fixture {
        _bundle_dir: TempDir,
        _storage_root: TempDir,
        db: QuranDatabase,
    }

    fn fixture() -> Fixture {
        let bundle_dir = TempDir::new().unwrap();
        let storage_root = TempDir::new().unwrap();
        let bundled = create_bundled_fixture(bundle_dir.path());
        let db = QuranDatabase::with_paths(bundled, storage_root.path().join("internal"));
        Fixture {
            _bundle_dir: bundle_dir,
            _storage_root: storage_root,
            db,
        }
    }

    #[test]
    fn open_then_close_leaves_database_closed() {
        let mut f = fixture();
        assert!(!f.db.is_database_open());

        f.db.open_database().unwrap();
        assert!(f.db.is_database_open());
        assert!(f.db.is_database_exists_in_internal_storage());

        f.db.close_database().unwrap();
        assert!(!f.db.is_database_open());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut f = fixture();
        f.db.open_database().unwrap();
        f.db.open_database().unwrap();
        assert!(f.db.is_database_open());

        f.db.close_database().unwrap();
        f.db.close_database().unwrap();
        assert!(!f.db.is_database_open());
    }

    #[test]
    fn close_without_open_is_a_no_op() {
        let mut f = fixture();
        f.db.close_database().unwrap();
        assert!(!f.db.is_database_open());
    }

    #[test]
    fn existing_copy_is_reused_on_later_runs() {
        let mut f = fixture();
        f.db.open_database().unwrap();
        f.db.close_database().unwrap();

        // Even with the bundle gone, a fresh accessor finds the copy.
        let bundled = f.db.bundled_path.clone();
        let storage = f.db.storage_dir.clone();
        fs::remove_file(&bundled).unwrap();

        let mut reopened = QuranDatabase::with_paths(bundled, storage);
        assert!(reopened.is_database_exists_in_internal_storage());
        reopened.open_database().unwrap();
        assert_eq!(reopened.get_surah_name(1).unwrap(), "Al-Fatihah");
    }

    #[test]
    fn missing_bundle_reports_locating_failure() {
        let storage_root = TempDir::new().unwrap();
        let mut db = QuranDatabase::with_paths(
            storage_root.path().join("nowhere").join(DATABASE_NAME),
            storage_root.path().join("internal"),
        );
        let err = db.open_database().unwrap_err();
        assert!(matches!(
            err,
            QuranError::FailedLocatingBundledResource { .. }
        ));
        assert!(!db.is_database_open());
    }

    #[test]
    fn reads_open_the_database_implicitly() {
        let mut f = fixture();
        assert!(!f.db.is_database_open());

        let names = f.db.get_surah_names().unwrap();
        assert!(f.db.is_database_open());
        assert_eq!(names.len(), usize::from(crate::surah::SURAH_COUNT));
        assert_eq!(names[0], "Al-Fatihah");
        assert_eq!(names[113], "An-Nas");
    }

    #[test]
    fn get_surah_name_returns_every_seeded_chapter() {
        let mut f = fixture();
        for surah in Surah::all() {
            let name = f.db.get_surah_name(surah.number()).unwrap();
            assert_eq!(name, surah.name());
        }
    }

    #[test]
    fn get_surah_name_fails_for_unknown_chapter() {
        let mut f = fixture();
        let err = f.db.get_surah_name(115).unwrap_err();
        assert!(matches!(err, QuranError::FailedExecutingQuery { .. }));
    }

    #[test]
    fn get_ayahs_in_surah_matches_known_verse_counts() {
        let mut f = fixture();

        let fatihah = f.db.get_ayahs_in_surah(1).unwrap();
        assert_eq!(fatihah.len(), 7);
        assert_eq!(fatihah[0], "verse 1:1");
        assert_eq!(fatihah[6], "verse 1:7");

        let nas = f.db.get_ayahs_in_surah(114).unwrap();
        assert_eq!(nas.len(), 6);
    }

    #[test]
    fn get_ayahs_in_surah_is_empty_for_unseeded_chapter() {
        let mut f = fixture();
        assert!(f.db.get_ayahs_in_surah(2).unwrap().is_empty());
    }

    #[test]
    fn get_ayah_returns_the_addressed_verse() {
        let mut f = fixture();
        assert_eq!(f.db.get_ayah(1, 1).unwrap(), "verse 1:1");
        assert_eq!(f.db.get_ayah(114, 6).unwrap(), "verse 114:6");
    }

    #[test]
    fn get_ayah_fails_for_out_of_range_verse() {
        let mut f = fixture();
        let err = f.db.get_ayah(1, 8).unwrap_err();
        assert!(matches!(err, QuranError::FailedExecutingQuery { .. }));
    }
}
