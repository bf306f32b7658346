use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

use crate::config::{validate_identifier, Config};
use crate::error::Result;
use crate::ontology::OntologySource;

/// Reads the skill vocabulary from a SQLite table, one connection per load.
pub struct SqliteOntology {
    path: PathBuf,
    query: String,
}

impl SqliteOntology {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            query: "SELECT skill FROM ontology".to_string(),
        }
    }

    pub fn with_table(path: impl AsRef<Path>, table: &str, column: &str) -> Result<Self> {
        validate_identifier("table", table)?;
        validate_identifier("column", column)?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            query: format!("SELECT {} FROM {}", column, table),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_table(
            &config.database_path,
            &config.ontology_table,
            &config.ontology_column,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn query_skills(&self, conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(&self.query)?;

        let rows = stmt.query_map([], |row| row.get::<_, Option<String>>(0))?;

        let skills = rows
            .collect::<std::result::Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .filter(|skill| !skill.trim().is_empty())
            .collect();

        Ok(skills)
    }
}

impl OntologySource for SqliteOntology {
    fn load(&self) -> Result<Vec<String>> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let skills = self.query_skills(&conn);

        // Released before the query result, success or not, leaves this call.
        if let Err((_, e)) = conn.close() {
            tracing::warn!("Failed to close ontology connection: {}", e);
        }

        let skills = skills?;
        tracing::debug!("Loaded {} ontology skills from {}", skills.len(), self.path.display());
        Ok(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rusqlite::params;

    fn seed(path: &Path, skills: &[Option<&str>]) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch("CREATE TABLE ontology (id INTEGER PRIMARY KEY, skill TEXT);")
            .unwrap();
        for skill in skills {
            conn.execute("INSERT INTO ontology (skill) VALUES (?1)", params![skill])
                .unwrap();
        }
    }

    #[test]
    fn test_load_returns_stored_skills() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ontology.db");
        seed(&path, &[Some("Python"), Some("SQL"), Some("Project Management")]);

        let skills = SqliteOntology::new(&path).load().unwrap();
        assert_eq!(skills, vec!["Python", "SQL", "Project Management"]);
    }

    #[test]
    fn test_load_skips_null_and_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ontology.db");
        seed(&path, &[Some("Rust"), None, Some("   "), Some("Go")]);

        let skills = SqliteOntology::new(&path).load().unwrap();
        assert_eq!(skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_missing_database_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");

        let err = SqliteOntology::new(&path).load().unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_missing_table_propagates_query_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE users (id INTEGER);")
            .unwrap();

        let result = SqliteOntology::new(&path).load();
        assert!(matches!(result, Err(Error::Ontology(_))));
    }

    #[test]
    fn test_custom_table_and_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE vocabulary (name TEXT); INSERT INTO vocabulary VALUES ('Kubernetes');",
        )
        .unwrap();
        drop(conn);

        let ontology = SqliteOntology::with_table(&path, "vocabulary", "name").unwrap();
        assert_eq!(ontology.load().unwrap(), vec!["Kubernetes"]);

        assert!(SqliteOntology::with_table(&path, "vocabulary", "name--").is_err());
    }
}
