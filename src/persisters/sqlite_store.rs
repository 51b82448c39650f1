use std::path::Path;

use rusqlite::{params, Connection};

use crate::{error::StoreError, model::movie::MovieRecord};

pub const INSERT_SQL: &str = "
    INSERT INTO douban_top100 (title, director, year, rating, quote)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS douban_top100 (
        id       INTEGER PRIMARY KEY,
        title    TEXT NOT NULL,
        director TEXT NOT NULL,
        year     INTEGER NOT NULL,
        rating   REAL NOT NULL,
        quote    TEXT NOT NULL
    );
";

/// Relational sink for scraped records.
pub struct MovieStore {
    conn: Connection,
}

impl MovieStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(CREATE_TABLE_SQL)?;
        Ok(Self { conn })
    }

    /// Runs `insert_sql` once per record inside one transaction and returns the rows affected.
    pub fn batch_execute(
        &mut self,
        insert_sql: &str,
        movies: &[MovieRecord],
    ) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let mut affected = 0;
        {
            let mut stmt = tx.prepare(insert_sql)?;
            for movie in movies {
                affected += stmt.execute(params![
                    movie.title,
                    movie.director,
                    movie.year,
                    movie.rating,
                    movie.quote,
                ])?;
            }
        }
        tx.commit()?;
        Ok(affected)
    }

    pub fn insert_movies(&mut self, movies: &[MovieRecord]) -> Result<usize, StoreError> {
        self.batch_execute(INSERT_SQL, movies)
    }

    pub fn load_movies(&self) -> Result<Vec<MovieRecord>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, director, year, rating, quote FROM douban_top100 ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(MovieRecord {
                title: row.get(0)?,
                director: row.get(1)?,
                year: row.get(2)?,
                rating: row.get(3)?,
                quote: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))
    }
}
