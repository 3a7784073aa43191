// ABOUTME: The person access facade: list, create, and fetch persons over SQLite.
// ABOUTME: Opens one session per call and keeps writes inside a single transaction.

use roster_core::{NewPerson, Person};
use rusqlite::{Row, TransactionBehavior, params};

use crate::error::StoreError;
use crate::handle::StoreHandle;

/// Facade over the person store. Mediates all access, hiding session and
/// transaction management from callers.
///
/// Construct with an already-opened [`StoreHandle`]; the facade opens a
/// private session per operation and never holds one across calls, so a
/// single instance can be shared freely between concurrent callers.
#[derive(Debug, Clone)]
pub struct PersonStore {
    handle: StoreHandle,
}

impl PersonStore {
    /// Build the facade around the given store handle.
    pub fn new(handle: StoreHandle) -> Self {
        Self { handle }
    }

    /// Every person currently in the store, ordered by id.
    pub fn list_all(&self) -> Result<Vec<Person>, StoreError> {
        let conn = self.handle.session()?;
        let mut stmt = conn
            .prepare("SELECT person_id, first_name, last_name FROM person ORDER BY person_id")
            .map_err(StoreError::Unavailable)?;

        let rows = stmt
            .query_map([], person_from_row)
            .map_err(StoreError::Unavailable)?;

        let mut persons = Vec::new();
        for row in rows {
            persons.push(row.map_err(StoreError::Unavailable)?);
        }
        Ok(persons)
    }

    /// Persist a new person inside a single transaction and return it with
    /// its store-assigned id. All-or-nothing: if the transaction cannot
    /// commit it rolls back on drop and nothing becomes visible.
    pub fn create(&self, person: NewPerson) -> Result<Person, StoreError> {
        let mut conn = self.handle.session()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(StoreError::Persistence)?;

        tx.execute(
            "INSERT INTO person (first_name, last_name) VALUES (?1, ?2)",
            params![person.first_name, person.last_name],
        )
        .map_err(StoreError::Persistence)?;
        let id = tx.last_insert_rowid();

        tx.commit().map_err(StoreError::Persistence)?;

        Ok(Person {
            id,
            first_name: person.first_name,
            last_name: person.last_name,
        })
    }

    /// The person with the given id, or `None` if no such record exists.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Person>, StoreError> {
        let conn = self.handle.session()?;
        let result = conn.query_row(
            "SELECT person_id, first_name, last_name FROM person WHERE person_id = ?1",
            params![id],
            person_from_row,
        );

        match result {
            Ok(person) => Ok(Some(person)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Unavailable(e)),
        }
    }

    /// Shut down the underlying store.
    pub fn close(self) -> Result<(), StoreError> {
        self.handle.close()
    }
}

/// Map one SQLite row onto a Person. The single place where the column
/// order is fixed: person_id, first_name, last_name.
fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
    })
}
