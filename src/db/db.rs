use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::{Connection, Result};
use std::path::Path;

pub const DB_FILE_NAME: &str = "studman.db";

/// Owned SQLite connection. Created once per run and handed to the store,
/// which releases it when closed or dropped.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the per-user data directory.
    pub fn new() -> anyhow::Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Self::open(&db_file_path)?)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        msg_debug!("{}", Message::DatabaseOpened(path.display().to_string()));

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;

        Ok(Db { conn })
    }

    /// Closes the connection, reporting any error SQLite raises while doing so.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, error)| error)?;
        msg_debug!("{}", Message::DatabaseClosed);
        Ok(())
    }
}
