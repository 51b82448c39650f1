pub mod csv_writer;
pub mod sqlite_store;
