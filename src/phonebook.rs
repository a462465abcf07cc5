//! Phonebook
//!
//! Ties configuration, loading and reporting around a single table of
//! records keyed by name.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{PhonebookError, Result};
use crate::loader::{LoadSummary, Loader};
use crate::record::Record;
use crate::report;
use crate::table::{Entry, HashTable};

/// An in-memory phonebook
pub struct Phonebook {
    config: Config,
    table: HashTable<Record>,
}

impl Phonebook {
    /// Create an empty phonebook
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let table = HashTable::new(config.table_size)?;
        Ok(Self { config, table })
    }

    /// Create a phonebook and load it from the file at `path`
    pub fn open(path: impl AsRef<Path>, config: Config) -> Result<(Self, LoadSummary)> {
        let path = path.as_ref();
        let mut phonebook = Self::new(config)?;

        let file = File::open(path).map_err(|source| PhonebookError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Reading records from {}", path.display());

        let summary = phonebook.load(BufReader::new(file))?;
        Ok((phonebook, summary))
    }

    /// Load additional records from any buffered reader
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<LoadSummary> {
        Loader::new(&self.config).load(reader, &mut self.table)
    }

    /// Add a record under its name
    pub fn add(&mut self, record: Record) -> &Record {
        self.table.insert(record.name.clone(), record).value()
    }

    /// Most recently added record for `name`
    pub fn lookup(&self, name: &str) -> Result<&Record> {
        self.table.lookup(name).map(Entry::value)
    }

    /// Remove the most recently added record for `name`
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        self.table.delete(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying table, for traversal and statistics
    pub fn table(&self) -> &HashTable<Record> {
        &self.table
    }

    /// Write the bucket dump and collision rate to `out`
    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        report::write_report(&self.table, out)
    }
}
