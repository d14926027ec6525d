//! Contact store backed by a `.vcf` file.

use super::index::ContactIndex;
use super::traits::ContactStore;
use crate::error::{StoreError, StoreResult};
use crate::models::ContactRef;
use crate::parser::CardParser;
use crate::vcard;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Extension a contacts file must carry.
pub const VCF_EXTENSION: &str = "vcf";

/// Where a [`FileContactStore`] is in its setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    FilePathSet,
    Initialized,
}

/// Contacts loaded from one vCard file and held in memory.
///
/// ```no_run
/// use contact_lookup::store::{ContactStore, FileContactStore};
/// use std::path::Path;
///
/// let mut store = FileContactStore::new();
/// if store.set_path(Path::new("contacts.vcf")) && store.initialize() {
///     println!("{} contacts", store.count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct FileContactStore {
    path: Option<PathBuf>,
    index: Option<ContactIndex>,
}

impl FileContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StoreState {
        match (&self.index, &self.path) {
            (Some(_), _) => StoreState::Initialized,
            (None, Some(_)) => StoreState::FilePathSet,
            (None, None) => StoreState::Uninitialized,
        }
    }

    /// The accepted contacts file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The loaded indexes, if the store is initialized.
    pub fn index(&self) -> Option<&ContactIndex> {
        self.index.as_ref()
    }

    /// Check that `path` names an existing regular file with the `.vcf` extension.
    pub fn validate_path(path: &Path) -> StoreResult<()> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(StoreError::NotAFile(path.to_path_buf()));
        }
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(VCF_EXTENSION));
        if !has_extension {
            return Err(StoreError::WrongExtension {
                path: path.to_path_buf(),
                expected: VCF_EXTENSION.to_string(),
            });
        }
        Ok(())
    }

    /// Read, decode, parse and index a contacts file.
    ///
    /// Unusable records are skipped; any failure to read or decode the file
    /// as a whole is an error.
    pub fn load(path: &Path) -> StoreResult<ContactIndex> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        let records = vcard::decode(&text)?;

        let mut parser = CardParser::new();
        let index = ContactIndex::build(records.iter().filter_map(|record| parser.parse(record)));

        let skipped = records.len() - index.len();
        if skipped > 0 {
            warn!(
                path = %path.display(),
                skipped,
                "Some card records could not be parsed"
            );
        }
        Ok(index)
    }
}

impl ContactStore for FileContactStore {
    fn set_path(&mut self, path: &Path) -> bool {
        match Self::validate_path(path) {
            Ok(()) => {
                info!(path = %path.display(), "Contacts file path set");
                self.path = Some(path.to_path_buf());
                true
            }
            Err(e) => {
                warn!(operation = "set_path", error = %e, "Rejected contacts file path");
                false
            }
        }
    }

    fn initialize(&mut self) -> bool {
        info!("Initializing file data store");

        let Some(path) = self.path.as_deref() else {
            error!(operation = "initialize", error = %StoreError::PathNotSet, "Cannot initialize");
            return false;
        };

        match Self::load(path) {
            Ok(index) => {
                info!(
                    path = %path.display(),
                    contacts = index.len(),
                    first_names = index.name_tree().len(),
                    "File data store initialized"
                );
                self.index = Some(index);
                true
            }
            Err(e) => {
                error!(
                    operation = "initialize",
                    path = %path.display(),
                    error = %e,
                    "Failed to load contacts file"
                );
                self.index = None;
                false
            }
        }
    }

    fn is_initialized(&self) -> bool {
        self.index.is_some()
    }

    fn get_contact(&self, id: i64) -> Option<ContactRef> {
        self.index()?.get(id).cloned()
    }

    fn get_contacts(&self) -> &[ContactRef] {
        self.index().map(ContactIndex::all).unwrap_or_default()
    }

    fn get_contacts_by_first_name(&self, first_name: &str) -> &[ContactRef] {
        self.index()
            .map(|index| index.by_first_name(first_name))
            .unwrap_or_default()
    }

    fn get_contact_by_phone_number(&self, phone_number: &str) -> Option<ContactRef> {
        self.index()?.by_phone_number(phone_number).cloned()
    }

    fn get_contact_by_email(&self, email: &str) -> Option<ContactRef> {
        self.index()?.by_email(email).cloned()
    }

    fn get_contacts_by_country(&self, country: &str) -> &[ContactRef] {
        self.index()
            .map(|index| index.by_country(country))
            .unwrap_or_default()
    }

    fn get_contacts_by_state(&self, state: &str) -> &[ContactRef] {
        self.index()
            .map(|index| index.by_state(state))
            .unwrap_or_default()
    }

    fn count(&self) -> usize {
        self.index().map_or(0, ContactIndex::len)
    }
}
