//! TranslationTable: public layer over `ChainTable`.
//!
//! Adds headword validation, the empty-argument contract and the
//! space-separated output format. Every entry maps one headword to an
//! ordered, duplicate-free set of translations.

use crate::chain_table::ChainTable;
use crate::error::TableError;
use crate::headword::is_well_formed;
use std::collections::BTreeSet;
use std::io::Write;

#[derive(Debug, Default)]
pub struct TranslationTable {
    inner: ChainTable<BTreeSet<String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self {
            inner: ChainTable::new(),
        }
    }

    /// Start with `capacity` buckets instead of the default eight.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: ChainTable::with_capacity(capacity),
        }
    }

    /// Number of distinct headwords.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Add `translation` to `headword`'s set, creating the entry if needed.
    ///
    /// Returns `Ok(true)` if the translation was new, `Ok(false)` if it was
    /// already present or the headword is malformed (logged as a warning).
    /// Empty arguments are rejected with an error before anything else.
    pub fn insert(&mut self, headword: &str, translation: &str) -> Result<bool, TableError> {
        if headword.is_empty() {
            return Err(TableError::EmptyHeadword);
        }
        if translation.is_empty() {
            return Err(TableError::EmptyTranslation);
        }
        if !accepts("insert", headword) {
            return Ok(false);
        }

        let (key, _) = self.inner.get_or_insert_with(headword, BTreeSet::new);
        let set = &mut self.inner[key];
        if set.contains(translation) {
            return Ok(false);
        }
        set.insert(translation.to_owned());
        Ok(true)
    }

    /// Write `headword`'s translations to `out` as one space-separated,
    /// newline-terminated line in ascending byte order.
    ///
    /// Returns `Ok(false)` and writes nothing if the headword is malformed
    /// or absent.
    pub fn search<W>(&self, headword: &str, out: &mut W) -> Result<bool, TableError>
    where
        W: Write + ?Sized,
    {
        if headword.is_empty() {
            return Err(TableError::EmptyHeadword);
        }
        if !accepts("search", headword) {
            return Ok(false);
        }
        let Some(set) = self.inner.get(headword) else {
            return Ok(false);
        };

        let mut line = String::new();
        for (i, t) in set.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(t);
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
        Ok(true)
    }

    /// Drop `headword` and all its translations. Capacity is never reduced.
    ///
    /// Returns `Ok(false)` if the headword is malformed or absent.
    pub fn remove(&mut self, headword: &str) -> Result<bool, TableError> {
        if headword.is_empty() {
            return Err(TableError::EmptyHeadword);
        }
        if !accepts("remove", headword) {
            return Ok(false);
        }
        Ok(self.inner.remove(headword).is_some())
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.inner.contains_key(headword)
    }

    /// Translations of `headword` in ascending order, if present.
    pub fn translations(&self, headword: &str) -> Option<impl Iterator<Item = &str> + '_> {
        self.inner
            .get(headword)
            .map(|set| set.iter().map(String::as_str))
    }

    /// All `(headword, translations)` pairs. Headword order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> + '_ {
        self.inner.iter()
    }
}

fn accepts(op: &str, headword: &str) -> bool {
    if is_well_formed(headword) {
        return true;
    }
    log::warn!(
        "{op}: rejected headword {headword:?}: expected an uppercase letter followed by \
         lowercase letters and single interior hyphens"
    );
    false
}
