// src/evaluator/common.rs
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use lazy_static::lazy_static;

pub const BUILTIN_COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "password123",
    "admin",
    "qwerty",
    "letmein",
];

lazy_static! {
    static ref BUILTIN: DenyList = DenyList::with_words(BUILTIN_COMMON_PASSWORDS.iter().copied());
}

/// Passwords rejected outright, matched case-insensitively against the
/// whole candidate (never as a substring).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DenyList {
    words: HashSet<String>,
}

impl DenyList {
    /// The process-wide built-in list. Built on first use, never mutated.
    pub fn builtin() -> &'static DenyList {
        &BUILTIN
    }

    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = DenyList::default();
        list.extend(words);
        list
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Built-in words plus one word per line from `path`.
    ///
    /// Blank lines and lines starting with `#` are skipped; surrounding
    /// whitespace is trimmed.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut list = BUILTIN.clone();
        let before = list.len();
        list.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        log::debug!(
            "Loaded {} extra common passwords from {}",
            list.len() - before,
            path.display()
        );
        Ok(list)
    }

    pub fn contains(&self, password: &str) -> bool {
        self.words.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
