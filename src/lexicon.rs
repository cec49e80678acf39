use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

/// A set of legal words, loaded once before any game starts and never changed afterwards.
///
/// Membership is case-insensitive. The engine always asks with lowercase words.
///
/// # See Also
///
/// * [WordList]
/// * [would_create_only_legal_words](crate::would_create_only_legal_words)
pub trait Lexicon {
    /// # Returns
    ///
    /// Whether `word` is a legal word.
    fn contains(&self, word: &str) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Rc<L> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for Arc<L> {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// A [lexicon](Lexicon) backed by a hash set of lowercase words.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Reads one word per line from `reader`. Surrounding whitespace is trimmed and
    /// blank lines are skipped.
    ///
    /// # Errors
    ///
    /// When a line cannot be read.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<WordList> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }
        tracing::debug!(words = words.len(), "loaded word list");
        Ok(WordList { words })
    }

    /// Reads one word per line from the file at `path`, such as `enable1.txt`.
    ///
    /// # Errors
    ///
    /// When the file cannot be opened or a line cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<WordList> {
        WordList::from_reader(BufReader::new(File::open(path)?))
    }

    /// The number of words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> WordList {
        WordList {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Lexicon for WordList {
    fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}
