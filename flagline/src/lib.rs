//! Parse compiler and linker flag lines emitted by `*-config` tools.
//!
//! Tools such as `xml2-config` and `python3-config` report the flags needed
//! to compile and link against their library as a single shell-quoted line.
//! This crate splits such a line into words and classifies the words that
//! build tools need to understand (include directories, library directories,
//! libraries, and preprocessor defines), passing everything else through
//! untouched.

mod words;

use std::fmt;
use std::path::PathBuf;

pub use words::split;
pub use words::ParseError;

/// A single word of a flag line, classified by prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    /// `-I<dir>`: a header search directory.
    IncludeDir(PathBuf),
    /// `-L<dir>`: a library search directory.
    LibraryDir(PathBuf),
    /// `-l<name>`: a library to link.
    Library(String),
    /// `-D<name>[=<value>]`: a preprocessor define.
    Define {
        name: String,
        value: Option<String>,
    },
    /// Any word this crate does not interpret, preserved verbatim.
    Other(String),
}

impl Flag {
    /// Classify a single already-split word.
    ///
    /// Only the joined spellings (`-I/dir`, not `-I /dir`) are interpreted;
    /// a bare `-I`, `-L`, `-l`, or `-D` is passed through as [`Flag::Other`].
    pub fn from_word(word: &str) -> Flag {
        if let Some(dir) = strip_joined(word, "-I") {
            Flag::IncludeDir(PathBuf::from(dir))
        } else if let Some(dir) = strip_joined(word, "-L") {
            Flag::LibraryDir(PathBuf::from(dir))
        } else if let Some(name) = strip_joined(word, "-l") {
            Flag::Library(name.to_owned())
        } else if let Some(define) = strip_joined(word, "-D") {
            match define.split_once('=') {
                Some((name, value)) => Flag::Define {
                    name: name.to_owned(),
                    value: Some(value.to_owned()),
                },
                None => Flag::Define {
                    name: define.to_owned(),
                    value: None,
                },
            }
        } else {
            Flag::Other(word.to_owned())
        }
    }
}

fn strip_joined<'a>(word: &'a str, prefix: &str) -> Option<&'a str> {
    word.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::IncludeDir(dir) => write!(f, "-I{}", dir.display()),
            Flag::LibraryDir(dir) => write!(f, "-L{}", dir.display()),
            Flag::Library(name) => write!(f, "-l{name}"),
            Flag::Define { name, value: None } => write!(f, "-D{name}"),
            Flag::Define {
                name,
                value: Some(value),
            } => write!(f, "-D{name}={value}"),
            Flag::Other(word) => write!(f, "{word}"),
        }
    }
}

/// Split a flag line and classify every word.
pub fn parse(line: &str) -> Result<Vec<Flag>, ParseError> {
    let words = split(line)?;
    Ok(words.iter().map(|word| Flag::from_word(word)).collect())
}
