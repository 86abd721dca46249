//! # Error reporting for reading of network files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::io;

use thiserror::Error;

use crate::data::network::residual::EdgeError;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy. When it is returned, no network was built.
#[derive(Error, Debug)]
pub enum Import {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the file")]
    IO(#[from] io::Error),
    /// Contents of the file are not a vertex count followed by quadruples of integers.
    #[error(transparent)]
    Parse(#[from] Parse),
    /// An arc in the file can't be added to the network.
    ///
    /// For example, one of its vertices is not smaller than the vertex count.
    #[error("invalid arc on line {line}")]
    Edge {
        /// Line on which the arc starts.
        line: u64,
        /// Why the arc was rejected.
        #[source]
        edge: EdgeError,
    },
}

/// A `Parse` error describes a syntactically incorrect file.
///
/// It may hold the line number and line at which the error was caused.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("{description}{location}")]
pub struct Parse {
    description: String,
    location: Location,
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub(crate) type FileLocation<'a> = (u64, &'a str);

#[derive(Debug, Clone, Eq, PartialEq)]
struct Location(Option<(u64, String)>);

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match &self.0 {
            Some((line_number, line)) => write!(f, "\n\tCaused at line\t{}:\t{}", line_number, line),
            None => Ok(()),
        }
    }
}

impl Parse {
    /// Create a new `Parse` error with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: Location(None) }
    }

    /// Create a new `Parse` error that points at a line of the file.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            location: Location(Some((line_number, line.to_string()))),
        }
    }

    /// Line number at which the error was caused, if known.
    pub fn line_number(&self) -> Option<u64> {
        self.location.0.as_ref().map(|&(line_number, _)| line_number)
    }
}
