// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

#[derive(Debug)]
pub enum FastaError {
    /// The file could not be opened or read (not found, permission denied, is a directory...).
    Io(io::Error),
    /// The file's bytes are not valid UTF-8.
    Decode(io::Error),
    /// Writing the map out as JSON failed.
    Serialize(serde_json::Error),
}

// BufRead::lines() reports bad UTF-8 as InvalidData; everything else is a plain I/O failure. This
// is what lets '?' do the classification.

impl From<io::Error> for FastaError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::InvalidData => FastaError::Decode(e),
            _ => FastaError::Io(e),
        }
    }
}

impl From<serde_json::Error> for FastaError {
    fn from(e: serde_json::Error) -> Self {
        FastaError::Serialize(e)
    }
}

impl fmt::Display for FastaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastaError::Io(e) => write!(f, "I/O error: {}", e),
            FastaError::Decode(e) => write!(f, "Decoding error: {}", e),
            FastaError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl error::Error for FastaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            FastaError::Io(e) | FastaError::Decode(e) => Some(e),
            FastaError::Serialize(e) => Some(e),
        }
    }
}

impl FastaError {
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FastaError::Io(e) | FastaError::Decode(e) => e.kind(),
            FastaError::Serialize(_) => io::ErrorKind::Other,
        }
    }
}
