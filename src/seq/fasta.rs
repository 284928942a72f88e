// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, trace, warn};

use crate::errors::FastaError;
use crate::seq::map::SeqMap;

pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<SeqMap, FastaError> {
    let path = path.as_ref();
    debug!("Opening FastA file {}", path.display());
    let file = File::open(path)?;
    let seqs = parse_fasta(BufReader::new(file))?;
    info!("Read {} record(s) from {}", seqs.len(), path.display());
    Ok(seqs)
}

/// Single pass over `reader`: a '>' line opens a record, every other non-blank line is appended
/// to the open record. Lines are whitespace-trimmed, blank lines are skipped wherever they
/// occur, sequence lines seen before the first header are dropped, and a repeated header
/// replaces the earlier sequence.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<SeqMap, FastaError> {
    let mut result = SeqMap::new();
    let mut current_header: Option<String> = None;
    let mut current_sequence_parts: Vec<String> = Vec::new();
    let mut orphans = 0usize;

    for line in reader.lines() {
        let line = line?;
        // A lone '\r' also ends a line (old Mac line endings); lines() only splits on '\n'.
        for l in line.split('\r') {
            let l = l.trim_matches(is_strip_char);
            if l.is_empty() {
                continue;
            }
            if let Some(hdr) = l.strip_prefix('>') {
                if let Some(done) = current_header.take() {
                    store(&mut result, done, &current_sequence_parts);
                }
                current_header = Some(String::from(hdr));
                current_sequence_parts.clear();
            } else if current_header.is_some() {
                current_sequence_parts.push(String::from(l));
            } else {
                orphans += 1;
            }
        }
    }
    if let Some(done) = current_header {
        store(&mut result, done, &current_sequence_parts);
    }

    if orphans > 0 {
        warn!("Dropped {} sequence line(s) found before the first header", orphans);
    }
    Ok(result)
}

// Unicode whitespace plus the ASCII information separators (FS, GS, RS, US), which FastA files
// exported from some tools carry at line ends.
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn store(result: &mut SeqMap, header: String, parts: &[String]) {
    let sequence = parts.concat();
    trace!("record '{}': {} residue(s)", header, sequence.chars().count());
    if result.contains_header(&header) {
        warn!("Duplicate header '{}': keeping the later sequence", header);
    }
    result.insert(header, sequence);
}
