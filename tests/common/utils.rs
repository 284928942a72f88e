// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

// Writes `bytes` to a fresh file; the TempDir must outlive the path.
pub fn write_fasta(bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("creating temp dir");
    let path = dir.path().join("input.fas");
    fs::write(&path, bytes).expect("writing temp file");
    (dir, path)
}

#[allow(dead_code)]
pub fn pairs(map: &fastamap::SeqMap) -> Vec<(String, String)> {
    map.iter()
        .map(|rec| (rec.header.clone(), rec.sequence.clone()))
        .collect()
}
