// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// A FastA record: the text after '>' and the concatenated sequence lines that follow it. The
// header is opaque - no splitting into accession vs. description.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}
