// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use fastamap::FastaError;

fn main() -> Result<(), FastaError> {
    fastamap::run()
}
