pub mod errors;
pub mod runner;
pub mod seq;

pub use crate::errors::FastaError;
pub use crate::seq::fasta::{parse_fasta, read_fasta};
pub use crate::seq::map::SeqMap;
pub use crate::seq::record::SeqRecord;

pub fn run() -> Result<(), FastaError> {
    runner::run()
}
