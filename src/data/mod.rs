pub mod alphabet;
pub mod connectors;
pub mod corpus;

pub use alphabet::Alphabet;
pub use connectors::{BaseSetConnector, FastaConnector, SequenceEntry};
pub use corpus::{Corpus, SEQUENCE_DELIMITER, SUBSET_DELIMITER};
