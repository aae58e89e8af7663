mod baseset;
mod fasta;
mod types;
mod validator;

pub use baseset::BaseSetConnector;
pub use fasta::FastaConnector;
pub use types::SequenceEntry;
pub use validator::{ResidueClass, SequenceValidator};
