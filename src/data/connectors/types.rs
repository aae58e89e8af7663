use serde::Serialize;

/// One sequence of the base set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceEntry {
    /// Identifier from the base-set list; also the FASTA file stem.
    pub name: String,
    /// Header text of the FASTA record, without the leading '>'.
    pub description: String,
    pub residues: String,
}

impl SequenceEntry {
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}
