/// Character classes accepted in FASTA residue lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidueClass {
    Letter,
    /// Gap characters and whitespace, dropped silently.
    Skipped,
    Illegal,
}

pub struct SequenceValidator {
    fold_case: bool,
}

impl SequenceValidator {
    pub fn new(fold_case: bool) -> Self {
        Self { fold_case }
    }

    pub fn classify(ch: char) -> ResidueClass {
        if ch.is_ascii_alphabetic() {
            ResidueClass::Letter
        } else if ch == '.' || ch.is_whitespace() {
            ResidueClass::Skipped
        } else {
            ResidueClass::Illegal
        }
    }

    /// Append the residues of one line to `residues`.
    ///
    /// Returns the first illegal character, if any; nothing after it is appended.
    pub fn push_line(&self, line: &str, residues: &mut String) -> Result<(), char> {
        for ch in line.chars() {
            match Self::classify(ch) {
                ResidueClass::Letter if self.fold_case => residues.push(ch.to_ascii_uppercase()),
                ResidueClass::Letter => residues.push(ch),
                ResidueClass::Skipped => {}
                ResidueClass::Illegal => return Err(ch),
            }
        }
        Ok(())
    }
}
