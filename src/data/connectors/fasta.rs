use crate::error::{MinsetError, Result};
use super::{types::SequenceEntry, validator::SequenceValidator};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct FastaConnector;

impl FastaConnector {
    /// Load the first record of a FASTA file.
    pub fn load<P: AsRef<Path>>(path: P, name: &str, fold_case: bool) -> Result<SequenceEntry> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MinsetError::resource(path, e))?;
        Self::read(BufReader::new(file), path, name, fold_case)
    }

    /// Parse the first record from `reader`.
    ///
    /// Blank lines before the header are skipped. Residues may span several
    /// lines and end at the next header or end of input. `origin` is only used
    /// in error messages.
    pub fn read<R: BufRead>(
        reader: R,
        origin: &Path,
        name: &str,
        fold_case: bool,
    ) -> Result<SequenceEntry> {
        let validator = SequenceValidator::new(fold_case);
        let mut description: Option<String> = None;
        let mut residues = String::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| MinsetError::resource(origin, e))?;

            match &description {
                None => {
                    let trimmed = line.trim_start();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let header = trimmed.strip_prefix('>').ok_or_else(|| {
                        MinsetError::input_format(
                            origin,
                            format!("expected FASTA header '>' at line {}", line_no + 1),
                        )
                    })?;
                    description = Some(header.trim_end().to_string());
                }
                Some(_) => {
                    if line.starts_with('>') {
                        break;
                    }
                    validator.push_line(&line, &mut residues).map_err(|ch| {
                        MinsetError::input_format(
                            origin,
                            format!("illegal character '{}' in sequence at line {}", ch, line_no + 1),
                        )
                    })?;
                }
            }
        }

        let description = description
            .ok_or_else(|| MinsetError::input_format(origin, "no FASTA header found"))?;

        if residues.is_empty() {
            return Err(MinsetError::input_format(origin, "zero-sized sequence"));
        }

        Ok(SequenceEntry {
            name: name.to_string(),
            description,
            residues,
        })
    }
}
