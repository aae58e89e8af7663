use crate::error::{MinsetError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for the base-set list: one sequence identifier per line.
pub struct BaseSetConnector;

impl BaseSetConnector {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MinsetError::resource(path, e))?;
        Self::read(BufReader::new(file), path)
    }

    /// Collect identifiers; blank lines are skipped with a warning.
    pub fn read<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| MinsetError::resource(origin, e))?;
            let name: String = line.chars().take_while(|c| !c.is_control()).collect();
            let name = name.trim();

            if name.is_empty() {
                log::warn!(
                    "Empty sequence identifier at line {} of {}",
                    line_no + 1,
                    origin.display()
                );
                continue;
            }
            names.push(name.to_string());
        }

        if names.is_empty() {
            return Err(MinsetError::input_format(
                origin,
                "base-set list contains no identifiers",
            ));
        }

        Ok(names)
    }
}
