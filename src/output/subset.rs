use crate::data::Corpus;
use crate::engines::generation::Population;
use std::io::{self, Write};

/// One row per sequence: its name, then its gene in each of the fittest genomes.
pub fn write_subset_table<W: Write>(out: &mut W, corpus: &Corpus, population: &Population) -> io::Result<()> {
    for (j, name) in corpus.names().enumerate() {
        write!(out, "{:>7} ", name)?;
        for individual in population.fittest() {
            write!(out, " {:1}", individual.genome[j])?;
        }
        writeln!(out)?;
    }
    Ok(())
}
