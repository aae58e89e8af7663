use minset::config::AppConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Topology strings over the TOP2006 alphabet.
pub const SEQUENCES: &[(&str, &str)] = &[
    ("d1aaa_", "ABCDEFGHIJKL"),
    ("d1bbb_", "abcdefghijkl"),
    ("d1ccc_", "AAAAaaaaAAAA"),
    ("d1ddd_", "ADGJadgjBEHK"),
    ("d1eee_", "LKJIHGFEDCBA"),
    ("d1fff_", "AbCdEfGhIjKl"),
    ("d1ggg_", "DDDDdddd"),
    ("d1hhh_", "AaBbCcDdEeFf"),
    ("d1iii_", "JjKkLlJjKkLl"),
    ("d1jjj_", "ABABABABcdcd"),
];

/// Write a base-set list and one FASTA file per sequence into a fresh directory.
pub fn write_base_set() -> TempDir {
    let dir = TempDir::new().unwrap();
    let seqdir = dir.path().join("fastas");
    fs::create_dir_all(&seqdir).unwrap();

    let mut list = String::new();
    for (i, (name, residues)) in SEQUENCES.iter().enumerate() {
        list.push_str(name);
        list.push('\n');
        if i == 4 {
            list.push('\n');
        }
        let (head, tail) = residues.split_at(residues.len() / 2);
        fs::write(
            seqdir.join(format!("{}.tseq", name)),
            format!(">{} test topology\n{}\n{}\n", name, head, tail),
        )
        .unwrap();
    }
    fs::write(dir.path().join("masterfilelist"), list).unwrap();
    dir
}

/// Small, seeded configuration reading from and writing into `dir`.
pub fn test_config(dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.ga.popsize = 30;
    config.ga.fitmate = 6;
    config.ga.generation = 8;
    config.minset.baseset = dir.join("masterfilelist");
    config.minset.seqdir = dir.join("fastas");
    config.minset.subsetsize = 30.0;
    config.output.directory = dir.join("out");
    config.run.seed = Some(1);
    config
}
