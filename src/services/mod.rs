pub mod minset_runner;

pub use minset_runner::MinsetRunner;
