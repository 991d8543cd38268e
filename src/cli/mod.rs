//! Command line layer: argument parsing (`args`) and the orchestration
//! logic (`runner`) that wires the input path to `talegen::api` and maps
//! failures to an exit code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
