use clap::Parser;
use std::path::PathBuf;

/// Every argument is a plain value: there are no flags, and only the first
/// argument is used.
#[derive(Parser, Debug)]
#[command(
    name = "talegen",
    about = "Group exported sound files into tale playlists",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// JSON export with a `sounds` array, followed by ignored arguments
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<PathBuf>,
}

impl CliArgs {
    pub fn input(&self) -> Option<&PathBuf> {
        self.args.first()
    }

    pub fn ignored(&self) -> usize {
        self.args.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_argument_is_input() {
        let args = CliArgs::try_parse_from(["talegen", "in.json", "--help", "-V"]).unwrap();
        assert_eq!(args.input(), Some(&PathBuf::from("in.json")));
        assert_eq!(args.ignored(), 2);
    }

    #[test]
    fn test_hyphenated_first_argument() {
        let args = CliArgs::try_parse_from(["talegen", "--bogus"]).unwrap();
        assert_eq!(args.input(), Some(&PathBuf::from("--bogus")));
    }

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::try_parse_from(["talegen"]).unwrap();
        assert_eq!(args.input(), None);
        assert_eq!(args.ignored(), 0);
    }
}
