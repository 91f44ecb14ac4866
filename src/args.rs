//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::report::ColorChoice;

/// Where the blocklist goes when no path is given
pub const DEFAULT_OUTPUT: &str = "blocklist.txt";

/// Returns the parsed command line. Exits with a usage message if the
/// command line can't be parsed.
#[must_use]
pub fn parsed() -> Args {
    CliArgs::parse().into()
}

/// Parses `args` (including the program name) without exiting on error
pub fn try_parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args).map(Args::from)
}

/// The parsed command line
#[derive(Debug)]
pub struct Args {
    /// `output` is the path the blocklist is written to
    pub output: PathBuf,
    /// `color` says whether progress messages are colored
    pub color: ColorChoice,
}

#[derive(Debug, Parser)]
#[command(name = "blockmerge", version, about)]
/// Download public hostname blocklists and write the hosts they agree on,
/// plus a few custom rules, to a single sorted blocklist
struct CliArgs {
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    /// When to color progress messages
    color: ColorChoice,
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    /// The blocklist file to write (overwritten if it exists)
    output: PathBuf,
}

impl From<CliArgs> for Args {
    fn from(parsed: CliArgs) -> Self {
        Args { output: parsed.output, color: parsed.color }
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn output_defaults_to_blocklist_txt() {
        let args = try_parse_from(["blockmerge"]).unwrap();
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(args.color, ColorChoice::Auto);
    }

    #[test]
    fn first_argument_is_the_output_path() {
        let args = try_parse_from(["blockmerge", "lists/bad_hosts.txt"]).unwrap();
        assert_eq!(args.output, PathBuf::from("lists/bad_hosts.txt"));
    }

    #[test]
    fn color_can_be_chosen() {
        let args = try_parse_from(["blockmerge", "--color", "never", "out.txt"]).unwrap();
        assert_eq!(args.color, ColorChoice::Never);
        assert_eq!(args.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(try_parse_from(["blockmerge", "a.txt", "b.txt"]).is_err());
        assert!(try_parse_from(["blockmerge", "--color", "plaid"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
