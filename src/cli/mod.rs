pub mod output;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "huec",
    version,
    about = "Hue bridge controller - pair, inspect and control lights and rooms"
)]
pub struct Cli {
    /// Light id, group name, "all", "all_on", "all_off" or "profile".
    /// With no selector, only the pairing/auth check runs.
    pub selector: Option<String>,

    /// Command and its parameters, e.g. "turn on", "color red", "percent
    /// bri 50", "loop". With no command, current state is printed.
    #[arg(trailing_var_arg = true)]
    pub args: Vec<String>,

    /// Verbose output (show bridge requests/responses)
    #[arg(short, long, env = "HUEC_VERBOSE")]
    pub verbose: bool,
}
