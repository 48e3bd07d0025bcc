use clap::Parser;

use style_guard::cli::{CheckArgs, Cli, Commands};
use style_guard::commands::{run_check, run_config, run_hash, run_init, run_test};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        None => run_check(&CheckArgs::default(), &cli),
        Some(Commands::Check(args)) => run_check(args, &cli),
        Some(Commands::Hash(args)) => run_hash(args, &cli),
        Some(Commands::Test(args)) => run_test(args, &cli),
        Some(Commands::Init(args)) => run_init(args, &cli),
        Some(Commands::Config(args)) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
