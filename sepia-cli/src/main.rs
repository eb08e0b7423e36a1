use clap::Parser;
use sepia_cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = sepia_cli::run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
