use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = huec::cli::Cli::parse();
    let exit_code = huec::run(cli).await;
    std::process::exit(exit_code);
}
