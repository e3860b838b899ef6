use clap::Parser as ClapParser;
use dotenv::dotenv;
use log::info;
use std::path::PathBuf;

use voicebench::{
    builtin_cases, load_cases, print_header, print_summary, run_cases, Config, MessagesClient,
};

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with an array of input sentences (defaults to the built-in corpus)
    #[arg(long)]
    cases: Option<PathBuf>,

    /// Report request failures per case instead of stopping at the first one
    #[arg(long, default_value_t = false)]
    keep_going: bool,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let config = Config::from_env();
    let cases = match args.cases {
        Some(path) => match load_cases(&path) {
            Ok(cases) => cases,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(2);
            }
        },
        None => builtin_cases(),
    };

    info!("Running {} cases against {}", cases.len(), config.api_base);

    let client = MessagesClient::new(&config);
    print_header(&config, cases.len());
    let summary = run_cases(&client, &cases, args.keep_going).await;
    print_summary(&summary);

    if summary.failed > 0 {
        std::process::exit(1);
    }
}
