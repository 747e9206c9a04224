//! Arraybench CLI entry point.

fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = arraybench_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
