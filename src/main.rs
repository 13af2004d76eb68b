mod cli;
mod concat;
mod logging;
mod runner;

fn main() {
    logging::init();
    let app = cli::parse();
    if let Err(err) = runner::run(app) {
        // Fatal errors go to stdout and map to exit status 1.
        println!("Error: {err:#}");
        std::process::exit(1);
    }
}
