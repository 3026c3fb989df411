use tracing::error;

fn main() {
    if let Err(err) = plate::cli::run() {
        error!(target: "plate::cli", "Error: {:?}", err);
        std::process::exit(1);
    }
}
