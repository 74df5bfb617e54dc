fn main() {
    if let Err(e) = aurmirror_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
