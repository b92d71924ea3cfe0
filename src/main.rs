fn main() {
    focusfocus::logging::init();
    if let Err(e) = focusfocus::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
