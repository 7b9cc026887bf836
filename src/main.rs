fn main() {
    if let Err(err) = hail::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
