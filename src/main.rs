fn main() -> Result<(), Box<dyn std::error::Error>> {
    eventsync::cli::main()
}
