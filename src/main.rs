fn main() -> Result<(), Box<dyn std::error::Error>> {
    lazyseq::cli::main(std::env::args().collect())?;
    Ok(())
}
