use anyhow::Result;
use drainer_decrypt::{DRAINER_KEY, encrypt, logger};

fn main() -> Result<()> {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        println!("Usage: {} <plaintext_config>", args[0]);
        std::process::exit(1);
    }

    let envelope = encrypt(&args[1], DRAINER_KEY)?;
    println!("[Encrypted Text] {envelope}");

    Ok(())
}
