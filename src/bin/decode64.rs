use anyhow::Result;
use drainer_decrypt::{logger, util};

fn main() -> Result<()> {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        println!("Usage: {} <base64 string>", args[0]);
        std::process::exit(1);
    }

    println!("[Decoded Text] {}", util::decode_binary_string(&args[1])?);

    Ok(())
}
