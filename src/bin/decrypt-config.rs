use anyhow::Result;
use drainer_decrypt::{DRAINER_KEY, decrypt, logger, util};

fn main() -> Result<()> {
    logger::setup_logger();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        println!("Usage: {} <base64_encrypted_config>", args[0]);
        std::process::exit(1);
    }

    let payload = &args[1];

    // Raw bytes first, for eyeballing the envelope
    println!("{}", util::decode_binary_string(payload)?);

    let config = decrypt(payload, DRAINER_KEY)?;
    println!("[Decrypted Text] {config}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use drainer_decrypt::{DRAINER_KEY, decrypt};

    // Envelopes produced under the recovered passphrase; regenerate with the
    // encrypt-config companion if the sample rotates its key again.
    const HELLO: &str = "U2FsdGVkX18RIjNEVWZ3iLXhrYsop2vdDow6akmShn0=";
    const CONFIG: &str = "U2FsdGVkX1+hssPU5fYHGJGfjLuL5UNhVWHxA8XoY3UpqsCLWE6sS0h4ihr8+kA4i8RQZVTwEsEJiWP7p+WhQXDsumE9jRrNNSW4zGNsT4ZUW0fFdDJ/I3OfiW0RgBE0Nxh1KqD4VpQ4UNbqwVn9jg==";

    #[test]
    fn test_recovered_key_decrypts_known_sample() {
        assert_eq!(decrypt(HELLO, DRAINER_KEY).unwrap(), "hello world");
    }

    #[test]
    fn test_recovered_key_decrypts_config_payload() {
        let config = decrypt(CONFIG, DRAINER_KEY).unwrap();
        assert_eq!(
            config,
            r#"{"receiver":"0x53e7badc3b8d23880df83aa0c3c89fc5d9d17ba9","chains":[1,56,137],"min_value":0.001}"#
        );
    }
}
