use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose};

/// Base64-decode into a "binary string": one char per byte, code points
/// U+0000..=U+00FF. This is the raw form printed for manual inspection of a
/// payload before any decryption is attempted.
pub fn decode_binary_string(input: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD.decode(input.as_bytes())?;
    Ok(bytes.into_iter().map(|b| b as char).collect())
}

/// Inverse of [`decode_binary_string`]: re-encode an inspected byte string.
/// Errors on any char above U+00FF, which cannot come from a decoded byte.
pub fn encode_binary_string(input: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(input.len());
    for c in input.chars() {
        let code = u32::from(c);
        if code > 0xFF {
            return Err(anyhow!("not a binary string: {c:?} is above U+00FF"));
        }
        bytes.push(code as u8);
    }
    Ok(general_purpose::STANDARD.encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ascii() {
        let decoded = decode_binary_string("aGVsbG8gd29ybGQ=").unwrap();
        assert_eq!(decoded, "hello world");
    }

    #[test]
    fn test_decode_high_bytes_map_to_latin1() {
        // 0xDE 0xAD 0xBE 0xEF
        let decoded = decode_binary_string("3q2+7w==").unwrap();
        assert_eq!(decoded, "\u{de}\u{ad}\u{be}\u{ef}");
    }

    #[test]
    fn test_base64_round_trips_through_binary_string() {
        let inputs = ["aGVsbG8gd29ybGQ=", "3q2+7w==", "U2FsdGVkX18=", ""];
        for input in inputs {
            let decoded = decode_binary_string(input).unwrap();
            assert_eq!(encode_binary_string(&decoded).unwrap(), input);
        }
    }

    #[test]
    fn test_decode_rejects_invalid_alphabet() {
        let invalid_inputs = ["###not-base64###", "abc\u{2603}def", "abcd====", "a"];
        for input in invalid_inputs {
            assert!(
                decode_binary_string(input).is_err(),
                "Invalid input '{input}' should error"
            );
        }
    }

    #[test]
    fn test_encode_rejects_wide_chars() {
        assert!(encode_binary_string("snow\u{2603}man").is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_binary_string("").unwrap(), "");
        assert_eq!(encode_binary_string("").unwrap(), "");
    }
}
