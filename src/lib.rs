pub mod logger;
pub mod util;

use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose};
use openssl::hash::MessageDigest;
use openssl::pkcs5;
use openssl::rand::rand_bytes;
use openssl::symm::{Cipher, Crypter, Mode};

const SALT_MAGIC: &[u8; 8] = b"Salted__";
const SALT_LEN: usize = 8;

/// Passphrase the sampled loader feeds its config decryption routine.
// An earlier sample shipped with
// "F-JaNdRgUkXp2r5u8x/A?D(G+KbPeShVmYq3t6v9y$B&E)H@McQfTjWnZr4u7x!z%C\\*F-JaNdRgUkXp2s5v8y/B?D(G+KbPeShVmYq3t6w9z$C&F)H@McQfTjWnZr4u7"
pub const DRAINER_KEY: &str = "y$B&E)H@McQfTjWmZq4t7w!z%C\\*F-JaNdRgUkXp2r5u8x/A?D(G+KbPeShVmYq3t6v9y$B&E)H@McQfTjWnZr4u7x!z%C\\*F-JaNdRgUkXp2s5v8y/B?D(G+KbPeShVmY";

/// EVP_BytesToKey with MD5 and a single round. This is the derivation behind
/// `openssl enc -md md5` and behind passphrase-style ciphertexts in general:
/// 32 key bytes followed by 16 IV bytes out of the same digest chain.
fn derive_key_iv(passphrase: &str, salt: Option<&[u8]>) -> Result<(Vec<u8>, Vec<u8>)> {
    let derived = pkcs5::bytes_to_key(
        Cipher::aes_256_cbc(),
        MessageDigest::md5(),
        passphrase.as_bytes(),
        salt,
        1,
    )?;
    let iv = derived
        .iv
        .ok_or_else(|| anyhow!("AES-256-CBC requires an IV"))?;
    Ok((derived.key, iv))
}

/// Split the OpenSSL salted envelope. Payloads without the magic carry no
/// salt; the whole buffer is ciphertext.
fn split_salted(raw: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if raw.len() >= SALT_MAGIC.len() + SALT_LEN && &raw[..SALT_MAGIC.len()] == SALT_MAGIC {
        (
            Some(&raw[SALT_MAGIC.len()..SALT_MAGIC.len() + SALT_LEN]),
            &raw[SALT_MAGIC.len() + SALT_LEN..],
        )
    } else {
        (None, raw)
    }
}

// Lenient unpad: trust the final byte and trim that many bytes, clamping to
// the buffer. A wrong passphrase therefore degrades to garbled or empty
// output instead of a padding error.
fn strip_padding(plaintext: &mut Vec<u8>) {
    let pad = plaintext.last().copied().unwrap_or(0) as usize;
    if pad <= plaintext.len() {
        let len = plaintext.len() - pad;
        plaintext.truncate(len);
    } else {
        plaintext.clear();
    }
}

/// Encrypt plaintext with a passphrase -> Base64("Salted__" || salt || ciphertext)
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    rand_bytes(&mut salt)?;

    let (key, iv) = derive_key_iv(passphrase, Some(&salt))?;

    let cipher = Cipher::aes_256_cbc();
    let mut crypter = Crypter::new(cipher, Mode::Encrypt, &key, Some(&iv))?;
    crypter.pad(true);

    let mut ciphertext = vec![0; plaintext.len() + cipher.block_size()];
    let mut count = crypter.update(plaintext.as_bytes(), &mut ciphertext)?;
    count += crypter.finalize(&mut ciphertext[count..])?;
    ciphertext.truncate(count);

    let mut envelope = Vec::with_capacity(SALT_MAGIC.len() + SALT_LEN + ciphertext.len());
    envelope.extend_from_slice(SALT_MAGIC);
    envelope.extend_from_slice(&salt);
    envelope.append(&mut ciphertext);

    Ok(general_purpose::STANDARD.encode(&envelope))
}

/// Decrypt a Base64 passphrase envelope back to text.
///
/// Errors only on structurally broken input: invalid Base64, or a ciphertext
/// body that is not a whole number of AES blocks. A wrong passphrase is not
/// an error; the result is whatever the cipher produced, decoded as UTF-8
/// with replacement characters.
pub fn decrypt(ciphertext_b64: &str, passphrase: &str) -> Result<String> {
    let raw = general_purpose::STANDARD.decode(ciphertext_b64.as_bytes())?;

    let (salt, body) = split_salted(&raw);
    match salt {
        Some(salt) => log::debug!("[decrypt] salted payload, salt: {}", hex::encode(salt)),
        None => log::debug!("[decrypt] unsalted payload, {} ciphertext bytes", body.len()),
    }

    let (key, iv) = derive_key_iv(passphrase, salt)?;

    let cipher = Cipher::aes_256_cbc();
    let mut crypter = Crypter::new(cipher, Mode::Decrypt, &key, Some(&iv))?;
    crypter.pad(false);

    let mut plaintext = vec![0; body.len() + cipher.block_size()];
    let mut count = crypter.update(body, &mut plaintext)?;
    count += crypter.finalize(&mut plaintext[count..])?;
    plaintext.truncate(count);

    strip_padding(&mut plaintext);

    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}
