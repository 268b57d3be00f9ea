use std::error::Error;

pub fn validate_base58_string(base58_string: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    let invalid_characters = ["l", "I", "0", "O"];
    for invalid_character in invalid_characters {
        if base58_string.contains(invalid_character) {
            let message =
                format!("base58 string contains invalid character: {}", invalid_character);
            return Err(message.into());
        }
    }
    Ok(())
}

/// Checks hex shape only; `expected_len` is in characters.
pub fn validate_hex_string(
    hex_string: &str,
    expected_len: Option<usize>,
) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
    if let Some(expected_len) = expected_len {
        if hex_string.len() != expected_len {
            let actual = hex_string.len();
            let message = format!("hex string must be {} characters, got {}", expected_len, actual);
            return Err(message.into());
        }
    }
    hex::decode(hex_string).map_err(|e| format!("Invalid hex string: {}", e).into())
}

pub fn validate_network_name(name: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
    if name.is_empty() {
        return Err("network name must not be empty".into());
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(format!("network name contains invalid characters: {}", name).into());
    }
    Ok(())
}
