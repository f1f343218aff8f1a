use colored::Colorize;

pub fn run(key: &str, value: u32, hmac: &str) -> Result<(), String> {
    let matches = ntd_fair::verify_digest(key, value, hmac).map_err(|e| e.to_string())?;
    tracing::debug!(value, matches, "verified revealed commitment");

    if matches {
        println!(
            "  {} HMAC-SHA256(KEY, \"{value}\") equals the HMAC shown before your move.",
            "Verified:".green().bold()
        );
        Ok(())
    } else {
        Err(format!(
            "HMAC does not match: value {value} was not the committed value for this key"
        ))
    }
}
