use crate::config;
use std::io::Write;

pub fn banner_lines() -> Vec<String> {
    vec![
        "Auto-upload script".to_string(),
        format!("ESP32 IP: {}", config::ESP32_IP),
        "Configure and run to auto-upload data to GitHub".to_string(),
    ]
}

pub fn write_banner(out: &mut impl Write) -> anyhow::Result<()> {
    for line in banner_lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
