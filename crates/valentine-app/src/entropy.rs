use valentine_platform::{EntropySource, Result};

/// Seeds from the operating system's random source.
#[derive(Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn seed(&mut self) -> Result<u64> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes).map_err(|err| format!("OS random source unavailable: {err}"))?;
        Ok(u64::from_le_bytes(bytes))
    }
}
