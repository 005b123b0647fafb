use argon2::{Algorithm, Argon2, Params, Version};
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

#[cfg(feature = "scrypt")]
use scrypt::Scrypt as ScryptAlgorithm;

use crate::error::{Error, Result};


// scrypt block size, 128 * r bytes per unit of N
#[cfg(feature = "scrypt")]
const SCRYPT_R: u32 = 8;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostParams {
    pub memory_kib: u32, // working set in KiB
    pub time_cost: u32,  // passes over memory
    pub parallelism: u32, // lanes
}


/// A memory-hard password hash used as an opaque unit of work.
pub trait HashPrimitive {
    /// Human readable configuration, printed before a phase.
    fn describe(&self, cost: &CostParams) -> String;

    /// Hashes `password` with a fresh random salt and returns the PHC encoded string.
    fn hash(&self, password: &[u8], cost: &CostParams) -> Result<String>;
}


#[cfg_attr(feature = "scrypt", allow(dead_code))]
pub struct Argon2id;

impl HashPrimitive for Argon2id {
    fn describe(&self, cost: &CostParams) -> String {
        format!(
            "argon2id$v={}$m={},t={},p={}",
            Version::V0x13 as u32,
            cost.memory_kib,
            cost.time_cost,
            cost.parallelism
        )
    }

    fn hash(&self, password: &[u8], cost: &CostParams) -> Result<String> {
        let params = Params::new(cost.memory_kib, cost.time_cost, cost.parallelism, None)
            .map_err(|err| Error::InvalidParams(err.to_string()))?;

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password(password, &salt)?
            .to_string();

        Ok(password_hash)
    }
}


/// scrypt with `r = 8`, so `N` in KiB equals the requested memory cost.
/// scrypt has no pass count, `time_cost` is ignored.
#[cfg(feature = "scrypt")]
pub struct Scrypt;

#[cfg(feature = "scrypt")]
impl Scrypt {
    fn log_n(memory_kib: u32) -> Result<u8> {
        if memory_kib == 0 {
            return Err(Error::InvalidParams("memory cost must be at least 1 KiB".to_string()));
        }
        Ok((u32::BITS - 1 - memory_kib.leading_zeros()) as u8)
    }
}

#[cfg(feature = "scrypt")]
impl HashPrimitive for Scrypt {
    fn describe(&self, cost: &CostParams) -> String {
        let log_n = Self::log_n(cost.memory_kib).unwrap_or(0);
        format!("scrypt$ln={},r={},p={}", log_n, SCRYPT_R, cost.parallelism)
    }

    fn hash(&self, password: &[u8], cost: &CostParams) -> Result<String> {
        let params = scrypt::Params::new(
            Self::log_n(cost.memory_kib)?,
            SCRYPT_R,
            cost.parallelism,
            scrypt::Params::RECOMMENDED_LEN,
        )
        .map_err(|err| Error::InvalidParams(err.to_string()))?;

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = ScryptAlgorithm
            .hash_password_customized(password, None, None, params, &salt)?
            .to_string();

        Ok(password_hash)
    }
}
