//! Content hashing for configuration fingerprints
//!
//! Hashes are lowercase hexadecimal SHA-1 digests of the UTF-8
//! concatenation of their inputs. The per-model config hash is displayed
//! with its first character capitalized, and that capitalized form is also
//! what registration hashes are derived from.

use ngrest_types::capitalize_first;
use sha1::{Digest, Sha1};

/// Lowercase hex SHA-1 of the concatenation of `parts`
///
/// # Examples
///
/// ```
/// use ngrest_core::hash::sha1_hex;
///
/// assert_eq!(sha1_hex(&["ab", "c"]), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
pub fn sha1_hex(parts: &[&str]) -> String {
	let mut hasher = Sha1::new();
	for part in parts {
		hasher.update(part.as_bytes());
	}
	hex::encode(hasher.finalize())
}

/// Stable fingerprint of a model's REST endpoint and primary key
pub fn config_hash(rest_url: &str, rest_primary_key: &str) -> String {
	capitalize_first(&sha1_hex(&[rest_url, rest_primary_key]))
}

/// Key of a registration of `type_identifier` under the model `config_hash`
pub fn content_hash(config_hash: &str, type_identifier: &str) -> String {
	sha1_hex(&[config_hash, type_identifier])
}
