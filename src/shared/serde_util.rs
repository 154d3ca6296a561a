//! Custom serde helpers for the wallet service wire format.

/// Serializes `Vec<u8>` fields as base64 strings.
///
/// The service marshals binary fields (POE metadata, txout scripts) as
/// base64 strings; absent or `null` fields deserialize to an empty vec.
pub mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => BASE64.decode(s.as_bytes()).map_err(serde::de::Error::custom),
            _ => Ok(Vec::new()),
        }
    }
}
