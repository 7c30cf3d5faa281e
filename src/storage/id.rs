use crate::storage::StorageError;

/// Primary key of a stored todo item.
///
/// Backed by a UUID v7, so ids sort in creation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[repr(transparent)]
pub struct TodoId(uuid::Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            uuid::Uuid::parse_str(s.trim()).map_err(StorageError::ParseIdFromString)?,
        ))
    }
}

impl<'de> serde::Deserialize<'de> for TodoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        uuid::Uuid::parse_str(&s)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

impl From<uuid::Uuid> for TodoId {
    fn from(value: uuid::Uuid) -> Self {
        Self(value)
    }
}

impl bincode::Encode for TodoId {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(self.0.as_bytes(), encoder)
    }
}

impl<Context> bincode::Decode<Context> for TodoId {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let bytes: [u8; 16] = bincode::Decode::decode(decoder)?;
        Ok(Self(uuid::Uuid::from_bytes(bytes)))
    }
}

impl<'de, Context> bincode::BorrowDecode<'de, Context> for TodoId {
    fn borrow_decode<D: bincode::de::BorrowDecoder<'de, Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let bytes: [u8; 16] = bincode::Decode::decode(decoder)?;
        Ok(Self(uuid::Uuid::from_bytes(bytes)))
    }
}
