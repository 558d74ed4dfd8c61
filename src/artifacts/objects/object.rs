use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(bytes: Bytes) -> Result<Self>
    where
        Self: Sized;
}

/// Anything that can live in the object store
///
/// The store is not namespaced by kind: an object's address is the SHA-1 of exactly
/// the bytes `serialize` produces.
pub trait Object: Packable {
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        Ok(ObjectId::from_content(&content))
    }
}
