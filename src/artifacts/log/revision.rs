use crate::areas::database::Database;
use crate::areas::refs::{HEAD_REF_NAME, Refs};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;

/// Shortest accepted abbreviation of an object ID
pub const MIN_ABBREV_LENGTH: usize = 4;

/// A user-supplied name for an object: `HEAD`, a full ID, or an abbreviated ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Head,
    Oid(ObjectId),
    Prefix(String),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Self> {
        let revision = revision.trim();

        if revision.eq_ignore_ascii_case(HEAD_REF_NAME) || revision == "@" {
            return Ok(Revision::Head);
        }

        if revision.len() == OBJECT_ID_LENGTH {
            return Ok(Revision::Oid(ObjectId::try_parse(revision.to_string())?));
        }

        if revision.len() >= MIN_ABBREV_LENGTH
            && revision.len() < OBJECT_ID_LENGTH
            && revision.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Ok(Revision::Prefix(revision.to_ascii_lowercase()));
        }

        Err(RepositoryError::InvalidObjectId(revision.to_string()).into())
    }

    pub fn resolve(&self, refs: &Refs, database: &Database) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Head => refs.read_head()?.ok_or_else(|| RepositoryError::NoCommits.into()),
            Revision::Oid(oid) => Ok(oid.clone()),
            Revision::Prefix(prefix) => {
                let mut candidates = database.find_objects_by_prefix(prefix)?;

                match candidates.len() {
                    0 => Err(RepositoryError::InvalidObjectId(prefix.clone()).into()),
                    1 => Ok(candidates.remove(0)),
                    _ => Err(RepositoryError::AmbiguousObjectId {
                        prefix: prefix.clone(),
                        candidates,
                    }
                    .into()),
                }
            }
        }
    }
}
