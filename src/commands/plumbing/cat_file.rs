use crate::areas::repository::Repository;
use crate::artifacts::log::revision::Revision;

impl Repository {
    pub fn cat_file(&self, revision: &str) -> anyhow::Result<()> {
        let object_id = Revision::try_parse(revision)?.resolve(self.refs(), self.database())?;
        let object_data = self.database().load(&object_id)?;

        self.writer().write_all(&object_data)?;

        Ok(())
    }
}
