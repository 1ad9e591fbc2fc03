use std::{io::Error, path::PathBuf};

use crate::types::FeaturingNetwork;

#[derive(Debug)]
pub enum PersistError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for PersistError {
    fn from(err: Error) -> Self {
        PersistError::IoError(err)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(err: serde_json::Error) -> Self {
        PersistError::SerdeError(err)
    }
}

pub struct NetworkManager {
    network: FeaturingNetwork,
    path: PathBuf,
}

impl NetworkManager {
    pub fn new(network: FeaturingNetwork, path: PathBuf) -> Self {
        Self { network, path }
    }

    pub async fn load(path: PathBuf) -> Result<Self, PersistError> {
        let content = async_fs::read_to_string(&path).await?;
        let network = serde_json::from_str(&content)?;
        Ok(Self { network, path })
    }

    pub async fn persist(&self) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&self.network)?;

        // Stage to a sibling file so the previous network survives a failed write.
        let tmp = self.path.with_extension("json.tmp");
        async_fs::write(&tmp, json).await?;
        async_fs::rename(&tmp, &self.path).await?;

        Ok(())
    }

    pub fn network(&self) -> &FeaturingNetwork {
        &self.network
    }
}
