use crate::lesson::config::APP_DIR;
use crate::lesson::types::LessonStore;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub fn get_store_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or(StoreError::DataDirNotFound)?;
    Ok(data_dir.join(APP_DIR).join("lessons.json"))
}

pub async fn load_store() -> Result<LessonStore> {
    load_store_from(&get_store_path()?).await
}

pub async fn load_store_from(path: &Path) -> Result<LessonStore> {
    if !fs::try_exists(path).await? {
        return Ok(LessonStore::new());
    }

    let content = fs::read_to_string(path).await?;
    let store: LessonStore = serde_json::from_str(&content)?;
    tracing::info!("Loaded {} lessons from {}", store.lessons.len(), path.display());
    Ok(store)
}

pub async fn save_store(store: &LessonStore) -> Result<()> {
    save_store_to(&get_store_path()?, store).await
}

pub async fn save_store_to(path: &Path, store: &LessonStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json).await?;
    tracing::debug!("Saved {} lessons to {}", store.lessons.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::types::Lesson;

    #[test]
    fn test_store_path() {
        let path = get_store_path().unwrap();
        assert!(path.to_string_lossy().contains("lessonbook"));
        assert!(path.to_string_lossy().ends_with("lessons.json"));
    }

    #[tokio::test]
    async fn test_load_missing_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_store_from(&dir.path().join("lessons.json"))
            .await
            .unwrap();
        assert!(store.lessons.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("lessons.json");
        let store = LessonStore {
            lessons: vec![Lesson::new("Fractions"), Lesson::new("Decimals")],
        };

        save_store_to(&path, &store).await.unwrap();
        assert_eq!(load_store_from(&path).await.unwrap(), store);
    }

    #[tokio::test]
    async fn test_save_into_file_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = save_store_to(&blocker.join("lessons.json"), &LessonStore::new()).await;
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
