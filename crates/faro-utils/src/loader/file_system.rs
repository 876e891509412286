use crate::loader::error::LoadingError;
use crate::loader::{File, Filter, LoaderTrait};
use async_stream::try_stream;
use async_walkdir::{DirEntry, Filtering, WalkDir};
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }
}

impl LoaderTrait for FileSystemLoader {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading dir");
        let mut walker = WalkDir::new(path).filter(move |entry| apply_filter(entry, filter));
        let stream = try_stream! {
            while let Some(entry) = walker.next().await {
                let entry = entry?;
                if entry.file_type().await?.is_file() {
                    let path = entry.path();
                    yield read_file(&path).await?;
                }
            }
        };
        Box::pin(stream)
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = self.sub_path(path);
        read_file(&path).await
    }
}

async fn read_file(path: &Path) -> Result<File, LoadingError> {
    tracing::trace!(?path, "Loading file");
    let content = fs::read(path).await?;
    Ok(File {
        key: path.to_string_lossy().into(),
        content,
    })
}

async fn apply_filter(entry: DirEntry, filter: Filter) -> Filtering {
    let Ok(ft) = entry.file_type().await else {
        return Filtering::Ignore;
    };
    if ft.is_dir() {
        return Filtering::Continue;
    }

    if filter.apply(entry.path()) {
        Filtering::Continue
    } else {
        Filtering::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_load_dir_applies_filter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bank.csv"), b"a,b\n1,2\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let loader = FileSystemLoader::new(dir.path().to_path_buf());
        let files: Vec<_> = loader.load_dir("", Filter::Csv).collect().await;
        assert_eq!(files.len(), 1);
        let file = files.into_iter().next().unwrap().unwrap();
        assert!(file.key.ends_with("bank.csv"));
        assert_eq!(file.content, b"a,b\n1,2\n");
    }

    #[test(tokio::test)]
    async fn test_load_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileSystemLoader::new(dir.path().to_path_buf());
        let result = loader.load_file("missing.csv").await;
        assert!(matches!(result, Err(LoadingError::IO(_))));
    }
}
