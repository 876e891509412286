use crate::loader::error::LoadingError;
use crate::loader::file_system::FileSystemLoader;
use futures::Stream;
use std::path::Path;
use std::pin::Pin;
use url::Url;

pub mod error;
pub mod file_system;

/// A loaded file: the source path it was read from and its raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub key: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Copy)]
pub enum Filter {
    Yaml,
    Csv,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        let extension = path.as_ref().extension().and_then(|ext| ext.to_str());
        let Some(extension) = extension else {
            return false;
        };
        let allowed_extensions: &[&str] = match self {
            Filter::Yaml => &["yaml", "yml"],
            Filter::Csv => &["csv"],
        };
        allowed_extensions.contains(&extension)
    }
}

#[derive(Debug, Default)]
pub struct LoaderHandler {}

impl LoaderHandler {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn loader(&self, url: &Url) -> Result<Loader, LoadingError> {
        match url.scheme() {
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| LoadingError::InvalidURL(url.to_string()))?;
                Ok(Loader::FileSystem(FileSystemLoader::new(path)))
            }
            scheme => Err(LoadingError::UnsupportedScheme(scheme.to_owned())),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Loader {
    FileSystem(FileSystemLoader),
}

impl LoaderTrait for Loader {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        match self {
            Loader::FileSystem(loader) => loader.load_dir(path, filter),
        }
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        match self {
            Loader::FileSystem(loader) => loader.load_file(path).await,
        }
    }
}

pub trait LoaderTrait {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>>;

    fn load_file<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>>;
}
