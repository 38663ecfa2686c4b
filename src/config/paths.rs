use std::path::PathBuf;

/// Where the editor reads and writes its three files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPaths {
    pub schema: PathBuf,
    pub cvars: PathBuf,
    pub controls: PathBuf,
}
