use std::path::{Path, PathBuf};

pub const STORE_DIR: &str = ".tugas";

#[derive(Debug, Clone)]
pub struct TugasPaths {
    pub store_dir: PathBuf,
    pub config_file: PathBuf,
}

pub fn get_paths(repo_root: impl AsRef<Path>) -> TugasPaths {
    let store_dir = repo_root.as_ref().join(STORE_DIR);
    TugasPaths {
        config_file: store_dir.join("config.json"),
        store_dir,
    }
}

/// Relative `tasks_file` entries in the config are resolved against the
/// directory that holds `.tugas/`.
pub fn resolve_tasks_file(repo_root: impl AsRef<Path>, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.as_ref().join(path)
    }
}
