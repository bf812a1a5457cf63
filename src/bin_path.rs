use std::env;
use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::slice::Iter;

/// Directories listed in `PATH`, read on first use.
pub struct BinPath {
    path: Option<Vec<PathBuf>>,
}

impl BinPath {
    pub fn new() -> Self {
        Self { path: None }
    }

    pub fn from_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { path: Some(dirs) }
    }

    /// Every executable file found in the `PATH` directories, in search order.
    pub fn bins(&mut self) -> Bins<'_> {
        let path = self.path.get_or_insert_with(|| {
            env::var_os("PATH")
                .map(|path| env::split_paths(&path).collect())
                .unwrap_or_default()
        });

        Bins::new(path.iter())
    }
}

impl Default for BinPath {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Bins<'a> {
    paths: Iter<'a, PathBuf>,
    dir_data: Option<fs::ReadDir>,
}

impl<'a> Bins<'a> {
    fn new(paths: Iter<'a, PathBuf>) -> Self {
        Self {
            paths,
            dir_data: None,
        }
    }
}

impl<'a> Iterator for Bins<'a> {
    type Item = anyhow::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dir_data = self.dir_data.take();
            match dir_data {
                Some(mut read_dir) => match read_dir.next() {
                    Some(Ok(dir_entry)) => {
                        self.dir_data = Some(read_dir);

                        match fs::metadata(dir_entry.path()) {
                            Ok(metadata) if metadata.is_file() && has_execute_permission(&metadata) => {
                                return Some(Ok(dir_entry.path()));
                            }
                            Ok(_) => {}
                            Err(err) => {
                                return Some(Err(anyhow::anyhow!(
                                    "read {} metadata: {err}",
                                    dir_entry.path().display()
                                )));
                            }
                        }
                    }
                    Some(Err(err)) => {
                        self.dir_data = Some(read_dir);
                        return Some(Err(anyhow::anyhow!("read dir next: {err}")));
                    }
                    None => self.dir_data = None,
                },
                None => {
                    let dir = self.paths.next()?;

                    match fs::read_dir(dir) {
                        Ok(data) => self.dir_data = Some(data),
                        // PATH commonly lists directories that do not exist
                        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                        Err(err) => {
                            return Some(Err(anyhow::anyhow!(
                                "read dir {}: {err}",
                                dir.display()
                            )));
                        }
                    };
                }
            }
        }
    }
}

/// Any of the owner, group or other execute bits.
fn has_execute_permission(attr: &fs::Metadata) -> bool {
    attr.permissions().mode() & 0o111 != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs::File;

    fn touch(path: &std::path::Path, mode: u32) {
        File::create(path).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn lists_executables_only() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("runnable"), 0o755);
        touch(&dir.path().join("data"), 0o644);
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let mut bin_path = BinPath::from_dirs(vec![dir.path().to_path_buf()]);
        let bins: Vec<PathBuf> = bin_path.bins().map(Result::unwrap).collect();

        assert_eq!(bins, vec![dir.path().join("runnable")]);
    }

    #[rstest]
    #[case(0o755, true)]
    #[case(0o750, true)]
    #[case(0o700, true)]
    #[case(0o701, true)]
    #[case(0o644, false)]
    #[case(0o600, false)]
    fn execute_bits(#[case] mode: u32, #[case] expected: bool) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tool");
        touch(&path, mode);

        assert_eq!(has_execute_permission(&fs::metadata(&path).unwrap()), expected);
    }

    #[test]
    fn missing_directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("tool"), 0o755);

        let mut bin_path = BinPath::from_dirs(vec![
            dir.path().join("missing"),
            dir.path().to_path_buf(),
        ]);
        let bins: Vec<PathBuf> = bin_path.bins().map(Result::unwrap).collect();

        assert_eq!(bins, vec![dir.path().join("tool")]);
    }
}
