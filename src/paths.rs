//! Relative paths for reference-mode manifests.
//!
//! Manifest paths are relative to the directory the tool was *run from*, not
//! to the scan root, so that a page served from that directory can load the
//! images directly. They always use `/` separators.
//!
//! All path arithmetic is lexical: `..` is resolved against the preceding
//! component without consulting the filesystem, so symlinks are not followed.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Express `path` relative to the current working directory, `/`-separated.
///
/// Returns an empty string when `path` is the working directory itself.
pub fn relative_to_cwd(path: &Path) -> io::Result<String> {
    let cwd = std::env::current_dir()?;
    Ok(relative_to(&cwd, path))
}

/// Express `target` relative to `base`, `/`-separated.
///
/// Relative inputs are taken as relative to `base`.
pub fn relative_to(base: &Path, target: &Path) -> String {
    let base = normalize(base);
    let target = normalize(&base.join(target));

    let base_parts: Vec<Component> = base.components().collect();
    let target_parts: Vec<Component> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    // Different roots (e.g. another drive): nothing relative to express.
    if common == 0 {
        return to_slash(&target);
    }

    let ups = std::iter::repeat_n("..".to_string(), base_parts.len() - common);
    let downs = target_parts[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());

    ups.chain(downs).collect::<Vec<_>>().join("/")
}

/// Lexically remove `.` and resolve `..` components.
///
/// `..` above the root is dropped; `..` at the start of a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last().copied() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }
    out.iter().collect()
}

fn to_slash(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn child_of_base() {
        assert_eq!(
            relative_to(Path::new("/home/ana"), Path::new("/home/ana/photos/2021/a.jpg")),
            "photos/2021/a.jpg"
        );
    }

    #[test]
    fn relative_target_is_joined_to_base() {
        assert_eq!(
            relative_to(Path::new("/home/ana"), Path::new("./photos/2021/a.jpg")),
            "photos/2021/a.jpg"
        );
    }

    #[test]
    fn sibling_of_base() {
        assert_eq!(
            relative_to(Path::new("/home/ana/site"), Path::new("/home/ana/photos/a.jpg")),
            "../photos/a.jpg"
        );
    }

    #[test]
    fn parent_segments_in_target_are_resolved() {
        assert_eq!(
            relative_to(Path::new("/home/ana"), Path::new("../ana/photos/./a.jpg")),
            "photos/a.jpg"
        );
    }

    #[test]
    fn same_path_is_empty() {
        assert_eq!(relative_to(Path::new("/srv"), Path::new("/srv/")), "");
    }

    #[test]
    fn base_below_root_walks_up() {
        assert_eq!(
            relative_to(Path::new("/a/b/c"), Path::new("/x.jpg")),
            "../../../x.jpg"
        );
    }

    #[test]
    fn normalize_drops_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("../a/..")), PathBuf::from(".."));
    }
}
