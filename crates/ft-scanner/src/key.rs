//! Group key derivation.
//!
//! Maps a visited file path to the key it is tallied under for a given
//! [`GroupBy`] mode. Keys are strings; names that are not valid UTF-8 are
//! converted lossily so that every file is still counted.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use camino::Utf8Path;
use ft_core::GroupBy;

/// Returns the key `path`, found below `root`, is tallied under.
///
/// In directory mode, files directly inside the root are keyed by the root
/// exactly as given. Deeper files are keyed by their lexically cleaned
/// parent, so under the root `.` a file in `sub` is keyed `sub`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use camino::Utf8Path;
/// use ft_core::GroupBy;
/// use ft_scanner::group_key;
///
/// let root = Utf8Path::new(".");
/// let path = Path::new("./src/lib.rs");
/// assert_eq!(group_key(GroupBy::Extension, root, path), ".rs");
/// assert_eq!(group_key(GroupBy::Directory, root, path), "src");
/// assert_eq!(group_key(GroupBy::Directory, root, Path::new("./a.go")), ".");
/// ```
#[must_use]
pub fn group_key<'a>(group_by: GroupBy, root: &'a Utf8Path, path: &'a Path) -> Cow<'a, str> {
    match group_by {
        GroupBy::Extension => match path.file_name().map(OsStr::to_string_lossy) {
            Some(Cow::Borrowed(name)) => Cow::Borrowed(extension_key(name)),
            Some(Cow::Owned(name)) => Cow::Owned(extension_key(&name).to_owned()),
            None => Cow::Borrowed(""),
        },
        GroupBy::Directory => match path.parent() {
            Some(parent) if parent == root.as_std_path() => Cow::Borrowed(root.as_str()),
            Some(parent) => Cow::Owned(clean_path(parent)),
            None => Cow::Borrowed(""),
        },
    }
}

/// Returns the extension of a file name, including the leading dot.
///
/// The extension starts at the last `.` of the name. Names without a dot
/// have the empty extension. Unlike [`Utf8Path::extension`], a leading dot
/// is not special: `.bashrc` has the extension `.bashrc`.
///
/// # Examples
///
/// ```
/// use ft_scanner::extension_key;
///
/// assert_eq!(extension_key("a.txt"), ".txt");
/// assert_eq!(extension_key("archive.tar.gz"), ".gz");
/// assert_eq!(extension_key("README"), "");
/// ```
#[must_use]
pub fn extension_key(file_name: &str) -> &str {
    file_name.rfind('.').map_or("", |dot| &file_name[dot..])
}

/// Lexically cleans `path`: drops `.` components and folds `name/..`
/// pairs. An empty result becomes `.`.
fn clean_path(path: &Path) -> String {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return ".".to_owned();
    }
    parts
        .iter()
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}
