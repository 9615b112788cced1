use std::path::{Component, Path, PathBuf};

use eyre::Result;

/// Find the nearest ancestor of `start` (inclusive) holding a file that
/// satisfies `matches`.
///
/// Used to discover the project or solution a generated file belongs to.
pub fn find_ancestor_with<F>(start: &Path, matches: F) -> Result<Option<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    for dir in start.ancestors() {
        if !dir.is_dir() {
            continue;
        }
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && matches(&path) {
                return Ok(Some(dir.to_path_buf()));
            }
        }
    }
    Ok(None)
}

/// Find the nearest ancestor directory containing a file named `file_name`.
pub fn find_ancestor_with_file(start: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    find_ancestor_with(start, |path| {
        path.file_name().is_some_and(|name| name == file_name)
    })
}

/// `to` expressed relative to the directory `from`, with `/` separators.
///
/// Both paths are taken lexically; neither needs to exist.
///
/// ```
/// use std::path::Path;
/// use weave_core::relative_path;
///
/// assert_eq!(
///     relative_path(Path::new("src/Shop.Api"), Path::new("src/Shop.Core/Shop.Core.csproj")),
///     "../Shop.Core/Shop.Core.csproj"
/// );
/// ```
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from: Vec<Component> = from.components().filter(|c| *c != Component::CurDir).collect();
    let to: Vec<Component> = to.components().filter(|c| *c != Component::CurDir).collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let ups = std::iter::repeat_n("..".to_string(), from.len() - common);
    let downs = to[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());
    ups.chain(downs).collect::<Vec<_>>().join("/")
}
