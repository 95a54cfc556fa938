//! File-name heuristic for spotting DeepLabCut output files

use std::path::Path;

/// Extension of the HDF5 tables DeepLabCut writes its predictions to
pub const DLC_OUTPUT_SUFFIX: &str = "h5";

const SCORER_MARKERS: [&str; 2] = ["DLC_", "DeepLabCut_"];
const SHUFFLE_MARKER: &str = "shuffle";

/// Check whether a path looks like a DeepLabCut output file.
///
/// Only the file name is inspected: the extension must be exactly `.h5`, and the name
/// must carry a scorer marker (`DLC_` or `DeepLabCut_`) as well as `shuffle`. A file that
/// matches but holds garbage still counts as a candidate and fails later when loaded.
pub fn is_dlc_output(path: &Path) -> bool {
    if path.extension().and_then(|e| e.to_str()) != Some(DLC_OUTPUT_SUFFIX) {
        return false;
    }

    // Non-UTF-8 names are matched on their lossy decoding.
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };

    SCORER_MARKERS.iter().any(|marker| name.contains(marker)) && name.contains(SHUFFLE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str) -> bool {
        is_dlc_output(Path::new(name))
    }

    #[test]
    fn test_accepts_dlc_marker() {
        assert!(check("x_DLC_shuffle1.h5"));
        assert!(check("videoDLC_resnet50_mouseJan1shuffle1_100000.h5"));
    }

    #[test]
    fn test_accepts_deeplabcut_marker() {
        assert!(check("trial3DeepLabCut_resnet50_reachMay2shuffle2_50000.h5"));
    }

    #[test]
    fn test_rejects_wrong_extension() {
        assert!(!check("x_DLC_shuffle1.csv"));
        assert!(!check("x_DLC_shuffle1.H5"));
        assert!(!check("x_DLC_shuffle1.h5.bak"));
        assert!(!check("x_DLC_shuffle1"));
    }

    #[test]
    fn test_rejects_missing_scorer_marker() {
        assert!(!check("x_shuffle1.h5"));
        assert!(!check("x_dlc_shuffle1.h5"));
    }

    #[test]
    fn test_rejects_missing_shuffle() {
        assert!(!check("x_DLC_1.h5"));
    }

    #[cfg(unix)]
    #[test]
    fn test_matches_non_utf8_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"mouse\xff_DLC_resnet50_shuffle1.h5");
        assert!(is_dlc_output(Path::new(name)));

        let unmarked = OsStr::from_bytes(b"mouse\xff_shuffle1.h5");
        assert!(!is_dlc_output(Path::new(unmarked)));
    }

    #[test]
    fn test_only_file_name_is_inspected() {
        assert!(!check("DLC_shuffle/data.h5"));
        assert!(check("/some/dir/a_DLC_shuffle0.h5"));
    }
}
