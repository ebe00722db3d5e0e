//! Default values for checkout-locator.
//!
//! This module keeps the fixed names the locator relies on in one place, so
//! the library, the CLI and the tests agree on them.

use std::path::{Path, PathBuf};

/// File whose presence marks the root of the source tree.
pub const INDICATOR_FILE: &str = "build/soong/soong_ui.bash";

/// Environment variable that overrides the upward scan for the tree root.
pub const TOP_DIR_ENV: &str = "ANDROID_BUILD_TOP";

/// Environment variable that overrides the build-output directory.
pub const OUT_DIR_ENV: &str = "OUT_DIR";

/// Name of the build-output directory under the tree root.
pub const DEFAULT_OUT_DIR_NAME: &str = "out";

/// Administrative entry marking the root of a git checkout.
pub const VCS_MARKER: &str = ".git";

/// Prefix turning a pattern into an excluded pattern.
pub const NEGATION_MARKER: char = '!';

/// Returns the default build-output directory for a source tree root.
pub fn default_out_dir(top: &Path) -> PathBuf {
    top.join(DEFAULT_OUT_DIR_NAME)
}
