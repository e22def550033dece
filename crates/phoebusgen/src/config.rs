// crates/phoebusgen/src/config.rs

//! Locates the color and font definition files.
//!
//! Lookup order, per file: the environment variable, then
//! `~/.phoebusgen/<file>`, then the definitions bundled with the crate.

use crate::error::{PhoebusError, Result};
use log::debug;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a `color.def` file.
pub const COLOR_DEF_ENV: &str = "PHOEBUSGEN_COLOR_DEF";
/// Environment variable naming a `font.def` file.
pub const FONT_DEF_ENV: &str = "PHOEBUSGEN_FONT_DEF";

/// Per-user directory checked for definition overrides.
const USER_DIR: &str = ".phoebusgen";

pub(crate) const BUILTIN_COLOR_DEF: &str = include_str!("../config/color.def");
pub(crate) const BUILTIN_FONT_DEF: &str = include_str!("../config/font.def");

/// Which definition files to load. `None` selects the bundled file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub color_def: Option<PathBuf>,
    pub font_def: Option<PathBuf>,
}

impl Config {
    /// Resolves definition files from the environment and the user's home directory.
    pub fn discover() -> Self {
        let home = env::var_os("HOME").map(PathBuf::from);
        Self {
            color_def: locate(env::var_os(COLOR_DEF_ENV), home.as_deref(), "color.def"),
            font_def: locate(env::var_os(FONT_DEF_ENV), home.as_deref(), "font.def"),
        }
    }

    pub fn with_color_def(mut self, path: impl Into<PathBuf>) -> Self {
        self.color_def = Some(path.into());
        self
    }

    pub fn with_font_def(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_def = Some(path.into());
        self
    }

    /// Contents of the selected color definitions.
    pub fn color_source(&self) -> Result<String> {
        read_or_builtin(self.color_def.as_deref(), BUILTIN_COLOR_DEF)
    }

    /// Contents of the selected font definitions.
    pub fn font_source(&self) -> Result<String> {
        read_or_builtin(self.font_def.as_deref(), BUILTIN_FONT_DEF)
    }
}

fn locate(from_env: Option<OsString>, home: Option<&Path>, file: &str) -> Option<PathBuf> {
    if let Some(path) = from_env.filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        debug!("{} selected from the environment: {}", file, path.display());
        return Some(path);
    }

    let candidate = home?.join(USER_DIR).join(file);
    if candidate.is_file() {
        debug!("{} selected from user directory: {}", file, candidate.display());
        Some(candidate)
    } else {
        None
    }
}

fn read_or_builtin(path: Option<&Path>, builtin: &str) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| PhoebusError::DefinitionFile {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(builtin.to_string()),
    }
}
