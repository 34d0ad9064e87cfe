//! Named banner sets with message-layout preferences
//!
//! A set maps names to banner designs and carries the settings the message
//! compositor needs: writing/newline directions, delimiter characters, and
//! the word-split policy. Configuration is immutable once built; edits
//! replace the whole configuration while keeping the stored banners.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::banner::Banner;
use crate::palette::Direction;
use crate::split::SplitMode;

/// Error type for invalid banner-set configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// Writing and newline direction must lie on perpendicular axes
    #[error("writing direction {writing} and newline direction {newline} are not perpendicular")]
    NotPerpendicular {
        writing: &'static str,
        newline: &'static str,
    },
    /// The space and newline delimiters must differ
    #[error("space and newline characters are both {0:?}")]
    SameDelimiters(char),
    /// Banner names must be nonempty and free of the set's delimiters
    #[error("invalid banner name: {0:?}")]
    InvalidName(String),
}

/// A named collection of banners plus layout preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerSet {
    banners: BTreeMap<String, Banner>,
    writing_direction: Direction,
    newline_direction: Direction,
    space_char: char,
    newline_char: char,
    split_mode: SplitMode,
}

impl BannerSet {
    /// Create an empty set, validating the configuration before any state
    /// exists.
    pub fn new(
        writing_direction: Direction,
        newline_direction: Direction,
        space_char: char,
        newline_char: char,
        split_mode: SplitMode,
    ) -> Result<Self, SetError> {
        let set = Self {
            banners: BTreeMap::new(),
            writing_direction,
            newline_direction,
            space_char,
            newline_char,
            split_mode,
        };
        set.validate()?;
        Ok(set)
    }

    /// Replace the configuration, carrying the stored banners over.
    pub fn with_config(
        self,
        writing_direction: Direction,
        newline_direction: Direction,
        space_char: char,
        newline_char: char,
        split_mode: SplitMode,
    ) -> Result<Self, SetError> {
        let set = Self {
            banners: self.banners,
            writing_direction,
            newline_direction,
            space_char,
            newline_char,
            split_mode,
        };
        set.validate()?;
        Ok(set)
    }

    /// Re-check the configuration invariants. Deserialization bypasses
    /// [`BannerSet::new`], so loaders must call this on every loaded set.
    pub fn validate(&self) -> Result<(), SetError> {
        if !self.writing_direction.is_perpendicular_to(self.newline_direction) {
            return Err(SetError::NotPerpendicular {
                writing: self.writing_direction.name(),
                newline: self.newline_direction.name(),
            });
        }
        if self.space_char == self.newline_char {
            return Err(SetError::SameDelimiters(self.space_char));
        }
        Ok(())
    }

    /// Store a banner under `name`, replacing any previous design. The set
    /// owns its copy; the caller keeps the editable original.
    pub fn insert_banner(&mut self, name: &str, banner: Banner) -> Result<(), SetError> {
        if name.is_empty()
            || name.chars().any(char::is_whitespace)
            || name.contains(self.space_char)
            || name.contains(self.newline_char)
        {
            return Err(SetError::InvalidName(name.to_string()));
        }
        self.banners.insert(name.to_string(), banner);
        Ok(())
    }

    pub fn remove_banner(&mut self, name: &str) -> Option<Banner> {
        self.banners.remove(name)
    }

    pub fn banner(&self, name: &str) -> Option<&Banner> {
        self.banners.get(name)
    }

    pub fn banners(&self) -> &BTreeMap<String, Banner> {
        &self.banners
    }

    /// Banner names, for the word splitter's vocabulary.
    pub fn names(&self) -> Vec<String> {
        self.banners.keys().cloned().collect()
    }

    pub fn writing_direction(&self) -> Direction {
        self.writing_direction
    }

    pub fn newline_direction(&self) -> Direction {
        self.newline_direction
    }

    pub fn space_char(&self) -> char {
        self.space_char
    }

    pub fn newline_char(&self) -> char {
        self.newline_char
    }

    pub fn split_mode(&self) -> SplitMode {
        self.split_mode
    }
}
