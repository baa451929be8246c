use std::collections::BTreeMap;

use crate::foundation::error::{HeroError, HeroResult};
use crate::hero::cycle::VideoIndex;

/// Read-only mapping from video index to heading markup.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct HeadingMap(BTreeMap<u32, String>);

impl Default for HeadingMap {
    fn default() -> Self {
        Self(BTreeMap::from([
            (1, "G<b>a</b>ming".to_owned()),
            (2, "Ide<b>n</b>tity".to_owned()),
            (3, "Re<b>a</b>lity".to_owned()),
            (4, "Lif<b>e</b>style".to_owned()),
        ]))
    }
}

impl HeadingMap {
    /// Build from explicit entries.
    pub fn new(entries: BTreeMap<u32, String>) -> Self {
        Self(entries)
    }

    /// Ensure every index in `1..=total` has a heading.
    pub fn validate(&self, total: u32) -> HeroResult<()> {
        if let Some(missing) = (1..=total).find(|i| !self.0.contains_key(i)) {
            return Err(HeroError::config(format!(
                "headings are missing an entry for video {missing}"
            )));
        }
        Ok(())
    }

    /// Heading markup for `index`.
    pub fn get(&self, index: VideoIndex) -> HeroResult<&str> {
        self.0
            .get(&index.get())
            .map(String::as_str)
            .ok_or_else(|| HeroError::config(format!("no heading for video {index}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hero/headings.rs"]
mod tests;
