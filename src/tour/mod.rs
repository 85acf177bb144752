pub mod io;
pub mod stop;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    tour::stop::Stop,
};

fn find_first_file_with_extension<P: AsRef<Path>>(dir: P, extension: &str) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .ok()?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.to_ascii_lowercase() == extension)
        })
        .min()
}

/// A tour as supplied upstream: an identifier and its stops in original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub tour_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub stops: Vec<Stop>,
}

impl Tour {
    /// Reads a tour file, or the first `.json` file (by name) inside a directory.
    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let tour_path = if path.is_dir() {
            find_first_file_with_extension(path, "json")
                .context("Tour directory must contain a .json file")?
        } else {
            path.to_path_buf()
        };

        let tour = io::read_tour(&tour_path)
            .with_context(|| format!("Failed to load tour from {}", tour_path.display()))?;

        info!(
            tour_id = %tour.tour_id,
            stops = tour.stops.len(),
            "loaded tour"
        );
        Ok(tour)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let tour: Tour = serde_json::from_str(s)?;
        tour.validate()?;
        Ok(tour)
    }

    /// Rejects duplicate stop ids and out-of-range coordinates. Stops without
    /// coordinates are accepted.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.stops.len());
        for stop in self.stops.iter() {
            if !seen.insert(&stop.id) {
                return Err(Error::DuplicateStopId(stop.id.to_string()));
            }

            match stop.position {
                Some(pos) => pos.validate()?,
                None => debug!(stop = %stop.id, "stop has no coordinates"),
            }
        }

        Ok(())
    }
}
