use std::{
    fs::{create_dir_all, read_to_string, write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::{Brand, Location, MatchedPair};

const PAIRS: &str = "nearby_pairs.json";
const EXPORT_STEM: &str = "superchargers_with_in_n_out";

/// The directory every stage reads its inputs from and writes its outputs to.
#[derive(Clone, Debug)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn locations_path(&self, brand: Brand) -> PathBuf {
        self.root.join(format!("{}.json", brand.slug()))
    }

    pub fn pairs_path(&self) -> PathBuf {
        self.root.join(PAIRS)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.root.join(format!("{EXPORT_STEM}.csv"))
    }

    pub fn kml_path(&self) -> PathBuf {
        self.root.join(format!("{EXPORT_STEM}.kml"))
    }

    pub fn load_locations(&self, brand: Brand) -> Result<Vec<Location>> {
        let command = match brand {
            Brand::Supercharger => "fetch supercharger",
            Brand::InNOut => "fetch in-n-out",
        };
        load(&self.locations_path(brand), command)
    }

    pub fn save_locations(&self, brand: Brand, locations: &[Location]) -> Result<PathBuf> {
        let path = self.locations_path(brand);
        self.save(&path, locations)?;
        Ok(path)
    }

    pub fn load_pairs(&self) -> Result<Vec<MatchedPair>> {
        load(&self.pairs_path(), "match")
    }

    pub fn save_pairs(&self, pairs: &[MatchedPair]) -> Result<PathBuf> {
        let path = self.pairs_path();
        self.save(&path, pairs)?;
        Ok(path)
    }

    pub fn write(&self, path: &Path, contents: &str) -> Result<()> {
        create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;
        write(path, contents).with_context(|| format!("failed to write {}", path.display()))
    }

    fn save<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(value)?;
        contents.push('\n');
        self.write(path, &contents)
    }
}

fn load<T: DeserializeOwned>(path: &Path, command: &str) -> Result<T> {
    if !path.exists() {
        bail!(
            "{} not found, run `nearby-pairs {command}` first",
            path.display()
        );
    }

    let contents =
        read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}
