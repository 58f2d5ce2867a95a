//! Saving and restoring state, in a format chosen by file extension.
//!
//! Files are written to a temporary file next to their destination and
//! renamed into place, so a reader never sees a partially-written file.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use std::fs::File;
use std::io::{Error, ErrorKind, Result};
use std::path::Path;

/// The serialization formats we know about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// `.yaml`
    Yaml,
    /// `.json`
    Json,
    /// `.cbor`
    Cbor,
}

impl Format {
    /// Pick the format from the extension of `path`.
    pub fn from_path(path: &Path) -> Result<Format> {
        match path.extension().and_then(|x| x.to_str()) {
            Some("yaml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            Some("cbor") => Ok(Format::Cbor),
            _ => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("I don't know how to handle file {:?}", path),
            )),
        }
    }
}

fn invalid_data<E>(e: E) -> Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Error::new(ErrorKind::InvalidData, e)
}

/// Atomically write `value` to `path`, replacing any existing file.
pub fn save<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let dir = match path.parent() {
        Some(p) if p.as_os_str().len() > 0 => p,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    match format {
        Format::Yaml => serde_yaml::to_writer(&mut file, value).map_err(invalid_data)?,
        Format::Json => serde_json::to_writer(&mut file, value).map_err(invalid_data)?,
        Format::Cbor => serde_cbor::to_writer(&mut file, value).map_err(invalid_data)?,
    }
    file.as_file().sync_data()?;
    file.persist(path)?;
    Ok(())
}

/// Read a value previously written with [`save`].
pub fn load<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let f = File::open(path)?;
    match format {
        Format::Yaml => serde_yaml::from_reader(f).map_err(invalid_data),
        Format::Json => serde_json::from_reader(f).map_err(invalid_data),
        Format::Cbor => serde_cbor::from_reader(f).map_err(invalid_data),
    }
}

#[test]
fn format_from_extension() {
    assert_eq!(Format::from_path(Path::new("a/b.yaml")).unwrap(), Format::Yaml);
    assert_eq!(Format::from_path(Path::new("b.json")).unwrap(), Format::Json);
    assert_eq!(Format::from_path(Path::new("b.cbor")).unwrap(), Format::Cbor);
    let e = Format::from_path(Path::new("b.txt")).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidInput);
    assert!(Format::from_path(Path::new("yaml")).is_err());
}

#[test]
fn quaternion_round_trip() {
    use crate::Quaternion;
    let tempd = tempfile::TempDir::new().unwrap();
    let q = Quaternion::new(0.5070333, 0.3501829, 0.7724199, -0.1538071);
    for name in &["q.yaml", "q.json", "q.cbor"] {
        let path = tempd.path().join(name);
        save(&path, &q).unwrap();
        let back: Quaternion = load(&path).unwrap();
        assert_eq!(back, q);
    }
}

#[test]
fn save_replaces_existing_file() {
    use crate::Quaternion;
    let tempd = tempfile::TempDir::new().unwrap();
    let path = tempd.path().join("q.json");
    save(&path, &Quaternion::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    save(&path, &Quaternion::identity()).unwrap();
    let back: Quaternion = load(&path).unwrap();
    assert_eq!(back, Quaternion::identity());
    // only the destination is left behind
    assert_eq!(std::fs::read_dir(tempd.path()).unwrap().count(), 1);
}

#[test]
fn load_reports_bad_data() {
    let tempd = tempfile::TempDir::new().unwrap();
    let path = tempd.path().join("q.json");
    std::fs::write(&path, "not json").unwrap();
    let e = load::<crate::Quaternion, _>(&path).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidData);
}

#[test]
fn load_missing_file() {
    let tempd = tempfile::TempDir::new().unwrap();
    let e = load::<crate::Quaternion, _>(tempd.path().join("missing.yaml")).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::NotFound);
}
