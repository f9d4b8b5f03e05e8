use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{Serializer, ser::Formatter};

use crate::{
    config::META_FILE,
    error::{MetaError, MetaResult},
    record::MetaRecord,
};

/// Single-line layout with a space after every `,` and `:`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// Serialize `record` the way it is stored in `meta.json`. Non-ASCII text is
/// written as-is.
pub fn to_json(record: &MetaRecord) -> Result<Vec<u8>, serde_json::Error> {
    let mut out = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut out, SpacedFormatter);
    record.serialize(&mut ser)?;
    Ok(out)
}

pub fn meta_path(project_dir: &Path) -> PathBuf {
    project_dir.join(META_FILE)
}

/// Write `<project_dir>/meta.json`, replacing any previous file.
pub fn write_record(record: &MetaRecord, project_dir: &Path) -> MetaResult<PathBuf> {
    let path = meta_path(project_dir);
    let bytes = to_json(record).map_err(|source| MetaError::Serialization {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, bytes).map_err(|e| MetaError::file_access(&path, e))?;
    Ok(path)
}
