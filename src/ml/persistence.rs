//! Checksummed binary artifacts for fitted models.
//!
//! File layout (all integers little-endian):
//!
//! ```text
//! +--------+---------+-------------+--------+------------------+
//! | "STSM" | version | payload_len | crc32  | bincode payload  |
//! | 4 B    | u32     | u64         | u32    | payload_len B    |
//! +--------+---------+-------------+--------+------------------+
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, SentiscopeError};

/// File signature of a model artifact.
pub const MAGIC: [u8; 4] = *b"STSM";

/// Current artifact format version.
pub const FORMAT_VERSION: u32 = 1;

/// Header preceding the serialized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactHeader {
    pub version: u32,
    pub payload_len: u64,
    pub checksum: u32,
}

impl ArtifactHeader {
    /// Size of the encoded header in bytes.
    pub const SIZE: usize = 4 + 4 + 8 + 4;

    fn for_payload(payload: &[u8]) -> Self {
        ArtifactHeader {
            version: FORMAT_VERSION,
            payload_len: payload.len() as u64,
            checksum: crc32fast::hash(payload),
        }
    }

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&MAGIC)?;
        writer.write_u32::<LittleEndian>(self.version)?;
        writer.write_u64::<LittleEndian>(self.payload_len)?;
        writer.write_u32::<LittleEndian>(self.checksum)?;
        Ok(())
    }

    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let truncated =
            |e: std::io::Error| SentiscopeError::storage(format!("truncated header: {e}"));

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic).map_err(truncated)?;
        if magic != MAGIC {
            return Err(SentiscopeError::storage("not a sentiscope model file"));
        }

        let version = reader.read_u32::<LittleEndian>().map_err(truncated)?;
        if version != FORMAT_VERSION {
            return Err(SentiscopeError::storage(format!(
                "unsupported format version {version} (expected {FORMAT_VERSION})"
            )));
        }
        let payload_len = reader.read_u64::<LittleEndian>().map_err(truncated)?;
        let checksum = reader.read_u32::<LittleEndian>().map_err(truncated)?;

        Ok(ArtifactHeader {
            version,
            payload_len,
            checksum,
        })
    }
}

/// Serialize `value` with its header into `writer`.
pub fn write_artifact<T: Serialize, W: Write>(writer: &mut W, value: &T) -> Result<()> {
    let payload = bincode::serialize(value)?;
    ArtifactHeader::for_payload(&payload).write_to(writer)?;
    writer.write_all(&payload)?;
    Ok(())
}

/// Read and verify an artifact from `reader`.
pub fn read_artifact<T: DeserializeOwned, R: Read>(reader: &mut R) -> Result<T> {
    let header = ArtifactHeader::read_from(reader)?;

    let mut payload = Vec::new();
    reader.take(header.payload_len).read_to_end(&mut payload)?;
    if payload.len() as u64 != header.payload_len {
        return Err(SentiscopeError::storage(format!(
            "truncated payload: expected {} bytes, found {}",
            header.payload_len,
            payload.len()
        )));
    }

    let checksum = crc32fast::hash(&payload);
    if checksum != header.checksum {
        return Err(SentiscopeError::storage(format!(
            "checksum mismatch: header {:#010x}, payload {checksum:#010x}",
            header.checksum
        )));
    }

    Ok(bincode::deserialize(&payload)?)
}

/// Write an artifact to `path`, replacing any existing file.
pub fn save<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_artifact(&mut writer, value)?;
    writer.flush()?;
    log::info!("Wrote model artifact {}", path.display());
    Ok(())
}

/// Read an artifact from `path`.
pub fn load<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SentiscopeError::not_found(format!(
            "model file {}",
            path.display()
        )));
    }
    let mut reader = BufReader::new(File::open(path)?);
    read_artifact(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        weights: Vec<f64>,
    }

    fn sample() -> Sample {
        Sample {
            name: "l2".to_string(),
            weights: vec![0.5, -1.25, 3.0],
        }
    }

    #[test]
    fn test_round_trip_in_memory() {
        let mut buffer = Vec::new();
        write_artifact(&mut buffer, &sample()).unwrap();

        assert_eq!(&buffer[..4], b"STSM");
        let restored: Sample = read_artifact(&mut buffer.as_slice()).unwrap();
        assert_eq!(restored, sample());
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.bin");

        save(&path, &sample()).unwrap();
        let restored: Sample = load(&path).unwrap();
        assert_eq!(restored, sample());
    }

    #[test]
    fn test_detects_corruption() {
        let mut buffer = Vec::new();
        write_artifact(&mut buffer, &sample()).unwrap();
        let last = buffer.len() - 1;
        buffer[last] ^= 0xff;

        let err = read_artifact::<Sample, _>(&mut buffer.as_slice()).unwrap_err();
        assert!(matches!(err, SentiscopeError::Storage(_)));
        assert!(err.to_string().contains("checksum"));
    }

    #[test]
    fn test_detects_bad_magic_and_version() {
        let mut buffer = Vec::new();
        write_artifact(&mut buffer, &sample()).unwrap();

        let mut bad_magic = buffer.clone();
        bad_magic[0] = b'X';
        assert!(matches!(
            read_artifact::<Sample, _>(&mut bad_magic.as_slice()),
            Err(SentiscopeError::Storage(_))
        ));

        let mut bad_version = buffer.clone();
        bad_version[4] = 99;
        assert!(matches!(
            read_artifact::<Sample, _>(&mut bad_version.as_slice()),
            Err(SentiscopeError::Storage(_))
        ));
    }

    #[test]
    fn test_detects_truncation() {
        let mut buffer = Vec::new();
        write_artifact(&mut buffer, &sample()).unwrap();
        buffer.truncate(ArtifactHeader::SIZE + 2);

        assert!(matches!(
            read_artifact::<Sample, _>(&mut buffer.as_slice()),
            Err(SentiscopeError::Storage(_))
        ));
        assert!(matches!(
            read_artifact::<Sample, _>(&mut &b"ST"[..]),
            Err(SentiscopeError::Storage(_))
        ));
    }

    #[test]
    fn test_header_cut_after_magic() {
        let mut buffer = Vec::new();
        write_artifact(&mut buffer, &sample()).unwrap();

        for len in [6, 10, ArtifactHeader::SIZE - 1] {
            let err = read_artifact::<Sample, _>(&mut &buffer[..len]).unwrap_err();
            assert!(matches!(err, SentiscopeError::Storage(_)), "{len}: {err:?}");
            assert!(err.to_string().contains("truncated header"));
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result: Result<Sample> = load(dir.path().join("absent.bin"));
        assert!(matches!(result, Err(SentiscopeError::NotFound(_))));
    }
}
