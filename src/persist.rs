//! Raw log files for offline inspection.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::acqlog::{AcquisitionLog, CoreId};
use crate::error::{BenchError, Result};

/// Writes `log` to `<dir>/<name>.log` as comma separated core ids, replacing
/// any earlier file of that name.
pub fn write_log(dir: impl AsRef<Path>, name: &str, log: &AcquisitionLog) -> Result<PathBuf> {
    let path = dir.as_ref().join(format!("{name}.log"));
    fs::write(&path, encode(log.as_slice()))?;
    debug!(path = %path.display(), entries = log.len(), "wrote acquisition log");
    Ok(path)
}

pub fn encode(entries: &[CoreId]) -> String {
    let mut out = String::with_capacity(entries.len() * 2);
    for (i, id) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&id.to_string());
    }
    out
}

/// Parses a log written by [`write_log`].
pub fn read_log(path: impl AsRef<Path>) -> Result<AcquisitionLog> {
    decode(&fs::read_to_string(path)?)
}

pub fn decode(text: &str) -> Result<AcquisitionLog> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(AcquisitionLog::default());
    }
    text.split(',')
        .enumerate()
        .map(|(position, token)| {
            token
                .trim()
                .parse::<CoreId>()
                .map_err(|_| BenchError::MalformedLog {
                    position,
                    token: token.to_owned(),
                })
        })
        .collect::<Result<Vec<_>>>()
        .map(AcquisitionLog::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trailing_separator() {
        assert_eq!(encode(&[0, 7, 7, 12]), "0,7,7,12");
        assert_eq!(encode(&[3]), "3");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn overwrites_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let stale = AcquisitionLog::from(vec![9, 9, 9, 9]);
        let fresh = AcquisitionLog::from(vec![1, 0]);
        write_log(dir.path(), "naive_cas", &stale).unwrap();
        let path = write_log(dir.path(), "naive_cas", &fresh).unwrap();

        assert_eq!(path, dir.path().join("naive_cas.log"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "1,0");
        assert_eq!(read_log(&path).unwrap().as_slice(), &[1, 0]);
    }

    #[test]
    fn rejects_garbage() {
        match decode("1,2,x,3") {
            Err(BenchError::MalformedLog { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(decode("1,,2").is_err());
        assert!(decode("").unwrap().is_empty());
    }
}
