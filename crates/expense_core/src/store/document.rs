//! Versioned storage envelope shared by all stores.
//!
//! Stored value shape: `{"state": <store state>, "version": 0}`.

use crate::repo::kv_repo::{KvRepository, RepoError};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Envelope version written by this binary.
pub const STORE_VERSION: u32 = 0;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while persisting store state.
///
/// In-memory state has already been updated when this is returned.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "failed to persist store state: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize store state: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, S> {
    state: &'a S,
    version: u32,
}

#[derive(Deserialize)]
struct Envelope<S> {
    state: S,
    version: u32,
}

/// Serializes `state` into the envelope and writes it under `key`.
pub(crate) fn save_document<R, S>(repo: &R, key: &str, state: &S) -> StoreResult<()>
where
    R: KvRepository + ?Sized,
    S: Serialize,
{
    let payload = serde_json::to_string(&EnvelopeRef {
        state,
        version: STORE_VERSION,
    })
    .map_err(|err| {
        error!("event=store_save module=store status=error key={key} error_code=serialize_failed error={err}");
        err
    })?;

    repo.set_item(key, &payload).map_err(|err| {
        error!("event=store_save module=store status=error key={key} error_code=write_failed error={err}");
        err
    })?;

    debug!(
        "event=store_save module=store status=ok key={key} bytes={}",
        payload.len()
    );
    Ok(())
}

/// Reads the document under `key`.
///
/// Returns `None` when the key is absent, unreadable, unparseable, or was
/// written with a different envelope version.
pub(crate) fn load_document<R, S>(repo: &R, key: &str) -> Option<S>
where
    R: KvRepository + ?Sized,
    S: DeserializeOwned,
{
    let raw = match repo.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=store_load module=store status=fallback key={key} reason=absent");
            return None;
        }
        Err(err) => {
            warn!("event=store_load module=store status=fallback key={key} reason=read_failed error={err}");
            return None;
        }
    };

    match serde_json::from_str::<Envelope<S>>(&raw) {
        Ok(envelope) if envelope.version == STORE_VERSION => {
            debug!("event=store_load module=store status=ok key={key}");
            Some(envelope.state)
        }
        Ok(envelope) => {
            warn!(
                "event=store_load module=store status=fallback key={key} reason=version_mismatch version={}",
                envelope.version
            );
            None
        }
        Err(err) => {
            warn!("event=store_load module=store status=fallback key={key} reason=parse_failed error={err}");
            None
        }
    }
}
