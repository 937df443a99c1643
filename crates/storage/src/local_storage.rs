use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;

use fittrack_domain as domain;
use fittrack_web_app::log;

use crate::record;

/// Browser-backed persistence. The custom exercise collection lives under
/// a single key as one JSON array; every write replaces the whole array.
pub struct LocalStorage;

const KEY_CUSTOM_EXERCISES: &str = "custom exercises";

impl domain::CustomExerciseRepository for LocalStorage {
    fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let records: Vec<record::Exercise> =
            match gloo_storage::LocalStorage::get(KEY_CUSTOM_EXERCISES) {
                Ok(records) => records,
                Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => vec![],
                Err(err) => {
                    return Err(domain::ReadError::Storage(domain::StorageError::Other(
                        err.to_string().into(),
                    )));
                }
            };
        records
            .into_iter()
            .map(|record| {
                domain::Exercise::try_from(record).map_err(|err| {
                    domain::ReadError::Storage(domain::StorageError::InvalidData(err.to_string()))
                })
            })
            .collect()
    }

    fn write_exercises(&self, exercises: &[domain::Exercise]) -> Result<(), domain::StorageError> {
        let records = exercises
            .iter()
            .map(record::Exercise::from)
            .collect::<Vec<_>>();
        gloo_storage::LocalStorage::set(KEY_CUSTOM_EXERCISES, records)
            .map_err(|err| domain::StorageError::Other(err.to_string().into()))
    }
}

pub struct Log;

const KEY_LOG: &str = "log";

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
