use parking_lot::RwLock;
use std::{collections::HashMap, path::PathBuf};

use crate::SourceId;

/// The Source Engine manages a relationship between file paths and their corresponding
/// integer-based source IDs. It also keeps the reverse map, so a source ID stored in a
/// span can be traced back to its original file path when reporting diagnostics.
///
/// The Source Engine is designed to be thread-safe. Its internal structures are
/// secured by a `RwLock`, so its functions can be invoked through a shared reference.
#[derive(Debug, Default)]
pub struct SourceEngine {
    next_id: RwLock<u32>,
    source_map: RwLock<HashMap<PathBuf, SourceId>>,
    path_map: RwLock<HashMap<SourceId, PathBuf>>,
}

impl SourceEngine {
    /// Retrieves the source ID for the provided path. If an ID already exists for the
    /// given path it is returned, otherwise a new one is allocated.
    pub fn get_source_id(&self, path: &PathBuf) -> SourceId {
        if let Some(source_id) = self.source_map.read().get(path) {
            return *source_id;
        }

        let mut source_map = self.source_map.write();
        // Another thread may have registered the path between the two locks.
        if let Some(source_id) = source_map.get(path) {
            return *source_id;
        }
        let source_id = {
            let mut next_id = self.next_id.write();
            let source_id = SourceId::new(*next_id);
            *next_id += 1;
            source_id
        };
        source_map.insert(path.clone(), source_id);
        self.path_map.write().insert(source_id, path.clone());

        source_id
    }

    /// Provides the file path corresponding to a specified source ID.
    pub fn get_path(&self, source_id: &SourceId) -> Option<PathBuf> {
        self.path_map.read().get(source_id).cloned()
    }
}
