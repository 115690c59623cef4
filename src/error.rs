use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Unable to open dictionary {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading dictionary: {}", .0)]
    Read(#[from] std::io::Error),
}
