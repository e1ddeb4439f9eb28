#![deny(missing_docs)]
#![doc = "Fusion-path post-processor: compacts a raw kernel iterate path into a monotone, deduplicated, interpolated sequence consumable by a dendrogram builder."]

/// Adapters from `carp-kernel`/`carp-bicluster` result types.
pub mod adapters;
/// The pure `compact` transform.
pub mod compact;
/// Raw and compacted path representations.
pub mod path;

pub use adapters::{from_bi_path_result_col, from_bi_path_result_row, from_path_result};
pub use compact::compact;
pub use path::{CompactPath, RawPath};
