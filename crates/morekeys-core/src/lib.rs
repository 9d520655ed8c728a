// Morekeys Core Library
// Long-press popup key classification and reordering

pub mod category;
pub mod classify;
pub mod keyspec;
pub mod ordering;
pub mod reorder;
pub mod settings;
mod synthesize;

pub use category::{default_order, KeyCategory};
pub use classify::{classify, RESOURCE_MARKER};
pub use keyspec::{join_key_specs, split_key_specs};
pub use ordering::{decode_order, encode_order};
pub use reorder::reorder_key_specs;
pub use settings::{LongPressSettings, SettingsError};
