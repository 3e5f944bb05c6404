//! Card sets.
//!
//! - `standard`: the sample resource/common/uncommon/rare/legendary set

pub mod standard;
