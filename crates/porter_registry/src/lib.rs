//! Name-indexed in-memory mirror of guild channels.
//!
//! The [`ChannelRegistry`] keeps a `name → channel` map consistent under
//! asynchronous create/rename/delete events, and actively prevents two
//! simultaneous channels from sharing a name: a conflicting create is
//! deleted, a conflicting rename is reverted, and a notice is posted to the
//! reporting channel either way. The exclusion set distinguishes the
//! registry's own corrective events from genuine external ones, which is
//! what stops a correction from re-triggering conflict handling forever.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod registry;

pub use registry::ChannelRegistry;
