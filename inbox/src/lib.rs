//! Ordering and filtering of the dealer inbox.
//!
//! [`ranker::rank`] merges group channels and direct threads into the list the
//! messages screen renders, and [`pin::composite_pin_key`] derives the key a
//! conversation is looked up by in a [`pin::PinSet`].

pub mod cli;
pub mod filter;
pub mod models;
pub mod pin;
pub mod ranker;
pub mod services;
pub mod settings;
pub mod summary;
pub mod timestamp;

pub use filter::ConversationFilter;
pub use models::{ChannelConversation, Conversation, DirectConversation, Priority, RankedItem};
pub use pin::{PinSet, composite_pin_key};
pub use ranker::rank;
