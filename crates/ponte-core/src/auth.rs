//! Static allow-list authorization.
//!
//! Every inbound chat event is gated on membership of the sender's user
//! ID. An empty allow-list is the sentinel for "no restriction".

use std::collections::HashSet;

/// Set of user IDs permitted to use the bot.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    users: HashSet<i64>,
}

impl AllowList {
    pub fn new(user_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            users: user_ids.into_iter().collect(),
        }
    }

    /// Whether any user may talk to the bot.
    pub fn is_unrestricted(&self) -> bool {
        self.users.is_empty()
    }

    /// Whether the given user may talk to the bot.
    pub fn permits(&self, user_id: i64) -> bool {
        self.is_unrestricted() || self.users.contains(&user_id)
    }
}
