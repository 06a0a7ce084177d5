pub(crate) mod candidates;
pub(crate) mod flights;
pub(crate) mod response_common;
pub(crate) mod roster;
pub(crate) mod save_roster;
