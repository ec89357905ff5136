// ABOUTME: API module containing the JSON handlers for the guestbook.
// ABOUTME: Entries are exchanged as raw strings; escaping is left to whoever renders them.

pub mod entries;
