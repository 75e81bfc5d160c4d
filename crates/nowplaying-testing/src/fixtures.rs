//! Sample documents shaped like real server responses.

/// Server descriptor whose `friendlyName` is `attic`.
pub const SERVER: &str = include_str!("../samples/server.xml");

/// One movie (user `cameron`, hardware transcode), one episode (user
/// `eleanor`, direct play) and one track (no user, software transcode).
pub const SESSIONS_MIXED: &str = include_str!("../samples/sessions_mixed.xml");

/// Two tracks without user or transcode elements.
pub const SESSIONS_TWO_TRACKS: &str = include_str!("../samples/sessions_two_tracks.xml");

pub const SESSIONS_EMPTY: &str = include_str!("../samples/sessions_empty.xml");

/// Body a server sends with a 401 response.
pub const UNAUTHORIZED: &str = include_str!("../samples/unauthorized.html");
