mod album;
mod genre;
mod media_file;
mod playlist;

pub use album::{Album, DiscId};
pub use genre::{Genre, Genres};
pub use media_file::MediaFile;
pub use playlist::{media_files_of, Playlist, PlaylistTrack, PlaylistTracks};
