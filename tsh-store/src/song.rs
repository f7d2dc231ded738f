use std::fmt;
use tsh_types::{TshError, TshResult};

/// One name/artist/play-count entry.
///
/// Immutable once constructed; updating a song replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    name: String,
    artist: String,
    plays: u64,
}

impl Song {
    pub fn new(name: impl Into<String>, artist: impl Into<String>, plays: u64) -> Self {
        Song {
            name: name.into(),
            artist: artist.into(),
            plays,
        }
    }

    /// Parse a song from its line form: `name, artist, plays`.
    ///
    /// The delimiter is the literal `", "`. Anything other than exactly
    /// three fields is rejected, as is a play count that is not a
    /// non-negative integer.
    pub fn parse(line: &str) -> TshResult<Song> {
        let fields: Vec<&str> = line.split(", ").collect();
        if fields.len() != 3 {
            return Err(TshError::Format(fields.len()));
        }
        let plays = fields[2]
            .parse::<u64>()
            .map_err(|_| TshError::Plays(fields[2].to_string()))?;
        Ok(Song {
            name: fields[0].to_string(),
            artist: fields[1].to_string(),
            plays,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn plays(&self) -> u64 {
        self.plays
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.artist, self.plays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let song = Song::parse("Paranoid Android, Radiohead, 120").unwrap();
        assert_eq!(song.name(), "Paranoid Android");
        assert_eq!(song.artist(), "Radiohead");
        assert_eq!(song.plays(), 120);
    }

    #[test]
    fn test_round_trip() {
        for line in [
            "Paranoid Android, Radiohead, 120",
            "A, B, 0",
            "Song with  spaces, Some Artist, 7",
        ] {
            let song = Song::parse(line).unwrap();
            assert_eq!(song.to_string(), line);
        }
    }

    #[test]
    fn test_parse_wrong_field_count() {
        match Song::parse("A, B") {
            Err(TshError::Format(n)) => assert_eq!(n, 2),
            other => panic!("expected format error, got {other:?}"),
        }
        match Song::parse("A, B, C, 5") {
            Err(TshError::Format(n)) => assert_eq!(n, 4),
            other => panic!("expected format error, got {other:?}"),
        }
        assert!(matches!(Song::parse(""), Err(TshError::Format(1))));
    }

    #[test]
    fn test_parse_bad_play_count() {
        assert!(matches!(Song::parse("A, B, x"), Err(TshError::Plays(_))));
        assert!(matches!(Song::parse("A, B, -5"), Err(TshError::Plays(_))));
        assert!(matches!(Song::parse("A, B, 1.5"), Err(TshError::Plays(_))));
    }
}
