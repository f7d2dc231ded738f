use crate::song::Song;
use tsh_types::TshResult;

/// Ordered, duplicate-tolerant collection of songs for one command cycle.
///
/// Every mutating operation returns a new `SongStore` and leaves the
/// receiver untouched. Undo snapshots rely on this: a snapshot must never
/// alias the live store it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongStore {
    songs: Vec<Song>,
}

impl SongStore {
    pub fn new() -> Self {
        SongStore { songs: Vec::new() }
    }

    /// Build a store from raw lines. The first malformed line fails the
    /// whole load; the song file is valid as a unit or not at all.
    pub fn load_all<'a, I>(lines: I) -> TshResult<SongStore>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut songs = Vec::new();
        for line in lines {
            songs.push(Song::parse(line)?);
        }
        Ok(SongStore { songs })
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// All song names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.songs.iter().map(|song| song.name()).collect()
    }

    /// Songs with strictly more than `min` plays, insertion order preserved.
    pub fn filter_above(&self, min: u64) -> Vec<&Song> {
        self.songs.iter().filter(|song| song.plays() > min).collect()
    }

    /// Index of the first song with a matching name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.songs.iter().position(|song| song.name() == name)
    }

    /// A new store with the first song matching `name` removed, or `None`
    /// when nothing matches.
    pub fn remove_first(&self, name: &str) -> Option<SongStore> {
        let index = self.find_by_name(name)?;
        let mut songs = self.songs.clone();
        songs.remove(index);
        Some(SongStore { songs })
    }

    /// A new store with `song` appended.
    pub fn append(&self, song: Song) -> SongStore {
        let mut songs = self.songs.clone();
        songs.push(song);
        SongStore { songs }
    }

    /// A new store with the song at `index` replaced wholesale. The index
    /// must come from `find_by_name` on this same store.
    pub fn replace_at(&self, index: usize, song: Song) -> SongStore {
        let mut songs = self.songs.clone();
        songs[index] = song;
        SongStore { songs }
    }

    /// Render to the persisted form: newline-joined lines with no trailing
    /// newline after the last one.
    pub fn to_file_string(&self) -> String {
        self.songs
            .iter()
            .map(|song| song.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
