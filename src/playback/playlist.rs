use crate::error::{PlayerError, Result};
use serde::{Deserialize, Serialize};

/// One playable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    #[serde(alias = "src")]
    pub source: String,
}

impl Track {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
        }
    }
}

/// Fixed, non-empty list of tracks with a cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    tracks: Vec<Track>,
    index: usize,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        Ok(Self { tracks, index: 0 })
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Track {
        &self.tracks[self.index]
    }

    pub fn has_navigation(&self) -> bool {
        self.tracks.len() > 1
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.tracks.len();
        self.index
    }

    pub fn prev(&mut self) -> usize {
        let len = self.tracks.len();
        self.index = (self.index + len - 1) % len;
        self.index
    }

    pub fn select(&mut self, index: usize) -> Result<usize> {
        if index >= self.tracks.len() {
            return Err(PlayerError::TrackOutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        self.index = index;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn playlist(len: usize) -> Playlist {
        Playlist::new(
            (0..len)
                .map(|i| Track::new(format!("Clip {i}"), format!("/videos/clip{i}.mp4")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn empty_playlist_is_rejected() {
        assert!(matches!(
            Playlist::new(Vec::new()),
            Err(PlayerError::EmptyPlaylist)
        ));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut list = playlist(3);
        assert_eq!(list.next(), 1);
        assert_eq!(list.next(), 2);
        assert_eq!(list.next(), 0);
        assert_eq!(list.prev(), 2);
        assert_eq!(list.current().title, "Clip 2");
    }

    #[test]
    fn single_track_navigation_stays_put() {
        let mut list = playlist(1);
        assert!(!list.has_navigation());
        assert_eq!(list.next(), 0);
        assert_eq!(list.prev(), 0);
    }

    #[test]
    fn select_out_of_range_keeps_index() {
        let mut list = playlist(2);
        list.select(1).unwrap();
        let err = list.select(5).unwrap_err();
        assert!(matches!(err, PlayerError::TrackOutOfRange { index: 5, len: 2 }));
        assert_eq!(list.index(), 1);
    }

    #[test]
    fn track_accepts_src_alias() {
        let track: Track = serde_json::from_str(r#"{"title":"Intro","src":"/intro.mp4"}"#).unwrap();
        assert_eq!(track.source, "/intro.mp4");
    }

    proptest! {
        #[test]
        fn next_cycles_back_to_start(len in 1usize..40, start in 0usize..40) {
            let mut list = playlist(len);
            let start = start % len;
            list.select(start).unwrap();
            for _ in 0..len {
                list.next();
            }
            prop_assert_eq!(list.index(), start);
        }

        #[test]
        fn prev_cycles_back_to_start(len in 1usize..40, start in 0usize..40) {
            let mut list = playlist(len);
            let start = start % len;
            list.select(start).unwrap();
            for _ in 0..len {
                list.prev();
            }
            prop_assert_eq!(list.index(), start);
        }
    }
}
