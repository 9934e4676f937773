// SPDX-License-Identifier: MPL-2.0
//! Caption track selection.

/// Descriptor of one caption/subtitle track attached to the media.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    pub id: String,
    pub label: String,
    pub language: String,
    pub is_default: bool,
}

impl CaptionTrack {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            language: language.into(),
            is_default: false,
        }
    }

    /// Marks this track as the one shown by default.
    #[must_use]
    pub fn default_track(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Ordered caption tracks plus the active selection.
///
/// The selection is stored as an id and always refers to a track in the
/// list, or is `None` when captions are off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptionTracks {
    tracks: Vec<CaptionTrack>,
    active: Option<String>,
}

impl CaptionTracks {
    /// Creates the list and activates the first track flagged as default.
    pub fn new(tracks: Vec<CaptionTrack>) -> Self {
        let active = tracks.iter().find(|t| t.is_default).map(|t| t.id.clone());
        Self { tracks, active }
    }

    pub fn tracks(&self) -> &[CaptionTrack] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&CaptionTrack> {
        let id = self.active.as_deref()?;
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Selects a track by id, or turns captions off with `None`.
    ///
    /// Returns false (and keeps the current selection) for unknown ids.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.active = None;
                true
            }
            Some(id) if self.tracks.iter().any(|t| t.id == id) => {
                self.active = Some(id.to_string());
                true
            }
            Some(_) => false,
        }
    }

    /// Advances `off → first → … → last → off`.
    pub fn cycle(&mut self) {
        let next = match self.active_index() {
            None => self.tracks.first(),
            Some(idx) => self.tracks.get(idx + 1),
        };
        self.active = next.map(|t| t.id.clone());
    }

    fn active_index(&self) -> Option<usize> {
        let id = self.active.as_deref()?;
        self.tracks.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks() -> Vec<CaptionTrack> {
        vec![
            CaptionTrack::new("en", "English", "en"),
            CaptionTrack::new("fr", "Français", "fr").default_track(),
            CaptionTrack::new("de", "Deutsch", "de"),
        ]
    }

    #[test]
    fn new_activates_default_track() {
        let captions = CaptionTracks::new(tracks());
        assert_eq!(captions.active_id(), Some("fr"));
        assert_eq!(captions.active().map(|t| t.label.as_str()), Some("Français"));
    }

    #[test]
    fn new_without_default_is_off() {
        let captions = CaptionTracks::new(vec![CaptionTrack::new("en", "English", "en")]);
        assert_eq!(captions.active_id(), None);
    }

    #[test]
    fn select_unknown_id_keeps_selection() {
        let mut captions = CaptionTracks::new(tracks());
        assert!(!captions.select(Some("es")));
        assert_eq!(captions.active_id(), Some("fr"));
        assert!(captions.select(None));
        assert_eq!(captions.active_id(), None);
    }

    #[test]
    fn cycle_walks_tracks_then_turns_off() {
        let mut captions = CaptionTracks::new(tracks());
        captions.select(None);

        let mut seen = Vec::new();
        for _ in 0..4 {
            captions.cycle();
            seen.push(captions.active_id().map(str::to_string));
        }
        assert_eq!(
            seen,
            vec![
                Some("en".to_string()),
                Some("fr".to_string()),
                Some("de".to_string()),
                None
            ]
        );
    }

    #[test]
    fn cycle_with_no_tracks_stays_off() {
        let mut captions = CaptionTracks::default();
        captions.cycle();
        assert_eq!(captions.active_id(), None);
    }
}
