use log::debug;

use crate::parser::Deck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaStatus {
    Idle,
    Playing,
    Paused,
}

/// The playback surface of one slide's embedded media element.
#[derive(Debug, Clone)]
pub struct MediaChannel {
    pub source: String,
    pub native_controls: bool,
    status: MediaStatus,
}

impl MediaChannel {
    pub fn status(&self) -> MediaStatus {
        self.status
    }

    pub fn play(&mut self) {
        self.status = MediaStatus::Playing;
    }

    pub fn pause(&mut self) {
        if self.status == MediaStatus::Playing {
            self.status = MediaStatus::Paused;
        }
    }
}

/// Per-slide media capability. Most slides have none; play/pause requests
/// against an absent channel are fire-and-forget no-ops.
#[derive(Debug, Default)]
pub struct MediaRack {
    channels: Vec<Option<MediaChannel>>,
}

impl MediaRack {
    pub fn from_deck(deck: &Deck) -> Self {
        let channels = deck
            .slides
            .iter()
            .map(|slide| {
                slide.media.as_ref().map(|m| MediaChannel {
                    source: m.source.clone(),
                    native_controls: m.native_controls,
                    status: MediaStatus::Idle,
                })
            })
            .collect();
        Self { channels }
    }

    pub fn channel(&self, index: usize) -> Option<&MediaChannel> {
        index
            .checked_sub(1)
            .and_then(|i| self.channels.get(i))
            .and_then(Option::as_ref)
    }

    pub fn play(&mut self, index: usize) {
        match self.channel_mut(index) {
            Some(channel) => {
                debug!("media: play {} on slide {index}", channel.source);
                channel.play();
            }
            None => debug!("media: no channel on slide {index}, play skipped"),
        }
    }

    pub fn pause(&mut self, index: usize) {
        match self.channel_mut(index) {
            Some(channel) => {
                debug!("media: pause {} on slide {index}", channel.source);
                channel.pause();
            }
            None => debug!("media: no channel on slide {index}, pause skipped"),
        }
    }

    fn channel_mut(&mut self, index: usize) -> Option<&mut MediaChannel> {
        index
            .checked_sub(1)
            .and_then(|i| self.channels.get_mut(i))
            .and_then(Option::as_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn play_and_pause_drive_status() {
        let deck = parser::parse("@media: a.mp4\n# One\n\n---\n\n# Two");
        let mut rack = MediaRack::from_deck(&deck);
        assert_eq!(rack.channel(1).unwrap().status(), MediaStatus::Idle);

        rack.play(1);
        assert_eq!(rack.channel(1).unwrap().status(), MediaStatus::Playing);
        rack.pause(1);
        assert_eq!(rack.channel(1).unwrap().status(), MediaStatus::Paused);
    }

    #[test]
    fn pause_before_play_stays_idle() {
        let deck = parser::parse("@media: a.mp4\n# One");
        let mut rack = MediaRack::from_deck(&deck);
        rack.pause(1);
        assert_eq!(rack.channel(1).unwrap().status(), MediaStatus::Idle);
    }

    #[test]
    fn absent_channel_is_a_no_op() {
        let deck = parser::parse("# No media");
        let mut rack = MediaRack::from_deck(&deck);
        rack.play(1);
        rack.pause(1);
        rack.play(99);
        assert!(rack.channel(1).is_none());
    }
}
