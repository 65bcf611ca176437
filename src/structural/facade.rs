//! Facade: one entry point over several subsystems that each need their own
//! setup.

use std::io::{self, Write};

use crate::error::Result;

#[derive(Default)]
pub struct VideoPlayer {
    ready: bool,
}

impl VideoPlayer {
    pub fn initialize(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.ready = true;
        writeln!(out, "Video Player initialized")
    }

    pub fn play_video(&self, out: &mut dyn Write, video: &str) -> io::Result<()> {
        writeln!(out, "Playing video: {video}")
    }
}

#[derive(Default)]
pub struct AudioPlayer {
    ready: bool,
}

impl AudioPlayer {
    pub fn initialize(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.ready = true;
        writeln!(out, "Audio Player initialized")
    }

    pub fn play_audio(&self, out: &mut dyn Write, audio: &str) -> io::Result<()> {
        writeln!(out, "Playing audio: {audio}")
    }
}

#[derive(Default)]
pub struct Subtitles {
    ready: bool,
}

impl Subtitles {
    pub fn initialize(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.ready = true;
        writeln!(out, "Subtitles initialized")
    }

    pub fn display(&self, out: &mut dyn Write, subtitle: &str) -> io::Result<()> {
        writeln!(out, "Displaying subtitles: {subtitle}")
    }
}

#[derive(Default)]
pub struct MultimediaFacade {
    video: VideoPlayer,
    audio: AudioPlayer,
    subtitles: Subtitles,
}

impl MultimediaFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.video.initialize(out)?;
        self.audio.initialize(out)?;
        self.subtitles.initialize(out)
    }

    pub fn is_ready(&self) -> bool {
        self.video.ready && self.audio.ready && self.subtitles.ready
    }

    pub fn play(
        &self,
        out: &mut dyn Write,
        video: &str,
        audio: &str,
        subtitle: &str,
    ) -> io::Result<()> {
        if !self.is_ready() {
            tracing::warn!("playing before initialize()");
        }
        self.video.play_video(out, video)?;
        self.audio.play_audio(out, audio)?;
        self.subtitles.display(out, subtitle)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut multimedia = MultimediaFacade::new();
    multimedia.initialize(out)?;
    multimedia.play(out, "Movie.mp4", "Soundtrack.mp3", "English Subtitles")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_readies_every_subsystem() {
        let mut facade = MultimediaFacade::new();
        assert!(!facade.is_ready());

        let mut out = Vec::new();
        facade.initialize(&mut out).unwrap();
        assert!(facade.is_ready());
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_run_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Video Player initialized\n\
             Audio Player initialized\n\
             Subtitles initialized\n\
             Playing video: Movie.mp4\n\
             Playing audio: Soundtrack.mp3\n\
             Displaying subtitles: English Subtitles\n"
        );
    }
}
