//! Board buttons: each UI user event from a known button plays its hosted audio document.

use serde_json::Map;
use skill_core::{Directive, DirectiveDocument, HandlerInput, RequestHandler, Response, Result};
use tracing::{info, instrument};

use crate::document::audio_document_src;

/// Directive token for audio played from the board.
pub const SOUND_TOKEN: &str = "soundboard_sound";

/// The buttons on the sound board, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundButton {
    Cricket,
    Rimshot,
    Gollum,
    Villain,
    Voice,
    Applause,
}

impl SoundButton {
    pub const ALL: [SoundButton; 6] = [
        SoundButton::Cricket,
        SoundButton::Rimshot,
        SoundButton::Gollum,
        SoundButton::Villain,
        SoundButton::Voice,
        SoundButton::Applause,
    ];

    /// Component id the board sends as the user event source.
    pub fn source_id(&self) -> &'static str {
        match self {
            SoundButton::Cricket => "cricketButton",
            SoundButton::Rimshot => "rimshotButton",
            SoundButton::Gollum => "gollumButton",
            SoundButton::Villain => "villainButton",
            SoundButton::Voice => "voiceButton",
            SoundButton::Applause => "applauseButton",
        }
    }

    /// Name of the hosted audio document.
    pub fn document_name(&self) -> &'static str {
        match self {
            SoundButton::Cricket => "CricketSound",
            SoundButton::Rimshot => "RimshotSound",
            SoundButton::Gollum => "GollumSound",
            SoundButton::Villain => "VillainSound",
            SoundButton::Voice => "VoiceSound",
            SoundButton::Applause => "ApplauseSound",
        }
    }
}

/// Matches user events whose source id is this button's id; answers with one audio directive and no speech.
pub struct SoundButtonHandler {
    button: SoundButton,
}

impl SoundButtonHandler {
    pub fn new(button: SoundButton) -> Self {
        Self { button }
    }
}

impl RequestHandler for SoundButtonHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.user_event_source_id() == Some(self.button.source_id())
    }

    #[instrument(skip(self, input), fields(button = %self.button.source_id()))]
    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        let src = audio_document_src(self.button.document_name());
        info!(src = %src, "Playing sound");
        Ok(input
            .response_builder()
            .add_directive(Directive::RenderAudioDocument {
                token: SOUND_TOKEN.to_string(),
                document: DirectiveDocument::link(src),
                datasources: Map::new(),
            })
            .get_response())
    }
}
