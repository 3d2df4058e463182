//! Localized message lookup.
//!
//! Bundles are static tables keyed by locale tag. [`Translator::for_locale`] resolves the exact tag,
//! then the language prefix, then English, so a lookup never fails.

/// Message identifiers understood by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Stop,
    Reflector,
    Error,
}

impl MessageKey {
    /// Resource id of the message.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::Stop => "STOP_MESSAGE",
            MessageKey::Reflector => "REFLECTOR_MESSAGE",
            MessageKey::Error => "ERROR_MESSAGE",
        }
    }
}

struct Bundle {
    locale: &'static str,
    stop: &'static str,
    reflector: &'static str,
    error: &'static str,
}

impl Bundle {
    fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::Stop => self.stop,
            MessageKey::Reflector => self.reflector,
            MessageKey::Error => self.error,
        }
    }
}

const FALLBACK_LOCALE: &str = "en";

static BUNDLES: &[Bundle] = &[
    Bundle {
        locale: "en",
        stop: "Goodbye!",
        reflector: "You just triggered {{intentName}}",
        error: "Sorry, I had trouble doing what you asked. Please try again.",
    },
    Bundle {
        locale: "de",
        stop: "Auf Wiedersehen!",
        reflector: "Du hast gerade {{intentName}} ausgelöst",
        error: "Es tut mir leid, ich konnte das nicht tun. Bitte versuche es erneut.",
    },
    Bundle {
        locale: "fr",
        stop: "Au revoir !",
        reflector: "Vous venez de déclencher {{intentName}}",
        error: "Désolé, je n'ai pas pu faire ce que vous avez demandé. Veuillez réessayer.",
    },
    Bundle {
        locale: "es",
        stop: "¡Adiós!",
        reflector: "Acabas de activar {{intentName}}",
        error: "Lo siento, tuve problemas para hacer lo que pediste. Inténtalo de nuevo.",
    },
];

/// Translator bound to one resolved locale bundle.
#[derive(Clone, Copy)]
pub struct Translator {
    bundle: &'static Bundle,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.bundle.locale)
            .finish()
    }
}

impl Translator {
    /// Resolves `locale` (e.g. `de-DE`): exact tag, then language (`de`), then English.
    pub fn for_locale(locale: &str) -> Self {
        let normalized = locale.trim().to_ascii_lowercase().replace('_', "-");
        let language = normalized.split('-').next().unwrap_or_default();
        let bundle = find_bundle(&normalized)
            .or_else(|| find_bundle(language))
            .unwrap_or_else(fallback_bundle);
        Self { bundle }
    }

    /// Locale tag of the resolved bundle.
    pub fn locale(&self) -> &'static str {
        self.bundle.locale
    }

    pub fn t(&self, key: MessageKey) -> String {
        self.bundle.get(key).to_string()
    }

    /// Looks up `key` and replaces each `{{name}}` placeholder with its value.
    pub fn t_with(&self, key: MessageKey, params: &[(&str, &str)]) -> String {
        interpolate(self.bundle.get(key), params)
    }
}

fn find_bundle(tag: &str) -> Option<&'static Bundle> {
    BUNDLES.iter().find(|b| b.locale.eq_ignore_ascii_case(tag))
}

fn fallback_bundle() -> &'static Bundle {
    find_bundle(FALLBACK_LOCALE).unwrap_or(&BUNDLES[0])
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{{{}}}}}", name), value)
    })
}
