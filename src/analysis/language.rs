//! Language identification for comment text.
//!
//! Backed by whatlang's trigram profiles. Codes are ISO 639-1 where one
//! exists, otherwise whatlang's ISO 639-3 code. Like most statistical
//! detectors it always offers a best guess; only a dead heat between the top
//! two candidates is reported as `"unknown"`.

use anyhow::Result;

pub const UNKNOWN: &str = "unknown";

/// Below this whatlang's two best candidates are effectively tied.
const MIN_CONFIDENCE: f64 = 0.01;

/// Anything that can guess the language of a piece of text.
///
/// Implementations must be reentrant: the scorer may call them from several
/// workers at once.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TrigramDetector;

impl LanguageDetector for TrigramDetector {
    fn detect(&self, text: &str) -> Result<String> {
        if !text.chars().any(char::is_alphabetic) {
            anyhow::bail!("no features in text");
        }

        let Some(info) = whatlang::detect(text) else {
            return Ok(UNKNOWN.to_string());
        };
        if info.confidence() < MIN_CONFIDENCE {
            return Ok(UNKNOWN.to_string());
        }

        Ok(iso_639_1(info.lang().code()).to_string())
    }
}

fn iso_639_1(code: &'static str) -> &'static str {
    match code {
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "ara" => "ar",
        "aze" => "az",
        "bel" => "be",
        "ben" => "bn",
        "bul" => "bg",
        "cat" => "ca",
        "ces" => "cs",
        "cmn" => "zh",
        "dan" => "da",
        "deu" => "de",
        "ell" => "el",
        "eng" => "en",
        "epo" => "eo",
        "est" => "et",
        "fin" => "fi",
        "fra" => "fr",
        "guj" => "gu",
        "heb" => "he",
        "hin" => "hi",
        "hrv" => "hr",
        "hun" => "hu",
        "hye" => "hy",
        "ind" => "id",
        "ita" => "it",
        "jav" => "jv",
        "jpn" => "ja",
        "kan" => "kn",
        "kat" => "ka",
        "khm" => "km",
        "kor" => "ko",
        "lat" => "la",
        "lav" => "lv",
        "lit" => "lt",
        "mal" => "ml",
        "mar" => "mr",
        "mkd" => "mk",
        "mya" => "my",
        "nep" => "ne",
        "nld" => "nl",
        "nob" => "nb",
        "ori" => "or",
        "pan" => "pa",
        "pes" => "fa",
        "pol" => "pl",
        "por" => "pt",
        "ron" => "ro",
        "rus" => "ru",
        "sin" => "si",
        "slk" => "sk",
        "slv" => "sl",
        "sna" => "sn",
        "spa" => "es",
        "srp" => "sr",
        "swe" => "sv",
        "tam" => "ta",
        "tel" => "te",
        "tgl" => "tl",
        "tha" => "th",
        "tuk" => "tk",
        "tur" => "tr",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "vie" => "vi",
        "yid" => "yi",
        "zul" => "zu",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> String {
        TrigramDetector.detect(text).unwrap()
    }

    #[test]
    fn detects_full_sentences() {
        assert_eq!(
            detect("I watched the whole thing twice and I still think the second half was the best part."),
            "en"
        );
        assert_eq!(
            detect("Me encantó este video, la explicación fue muy clara y aprendí muchas cosas nuevas hoy."),
            "es"
        );
        assert_eq!(
            detect("J'ai vraiment apprécié cette vidéo, les explications étaient claires et très utiles."),
            "fr"
        );
        assert_eq!(
            detect("Ich habe das Video zweimal angesehen und finde die Erklärung wirklich sehr gut gemacht."),
            "de"
        );
    }

    #[test]
    fn detects_non_latin_scripts() {
        assert_eq!(detect("Спасибо за это видео, было очень интересно и полезно"), "ru");
        assert_eq!(detect("こんにちは、今日はとても良い天気ですね"), "ja");
        assert_eq!(detect("정말 좋아요"), "ko");
        assert_eq!(detect("这个视频非常有意思"), "zh");
    }

    #[test]
    fn short_everyday_comments_get_a_language() {
        for text in [
            "Awesome content",
            "Wow amazing",
            "So cool",
            "Amazing work man",
            "Excelente contenido",
            "Magnifique travail",
        ] {
            assert_ne!(detect(text), UNKNOWN, "{text}");
        }
    }

    #[test]
    fn text_without_letters_fails() {
        assert!(TrigramDetector.detect("12345 !!! 🔥🔥").is_err());
        assert!(TrigramDetector.detect("").is_err());
    }

    #[test]
    fn three_letter_codes_shorten_where_possible() {
        assert_eq!(iso_639_1("eng"), "en");
        assert_eq!(iso_639_1("cmn"), "zh");
        assert_eq!(iso_639_1("xyz"), "xyz");
    }
}
