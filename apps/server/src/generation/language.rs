//! Language instruction table.
//!
//! A closed set of language codes maps to the instruction sentence appended to
//! every prompt. Unknown or empty codes fall back to English so a bad code can
//! never fail a request.

const ENGLISH_INSTRUCTION: &str = "Write the motivational letter in English.";

const INSTRUCTIONS: &[(&str, &str)] = &[
    ("en", ENGLISH_INSTRUCTION),
    ("es", "Escribe la carta de motivación en español (Spanish)."),
    ("fr", "Écris la lettre de motivation en français (French)."),
    ("de", "Schreibe das Motivationsschreiben auf Deutsch (German)."),
    ("zh", "用中文写求职动机信 (Chinese)."),
    ("ja", "動機レターを日本語で書いてください (Japanese)."),
    ("pt", "Escreva a carta de motivação em português (Portuguese)."),
    ("ru", "Напишите мотивационное письмо на русском языке (Russian)."),
    ("ar", "اكتب خطاب الدافع باللغة العربية (Arabic)."),
];

pub const DEFAULT_LANGUAGE: &str = "en";

pub fn is_supported(code: &str) -> bool {
    INSTRUCTIONS.iter().any(|(supported, _)| *supported == code)
}

/// The code actually used for a request: the input when supported, otherwise
/// [`DEFAULT_LANGUAGE`]. Responses echo this effective code.
pub fn normalize(code: &str) -> &str {
    let code = code.trim();
    if is_supported(code) {
        code
    } else {
        DEFAULT_LANGUAGE
    }
}

pub fn instruction_for(code: &str) -> &'static str {
    INSTRUCTIONS
        .iter()
        .find(|(supported, _)| *supported == code.trim())
        .map(|(_, instruction)| *instruction)
        .unwrap_or(ENGLISH_INSTRUCTION)
}
