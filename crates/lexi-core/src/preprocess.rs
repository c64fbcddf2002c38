use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor: Send + Sync {
    /// Turn typed input into a lookup query
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Full-width letters and ligatures become plain ones
        let text: String = text.nfkc().collect();

        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
