use crate::shared::constants::SEED_PHRASE_WORD_COUNTS;
use crate::shared::error::WalletError;
use zeroize::Zeroize;

/// Secure seed phrase wrapper
/// Does not implement Debug to prevent exposure in logs
pub struct SecureSeedPhrase {
    phrase: String,
}

impl SecureSeedPhrase {
    /// Create a new secure seed phrase
    pub fn new(phrase: String) -> Self {
        Self { phrase }
    }

    /// Create from words
    pub fn from_words(words: Vec<String>) -> Result<Self, WalletError> {
        if !SEED_PHRASE_WORD_COUNTS.contains(&words.len()) {
            return Err(WalletError::invalid_seed_phrase(
                "Seed phrase must be 12, 15, 18, 21, or 24 words",
            ));
        }

        Ok(Self { phrase: words.join(" ") })
    }

    /// Get the seed phrase as a &str
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Get the seed phrase as `Vec<String>`
    pub fn words(&self) -> Vec<String> {
        self.phrase.split_whitespace().map(|s| s.to_string()).collect()
    }
}

// No Clone implementation to prevent accidental duplication of sensitive data

impl Drop for SecureSeedPhrase {
    fn drop(&mut self) {
        // Clear the seed phrase when dropped
        self.phrase.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_seed_phrase_creation() {
        let phrase = "test seed phrase".to_string();
        let seed_phrase = SecureSeedPhrase::new(phrase.clone());
        assert_eq!(seed_phrase.words(), vec!["test", "seed", "phrase"]);
        assert_eq!(seed_phrase.as_str(), phrase);
    }

    #[test]
    fn test_secure_seed_phrase_from_words() {
        let words: Vec<String> = [
            "abandon", "ability", "able", "about", "above", "absent",
            "absorb", "abstract", "absurd", "abuse", "access", "accident",
        ].iter().map(|s| s.to_string()).collect();

        let seed_phrase = SecureSeedPhrase::from_words(words)
            .expect("Failed to create seed phrase from words");
        assert_eq!(seed_phrase.words().len(), 12);
    }

    #[test]
    fn test_secure_seed_phrase_rejects_bad_word_count() {
        let words = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        assert!(SecureSeedPhrase::from_words(words).is_err());
    }
}
