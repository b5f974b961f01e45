//! # Tokenizador Padrão
//!
//! Divide o texto bruto em palavras e pontuações seguindo as fronteiras de palavra
//! do Unicode (UAX #29). Espaços em branco são descartados. Cada token preserva sua
//! posição original no texto (offset em bytes) para permitir alinhar os casamentos
//! dos padrões (que trabalham sobre o texto cru) com os tokens.
//!
//! O núcleo (padrões e detector de nomes) não depende deste módulo: qualquer
//! tokenizador que produza [`Token`]s serve.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lexis_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("Jose Luís, ¿vienes?");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["Jose", "Luís", ",", "¿", "vienes", "?"]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "Begoña", ",", "2019").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// O primeiro caractere é maiúsculo?
    pub fn starts_with_upper(&self) -> bool {
        self.text
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
    }

    /// Sobrepõe o intervalo de bytes `[start, end)`?
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}

/// Tokeniza um texto em palavras e pontuações.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .enumerate()
        .map(|(index, (start, segment))| Token {
            text: segment.to_string(),
            start,
            end: start + segment.len(),
            index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Jose Aguilar va a su huertito.");
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[6].text, ".");
    }

    #[test]
    fn test_offsets_and_indices() {
        let text = "Begoña  Ferreira";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 2);
        assert_eq!(&text[tokens[0].start..tokens[0].end], "Begoña");
        assert_eq!(&text[tokens[1].start..tokens[1].end], "Ferreira");
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn test_starts_with_upper() {
        let tokens = tokenize("Ángel ángel 4");
        assert!(tokens[0].starts_with_upper());
        assert!(!tokens[1].starts_with_upper());
        assert!(!tokens[2].starts_with_upper());
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_overlaps() {
        let token = Token::new("abc", 4, 7, 0);
        assert!(token.overlaps(0, 5));
        assert!(token.overlaps(6, 10));
        assert!(!token.overlaps(0, 4));
        assert!(!token.overlaps(7, 9));
    }
}
