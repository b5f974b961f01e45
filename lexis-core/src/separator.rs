//! # Modelo de Separadores e Fronteiras de Palavra
//!
//! Um único conceito define duas coisas:
//!
//! - **Fronteira**: o que pode aparecer imediatamente antes e depois de uma palavra
//!   casada (início/fim do texto ou um caractere separador).
//! - **Intervalo**: o que pode aparecer entre duas palavras de um padrão multi-palavra
//!   (de 1 até `max_repeat` separadores).
//!
//! ## Exemplo
//!
//! Com a classe padrão `[\p{P}\s]` (pontuação Unicode ou espaço) e máximo 3:
//!
//! | Fragmento | Renderização                         |
//! |-----------|--------------------------------------|
//! | esquerda  | `(?<=^|[\p{P}\s])`                   |
//! | direita   | `(?=[\p{P}\s]|$)`                    |
//! | intervalo | `[\p{P}\s]{1,3}`                     |

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// Classe padrão: qualquer pontuação Unicode ou espaço em branco.
pub const DEFAULT_SEPARATOR_CLASS: &str = r"[\p{P}\s]";

/// Quantidade máxima padrão de separadores entre duas palavras.
pub const DEFAULT_MAX_SEPARATORS: usize = 3;

/// Classe de caracteres separadores mais o limite de repetição entre palavras.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Separators {
    /// Expressão de classe de caracteres no dialeto do avaliador (ex: `[\p{P}\s]`).
    class: String,
    /// Máximo de separadores consecutivos aceitos entre duas palavras.
    max_repeat: usize,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            class: DEFAULT_SEPARATOR_CLASS.to_string(),
            max_repeat: DEFAULT_MAX_SEPARATORS,
        }
    }
}

impl Separators {
    /// Cria um modelo de separadores, rejeitando `max_repeat == 0`.
    pub fn new(class: impl Into<String>, max_repeat: usize) -> Result<Self> {
        let separators = Self {
            class: class.into(),
            max_repeat,
        };
        separators.validate()?;
        Ok(separators)
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn max_repeat(&self) -> usize {
        self.max_repeat
    }

    /// Valida a configuração. Necessário porque valores desserializados não passam por `new`.
    pub fn validate(&self) -> Result<()> {
        if self.max_repeat == 0 {
            return Err(ConfigurationError::InvalidSeparatorRepeat(self.max_repeat));
        }
        Ok(())
    }

    /// Asserção de largura zero: início do texto ou separador antes da palavra.
    pub fn left_anchor(&self) -> String {
        format!("(?<=^|{})", self.class)
    }

    /// Asserção de largura zero: separador ou fim do texto depois da palavra.
    /// O separador seguinte nunca é consumido.
    pub fn right_anchor(&self) -> String {
        format!("(?={}|$)", self.class)
    }

    /// Intervalo entre palavras: de 1 a `max_repeat` separadores.
    pub fn gap(&self) -> String {
        format!("{}{{1,{}}}", self.class, self.max_repeat)
    }

    /// Envolve `body` em um grupo ancorado nas duas fronteiras.
    pub fn anchor(&self, body: &str) -> String {
        format!("{}({}){}", self.left_anchor(), body, self.right_anchor())
    }

    /// Versão sem look-around usada pelo [`crate::matcher::PatternMatcher`]:
    /// a fronteira direita é consumida e o corpo fica no grupo nomeado `body`.
    /// A fronteira esquerda é verificada à mão com [`CharClass`].
    pub(crate) fn right_guarded(&self, body: &str) -> String {
        format!("(?P<body>{})(?:{}|$)", body, self.class)
    }

    /// Compila a classe como predicado de caractere.
    pub fn char_class(&self, case_insensitive: bool) -> Result<CharClass> {
        let regex = RegexBuilder::new(&format!("^(?:{})$", self.class))
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(CharClass { regex })
    }
}

/// Predicado "este caractere é separador?", compilado a partir da classe.
#[derive(Debug, Clone)]
pub struct CharClass {
    regex: Regex,
}

impl CharClass {
    pub fn contains(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.regex.is_match(c.encode_utf8(&mut buf))
    }

    /// Fronteira esquerda em `offset`: início do texto ou separador imediatamente antes.
    pub fn is_left_boundary(&self, text: &str, offset: usize) -> bool {
        match text.get(..offset) {
            Some(before) => before.chars().next_back().map_or(true, |c| self.contains(c)),
            None => false,
        }
    }

    /// Fronteira direita em `offset`: fim do texto ou separador imediatamente depois.
    pub fn is_right_boundary(&self, text: &str, offset: usize) -> bool {
        match text.get(offset..) {
            Some(after) => after.chars().next().map_or(true, |c| self.contains(c)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renderings() {
        let seps = Separators::default();
        assert_eq!(seps.left_anchor(), r"(?<=^|[\p{P}\s])");
        assert_eq!(seps.right_anchor(), r"(?=[\p{P}\s]|$)");
        assert_eq!(seps.gap(), r"[\p{P}\s]{1,3}");
        assert_eq!(seps.anchor("Hi"), r"(?<=^|[\p{P}\s])(Hi)(?=[\p{P}\s]|$)");
    }

    #[test]
    fn test_zero_repeat_is_rejected() {
        assert_eq!(
            Separators::new(r"[\s]", 0),
            Err(ConfigurationError::InvalidSeparatorRepeat(0))
        );
        let seps = Separators::new(DEFAULT_SEPARATOR_CLASS, 5).unwrap();
        assert_eq!(seps.gap(), r"[\p{P}\s]{1,5}");
    }

    #[test]
    fn test_char_class_boundaries() {
        let class = Separators::default().char_class(false).unwrap();
        assert!(class.contains(' '));
        assert!(class.contains('¿'));
        assert!(class.contains('-'));
        assert!(!class.contains('a'));

        let text = "I say Hi!";
        assert!(class.is_left_boundary(text, 0));
        assert!(class.is_left_boundary(text, 6));
        assert!(!class.is_left_boundary(text, 7));
        assert!(class.is_right_boundary(text, 8));
        assert!(class.is_right_boundary(text, text.len()));
        assert!(!class.is_right_boundary(text, 7));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let seps: Separators = serde_json::from_str(r#"{"max_repeat": 1}"#).unwrap();
        assert_eq!(seps.class(), DEFAULT_SEPARATOR_CLASS);
        assert_eq!(seps.max_repeat(), 1);
    }
}
