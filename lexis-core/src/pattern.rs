//! # Montagem de Padrões: Uma Palavra e Várias Palavras
//!
//! Dois construtores compartilham o mesmo [`Separators`]:
//!
//! - [`SingleWordPattern`]: uma disjunção de alternativas que só casa com palavras
//!   inteiras. `"Hi"` casa em `"I say Hi"`, mas não em `"I say Hiii"` nem em `"I say aHi"`.
//! - [`MultiWordPattern`]: uma sequência de palavras (algumas opcionais) separadas por
//!   1 até N separadores. Ex: `4 [de] noviembre [de] 2019`.
//!
//! Os fragmentos são opacos: o construtor nunca inspeciona seu conteúdo, apenas
//! concatena. `build()` é uma função pura do estado; o construtor continua mutável
//! depois de montado (dá para adicionar alternativas e montar de novo).
//!
//! ## Exemplo
//!
//! ```rust
//! use lexis_core::pattern::{MultiWordPattern, SingleWordPattern};
//!
//! let mut word = SingleWordPattern::new();
//! word.add_option("and").add_option("or");
//! assert_eq!(word.build(), r"(?<=^|[\p{P}\s])(and|or)(?=[\p{P}\s]|$)");
//!
//! let mut date = MultiWordPattern::new();
//! date.add_word(r"\d{1,2}").add_optional_word("de").add_word("enero");
//! assert!(date.build().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigurationError, Result};
use crate::separator::Separators;

/// Junta uma lista de alternativas em um único grupo: `(a|b|c)`.
///
/// Útil para transformar uma lista de palavras (meses, números por extenso)
/// em um único fragmento.
pub fn options_as_group<I, S>(options: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined: Vec<String> = options
        .into_iter()
        .map(|o| o.as_ref().to_string())
        .collect();
    format!("({})", joined.join("|"))
}

/// Disjunção de alternativas ancorada em fronteiras de palavra.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleWordPattern {
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    separators: Separators,
}

impl SingleWordPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separators(separators: Separators) -> Self {
        Self {
            options: Vec::new(),
            separators,
        }
    }

    /// Adiciona uma alternativa.
    pub fn add_option(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.options.push(fragment.into());
        self
    }

    /// Adiciona uma única alternativa formada pelo grupo `(a|b|c)` da lista.
    pub fn add_options_as_group<I, S>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.push(options_as_group(options));
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Alternação sem grupo externo, compartilhada por `build` e pelo matcher.
    pub(crate) fn alternation(&self) -> String {
        self.options.join("|")
    }

    /// Padrão completo: `(?<=^|SEP)(a|b|...)(?=SEP|$)`.
    ///
    /// Sem alternativas retorna a string vazia (não casa com nada).
    pub fn build(&self) -> String {
        if self.options.is_empty() {
            return String::new();
        }
        self.separators.anchor(&self.alternation())
    }

    /// Alternação sem âncoras, para ser usada como fragmento de outro padrão.
    ///
    /// - 0 alternativas: string vazia.
    /// - 1 alternativa: o próprio fragmento.
    /// - N alternativas: `(a|b|...)`.
    pub fn build_inner(&self) -> String {
        match self.options.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            _ => format!("({})", self.alternation()),
        }
    }
}

/// Uma palavra de um [`MultiWordPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternWord {
    pub fragment: String,
    #[serde(default)]
    pub optional: bool,
}

impl PatternWord {
    pub fn required(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            optional: false,
        }
    }

    pub fn optional(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            optional: true,
        }
    }
}

/// Sequência de palavras separadas por 1..=N separadores.
///
/// A primeira e a última palavra precisam ser obrigatórias: as âncoras de fronteira
/// dependem delas, e uma palavra de borda ausente deixaria a âncora indefinida.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiWordPattern {
    #[serde(default)]
    words: Vec<PatternWord>,
    #[serde(default)]
    separators: Separators,
}

impl MultiWordPattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separators(separators: Separators) -> Self {
        Self {
            words: Vec::new(),
            separators,
        }
    }

    pub fn from_words(words: Vec<PatternWord>, separators: Separators) -> Self {
        Self { words, separators }
    }

    pub fn push(&mut self, fragment: impl Into<String>, optional: bool) -> &mut Self {
        self.words.push(PatternWord {
            fragment: fragment.into(),
            optional,
        });
        self
    }

    pub fn add_word(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.push(fragment, false)
    }

    pub fn add_optional_word(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.push(fragment, true)
    }

    pub fn words(&self) -> &[PatternWord] {
        &self.words
    }

    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Verifica as restrições de borda e o modelo de separadores.
    pub fn validate(&self) -> Result<()> {
        self.separators.validate()?;
        if self.words.first().is_some_and(|w| w.optional) {
            return Err(ConfigurationError::OptionalFirstWord);
        }
        if self.words.last().is_some_and(|w| w.optional) {
            return Err(ConfigurationError::OptionalLastWord);
        }
        Ok(())
    }

    /// Corpo sem âncoras. Só faz sentido depois de `validate`.
    pub(crate) fn body(&self) -> String {
        let gap = self.separators.gap();
        let mut body = String::new();
        if let Some((last, init)) = self.words.split_last() {
            for word in init {
                if word.optional {
                    body.push_str(&format!("({}{})?", word.fragment, gap));
                } else {
                    body.push_str(&word.fragment);
                    body.push_str(&gap);
                }
            }
            body.push_str(&last.fragment);
        }
        body
    }

    /// Padrão completo ancorado nas duas fronteiras.
    ///
    /// Palavras opcionais no meio consomem o próprio intervalo, então uma palavra
    /// ausente não deixa separadores sobrando. Sem palavras retorna `Ok("")`.
    pub fn build(&self) -> Result<String> {
        if self.words.is_empty() {
            return Ok(String::new());
        }
        if let Err(err) = self.validate() {
            warn!(words = self.words.len(), %err, "padrão multi-palavra rejeitado");
            return Err(err);
        }
        Ok(self.separators.anchor(&self.body()))
    }
}
