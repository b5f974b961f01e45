//! # Matcher com Fronteiras Verificadas à Mão
//!
//! Os padrões montados em [`crate::pattern`] usam look-around (`(?<=...)`, `(?=...)`),
//! que o crate `regex` não suporta. O [`PatternMatcher`] avalia o mesmo padrão assim:
//!
//! 1. **Direita**: o corpo é compilado como `(?P<body>CORPO)(?:SEP|$)`. O separador
//!    seguinte é consumido pelo regex, mas só o grupo `body` é reportado.
//! 2. **Esquerda**: para cada candidato, o caractere imediatamente anterior é testado
//!    contra a classe de separadores. Se falhar, a busca recomeça um caractere adiante.
//! 3. **Continuação**: após um casamento, a busca recomeça no fim do `body`; o
//!    separador consumido pode servir de fronteira esquerda do próximo casamento.
//!
//! O resultado é idêntico ao que um avaliador com look-around retornaria para
//! [`PatternMatcher::pattern`].

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pattern::{MultiWordPattern, SingleWordPattern};
use crate::separator::{CharClass, Separators};

/// Um trecho do texto casado pelo padrão (offsets em bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Clone)]
struct Compiled {
    regex: Regex,
    boundary: CharClass,
}

/// Padrão compilado, pronto para ser aplicado a textos.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    /// Renderização com look-around (a mesma de `build()`).
    pattern: String,
    /// `None` quando o padrão é vazio: nunca casa.
    compiled: Option<Compiled>,
}

impl PatternMatcher {
    /// Compila um corpo (sem âncoras) com as fronteiras de `separators`.
    pub fn new(body: &str, separators: &Separators, case_insensitive: bool) -> Result<Self> {
        separators.validate()?;
        if body.is_empty() {
            return Ok(Self {
                pattern: String::new(),
                compiled: None,
            });
        }
        let regex = RegexBuilder::new(&separators.right_guarded(body))
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self {
            pattern: separators.anchor(body),
            compiled: Some(Compiled {
                regex,
                boundary: separators.char_class(case_insensitive)?,
            }),
        })
    }

    pub fn from_single(builder: &SingleWordPattern, case_insensitive: bool) -> Result<Self> {
        Self::new(&builder.alternation(), builder.separators(), case_insensitive)
    }

    pub fn from_multi(builder: &MultiWordPattern, case_insensitive: bool) -> Result<Self> {
        if builder.is_empty() {
            return Self::new("", builder.separators(), case_insensitive);
        }
        builder.validate()?;
        Self::new(&builder.body(), builder.separators(), case_insensitive)
    }

    /// O padrão no dialeto com look-around.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Todos os casamentos, sem sobreposição, da esquerda para a direita.
    pub fn find_all(&self, text: &str) -> Vec<PatternMatch> {
        self.find_iter(text).collect()
    }

    pub fn find_iter<'m, 't>(&'m self, text: &'t str) -> Matches<'m, 't> {
        Matches {
            compiled: self.compiled.as_ref(),
            text,
            at: 0,
        }
    }
}

/// Iterador sobre os casamentos de um [`PatternMatcher`].
pub struct Matches<'m, 't> {
    compiled: Option<&'m Compiled>,
    text: &'t str,
    at: usize,
}

impl Matches<'_, '_> {
    /// Próxima posição válida depois de `offset` (avança um caractere inteiro).
    fn step(&self, offset: usize) -> Option<usize> {
        let next = self.text.get(offset..)?.chars().next()?;
        Some(offset + next.len_utf8())
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = PatternMatch;

    fn next(&mut self) -> Option<PatternMatch> {
        let compiled = self.compiled?;
        while self.at <= self.text.len() {
            let caps = compiled.regex.captures_at(self.text, self.at)?;
            let body = caps.name("body")?;

            if !compiled.boundary.is_left_boundary(self.text, body.start()) {
                self.at = self.step(body.start())?;
                continue;
            }

            self.at = if body.is_empty() {
                self.step(body.end()).unwrap_or(self.text.len() + 1)
            } else {
                body.end()
            };
            return Some(PatternMatch {
                start: body.start(),
                end: body.end(),
                text: body.as_str().to_string(),
            });
        }
        None
    }
}
