//! # Listas de Nomes e Papéis dos Tokens
//!
//! Calcula os dois predicados que o detector de nomes consome:
//!
//! - **pode iniciar**: o token está na lista de nomes próprios;
//! - **pode continuar**: o token está na lista de sobrenomes.
//!
//! A comparação ignora maiúsculas e acentos: "luis", "Luís" e "LUIS" são a mesma
//! entrada. Entradas com mais de uma palavra ("María Carmen") são descartadas, pois
//! o detector trabalha token a token.

use std::collections::HashSet;
use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::document::{Document, TokenRoles};
use crate::lexicon;
use crate::tokenizer::Token;

/// Forma canônica de comparação: sem acentos e em minúscula.
///
/// `"Begoña"` → `"begona"`, `"LUÍS"` → `"luis"`.
pub fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Conjunto de nomes de uma única palavra, comparados na forma [`fold_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameList {
    names: HashSet<String>,
}

impl NameList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref().trim();
                let mut words = name.split_whitespace();
                match (words.next(), words.next()) {
                    (Some(_), None) => Some(fold_name(name)),
                    _ => None,
                }
            })
            .collect();
        Self { names }
    }

    /// Lê um nome por linha; linhas vazias e nomes compostos são ignorados.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Ok(Self::new(lines))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.names.contains(&fold_name(word))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Listas que definem os papéis de início e continuação.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRoles {
    pub first_names: NameList,
    pub last_names: NameList,
}

impl NameRoles {
    pub fn new(first_names: NameList, last_names: NameList) -> Self {
        Self {
            first_names,
            last_names,
        }
    }

    /// Listas embutidas de [`crate::lexicon`].
    pub fn spanish() -> Self {
        Self::new(
            NameList::new(lexicon::FIRST_NAMES),
            NameList::new(lexicon::LAST_NAMES),
        )
    }

    pub fn roles_for(&self, token: &Token) -> TokenRoles {
        TokenRoles {
            starts_with_upper: token.starts_with_upper(),
            can_begin: self.first_names.contains(&token.text),
            can_continue: self.last_names.contains(&token.text),
        }
    }

    /// Monta o documento com a tabela de papéis preenchida.
    pub fn annotate(&self, tokens: Vec<Token>) -> Document {
        let roles = tokens.iter().map(|t| self.roles_for(t)).collect();
        Document::new(tokens, roles)
    }
}
