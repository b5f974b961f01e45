//! # Esquema de Tags BIO e Categorias de Entidade
//!
//! Define o esquema de anotação **BIO** (Beginning-Inside-Outside) usado na saída
//! do pipeline, e a ponte entre as [`PositionTag`] do detector de nomes e as tags BIO.
//!
//! ## Categorias de Entidades
//!
//! | Prefixo | Significado                  | Exemplos                      |
//! |---------|------------------------------|-------------------------------|
//! | PER     | Nome completo de pessoa      | Jose Luís Ferreira            |
//! | DATE    | Data por extenso             | 4 de noviembre de 2019        |
//! | CIF     | Código fiscal de empresa     | B97017461, A-14.010.342       |
//! | DNI     | Documento de identidade      | 12345678Z                     |
//! | EMAIL   | Endereço de e-mail           | ana@example.com               |
//! | HASHTAG | Hashtag                      | #rust                         |
//! | MENTION | Menção                       | @ferris                       |
//! | PRON    | Pronome demonstrativo        | ésto, aquélla                 |
//! | COMPANY | Terminação societária        | S.A., B.V.B.A.                |
//!
//! ## Esquema BIO
//!
//! - `B-TAG`: Begin, primeiro token de uma entidade
//! - `I-TAG`: Inside, tokens subsequentes da mesma entidade
//! - `O`: Outside, não é parte de nenhuma entidade

use serde::{Deserialize, Serialize};

use crate::document::PositionTag;
use crate::tokenizer::Token;

/// Categorias de entidade produzidas pelo sistema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCategory {
    /// **Pessoa**: nome(s) seguido(s) de sobrenome(s), detectado pelo [`crate::full_name`].
    Per,
    Date,
    Cif,
    Dni,
    Email,
    Hashtag,
    Mention,
    /// **Pronome**: demonstrativos acentuados do espanhol.
    Pronoun,
    Company,
}

impl EntityCategory {
    /// Nome da categoria como string (para serialização e UI)
    pub fn name(&self) -> &'static str {
        match self {
            EntityCategory::Per => "PER",
            EntityCategory::Date => "DATE",
            EntityCategory::Cif => "CIF",
            EntityCategory::Dni => "DNI",
            EntityCategory::Email => "EMAIL",
            EntityCategory::Hashtag => "HASHTAG",
            EntityCategory::Mention => "MENTION",
            EntityCategory::Pronoun => "PRON",
            EntityCategory::Company => "COMPANY",
        }
    }

    /// Tenta parsear a partir de string (ex: "PER" → Some(Per))
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "PER" => Some(EntityCategory::Per),
            "DATE" => Some(EntityCategory::Date),
            "CIF" => Some(EntityCategory::Cif),
            "DNI" => Some(EntityCategory::Dni),
            "EMAIL" => Some(EntityCategory::Email),
            "HASHTAG" => Some(EntityCategory::Hashtag),
            "MENTION" => Some(EntityCategory::Mention),
            "PRON" => Some(EntityCategory::Pronoun),
            "COMPANY" => Some(EntityCategory::Company),
            _ => None,
        }
    }
}

/// Tag BIO aplicada a um token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// **Begin**: INÍCIO de uma entidade. Ex: **Jose** (B-PER) Aguilar.
    Begin(EntityCategory),
    /// **Inside**: CONTINUAÇÃO de uma entidade. Ex: Jose **Aguilar** (I-PER).
    Inside(EntityCategory),
    /// **Outside**: o token não faz parte de nenhuma entidade.
    Outside,
}

impl Tag {
    /// Converte a posição escrita pelo detector em tag BIO da categoria dada.
    pub fn from_position(position: PositionTag, category: EntityCategory) -> Self {
        match position {
            PositionTag::Start => Tag::Begin(category),
            PositionTag::Continuation => Tag::Inside(category),
            PositionTag::None => Tag::Outside,
        }
    }

    /// Representação textual da tag (ex: "B-PER", "I-DATE", "O")
    pub fn label(&self) -> String {
        match self {
            Tag::Begin(cat) => format!("B-{}", cat.name()),
            Tag::Inside(cat) => format!("I-{}", cat.name()),
            Tag::Outside => "O".to_string(),
        }
    }

    /// Retorna a categoria desta tag (se for B- ou I-)
    pub fn category(&self) -> Option<EntityCategory> {
        match self {
            Tag::Begin(c) | Tag::Inside(c) => Some(*c),
            Tag::Outside => None,
        }
    }

    /// Verifica se a transição tag_prev → self é válida no esquema BIO
    ///
    /// - `I-X` só pode seguir `B-X` ou `I-X` (mesma categoria)
    /// - `B-X` e `O` podem seguir qualquer tag
    pub fn is_valid_transition(prev: &Tag, next: &Tag) -> bool {
        match next {
            Tag::Inside(cat) => match prev {
                Tag::Begin(prev_cat) | Tag::Inside(prev_cat) => prev_cat == cat,
                _ => false,
            },
            _ => true,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// De onde veio uma entidade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitySource {
    /// Detector de nomes completos sobre listas de nomes.
    Names,
    /// Um dos padrões de categoria.
    Pattern,
}

/// Um token com sua tag BIO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: Tag,
}

/// Uma entidade identificada no texto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Texto da entidade (ex: "Jose Luís Ferreira")
    pub text: String,
    pub category: EntityCategory,
    /// Índice do primeiro token coberto
    pub start_token: usize,
    /// Índice do último token coberto (inclusivo)
    pub end_token: usize,
    /// Posição de byte inicial no texto original
    pub start: usize,
    /// Posição de byte final no texto original
    pub end: usize,
    pub source: EntitySource,
}
