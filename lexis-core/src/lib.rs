//! # lexis-core: Padrões Ancorados e Detecção de Nomes Completos
//!
//! Este crate reúne duas peças pequenas de extração de informação, pensadas para
//! textos em espanhol mas configuráveis para qualquer idioma:
//!
//! 1.  **Montagem de padrões** ([`pattern`], [`separator`], [`matcher`]): construtores
//!     que transformam listas de fragmentos de regex em padrões que só casam com
//!     palavras inteiras, e sequências de palavras com palavras opcionais no meio.
//! 2.  **Detector de nomes completos** ([`full_name`]): uma regra gulosa que junta
//!     tokens vizinhos em um nome ("Jose Luís Ferreira") a partir de dois predicados
//!     por token: pode iniciar (nome próprio) e pode continuar (sobrenome).
//!
//! Em volta delas:
//!
//! - [`tokenizer`]: segmentação com offsets preservados.
//! - [`names`] e [`lexicon`]: listas de nomes, comparação sem acentos, papéis dos tokens.
//! - [`document`]: tokens mais a tabela lateral escrita pelo detector.
//! - [`categories`]: padrões prontos (datas, CIF, DNI, e-mail, hashtags...).
//! - [`tagger`]: esquema BIO e entidades.
//! - [`pipeline`]: orquestrador com eventos observáveis.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use lexis_core::{EntityCategory, LexisPipeline};
//!
//! let pipeline = LexisPipeline::new().expect("padrões embutidos compilam");
//! let analysis = pipeline.analyze("Jose Luís Ferreira nació el 4 de enero de 1905.");
//!
//! let categories: Vec<EntityCategory> =
//!     analysis.entities.iter().map(|e| e.category).collect();
//! assert_eq!(categories, vec![EntityCategory::Per, EntityCategory::Date]);
//! ```

pub mod categories;
pub mod config;
pub mod document;
pub mod error;
pub mod full_name;
pub mod lexicon;
pub mod matcher;
pub mod names;
pub mod pattern;
pub mod pipeline;
pub mod separator;
pub mod tagger;
pub mod tokenizer;

pub use config::LexisConfig;
pub use document::{Document, PositionTag, TokenRoles};
pub use error::ConfigurationError;
pub use full_name::{FullNameDetector, NameSpan};
pub use matcher::{PatternMatch, PatternMatcher};
pub use pattern::{MultiWordPattern, SingleWordPattern};
pub use pipeline::{Analysis, LexisPipeline, PipelineEvent};
pub use separator::Separators;
pub use tagger::{EntityCategory, EntitySpan, Tag, TaggedToken};
pub use tokenizer::Token;
