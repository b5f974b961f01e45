//! # Pipeline: Orquestrador com Eventos Observáveis
//!
//! Conecta os módulos em uma passada linear:
//!
//! 1. **Tokenização** ([`crate::tokenizer`]).
//! 2. **Papéis** ([`crate::names`]): cada token recebe pode-iniciar / pode-continuar.
//! 3. **Nomes completos** ([`crate::full_name`]): spans PER.
//! 4. **Padrões** ([`crate::categories`]): datas, CIF, DNI, e-mail...
//! 5. **Fusão**: tags BIO por token e lista de entidades ordenada pelo início.
//!
//! Cada passo emite um [`PipelineEvent`] por um canal `mpsc`, o que permite ao
//! servidor WebSocket transmitir o progresso em tempo real.
//!
//! ## Prioridade
//!
//! Nomes vêm primeiro. Um casamento de padrão só é aceito se nenhum dos seus
//! tokens já pertence a outra entidade; entre padrões, vale a ordem dos matchers.

use std::sync::mpsc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::categories::{self, CategoryMatcher};
use crate::config::LexisConfig;
use crate::document::{Document, TokenRoles};
use crate::error::Result;
use crate::full_name::FullNameDetector;
use crate::matcher::PatternMatch;
use crate::names::NameRoles;
use crate::tagger::{EntityCategory, EntitySource, EntitySpan, Tag, TaggedToken};
use crate::tokenizer::{tokenize, Token};

/// Eventos emitidos durante o processamento, na ordem em que acontecem.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// **Passo 1**: tokens gerados.
    TokenizationDone { tokens: Vec<Token>, total: usize },
    /// **Passo 2**: tabela de papéis calculada.
    RolesAssigned { roles: Vec<TokenRoles> },
    /// **Passo 3**: um nome completo foi fechado pelo detector.
    SpanDetected { entity: EntitySpan },
    /// **Passo 4**: um padrão casou (aceito ou não na fusão).
    PatternMatched { entity: EntitySpan, accepted: bool },
    /// **Conclusão**.
    Done {
        entities: Vec<EntitySpan>,
        tagged_tokens: Vec<TaggedToken>,
        total_tokens: usize,
        processing_ms: u64,
    },
}

/// Resultado consolidado de uma análise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub tagged_tokens: Vec<TaggedToken>,
    pub entities: Vec<EntitySpan>,
    pub total_tokens: usize,
    pub processing_ms: u64,
}

/// O pipeline principal: listas de nomes, detector e padrões de categoria.
#[derive(Debug, Clone)]
pub struct LexisPipeline {
    roles: NameRoles,
    detector: FullNameDetector,
    matchers: Vec<CategoryMatcher>,
}

impl LexisPipeline {
    /// Léxico espanhol embutido e todos os padrões padrão.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(
            NameRoles::spanish(),
            categories::default_matchers()?,
        ))
    }

    pub fn with_parts(roles: NameRoles, matchers: Vec<CategoryMatcher>) -> Self {
        Self {
            roles,
            detector: FullNameDetector::default(),
            matchers,
        }
    }

    /// Como [`LexisPipeline::new`], mais as terminações societárias da configuração.
    pub fn from_config(config: &LexisConfig) -> Result<Self> {
        let mut pipeline = Self::new()?;
        if !config.company_suffixes.is_empty() {
            pipeline
                .matchers
                .push(categories::company_suffixes(&config.company_suffixes)?);
        }
        Ok(pipeline)
    }

    pub fn matchers(&self) -> &[CategoryMatcher] {
        &self.matchers
    }

    /// Processa o texto de forma síncrona.
    pub fn analyze(&self, text: &str) -> Analysis {
        self.run(text, &mut |_| {})
    }

    /// Processa vários textos em paralelo; a ordem da saída segue a da entrada.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Analysis> {
        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    /// Executa o pipeline empurrando eventos por `tx`.
    ///
    /// O último evento é sempre `Done`. Se o receptor for descartado no meio, a
    /// análise termina normalmente e os eventos restantes são perdidos.
    pub fn analyze_streaming(&self, text: &str, tx: mpsc::Sender<PipelineEvent>) {
        self.run(text, &mut |event| {
            let _ = tx.send(event);
        });
    }

    fn run(&self, text: &str, emit: &mut dyn FnMut(PipelineEvent)) -> Analysis {
        let started = Instant::now();

        // === Passo 1: Tokenização ===
        let tokens = tokenize(text);
        let total = tokens.len();
        emit(PipelineEvent::TokenizationDone {
            tokens: tokens.clone(),
            total,
        });

        // === Passo 2: Papéis ===
        let mut document = self.roles.annotate(tokens);
        emit(PipelineEvent::RolesAssigned {
            roles: document.roles().to_vec(),
        });

        // === Passo 3: Nomes completos ===
        let spans = self.detector.tag(&mut document);
        let label = self.detector.label();
        let mut tags: Vec<Tag> = document
            .positions()
            .iter()
            .map(|p| Tag::from_position(*p, label))
            .collect();
        let mut entities = Vec::new();
        for span in spans {
            let entity = entity_for_tokens(
                &document,
                text,
                span.start,
                span.end,
                span.label,
                EntitySource::Names,
            );
            emit(PipelineEvent::SpanDetected {
                entity: entity.clone(),
            });
            entities.push(entity);
        }

        // === Passo 4: Padrões ===
        for matcher in &self.matchers {
            for found in matcher.find_all(text) {
                let Some(entity) = entity_for_match(&document, &found.matched, matcher.category)
                else {
                    continue;
                };
                let accepted = tags[entity.start_token..=entity.end_token]
                    .iter()
                    .all(|t| t.category().is_none());
                debug!(
                    category = entity.category.name(),
                    text = %entity.text,
                    accepted,
                    "padrão casou"
                );
                if accepted {
                    mark(&mut tags, &entity);
                    entities.push(entity.clone());
                }
                emit(PipelineEvent::PatternMatched { entity, accepted });
            }
        }

        // === Passo 5: Fusão ===
        entities.sort_by_key(|e| e.start);
        let tagged_tokens: Vec<TaggedToken> = document
            .tokens()
            .iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken {
                token: token.clone(),
                tag,
            })
            .collect();

        let processing_ms = started.elapsed().as_millis() as u64;
        info!(
            tokens = total,
            entities = entities.len(),
            processing_ms,
            "análise concluída"
        );
        emit(PipelineEvent::Done {
            entities: entities.clone(),
            tagged_tokens: tagged_tokens.clone(),
            total_tokens: total,
            processing_ms,
        });

        Analysis {
            tagged_tokens,
            entities,
            total_tokens: total,
            processing_ms,
        }
    }
}

fn entity_for_tokens(
    document: &Document,
    text: &str,
    start_token: usize,
    end_token: usize,
    category: EntityCategory,
    source: EntitySource,
) -> EntitySpan {
    let tokens = document.tokens();
    let start = tokens[start_token].start;
    let end = tokens[end_token].end;
    EntitySpan {
        text: text[start..end].to_string(),
        category,
        start_token,
        end_token,
        start,
        end,
        source,
    }
}

/// Alinha um casamento aos tokens que ele toca. `None` se não toca nenhum.
fn entity_for_match(
    document: &Document,
    found: &PatternMatch,
    category: EntityCategory,
) -> Option<EntitySpan> {
    let tokens = document.tokens();
    let start_token = tokens
        .iter()
        .position(|t| t.overlaps(found.start, found.end))?;
    let end_token = tokens
        .iter()
        .rposition(|t| t.overlaps(found.start, found.end))?;
    Some(EntitySpan {
        text: found.text.clone(),
        category,
        start_token,
        end_token,
        start: found.start,
        end: found.end,
        source: EntitySource::Pattern,
    })
}

fn mark(tags: &mut [Tag], entity: &EntitySpan) {
    tags[entity.start_token] = Tag::Begin(entity.category);
    for tag in &mut tags[entity.start_token + 1..=entity.end_token] {
        *tag = Tag::Inside(entity.category);
    }
}
