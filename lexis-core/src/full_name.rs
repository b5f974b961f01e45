//! # Detector de Nomes Completos
//!
//! Junta tokens vizinhos em spans de entidade a partir de dois predicados por token:
//! **pode iniciar** (nome próprio) e **pode continuar** (sobrenome). Só regras
//! locais e gulosas: uma única passada da esquerda para a direita, sem backtracking.
//!
//! ## Algoritmo
//!
//! 1. **Semente**: token `i` inicia, token `i+1` continua, ambos com maiúscula
//!    → span `[i, i+1]`. Um token sozinho nunca forma um span.
//! 2. **Extensão à esquerda**: enquanto o token anterior pode iniciar (e tem
//!    maiúscula), o início recua. "Begoña Yolanda Aguilar" vira um único nome.
//! 3. **Ambiguidade**: a partir do segundo token da semente, um token com os dois
//!    papéis pode fechar este nome ou abrir outro. Olhamos um token adiante: se ele
//!    continua, o ambíguo é interior e a extensão segue; senão, paramos.
//! 4. **Cauda**: enquanto o próximo token continua, ele é absorvido. Um ambíguo
//!    que falhou a checagem do passo 3 ainda continua (tem papel de sobrenome),
//!    então a cauda o absorve como último token do nome.
//! 5. **Fechamento**: `Start` no primeiro token, `Continuation` nos demais, e a
//!    varredura recomeça logo depois do span (tokens consumidos nunca são revistos).
//!
//! Tokens em minúscula nunca semeiam, estendem ou continuam um span: a maiúscula é
//! checada em cada passo.
//!
//! ## Exemplo
//!
//! ```rust
//! use lexis_core::document::{PositionTag, TokenRoles};
//! use lexis_core::full_name::detect_spans;
//!
//! // "Jose Maria Ferreira": nome, nome/sobrenome, sobrenome
//! let roles = vec![
//!     TokenRoles::new(true, true, false),
//!     TokenRoles::new(true, true, true),
//!     TokenRoles::new(true, false, true),
//! ];
//! let detection = detect_spans(&roles);
//! assert_eq!(detection.spans.len(), 1);
//! assert_eq!((detection.spans[0].start, detection.spans[0].end), (0, 2));
//! assert_eq!(detection.positions[0], PositionTag::Start);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::document::{Document, PositionTag, TokenRoles};
use crate::tagger::EntityCategory;

/// Menor span possível: um nome e um sobrenome.
pub const MIN_SPAN_LEN: usize = 2;

/// Intervalo contíguo de tokens `[start, end]` (ambos inclusivos).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSpan {
    pub start: usize,
    pub end: usize,
    pub label: EntityCategory,
}

impl NameSpan {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Resultado de uma passada: uma tag por token e a lista de spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanDetection {
    pub spans: Vec<NameSpan>,
    pub positions: Vec<PositionTag>,
}

/// Detector configurável pelo rótulo dado aos spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullNameDetector {
    label: EntityCategory,
}

impl Default for FullNameDetector {
    fn default() -> Self {
        Self {
            label: EntityCategory::Per,
        }
    }
}

impl FullNameDetector {
    pub fn new(label: EntityCategory) -> Self {
        Self { label }
    }

    pub fn label(&self) -> EntityCategory {
        self.label
    }

    /// Roda o algoritmo sobre a tabela de papéis.
    pub fn detect(&self, roles: &[TokenRoles]) -> SpanDetection {
        let n = roles.len();
        let mut positions = vec![PositionTag::None; n];
        let mut spans = Vec::new();

        // Primeiro token ainda não consumido por um span anterior.
        let mut floor = 0;
        let mut i = 0;
        while i + 1 < n {
            if !is_seed(roles, i) {
                i += 1;
                continue;
            }
            trace!(seed = i, "semente de nome encontrada");

            let start = extend_left(roles, i, floor);
            let end = resolve_ambiguous(roles, i + 1);
            let end = extend_trailing(roles, end);

            positions[start] = PositionTag::Start;
            for position in &mut positions[start + 1..=end] {
                *position = PositionTag::Continuation;
            }
            debug!(start, end, label = self.label.name(), "span de nome fechado");
            spans.push(NameSpan {
                start,
                end,
                label: self.label,
            });

            floor = end + 1;
            i = end + 1;
        }

        SpanDetection { spans, positions }
    }

    /// Roda o algoritmo sobre o documento, grava posições e spans na tabela lateral
    /// e retorna os spans.
    pub fn tag(&self, document: &mut Document) -> Vec<NameSpan> {
        let SpanDetection { spans, positions } = self.detect(document.roles());
        document.record_detection(positions, spans.clone());
        spans
    }
}

/// Atalho para [`FullNameDetector::detect`] com o rótulo padrão (PER).
pub fn detect_spans(roles: &[TokenRoles]) -> SpanDetection {
    FullNameDetector::default().detect(roles)
}

/// Requer `i + 1 < roles.len()`.
fn is_seed(roles: &[TokenRoles], i: usize) -> bool {
    roles[i].begins() && roles[i + 1].continues()
}

fn extend_left(roles: &[TokenRoles], seed: usize, floor: usize) -> usize {
    let mut start = seed;
    while start > floor && roles[start - 1].begins() {
        start -= 1;
    }
    start
}

/// Atravessa tokens ambíguos enquanto o seguinte confirmar a continuação.
fn resolve_ambiguous(roles: &[TokenRoles], mut end: usize) -> usize {
    while end + 1 < roles.len() && roles[end].is_ambiguous() && roles[end + 1].continues() {
        trace!(index = end, "token ambíguo tratado como interior");
        end += 1;
    }
    end
}

fn extend_trailing(roles: &[TokenRoles], mut end: usize) -> usize {
    while end + 1 < roles.len() && roles[end + 1].continues() {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use PositionTag::{Continuation as C, None as O, Start as S};

    /// Nome próprio com maiúscula.
    const A: TokenRoles = TokenRoles {
        starts_with_upper: true,
        can_begin: true,
        can_continue: false,
    };
    /// Sobrenome com maiúscula.
    const B: TokenRoles = TokenRoles {
        starts_with_upper: true,
        can_begin: false,
        can_continue: true,
    };
    /// Nome e sobrenome com maiúscula.
    const AB: TokenRoles = TokenRoles {
        starts_with_upper: true,
        can_begin: true,
        can_continue: true,
    };
    /// Palavra comum com maiúscula.
    const W: TokenRoles = TokenRoles {
        starts_with_upper: true,
        can_begin: false,
        can_continue: false,
    };

    fn lower(roles: TokenRoles) -> TokenRoles {
        TokenRoles {
            starts_with_upper: false,
            ..roles
        }
    }

    fn bounds(detection: &SpanDetection) -> Vec<(usize, usize)> {
        detection.spans.iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn test_seed_pair() {
        let detection = detect_spans(&[A, B]);
        assert_eq!(bounds(&detection), vec![(0, 1)]);
        assert_eq!(detection.positions, vec![S, C]);
        assert_eq!(detection.spans[0].label, EntityCategory::Per);
        assert_eq!(detection.spans[0].len(), MIN_SPAN_LEN);
    }

    #[test]
    fn test_ambiguous_without_continuation_ends_the_name() {
        // "Jose Aguilar Begoña Yolanda": Begoña fecha o nome, Yolanda fica de fora
        let detection = detect_spans(&[A, B, AB, A]);
        assert_eq!(bounds(&detection), vec![(0, 2)]);
        assert_eq!(detection.positions, vec![S, C, C, O]);

        let detection = detect_spans(&[A, AB, A]);
        assert_eq!(bounds(&detection), vec![(0, 1)]);
        assert_eq!(detection.positions, vec![S, C, O]);
    }

    #[test]
    fn test_lone_first_name_is_not_a_span() {
        assert!(detect_spans(&[A]).spans.is_empty());
        assert!(detect_spans(&[W, A, W]).spans.is_empty());
        assert!(detect_spans(&[B, A]).spans.is_empty());
    }

    #[test]
    fn test_degenerate_documents() {
        let empty = detect_spans(&[]);
        assert!(empty.spans.is_empty());
        assert!(empty.positions.is_empty());

        let single = detect_spans(&[AB]);
        assert!(single.spans.is_empty());
        assert_eq!(single.positions, vec![O]);
    }

    #[test]
    fn test_left_extension() {
        let detection = detect_spans(&[A, A, B]);
        assert_eq!(bounds(&detection), vec![(0, 2)]);
        assert_eq!(detection.positions, vec![S, C, C]);
    }

    #[test]
    fn test_ambiguous_interior() {
        let detection = detect_spans(&[A, AB, B]);
        assert_eq!(bounds(&detection), vec![(0, 2)]);
        assert_eq!(detection.positions, vec![S, C, C]);
    }

    #[test]
    fn test_ambiguous_chain_is_one_name() {
        // "Jose Maria Jose Maria"
        let detection = detect_spans(&[AB, AB, AB, AB]);
        assert_eq!(bounds(&detection), vec![(0, 3)]);
        assert_eq!(detection.positions, vec![S, C, C, C]);
    }

    #[test]
    fn test_trailing_last_names() {
        // "Jose Begoña Aguilar Ferreira se ha perdido"
        let se = lower(W);
        let detection = detect_spans(&[AB, AB, B, B, se, se, se]);
        assert_eq!(bounds(&detection), vec![(0, 3)]);
        assert_eq!(detection.positions, vec![S, C, C, C, O, O, O]);
    }

    #[test]
    fn test_stops_before_first_name_only() {
        // "Jose Luís Ferreira Yolanda"
        let detection = detect_spans(&[AB, AB, B, A]);
        assert_eq!(detection.positions, vec![S, C, C, O]);
    }

    #[test]
    fn test_lowercase_never_participates() {
        // "Su huerto vive": huerto é sobrenome mas está em minúscula
        let detection = detect_spans(&[A, lower(B), W]);
        assert!(detection.spans.is_empty());

        // "jose Begoña Ferreira": jose não estende à esquerda
        let detection = detect_spans(&[lower(AB), AB, B]);
        assert_eq!(detection.positions, vec![O, S, C]);

        // sobrenome minúsculo interrompe a cauda
        let detection = detect_spans(&[A, B, lower(B), B]);
        assert_eq!(detection.positions, vec![S, C, O, O]);
    }

    #[test]
    fn test_multiple_names() {
        // "Jose Luís Ferreira no es Jose Luís ní Luís Ferreira"
        let w = lower(W);
        let roles = [AB, AB, B, w, w, AB, AB, w, AB, B];
        let detection = detect_spans(&roles);
        assert_eq!(bounds(&detection), vec![(0, 2), (5, 6), (8, 9)]);
        assert_eq!(detection.positions, vec![S, C, C, O, O, S, C, O, S, C]);
    }

    #[test]
    fn test_left_extension_stops_at_previous_span() {
        // O primeiro span termina no token 1 (ambíguo, seguido de um nome apenas);
        // a segunda semente não pode roubar o token 1.
        let detection = detect_spans(&[A, AB, A, B]);
        assert_eq!(bounds(&detection), vec![(0, 1), (2, 3)]);
        assert_eq!(detection.positions, vec![S, C, S, C]);
    }

    #[test]
    fn test_tag_writes_side_table() {
        use crate::tokenizer::Token;

        let tokens = (0..3)
            .map(|i| Token::new(format!("T{i}"), i, i + 1, i))
            .collect();
        let mut document = Document::new(tokens, vec![A, B, W]);
        let detector = FullNameDetector::default();

        let spans = detector.tag(&mut document);
        assert_eq!(spans.len(), 1);
        assert_eq!(document.positions(), &[S, C, O]);
        assert_eq!(document.spans(), spans.as_slice());
        assert!(document.is_full_name(0, 1));

        // Uma nova passada recalcula tudo do zero.
        let again = detector.tag(&mut document);
        assert_eq!(again, spans);
    }
}
