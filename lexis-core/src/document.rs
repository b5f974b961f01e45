//! # Documento e Tabela Lateral de Papéis
//!
//! Um [`Document`] é a sequência ordenada de tokens de um texto mais uma **tabela
//! lateral** indexada pela posição do token. A tabela guarda:
//!
//! - os papéis calculados fora do detector ([`TokenRoles`]): pode iniciar um nome,
//!   pode continuar/terminar um nome, começa com maiúscula;
//! - a [`PositionTag`] escrita pelo detector de nomes em cada passada;
//! - a lista de spans da última passada.
//!
//! Só o detector escreve posições e spans; o resto é somente leitura.

use serde::{Deserialize, Serialize};

use crate::full_name::NameSpan;
use crate::tokenizer::Token;

/// Papel de um token dentro de um span detectado.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionTag {
    /// Fora de qualquer span.
    #[default]
    None,
    /// Primeiro token do span.
    Start,
    /// Qualquer token do span depois do primeiro.
    Continuation,
}

/// Predicados pré-calculados de um token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRoles {
    pub starts_with_upper: bool,
    /// Pode iniciar uma entidade (ex: é um nome próprio conhecido).
    pub can_begin: bool,
    /// Pode continuar ou terminar uma entidade (ex: é um sobrenome conhecido).
    pub can_continue: bool,
}

impl TokenRoles {
    pub fn new(starts_with_upper: bool, can_begin: bool, can_continue: bool) -> Self {
        Self {
            starts_with_upper,
            can_begin,
            can_continue,
        }
    }

    /// Tem os dois papéis: pode fechar a entidade atual ou abrir outra.
    pub fn is_ambiguous(&self) -> bool {
        self.can_begin && self.can_continue
    }

    /// Pode iniciar ou estender à esquerda: papel de início e maiúscula.
    pub fn begins(&self) -> bool {
        self.can_begin && self.starts_with_upper
    }

    /// Pode continuar à direita: papel de continuação e maiúscula.
    pub fn continues(&self) -> bool {
        self.can_continue && self.starts_with_upper
    }
}

/// Tokens de um texto com sua tabela lateral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    tokens: Vec<Token>,
    roles: Vec<TokenRoles>,
    positions: Vec<PositionTag>,
    spans: Vec<NameSpan>,
}

impl Document {
    /// Monta o documento. Uma tabela de papéis de tamanho diferente é ajustada
    /// ao número de tokens (papéis ausentes ficam todos `false`).
    pub fn new(tokens: Vec<Token>, mut roles: Vec<TokenRoles>) -> Self {
        roles.resize(tokens.len(), TokenRoles::default());
        let positions = vec![PositionTag::None; tokens.len()];
        Self {
            tokens,
            roles,
            positions,
            spans: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn roles(&self) -> &[TokenRoles] {
        &self.roles
    }

    pub fn positions(&self) -> &[PositionTag] {
        &self.positions
    }

    pub fn position(&self, index: usize) -> PositionTag {
        self.positions.get(index).copied().unwrap_or_default()
    }

    /// Spans da última passada do detector.
    pub fn spans(&self) -> &[NameSpan] {
        &self.spans
    }

    /// Substitui o resultado da passada anterior.
    pub(crate) fn record_detection(&mut self, positions: Vec<PositionTag>, spans: Vec<NameSpan>) {
        self.positions = positions;
        self.spans = spans;
    }

    /// O intervalo `[start, end]` (inclusivo) é um nome completo, ou o começo de um?
    ///
    /// Aceita nomes parciais: em "Jose Aguilar Ferreira", tanto `[0, 2]` quanto `[0, 1]`
    /// e `[0, 0]` são aceitos. Exige `Start` no primeiro token e `Continuation` nos demais.
    pub fn is_full_name(&self, start: usize, end: usize) -> bool {
        match self.positions.get(start..=end) {
            Some([first, rest @ ..]) => {
                *first == PositionTag::Start
                    && rest.iter().all(|p| *p == PositionTag::Continuation)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(n: usize) -> Document {
        let tokens = (0..n)
            .map(|i| Token::new(format!("T{i}"), i * 3, i * 3 + 2, i))
            .collect();
        Document::new(tokens, vec![])
    }

    #[test]
    fn test_roles_are_padded() {
        let document = doc(3);
        assert_eq!(document.roles().len(), 3);
        assert!(document.roles().iter().all(|r| *r == TokenRoles::default()));
        assert_eq!(document.position(2), PositionTag::None);
        assert_eq!(document.position(99), PositionTag::None);
    }

    #[test]
    fn test_role_predicates() {
        let both = TokenRoles::new(true, true, true);
        assert!(both.is_ambiguous());
        assert!(both.begins());
        assert!(both.continues());

        let lower = TokenRoles::new(false, true, true);
        assert!(lower.is_ambiguous());
        assert!(!lower.begins());
        assert!(!lower.continues());
    }

    #[test]
    fn test_is_full_name_accepts_prefixes() {
        let mut document = doc(4);
        document.record_detection(
            vec![
                PositionTag::Start,
                PositionTag::Continuation,
                PositionTag::Continuation,
                PositionTag::None,
            ],
            vec![],
        );
        assert!(document.is_full_name(0, 2));
        assert!(document.is_full_name(0, 1));
        assert!(document.is_full_name(0, 0));
        assert!(!document.is_full_name(1, 2));
        assert!(!document.is_full_name(0, 3));
        assert!(!document.is_full_name(2, 9));
    }
}
