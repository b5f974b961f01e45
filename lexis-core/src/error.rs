//! # Erros de Configuração
//!
//! Todos os erros do sistema acontecem na **montagem** de um padrão, nunca durante
//! a busca no texto ou a detecção de nomes. Uma configuração vazia (nenhum fragmento)
//! não é erro: gera o padrão vazio, que não casa com nada.

use thiserror::Error;

/// Falha ao montar ou compilar um padrão.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A primeira palavra de um padrão multi-palavra foi marcada como opcional.
    #[error("a primeira palavra de um padrão multi-palavra não pode ser opcional")]
    OptionalFirstWord,

    /// A última palavra de um padrão multi-palavra foi marcada como opcional.
    #[error("a última palavra de um padrão multi-palavra não pode ser opcional")]
    OptionalLastWord,

    /// O número máximo de separadores entre palavras precisa ser ao menos 1.
    #[error("o máximo de separadores deve ser >= 1 (recebido {0})")]
    InvalidSeparatorRepeat(usize),

    /// O avaliador de regex rejeitou o padrão montado.
    #[error("padrão inválido: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Resultado das operações de configuração.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
