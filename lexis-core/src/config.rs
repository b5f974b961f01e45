//! # Configuração
//!
//! Configuração em JSON, com todos os campos opcionais:
//!
//! ```json
//! {
//!   "separators": { "class": "[\\p{P}\\s]", "max_repeat": 3 },
//!   "case_insensitive": true,
//!   "company_suffixes": ["S.A.", "S.L."],
//!   "bind_addr": "0.0.0.0:3000"
//! }
//! ```
//!
//! `separators` e `case_insensitive` são os padrões usados quando uma requisição
//! de montagem de padrão não os informa.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::separator::Separators;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexisConfig {
    pub separators: Separators,
    pub case_insensitive: bool,
    /// Terminações societárias reconhecidas além dos padrões embutidos.
    pub company_suffixes: Vec<String>,
    pub bind_addr: String,
}

impl Default for LexisConfig {
    fn default() -> Self {
        Self {
            separators: Separators::default(),
            case_insensitive: true,
            company_suffixes: Vec::new(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl LexisConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }
}
