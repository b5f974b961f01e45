//! # Padrões por Categoria
//!
//! Cada função monta um [`PatternMatcher`] para um formato específico usando os
//! construtores de [`crate::pattern`], e o etiqueta com uma [`EntityCategory`].
//! Todos são insensíveis a maiúsculas.
//!
//! | Função                      | Exemplos                                   |
//! |-----------------------------|--------------------------------------------|
//! | [`cif`]                     | `B97017461`, `A-14.010.342`                |
//! | [`dni`]                     | `12345678Z`, `12.345.678-Z`                |
//! | [`email`]                   | `ana.lopez@example.com`                    |
//! | [`date`]                    | `4 de noviembre de 2019`, `cuatro enero 1905` |
//! | [`hashtag`] / [`mention`]   | `#rust`, `@ferris`                         |
//! | [`demonstrative_pronouns`]  | `ésto`, `aquélla`                          |
//! | [`company_suffixes`]        | `S.A.`, `S.L.` (lista fornecida)           |

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon;
use crate::matcher::{PatternMatch, PatternMatcher};
use crate::pattern::{MultiWordPattern, SingleWordPattern};
use crate::tagger::EntityCategory;

/// Um casamento já etiquetado com a categoria do padrão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: EntityCategory,
    #[serde(flatten)]
    pub matched: PatternMatch,
}

/// Um matcher e a categoria que ele reconhece.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    pub category: EntityCategory,
    pub matcher: PatternMatcher,
}

impl CategoryMatcher {
    pub fn new(category: EntityCategory, matcher: PatternMatcher) -> Self {
        Self { category, matcher }
    }

    pub fn find_all(&self, text: &str) -> Vec<CategoryMatch> {
        self.matcher
            .find_iter(text)
            .map(|matched| CategoryMatch {
                category: self.category,
                matched,
            })
            .collect()
    }
}

fn single_word(category: EntityCategory, options: &[&str]) -> Result<CategoryMatcher> {
    let mut builder = SingleWordPattern::new();
    for option in options {
        builder.add_option(*option);
    }
    Ok(CategoryMatcher::new(
        category,
        PatternMatcher::from_single(&builder, true)?,
    ))
}

/// Código de identificação fiscal de empresas espanholas.
pub fn cif() -> Result<CategoryMatcher> {
    single_word(
        EntityCategory::Cif,
        &[r"[A-Z]\d{7}([A-Z]|\d)", r"[A-Z]-\d\d\.\d{3}\.\d{3}"],
    )
}

/// Documento nacional de identidade espanhol.
pub fn dni() -> Result<CategoryMatcher> {
    single_word(
        EntityCategory::Dni,
        &[r"\d{8}[A-Z]", r"\d\d\.\d{3}\.\d{3}-[A-Z]"],
    )
}

/// Baseado em <https://www.regular-expressions.info/email.html>.
pub fn email() -> Result<CategoryMatcher> {
    single_word(
        EntityCategory::Email,
        &[r"[A-Z\d._%+\-]+@[A-Z\d.\-]+\.[A-Z]{2,}"],
    )
}

pub fn hashtag() -> Result<CategoryMatcher> {
    single_word(EntityCategory::Hashtag, &[r"[＃#](\w+)"])
}

pub fn mention() -> Result<CategoryMatcher> {
    single_word(EntityCategory::Mention, &[r"[＠@]([\w_]+)"])
}

/// Datas por extenso em espanhol: `DIA [de] MÊS [de] ANO`.
///
/// O dia aceita número (1–31) ou forma escrita; o ano vai de 1900 a 2099.
/// Entre as palavras cabem de 1 a 3 separadores.
pub fn date() -> Result<CategoryMatcher> {
    let day_numbers = r"(([1-9])|(1[0-9])|(2[0-9])|(3[0-1]))";
    let de = "(de)";
    let year = r"((19[0-9][0-9])|(20[0-9][0-9]))";

    let mut day = SingleWordPattern::new();
    day.add_options_as_group(lexicon::SPANISH_DAY_NUMBERS)
        .add_option(day_numbers);
    let mut month = SingleWordPattern::new();
    month.add_options_as_group(lexicon::SPANISH_MONTHS);

    let mut builder = MultiWordPattern::new();
    builder
        .add_word(day.build_inner())
        .add_optional_word(de)
        .add_word(month.build_inner())
        .add_optional_word(de)
        .add_word(year);

    Ok(CategoryMatcher::new(
        EntityCategory::Date,
        PatternMatcher::from_multi(&builder, true)?,
    ))
}

/// Demonstrativos acentuados: "ésto", "aquélla"...
pub fn demonstrative_pronouns() -> Result<CategoryMatcher> {
    let mut builder = SingleWordPattern::new();
    builder.add_options_as_group(lexicon::DEMONSTRATIVE_PRONOUNS);
    Ok(CategoryMatcher::new(
        EntityCategory::Pronoun,
        PatternMatcher::from_single(&builder, true)?,
    ))
}

/// Terminações societárias ("S.A.", "B.V.B.A.") a partir de uma lista.
///
/// As entradas são literais: pontos e outros metacaracteres são escapados.
/// Diferente dos outros padrões, respeita maiúsculas ("SA" não casa com "sa").
pub fn company_suffixes<I, S>(suffixes: I) -> Result<CategoryMatcher>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let escaped: Vec<String> = suffixes
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .map(|s| regex::escape(&s))
        .collect();
    let mut builder = SingleWordPattern::new();
    if !escaped.is_empty() {
        builder.add_options_as_group(escaped);
    }
    Ok(CategoryMatcher::new(
        EntityCategory::Company,
        PatternMatcher::from_single(&builder, false)?,
    ))
}

/// Todos os padrões embutidos, exceto terminações societárias (que dependem de lista).
pub fn default_matchers() -> Result<Vec<CategoryMatcher>> {
    Ok(vec![
        date()?,
        cif()?,
        dni()?,
        email()?,
        hashtag()?,
        mention()?,
        demonstrative_pronouns()?,
    ])
}
