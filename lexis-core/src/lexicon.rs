//! # Léxico Embutido (Espanhol)
//!
//! Listas pequenas usadas pelo matcher de datas e pelo pipeline de demonstração:
//! meses, números por extenso de 1 a 31, nomes e sobrenomes frequentes, e textos
//! de exemplo. Listas maiores (arquivos de nomes com milhares de entradas) são
//! carregadas com [`crate::names::NameList::from_reader`].

/// Meses do ano em espanhol.
pub const SPANISH_MONTHS: &[&str] = &[
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
    "septiembre", "setiembre", "octubre", "noviembre", "diciembre",
];

/// Dias do mês por extenso. Formas mais longas vêm depois das mais curtas com o
/// mesmo prefixo; a alternação recua quando a forma curta não fecha a data.
pub const SPANISH_DAY_NUMBERS: &[&str] = &[
    "primero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho",
    "nueve", "diez", "once", "doce", "trece", "catorce", "quince", "dieciséis",
    "diecisiete", "dieciocho", "diecinueve", "veinte", "veintiuno", "veintiún",
    "veintidós", "veintitrés", "veinticuatro", "veinticinco", "veintiséis",
    "veintisiete", "veintiocho", "veintinueve", "treinta", "treinta y uno",
];

/// Nomes próprios frequentes.
pub const FIRST_NAMES: &[&str] = &[
    "Jose", "José", "Luís", "Luis", "Begoña", "Yolanda", "María", "Maria", "Carmen",
    "Antonio", "Manuel", "Francisco", "Juan", "Javier", "Lucía", "Pilar", "Elena",
    "Isabel", "Pedro", "Miguel", "Ana", "Laura", "María Carmen",
];

/// Sobrenomes frequentes. Alguns também são nomes próprios (José, Begoña...),
/// o que torna esses tokens ambíguos para o detector.
pub const LAST_NAMES: &[&str] = &[
    "García", "Fernández", "González", "Rodríguez", "López", "Martínez", "Sánchez",
    "Pérez", "Gómez", "Martín", "Jiménez", "Ruiz", "Hernández", "Díaz", "Moreno",
    "Aguilar", "Ferreira", "José", "Begoña", "Luís", "María", "Isabel",
    "de la Fuente",
];

/// Pronomes demonstrativos acentuados (em minúscula).
pub const DEMONSTRATIVE_PRONOUNS: &[&str] = &[
    "sólo", "ésto", "ésta", "éstos", "éstas", "éste", "aquél", "aquéllo", "aquélla",
    "aquéllos", "aquéllas", "ése", "éso", "ésa", "ésas", "ésos",
];

/// Textos de demonstração: (domínio, texto).
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "agenda",
            "Quedamos el lunes 4 de noviembre de 2019 con Jose Luís Ferreira en la plaza.",
        ),
        (
            "empresa",
            concat!(
                "La sociedad B97017461 firmó con María Aguilar García; ",
                "contacto: maria.aguilar@example.com."
            ),
        ),
        (
            "identidad",
            "Begoña Yolanda Aguilar presentó el DNI 12345678Z el veintiséis de enero de 1995.",
        ),
        (
            "redes",
            "Gracias @ferris por el #RustConf, ésto fue genial según Juan Martín Pérez.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_contain_expected_entries() {
        assert!(SPANISH_MONTHS.contains(&"diciembre"));
        assert!(SPANISH_DAY_NUMBERS.contains(&"veintiséis"));
        assert!(FIRST_NAMES.contains(&"Begoña"));
        assert!(LAST_NAMES.contains(&"Ferreira"));
    }

    #[test]
    fn test_demo_texts_are_not_empty() {
        let texts = demo_texts();
        assert!(!texts.is_empty());
        assert!(texts.iter().all(|(domain, text)| !domain.is_empty() && !text.is_empty()));
    }
}
