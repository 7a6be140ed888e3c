//! Field operator registry
//!
//! Maps operator names (`tlh:`, `pos:`, `en:`, `finotes:`, ...) to the
//! predicate kind they select. The registry is an immutable map built once
//! from the store's locale list; there is no global operator table and
//! nothing registers operators after construction. Resolution is by exact
//! name, and a name that is not present never matches (a deliberate
//! leniency, covered by tests rather than turned into a parse error).

use std::collections::HashMap;

/// Free-text entry fields addressable by an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Antonyms,
    Synonyms,
    Components,
    SeeAlso,
}

/// Predicate kind behind one operator name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldOp {
    /// `tlh:` - regex over the headword, argument normalized first.
    Name,

    /// `notes:` (English, case-insensitive) and `<locale>notes:`
    /// (case-sensitive) - regex over the locale's notes.
    Notes {
        locale: String,
        case_insensitive: bool,
    },

    /// `ex:` (English) and `<locale>ex:` - regex over the locale's
    /// examples.
    Examples { locale: String },

    /// `pos:` - every comma-separated argument tag must appear in the
    /// union of the simple POS code and the tag set.
    PosTags,

    /// `antonym:` / `synonym:` / `components:` / `see:` - regex over the
    /// free-text field, argument normalized first, absent field reads as
    /// empty.
    FreeText(TextField),

    /// `<locale>:` - regex over that locale's definition, or exact
    /// membership in that locale's search-tag list.
    Definition { locale: String },
}

/// Immutable operator-name lookup table.
#[derive(Clone, Debug, Default)]
pub struct OperatorRegistry {
    ops: HashMap<String, FieldOp>,
}

impl OperatorRegistry {
    /// Build the registry: the fixed operators plus the three per-locale
    /// operators for every locale present in the store.
    pub fn new(locales: &[String]) -> Self {
        let mut ops = HashMap::new();
        ops.insert("tlh".to_string(), FieldOp::Name);
        ops.insert(
            "notes".to_string(),
            FieldOp::Notes {
                locale: "en".to_string(),
                case_insensitive: true,
            },
        );
        ops.insert(
            "ex".to_string(),
            FieldOp::Examples {
                locale: "en".to_string(),
            },
        );
        ops.insert("pos".to_string(), FieldOp::PosTags);
        ops.insert("antonym".to_string(), FieldOp::FreeText(TextField::Antonyms));
        ops.insert("synonym".to_string(), FieldOp::FreeText(TextField::Synonyms));
        ops.insert(
            "components".to_string(),
            FieldOp::FreeText(TextField::Components),
        );
        ops.insert("see".to_string(), FieldOp::FreeText(TextField::SeeAlso));

        for locale in locales {
            ops.insert(
                locale.clone(),
                FieldOp::Definition {
                    locale: locale.clone(),
                },
            );
            ops.insert(
                format!("{locale}notes"),
                FieldOp::Notes {
                    locale: locale.clone(),
                    case_insensitive: false,
                },
            );
            ops.insert(
                format!("{locale}ex"),
                FieldOp::Examples {
                    locale: locale.clone(),
                },
            );
        }

        Self { ops }
    }

    pub fn get(&self, name: &str) -> Option<&FieldOp> {
        self.ops.get(name)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales() -> Vec<String> {
        vec!["en".to_string(), "fi".to_string()]
    }

    #[test]
    fn test_fixed_operators_present() {
        let registry = OperatorRegistry::new(&locales());
        assert_eq!(registry.get("tlh"), Some(&FieldOp::Name));
        assert_eq!(registry.get("pos"), Some(&FieldOp::PosTags));
        assert_eq!(
            registry.get("see"),
            Some(&FieldOp::FreeText(TextField::SeeAlso))
        );
    }

    #[test]
    fn test_per_locale_operators_generated() {
        let registry = OperatorRegistry::new(&locales());
        assert_eq!(
            registry.get("fi"),
            Some(&FieldOp::Definition {
                locale: "fi".to_string()
            })
        );
        assert_eq!(
            registry.get("finotes"),
            Some(&FieldOp::Notes {
                locale: "fi".to_string(),
                case_insensitive: false
            })
        );
        assert_eq!(
            registry.get("fiex"),
            Some(&FieldOp::Examples {
                locale: "fi".to_string()
            })
        );
    }

    #[test]
    fn test_base_notes_stays_case_insensitive_alongside_ennotes() {
        let registry = OperatorRegistry::new(&locales());
        assert_eq!(
            registry.get("notes"),
            Some(&FieldOp::Notes {
                locale: "en".to_string(),
                case_insensitive: true
            })
        );
        assert_eq!(
            registry.get("ennotes"),
            Some(&FieldOp::Notes {
                locale: "en".to_string(),
                case_insensitive: false
            })
        );
    }

    #[test]
    fn test_unknown_operator_absent() {
        let registry = OperatorRegistry::new(&locales());
        assert_eq!(registry.get("bogus"), None);
    }
}
