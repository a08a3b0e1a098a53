//! # Code Generators
//!
//! Consumers of the interchange token stream. Each generator is an
//! independent stack machine over the flat token form (see the `interchange`
//! crate for the contract): tag tokens are pushed as pending values, `(`
//! instantiates the pending tag, `=` folds the two preceding values into an
//! attribute, `)` pops back out.
//!
//! Generators never abort on a malformed stream; a broken instruction is
//! skipped and the remaining stream still produces source text.

pub mod flow;
pub mod polymer;

pub(crate) fn kebab_to_pascal(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

pub(crate) fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
