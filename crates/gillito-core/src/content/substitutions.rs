//! Formal Spanish -> boricua rewrite rules, applied top to bottom.

use crate::types::SubstitutionRule;

pub static SUBSTITUTIONS: &[SubstitutionRule] = &[
    SubstitutionRule::new("dinero", "chavos"),
    SubstitutionRule::new("amigo", "pana"),
    SubstitutionRule::new("hermano", "mano"),
    SubstitutionRule::new("fiesta", "jangueo"),
    SubstitutionRule::new("chisme", "bochinche"),
    SubstitutionRule::new("desorden", "revolú"),
    SubstitutionRule::new("basura", "zafacón"),
    SubstitutionRule::new("pantalones", "mahones"),
    SubstitutionRule::new("naranja", "china"),
    SubstitutionRule::new("diversión", "tripeo"),
    SubstitutionRule::new("problema", "quilombo"),
    SubstitutionRule::new("genial", "brutal"),
    SubstitutionRule::new("bueno", "cabrón (en buen sentido)"),
    SubstitutionRule::new("increíble", "¡diablo, mano!"),
    SubstitutionRule::new("comida", "jama"),
    SubstitutionRule::new("comer", "jamar"),
    SubstitutionRule::new("carro", "carro (con la R bien fuerte 🔥)"),
    SubstitutionRule::new("niño", "nene"),
    SubstitutionRule::new("niña", "nena"),
    SubstitutionRule::new("muchacho", "chamaco"),
];
