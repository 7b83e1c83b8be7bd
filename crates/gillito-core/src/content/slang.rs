//! Puerto Rican slang dictionary.
//!
//! Declaration order matters: partial-match candidates are returned in this
//! order.

use crate::types::{SlangEntry, Tier};

pub static SLANG: &[SlangEntry] = &[
    SlangEntry::new(
        "wepa",
        "Expresión de alegría, emoción o celebración",
        "¡Weeepa! ¡Ganamos el juego!",
        Tier::Basic,
    ),
    SlangEntry::new(
        "bregar",
        "Lidiar con algo, trabajar, manejar una situación",
        "Hay que bregar con lo que hay, mano.",
        Tier::Basic,
    ),
    SlangEntry::new("chavos", "Dinero", "No tengo chavos ni pa'l café.", Tier::Basic),
    SlangEntry::new(
        "corillo",
        "Grupo de amigos, pandilla (sin connotación negativa)",
        "Voy a janguear con el corillo.",
        Tier::Basic,
    ),
    SlangEntry::new(
        "janguear",
        "Pasar el rato, salir con amigos (del inglés 'hang out')",
        "¿Vamos a janguear en la placita?",
        Tier::Basic,
    ),
    SlangEntry::new(
        "mano",
        "Hermano, amigo cercano (abreviación de 'hermano')",
        "¿Qué es la que hay, mano?",
        Tier::Basic,
    ),
    SlangEntry::new(
        "pana",
        "Amigo, compañero, aliado",
        "Ese es mi pana del alma.",
        Tier::Basic,
    ),
    SlangEntry::new(
        "ay bendito",
        "Expresión de compasión, sorpresa o resignación",
        "Ay bendito, ¿y ahora qué hacemos?",
        Tier::Basic,
    ),
    SlangEntry::new(
        "bochinche",
        "Chisme, escándalo, rumor",
        "¿Tú supiste del bochinche del vecino?",
        Tier::Intermediate,
    ),
    SlangEntry::new(
        "revolú",
        "Desorden, lío, caos",
        "Esa fiesta fue un revolú.",
        Tier::Intermediate,
    ),
    SlangEntry::new(
        "gufear",
        "Bromear, hacer chistes (del inglés 'goof')",
        "Deja de gufear, que esto es serio.",
        Tier::Intermediate,
    ),
    SlangEntry::new(
        "tripear",
        "Disfrutar, pasarla bien, también bromear",
        "Estamos tripeando en la playa.",
        Tier::Intermediate,
    ),
    SlangEntry::new(
        "tecato",
        "Persona adicta a drogas",
        "Ese barrio tiene muchos tecatos.",
        Tier::Advanced,
    ),
    SlangEntry::new(
        "cangri",
        "El más importante, el jefe, término de respeto",
        "Ese es el cangri del barrio.",
        Tier::Advanced,
    ),
    SlangEntry::new(
        "perreo",
        "Baile sensual asociado al reggaetón",
        "¡Dale al perreo intenso!",
        Tier::Intermediate,
    ),
    SlangEntry::new(
        "piquete",
        "Estilo, sabor, algo especial que tiene una persona o cosa",
        "Esa salsa tiene piquete.",
        Tier::Intermediate,
    ),
    SlangEntry::new(
        "zafacón",
        "Basurero, cesto de basura",
        "Tira eso al zafacón.",
        Tier::Basic,
    ),
    SlangEntry::new(
        "chiringa",
        "Cometa (juguete que vuela)",
        "Vamos a volar chiringa en la loma.",
        Tier::Basic,
    ),
    SlangEntry::new(
        "mahones",
        "Pantalones jeans / vaqueros",
        "Ponte los mahones nuevos.",
        Tier::Basic,
    ),
    SlangEntry::new("china", "Naranja (la fruta)", "Dame un jugo de china.", Tier::Basic),
    SlangEntry::new(
        "ñapa",
        "Algo extra, propina, bonus",
        "El colmadero me dio una ñapa de plátanos.",
        Tier::Intermediate,
    ),
    SlangEntry::new(
        "fiao",
        "Crédito, comprar sin pagar al momento",
        "Ponme eso fiao, te pago el viernes.",
        Tier::Intermediate,
    ),
    SlangEntry::new(
        "cafre",
        "Persona maleducada, de comportamiento inapropiado",
        "No seas cafre, compórtate.",
        Tier::Advanced,
    ),
    SlangEntry::new(
        "gandúl",
        "Vago, perezoso (también el grano de arroz con gandules)",
        "Ese nene es un gandúl, no hace na'.",
        Tier::Intermediate,
    ),
];
