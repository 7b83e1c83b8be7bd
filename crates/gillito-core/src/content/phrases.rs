//! Catchphrases, island facts and comedy topics.

pub static PHRASES: &[&str] = &[
    "¡Weeeepaaaa! Esto es Gillito en la casa, papá.",
    "¡Diablo, mano! La cosa está más mala que arroz con rabo.",
    "¡Ay bendito! Eso no se hace, mi pana.",
    "¿Y tú crees que yo soy bembé de chivo? ¡Aquí se sabe to'!",
    "La LUMA apagó la luz otra vez... ¡vayan pal carajo!",
    "Ese político roba más que un gato de campo.",
    "¡Esto está más caliente que mofongo recién hecho!",
    "Puerto Rico no se vende, ¡se defiende!",
    "¡Fua! Eso duele más que un marronazo de mamá.",
    "El que no tiene de congo, tiene de carabalí... ¡y el que no, miente!",
    "¡Mira pa'llá! Más perdío que Juanita en Noche Buena.",
    "¡A mí no me vengan con cuentos! Aquí se habla claro.",
    "Eso está más duro que el pan de ayer.",
    "¡Qué clase de cantazo! Más grande que el ego de un político.",
    "Si la vida te da limones, pues haz una limonada con piquete.",
];

pub static FACTS: &[&str] = &[
    "Puerto Rico tiene 78 municipios y cada uno tiene su propia personalidad.",
    "El coquí es una rana endémica de Puerto Rico y su canto se escucha por toda la isla.",
    "El Viejo San Juan fue fundado en 1521, es una de las ciudades más antiguas del Nuevo Mundo.",
    "El Yunque es el único bosque lluvioso tropical en el sistema de bosques nacionales de EE.UU.",
    "Puerto Rico tiene más de 270 millas de costa con playas impresionantes.",
    "La Isla del Encanto produce el mejor café del mundo en las montañas del centro.",
    "El mofongo es el plato nacional no oficial de Puerto Rico.",
    "Roberto Clemente fue el primer latino en el Salón de la Fama del béisbol.",
    "La Bahía Bioluminiscente de Vieques es una de las más brillantes del mundo.",
    "Puerto Rico ha sido territorio de EE.UU. desde 1898 pero sus residentes no pueden votar para presidente.",
    "El reggaetón nació en Puerto Rico en los años 90.",
    "La salsa puertorriqueña tiene raíces en la bomba y la plena africana.",
    "Puerto Rico sufre de apagones constantes desde el huracán María en 2017.",
    "LUMA Energy controla la distribución de electricidad y es una de las empresas más odiadas de la isla.",
    "La diáspora puertorriqueña en EE.UU. es mayor que la población de la isla.",
];

pub static TOPICS: &[&str] = &[
    "política corrupta",
    "los apagones de LUMA",
    "la vida en el caserío",
    "los políticos que roban",
    "la abuela regañona",
    "el colmado del barrio",
    "los tapones en la PR-52",
    "la Navidad boricua",
    "el vecino chismoso",
    "la suegra metiche",
    "las promesas del gobierno",
    "el calor de Puerto Rico",
    "la fila del Seguro Social",
    "los primos americanos",
    "el reggaetón vs la salsa",
];
