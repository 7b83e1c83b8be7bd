//! Templates for generated text. `{topic}` is replaced verbatim.

pub const TOPIC_PLACEHOLDER: &str = "{topic}";

pub static TOPIC_SETUPS: &[&str] = &[
    "Imagínate que Gillito se pone a hablar de {topic}... 🎤",
    "Gillito en el escenario, hablando de {topic}: '¡Diablo, mano!'",
    "Setup perfecto: Gillito llega a un show y el tema es {topic}.",
    "Un monólogo de Gillito sobre {topic} sería legendario.",
];

pub static OPINION_INTROS: &[&str] = &[
    "¡Weeepa! ¿Me preguntan de {topic}? Mira, déjame decirte...",
    "¡Diablo, mano! ¿{topic}? Eso ta' más complicao que...",
    "¡Ay bendito! {topic} es como ir al gobierno, nadie entiende na'...",
    "¡Fua! ¿{topic}? Mira, yo que soy de la calle te digo...",
    "¡A mí no me vengan con cuentos! {topic} es...",
];

pub static OPINION_CLOSERS: &[&str] = &[
    "¡Pero qué se yo! Yo soy comediante, no político. 😂",
    "¡Wepaaaa! Así es la vida en Borinquen, papá. 🇵🇷",
    "Al final del día, somos boricuas y nos reímos de to'. 💪",
    "¡Pa'l carajo con eso! Mejor vamos a comer mofongo. 🍌",
    "¡Eso sí que tiene piquete! Gillito no miente. 🎤",
    "Y si no te gusta... ¡pues búscate tu propio show! 😎",
];

pub const OPINION_BODY: &str = "[...opinión de Gillito aquí...]";

pub const BIOGRAPHY: &str = "🎤 **Gilberto de Jesús Casas — 'Gillito'**\n\
━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\
📅 1970 - 2014\n\
🇵🇷 Comediante puertorriqueño\n\n\
Gillito fue un comediante callejero que se ganó el corazón de \
Puerto Rico con su humor crudo, sin filtro y profundamente \
boricua. Su estilo reflejaba la vida real de los barrios \
puertorriqueños: la política corrupta, las luchas diarias, \
los personajes del caserío, y la alegría que el pueblo mantiene \
a pesar de todo.\n\n\
Este bot es un tributo a su memoria, manteniendo vivo su \
estilo único de humor y su espíritu de crítica social con \
sabor boricua. 🕊️\n\n\
**'Mi Pana Gillito'** — Un bot autónomo que postea contenido \
en X/Twitter y Moltbook, cubriendo temas de actualidad \
puertorriqueña con el estilo inconfundible de Gillito.";

/// Everything after the timestamp line of the status snapshot.
pub const STATUS_BODY: &str = "**Plataformas activas:**\n\
\x20 🐦 X/Twitter — Posts cada 3h, replies cada 4-5 min\n\
\x20 📱 Moltbook — Posts cada 30 min\n\
\x20 🌐 Website — Generado via Cloudflare Pages\n\n\
**Infraestructura:**\n\
\x20 ⚙️ Automatización: GitHub Actions\n\
\x20 🧠 AI: Groq API (generación de contenido)\n\
\x20 📊 Límites X: 500 posts/mes, 1000 replies/mes (free tier)\n\n\
**Temas que cubre:**\n\
\x20 🏛️ Política puertorriqueña\n\
\x20 ⚡ Apagones de LUMA\n\
\x20 🇺🇸 Políticas de Trump / ICE\n\
\x20 🏝️ Cultura y humor boricua";

/// Instructions advertised to MCP clients during `initialize`.
pub const SERVER_INSTRUCTIONS: &str = "Este servidor provee herramientas relacionadas con el bot tributo al \
comediante puertorriqueño Gilberto de Jesús Casas (1970-2014). \
Incluye generación de contenido al estilo de Gillito, diccionario de \
jerga puertorriqueña, frases célebres, y datos sobre Puerto Rico.";

/// Fill the `{topic}` placeholder. Inserted text is not re-scanned.
pub fn fill(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}
