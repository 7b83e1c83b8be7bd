//! Random picks and templated generation over the content tables.
//!
//! Every function returns `None` only when a table it draws from is empty,
//! which never happens with the builtin tables.

use crate::content::templates;
use crate::content::ContentTables;
use crate::random::{pick, RandomSource};

/// A comedy topic paired with a setup line that mentions it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComedyTopic {
    pub topic: &'static str,
    pub setup: String,
}

/// Intro and closer framing a caller-supplied topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opinion {
    pub intro: String,
    pub body: &'static str,
    pub closer: &'static str,
}

pub fn random_phrase(tables: &ContentTables, random: &dyn RandomSource) -> Option<&'static str> {
    pick(random, tables.phrases).copied()
}

pub fn random_fact(tables: &ContentTables, random: &dyn RandomSource) -> Option<&'static str> {
    pick(random, tables.facts).copied()
}

/// Topic first, then an independently chosen setup template.
pub fn random_topic(tables: &ContentTables, random: &dyn RandomSource) -> Option<ComedyTopic> {
    let topic = *pick(random, tables.topics)?;
    let setup = pick(random, tables.topic_setups)?;
    Some(ComedyTopic {
        topic,
        setup: templates::fill(setup, topic),
    })
}

/// `topic` is inserted verbatim; empty and markup-laden topics are accepted.
pub fn compose_opinion(
    tables: &ContentTables,
    random: &dyn RandomSource,
    topic: &str,
) -> Option<Opinion> {
    let intro = pick(random, tables.opinion_intros)?;
    let closer = *pick(random, tables.opinion_closers)?;
    Some(Opinion {
        intro: templates::fill(intro, topic),
        body: templates::OPINION_BODY,
        closer,
    })
}
