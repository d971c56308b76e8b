pub(crate) mod checklist;
pub(crate) mod counter;
pub(crate) mod deck;
pub(crate) mod labels;
pub(crate) mod letters;
pub(crate) mod title;
