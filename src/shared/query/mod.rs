mod engine;

pub use engine::{
    contains_ignore_case, distinct_tags, filter, find_by_id, first_featured, Featured,
    Identified, Predicate, Tagged,
};
